use std::path::Path;

use crate::{config::LibrarySpec, misc};

// Every generated project compiles against these, plus whatever the
// configuration adds.
const BASE_INCLUDE_DIRS: [&str; 4] = [".", "lib", crate::RUNTIME_NAME, "include"];

// The descriptor lands two directories below the project root, so
// relative library paths have to climb back out.
const RELATIVE_LIB_PREFIX: &str = "../../";

pub fn quoted(s: &str) -> String {
	String::from("\"") + s + "\""
}

pub(crate) fn list_block(name: &str, items: &[String]) -> String {
	let mut ret = String::from("\t") + name + " {\n";
	for item in items {
		ret += "\t\t";
		ret += &quoted(item);
		ret += ",\n";
	}
	ret += "\t}\n";
	ret
}

/// A `files` block where each directory contributes a C glob and a C++
/// glob, in input order.
pub fn files_block(dirs: &[&str]) -> String {
	let mut globs = Vec::with_capacity(dirs.len() * 2);
	for dir in dirs {
		globs.push(misc::glob(dir, "c"));
		globs.push(misc::glob(dir, "cpp"));
	}
	list_block("files", &globs)
}

/// A `files` block of explicit paths, no glob derivation.
pub fn file_list_block(files: &[String]) -> String {
	list_block("files", files)
}

pub fn include_dirs_block(extra: &[String]) -> String {
	let mut dirs = BASE_INCLUDE_DIRS.iter().map(|x| (*x).to_owned()).collect::<Vec<_>>();
	dirs.extend_from_slice(extra);
	list_block("includedirs", &dirs)
}

pub fn remove_files_block(patterns: &[String]) -> String {
	list_block("removefiles", patterns)
}

pub fn links_block(links: &[String]) -> String {
	list_block("links", links)
}

pub fn project_header(name: &str, kind: &str) -> String {
	String::from("project ") + &quoted(name) + "\n\tkind " + &quoted(kind) + "\n\tlanguage \"C++\"\n"
}

/// Renders nothing when no library qualifies. Paths are not checked for
/// existence, and no escaping is applied beyond plain quoting.
pub fn link_options_block(libraries: &[LibrarySpec]) -> String {
	let paths = libraries
		.iter()
		.filter(|x| x.is_static())
		.filter_map(|x| x.lib.as_deref())
		.map(|lib| {
			if Path::new(lib).is_absolute() {
				lib.to_owned()
			} else {
				String::from(RELATIVE_LIB_PREFIX) + lib
			}
		})
		.collect::<Vec<_>>();
	if paths.is_empty() {
		return String::new();
	}
	list_block("linkoptions", &paths)
}
