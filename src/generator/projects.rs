use crate::{
	config::{ProjectConfig, TestSpec}, //
	fragment,
	misc,
	platform::Platform,
	CORE_NAME,
	EXE_NAME,
	RUNTIME_NAME,
	UI_NAME,
};

const CORE_SOURCE_DIR: &str = "lib";

// Entry points are removed from the runtime library so they can be
// compiled directly into the executable and test binaries instead.
const MAIN_ENTRY: &str = "lambda/main.cpp";
const TEST_ENTRY: &str = "lambda/test_main.cpp";

// Always appended to a test's name, even when the name already carries
// it. The main executable's output name is never touched.
const TEST_SUFFIX: &str = ".exe";

pub fn core_library(config: &ProjectConfig) -> String {
	let mut ret = fragment::project_header(CORE_NAME, "StaticLib");
	ret += &fragment::files_block(&[CORE_SOURCE_DIR]);
	ret += &fragment::remove_files_block(&[misc::recursive_glob(CORE_SOURCE_DIR, "h")]);
	ret += &fragment::include_dirs_block(&config.includes);
	ret += "\tbuildoptions { \"-fno-exceptions\" }\n";
	ret
}

pub fn runtime_library(config: &ProjectConfig) -> String {
	let dirs = misc::filter_by_prefix(&config.source_dirs, RUNTIME_NAME);
	if dirs.is_empty() {
		log::warn!("No source directory starts with \"{}\"; the runtime library will be empty", RUNTIME_NAME);
	}
	let mut removes = dirs.iter().map(|x| misc::recursive_glob(x, "h")).collect::<Vec<_>>();
	removes.push(MAIN_ENTRY.to_owned());
	removes.push(TEST_ENTRY.to_owned());
	let mut ret = fragment::project_header(RUNTIME_NAME, "StaticLib");
	ret += "\tcppdialect \"C++17\"\n";
	ret += &fragment::files_block(&dirs);
	ret += &fragment::remove_files_block(&removes);
	ret += &fragment::include_dirs_block(&config.includes);
	ret
}

/// Zero-or-one stanza: None when no source directory matches the UI
/// prefix, and the document then carries no trace of it.
pub fn ui_library(config: &ProjectConfig) -> Option<String> {
	let dirs = misc::filter_by_prefix(&config.source_dirs, UI_NAME);
	if dirs.is_empty() {
		return None;
	}
	let removes = dirs.iter().map(|x| misc::recursive_glob(x, "h")).collect::<Vec<_>>();
	let mut ret = fragment::project_header(UI_NAME, "StaticLib");
	ret += &fragment::files_block(&dirs);
	ret += &fragment::remove_files_block(&removes);
	ret += &fragment::include_dirs_block(&config.includes);
	Some(ret)
}

pub fn executable(config: &ProjectConfig, platform: Platform) -> String {
	let mut ret = fragment::project_header(EXE_NAME, "ConsoleApp");
	ret += "\ttargetname ";
	ret += &fragment::quoted(config.output());
	ret += "\n";
	ret += &fragment::file_list_block(&[MAIN_ENTRY.to_owned()]);
	ret += &fragment::include_dirs_block(&config.includes);
	ret += &links_block(config, platform);
	ret += &fragment::link_options_block(&config.libraries);
	ret
}

pub fn test_executable(config: &ProjectConfig, test: &TestSpec, platform: Platform) -> String {
	let mut ret = fragment::project_header(test.name(), "ConsoleApp");
	ret += "\ttargetname ";
	ret += &fragment::quoted(&(test.name().to_owned() + TEST_SUFFIX));
	ret += "\n";
	ret += &fragment::file_list_block(&test.sources);
	ret += &fragment::include_dirs_block(&config.includes);
	ret += &links_block(config, platform);
	ret += &fragment::link_options_block(&config.libraries);
	ret
}

// The UI library is named only when its stanza was actually emitted;
// the earlier stanzas guarantee every named project already exists.
fn links_block(config: &ProjectConfig, platform: Platform) -> String {
	let mut links = vec![CORE_NAME.to_owned(), RUNTIME_NAME.to_owned()];
	if !misc::filter_by_prefix(&config.source_dirs, UI_NAME).is_empty() {
		links.push(UI_NAME.to_owned());
	}
	links.extend(platform.system_links().iter().map(|x| (*x).to_owned()));
	fragment::links_block(&links)
}
