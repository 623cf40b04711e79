pub mod projects;

use std::{
	fs, //
	io::Write,
	path::Path,
};

use crate::{
	config::ProjectConfig, //
	fragment,
	platform::Platform,
	EXE_NAME,
};

/// Concatenates every stanza in dependency order: header, workspace,
/// Debug filter, Release filter, core library, runtime library, the
/// UI library when present, the executable, then each test. Pure; the
/// same (config, platform) always yields byte-identical output.
pub fn assemble(config: &ProjectConfig, platform: Platform) -> String {
	let mut stanzas = vec![
		header(platform),
		workspace(config, platform),
		debug_filter(),
		release_filter(platform),
		projects::core_library(config),
		projects::runtime_library(config),
	];
	if let Some(ui) = projects::ui_library(config) {
		stanzas.push(ui);
	}
	stanzas.push(projects::executable(config, platform));
	for test in &config.tests {
		stanzas.push(projects::test_executable(config, test, platform));
	}
	stanzas.join("\n")
}

fn header(platform: Platform) -> String {
	format!("-- premake5 workspace for {} (generated, do not edit)\n", platform.system_tag())
}

fn workspace(config: &ProjectConfig, platform: Platform) -> String {
	let mut ret = String::from("workspace ") + &fragment::quoted(config.workspace_name()) + "\n";
	ret += "\tconfigurations { \"Debug\", \"Release\" }\n";
	ret += "\tsystem ";
	ret += &fragment::quoted(platform.system_tag());
	ret += "\n";
	ret += "\tlocation \"build\"\n";
	ret += "\tstartproject ";
	ret += &fragment::quoted(EXE_NAME);
	ret += "\n";
	ret += "\ttoolset ";
	ret += &fragment::quoted(config.compiler());
	ret += "\n";
	ret += "\tcdialect \"C11\"\n";
	ret += "\tcppdialect \"C++17\"\n";
	ret += "\twarnings \"Extra\"\n";
	ret
}

fn debug_filter() -> String {
	let mut ret = String::from("filter \"configurations:Debug\"\n");
	ret += "\tdefines { \"DEBUG\" }\n";
	ret += "\tsymbols \"On\"\n";
	ret += "\toptimize \"Off\"\n";
	ret
}

fn release_filter(platform: Platform) -> String {
	let mut ret = String::from("filter \"configurations:Release\"\n");
	ret += "\tdefines { \"NDEBUG\" }\n";
	ret += "\tsymbols \"Off\"\n";
	ret += "\toptimize \"On\"\n";
	let flags = platform.release_link_flags().iter().map(|x| (*x).to_owned()).collect::<Vec<_>>();
	ret += &fragment::list_block("linkoptions", &flags);
	ret += "filter {}\n";
	ret
}

pub fn write_descriptor(document: &str, platform: Platform) -> Result<(), String> {
	let path = Path::new(platform.descriptor_path());
	if let Some(parent) = path.parent() {
		if let Err(e) = fs::create_dir_all(parent) {
			return Err(format!("Error creating directory {}: {}", parent.display(), e));
		}
	}
	let mut f = match fs::File::create(path) {
		Ok(x) => x,
		Err(e) => return Err(format!("Error creating {}: {}", path.display(), e)),
	};
	if let Err(e) = f.write_all(document.as_bytes()) {
		return Err(format!("Error writing to {}: {}", path.display(), e));
	}
	Ok(())
}
