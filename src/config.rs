use serde::Deserialize;

/// Shape of project.json. Every field is optional; unrecognized fields are
/// ignored. Defaults are applied at the point of use, never written back.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectConfig {
	pub workspace_name: Option<String>,
	pub output: Option<String>,
	pub compiler: Option<String>,
	#[serde(default)]
	pub includes: Vec<String>,
	#[serde(default)]
	pub source_dirs: Vec<String>,
	#[serde(default)]
	pub libraries: Vec<LibrarySpec>,
	#[serde(default)]
	pub tests: Vec<TestSpec>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LibrarySpec {
	pub lib: Option<String>,
	#[serde(default)]
	pub link: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct TestSpec {
	pub name: Option<String>,
	#[serde(default)]
	pub sources: Vec<String>,
}

impl ProjectConfig {
	pub fn workspace_name(&self) -> &str {
		self.workspace_name.as_deref().unwrap_or("Lambda")
	}
	/// Used verbatim as the executable's targetname, suffix and all.
	pub fn output(&self) -> &str {
		self.output.as_deref().unwrap_or("lambda")
	}
	pub fn compiler(&self) -> &str {
		self.compiler.as_deref().unwrap_or("clang")
	}
}

impl LibrarySpec {
	/// Only entries linked exactly "static" with a path contribute to
	/// linkoptions. Everything else is left to system link resolution.
	pub fn is_static(&self) -> bool {
		self.link == "static" && self.lib.is_some()
	}
}

impl TestSpec {
	pub fn name(&self) -> &str {
		self.name.as_deref().unwrap_or("test")
	}
}
