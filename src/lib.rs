pub mod config;
pub mod fragment;
pub mod generator;
pub mod misc;
pub mod platform;

use std::{env, fs};

use config::ProjectConfig;

pub const PROJECT_JSON: &str = "project.json";

// Reserved names. Source directories starting with RUNTIME_NAME or
// UI_NAME feed the matching library project.
pub const CORE_NAME: &str = "core";
pub const RUNTIME_NAME: &str = "lambda";
pub const UI_NAME: &str = "radiant";
pub const EXE_NAME: &str = "app";

pub(crate) fn err_msg<T>(msg: String) -> Result<T, anyhow::Error> {
	Err(anyhow::Error::msg(msg))
}

pub fn load_config(path: &str) -> Result<ProjectConfig, anyhow::Error> {
	let text = match fs::read_to_string(path) {
		Ok(x) => x,
		Err(e) => return err_msg(format!("Error opening {}: {}", env::current_dir()?.join(path).display(), e)),
	};

	let config = match serde_json::from_str::<ProjectConfig>(&text) {
		Ok(x) => x,
		Err(e) => return err_msg(format!("Error reading {}: {}", env::current_dir()?.join(path).display(), e)),
	};

	Ok(config)
}
