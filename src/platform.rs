use std::env;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
	MacOs,
	Linux,
	Windows,
}

impl Platform {
	/// "darwin" and "linux" match exactly; any other identifier falls
	/// through to Windows. "macos" is accepted as an alias for "darwin"
	/// because std::env::consts::OS reports it on Darwin hosts.
	pub fn from_os(os: &str) -> Platform {
		match os {
			"darwin" | "macos" => Platform::MacOs,
			"linux" => Platform::Linux,
			_ => Platform::Windows,
		}
	}

	pub fn host() -> Platform {
		Platform::from_os(env::consts::OS)
	}

	pub fn system_tag(&self) -> &'static str {
		match self {
			Platform::MacOs => "macosx",
			Platform::Linux => "linux",
			Platform::Windows => "windows",
		}
	}

	/// Link flags appended to the Release configuration filter.
	pub fn release_link_flags(&self) -> Vec<&'static str> {
		match self {
			Platform::MacOs => vec!["-flto", "-Wl,-dead_strip"],
			Platform::Linux | Platform::Windows => vec!["-flto", "-Wl,--gc-sections"],
		}
	}

	/// System libraries linked into every executable target.
	pub fn system_links(&self) -> Vec<&'static str> {
		match self {
			Platform::MacOs => vec!["CoreFoundation.framework", "Cocoa.framework", "c++"],
			Platform::Linux | Platform::Windows => vec!["m", "dl", "pthread"],
		}
	}

	/// Where the generated descriptor is written, relative to the
	/// invocation directory. Two levels deep, hence the "../../" prefix
	/// on relative linkoptions paths.
	pub fn descriptor_path(&self) -> &'static str {
		match self {
			Platform::MacOs => "build/macos/premake5.lua",
			Platform::Linux => "build/linux/premake5.lua",
			Platform::Windows => "build/windows/premake5.lua",
		}
	}
}
