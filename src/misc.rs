pub fn glob(dir: &str, ext: &str) -> String {
	format!("{}/*.{}", dir, ext)
}

pub fn recursive_glob(dir: &str, ext: &str) -> String {
	format!("{}/**/*.{}", dir, ext)
}

/// Order-preserving; an empty result is not an error.
pub fn filter_by_prefix<'a>(dirs: &'a [String], prefix: &str) -> Vec<&'a str> {
	dirs.iter().filter(|x| x.starts_with(prefix)).map(String::as_str).collect()
}
