use std::{
	env, //
	process::ExitCode,
};

use getopts::Options;

use premagen::platform::Platform;

fn print_usage(program: &str, opts: Options) {
	let brief = format!("Usage: {} [options]", program);
	print!("{}", opts.usage(&brief));
}

fn main() -> ExitCode {
	env_logger::Builder::from_env(env_logger::Env::default().filter_or("PREMAGEN_LOG", "off"))
		.format_timestamp(None)
		.init();

	let args: Vec<String> = env::args().collect();
	let program = args[0].clone();

	let mut opts = Options::new();
	opts.optopt("c", "config", "Specify the project description file", "<path-to-json>");
	opts.optflag("h", "help", "print this help menu");
	let matches = match opts.parse(&args[1..]) {
		Ok(m) => m,
		Err(f) => {
			println!("Error: {}", f);
			print_usage(&program, opts);
			return ExitCode::FAILURE;
		}
	};
	if matches.opt_present("h") {
		print_usage(&program, opts);
		return ExitCode::SUCCESS;
	}
	let config_path = matches.opt_str("c").unwrap_or(premagen::PROJECT_JSON.to_owned());

	let config = match premagen::load_config(&config_path) {
		Ok(x) => x,
		Err(e) => {
			println!("{}", e);
			return ExitCode::FAILURE;
		}
	};

	let platform = Platform::host();
	log::info!("Detected platform: {}", platform.system_tag());

	let document = premagen::generator::assemble(&config, platform);
	if document.is_empty() {
		println!("Error: Assembled descriptor is empty");
		return ExitCode::FAILURE;
	}

	match premagen::generator::write_descriptor(&document, platform) {
		Ok(x) => x,
		Err(e) => {
			println!("{}", e);
			return ExitCode::FAILURE;
		}
	};

	println!("Wrote {}", platform.descriptor_path());
	ExitCode::SUCCESS
}
