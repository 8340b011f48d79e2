use std::process::Command;

fn main() {
	println!("cargo:rustc-env=RUST_BACKTRACE=1");
	println!("cargo:rustc-env=CARGO_PROFILE_DEV_BUILD_OVERRIDE_DEBUG=true");

	println!("cargo:rerun-if-changed=./input.css");
	println!("cargo:rerun-if-changed=./tailwind.config.js");

	let profile = std::env::var("PROFILE").unwrap_or_else(|_| "debug".to_string());
	let mut args = vec!["--no", "tailwindcss", "-i", "./input.css", "-o", "./assets/tailwind.css"];

	if profile == "release" {
		args.push("--minify");
	}

	// Native builds (tests, CI without node) keep the last generated stylesheet.
	match Command::new("npx").args(&args).output() {
		Ok(output) if output.status.success() => {},
		Ok(output) => println!("cargo:warning=Tailwind CSS compilation failed: {}", String::from_utf8_lossy(&output.stderr).trim()),
		Err(e) => println!("cargo:warning=Skipping Tailwind CSS compilation: {e}"),
	}
}
