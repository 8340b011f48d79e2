fn main() {
	println!("cargo:rustc-env=RUST_BACKTRACE=1");
	println!("cargo:rerun-if-env-changed=SUMMARY_API_URL");

	if let Ok(path) = dotenvy::dotenv() {
		println!("cargo:rerun-if-changed={}", path.display());
	}

	let api_url = std::env::var("SUMMARY_API_URL").unwrap_or_else(|_| "http://localhost:8000/get-news-summary".to_string());
	println!("cargo:rustc-env=SUMMARY_API_URL={}", api_url);
}
