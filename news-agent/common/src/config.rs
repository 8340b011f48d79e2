use crate::AppError;
use bon::Builder;
use url::Url;

/// Summary endpoint baked in by `build.rs` (`SUMMARY_API_URL`, `.env` aware).
pub const SUMMARY_API_URL: &str = env!("SUMMARY_API_URL");

#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct Config {
	pub endpoint: Url,
}

impl Config {
	pub fn from_build_env() -> Result<Self, AppError> {
		Self::from_endpoint(SUMMARY_API_URL)
	}

	pub fn from_endpoint(raw: &str) -> Result<Self, AppError> {
		let endpoint = Url::parse(raw).map_err(|e| AppError::InvalidEndpoint(format!("{raw} ({e})")))?;
		Ok(Self::builder().endpoint(endpoint).build())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn build_env_endpoint_parses() {
		let config = Config::from_build_env().unwrap();
		assert_eq!(config.endpoint, Url::parse(SUMMARY_API_URL).unwrap());
	}

	#[test]
	fn garbage_endpoint_is_rejected() {
		let err = Config::from_endpoint("not a url").unwrap_err();
		assert!(matches!(&err, AppError::InvalidEndpoint(msg) if msg.starts_with("not a url")));
	}
}
