use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Everything that can end a search in the error view.
///
/// The `Display` text is what the user sees, so variants carry no transport
/// detail. That detail goes to the log at the point of failure.
#[derive(Serialize, Deserialize, Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
	#[error("Please enter a topic to analyze.")]
	EmptyTopic,
	#[error("HTTP error! Status: {0}")]
	Http(u16),
	#[error("Failed to fetch the news summary. Make sure the backend server is running and accessible.")]
	Network,
	#[error("The summary endpoint is not a valid URL: {0}")]
	InvalidEndpoint(String),
}

impl AppError {
	/// Title of the error block shown above the message.
	pub const TITLE: &'static str = "An Error Occurred";
}
