use crate::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// A search topic with surrounding whitespace removed. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct Topic {
	#[validate(length(min = 1))]
	value: String,
}

impl Topic {
	pub fn parse(raw: &str) -> Result<Self, AppError> {
		let topic = Self { value: raw.trim().to_owned() };
		topic.validate().map_err(|_| AppError::EmptyTopic)?;
		Ok(topic)
	}
}

impl fmt::Display for Topic {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.value)
	}
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SummaryRequest {
	pub topic: String,
}

impl From<&Topic> for SummaryRequest {
	fn from(topic: &Topic) -> Self {
		Self { topic: topic.value.clone() }
	}
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SummaryResponse {
	pub summary: String,
}
