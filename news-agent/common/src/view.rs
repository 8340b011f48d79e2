use crate::{AppError, render_markdown};
use strum::IntoStaticStr;

pub const IDLE_HINT: &str = "Enter a topic and press Search to get the latest news summary.";
pub const LOADING_TITLE: &str = "The AI crew is assembling...";
pub const LOADING_HINT: &str = "This may take a minute.";

/// What the output region currently shows. Exactly one is active.
#[derive(Debug, Clone, PartialEq, Eq, Default, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ViewState {
	#[default]
	Idle,
	Loading,
	/// Rendered HTML of the summary.
	Success(String),
	Error(AppError),
}

impl ViewState {
	pub fn rendered(summary: &str) -> Self {
		Self::Success(render_markdown(summary))
	}

	pub fn phase(&self) -> &'static str {
		self.into()
	}

	pub fn is_loading(&self) -> bool {
		matches!(self, Self::Loading)
	}
}

/// The output region. Every `show` fully replaces what was there before.
pub trait ResultsView {
	fn show(&mut self, state: ViewState);
}
