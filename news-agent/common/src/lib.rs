//! Target-independent core of the news summary widget: payloads, errors,
//! the summary client and the search controller that drives the output region.

mod client;
mod config;
mod controller;
mod error;
mod render;
mod types;
mod view;

pub use client::{HttpSummaryClient, SummaryClient};
pub use config::{Config, SUMMARY_API_URL};
pub use controller::{RequestSequence, SearchController, SearchOutcome, Ticket};
pub use error::AppError;
pub use render::render_markdown;
pub use types::{SummaryRequest, SummaryResponse, Topic};
pub use view::{IDLE_HINT, LOADING_HINT, LOADING_TITLE, ResultsView, ViewState};
