use crate::{AppError, Config, SummaryRequest, SummaryResponse};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, warn};
use url::Url;

/// The remote summarization service, as seen by the controller.
///
/// Futures are `?Send` because the widget runs on the browser's single
/// threaded event loop.
#[async_trait(?Send)]
pub trait SummaryClient {
	async fn summarize(&self, request: &SummaryRequest) -> Result<SummaryResponse, AppError>;
}

#[derive(Clone, Debug)]
pub struct HttpSummaryClient {
	http: Client,
	endpoint: Url,
}

impl HttpSummaryClient {
	pub fn new(config: &Config) -> Self {
		Self { http: Client::new(), endpoint: config.endpoint.clone() }
	}
}

#[async_trait(?Send)]
impl SummaryClient for HttpSummaryClient {
	async fn summarize(&self, request: &SummaryRequest) -> Result<SummaryResponse, AppError> {
		debug!("POST {} topic={:?}", self.endpoint, request.topic);

		let res = self.http.post(self.endpoint.clone()).json(request).send().await.map_err(|e| {
			error!("Error fetching news summary: {e}");
			AppError::Network
		})?;

		let status = res.status();
		if !status.is_success() {
			warn!("Summary service answered {status}");
			return Err(AppError::Http(status.as_u16()));
		}

		res.json::<SummaryResponse>().await.map_err(|e| {
			error!("Error decoding news summary: {e}");
			AppError::Network
		})
	}
}
