use crate::{ResultsView, SummaryClient, SummaryRequest, Topic, ViewState};
use std::{cell::Cell, rc::Rc};
use tracing::{debug, info};

/// Sequence number handed to each search when it is triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Monotonic ticket counter shared by every clone of a controller.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
	latest: Rc<Cell<u64>>,
}

impl RequestSequence {
	pub fn issue(&self) -> Ticket {
		let next = self.latest.get() + 1;
		self.latest.set(next);
		Ticket(next)
	}

	pub fn is_latest(&self, ticket: Ticket) -> bool {
		self.latest.get() == ticket.0
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
	/// Blank topic, nothing was sent.
	Rejected,
	Rendered,
	Failed,
	/// A newer search was triggered while this one was in flight; its result was dropped.
	Superseded,
}

/// Mediates between the topic input, the summary service and the output region.
///
/// Clones share the client and the ticket sequence, so a response is only
/// rendered if no other search was triggered after it on any clone.
pub struct SearchController<C> {
	client: Rc<C>,
	sequence: RequestSequence,
}

impl<C> Clone for SearchController<C> {
	fn clone(&self) -> Self {
		Self { client: Rc::clone(&self.client), sequence: self.sequence.clone() }
	}
}

impl<C: SummaryClient> SearchController<C> {
	pub fn new(client: C) -> Self {
		Self { client: Rc::new(client), sequence: RequestSequence::default() }
	}

	pub fn client(&self) -> &C {
		&self.client
	}

	pub async fn trigger_search<V: ResultsView>(&self, raw_topic: &str, mut view: V) -> SearchOutcome {
		let ticket = self.sequence.issue();

		let topic = match Topic::parse(raw_topic) {
			Ok(topic) => topic,
			Err(e) => {
				info!("Rejected search {ticket:?}: {e}");
				view.show(ViewState::Error(e));
				return SearchOutcome::Rejected;
			},
		};

		info!("Search {ticket:?} for \"{topic}\"");
		view.show(ViewState::Loading);

		let result = self.client.summarize(&SummaryRequest::from(&topic)).await;

		if !self.sequence.is_latest(ticket) {
			debug!("Dropping stale response for search {ticket:?}");
			return SearchOutcome::Superseded;
		}

		let (state, outcome) = match result {
			Ok(response) => (ViewState::rendered(&response.summary), SearchOutcome::Rendered),
			Err(e) => (ViewState::Error(e), SearchOutcome::Failed),
		};
		debug!("Search {ticket:?} finished in state {}", state.phase());
		view.show(state);
		outcome
	}
}
