use common::{AppError, Config, HttpSummaryClient, IDLE_HINT, LOADING_HINT, LOADING_TITLE, ResultsView, SearchController, ViewState};
use dioxus::{
	logger::tracing::{error, info},
	prelude::*,
	web::{Config as WebConfig, launch::launch_cfg},
};
use wasm_bindgen::prelude::*;

type Controller = SearchController<HttpSummaryClient>;

/// The output region, backed by the component's view-state signal.
#[derive(Clone, Copy)]
struct ResultsRegion(Signal<ViewState>);

impl ResultsView for ResultsRegion {
	fn show(&mut self, state: ViewState) {
		self.0.set(state);
	}
}

#[wasm_bindgen]
pub fn main() {
	console_error_panic_hook::set_once();
	dioxus::logger::init(dioxus::logger::tracing::Level::DEBUG).expect("dioxus logger");
	launch_cfg(App, WebConfig::default());
}

fn build_controller() -> Result<Controller, AppError> {
	let config = Config::from_build_env().inspect_err(|e| error!("[widget] {e}"))?;
	info!("[widget] Summary endpoint {}", config.endpoint);
	Ok(SearchController::new(HttpSummaryClient::new(&config)))
}

/// Enter in the topic input acts like the Search button.
fn is_submit_key(key: &Key) -> bool {
	*key == Key::Enter
}

#[component]
fn App() -> Element {
	let mut topic = use_signal(String::new);
	let view_state = use_signal(ViewState::default);
	let controller = use_hook(build_controller);

	// Button and Enter both land here; each activation is an independent search.
	let search = move || {
		let raw_topic = topic();
		let mut region = ResultsRegion(view_state);
		match controller.clone() {
			Ok(controller) => {
				spawn(async move {
					controller.trigger_search(&raw_topic, region).await;
				});
			},
			Err(e) => region.show(ViewState::Error(e)),
		}
	};
	let search_on_enter = search.clone();

	rsx! {
		div { class: "max-w-2xl mx-auto mt-10 p-6 bg-white rounded-lg shadow-md",
			h1 { class: "text-2xl font-bold text-gray-800 mb-2", "AI News Agent" }
			p { class: "text-sm text-gray-500 mb-6", "Get a summarized briefing on any topic." }
			div { class: "flex gap-2 mb-6",
				input {
					class: "flex-1 px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-blue-500 focus:border-blue-500",
					id: "topic-input",
					r#type: "text",
					placeholder: "e.g. renewable energy",
					value: "{topic}",
					oninput: move |evt| topic.set(evt.value()),
					onkeydown: move |evt| {
							if is_submit_key(&evt.key()) {
									search_on_enter();
							}
					},
				}
				button {
					class: "px-4 py-2 text-white font-semibold rounded-md shadow-sm transition-colors duration-200 ease-in-out bg-blue-600 hover:bg-blue-700",
					id: "search-button",
					onclick: move |_| search(),
					"Search"
				}
			}
			div {
				class: "p-4 bg-gray-50 border border-gray-200 rounded-md min-h-[160px] text-gray-700 leading-relaxed",
				id: "results-container",
				ResultsPanel { state: view_state() }
			}
		}
	}
}

#[component]
fn ResultsPanel(state: ViewState) -> Element {
	match state {
		ViewState::Idle => rsx! {
			p { class: "text-gray-500", "{IDLE_HINT}" }
		},
		ViewState::Loading => rsx! {
			div { class: "loader flex flex-col items-center justify-center gap-2 py-6",
				div { class: "spinner animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600" }
				p { class: "font-medium", "{LOADING_TITLE}" }
				small { class: "text-gray-500", "{LOADING_HINT}" }
			}
		},
		ViewState::Success(html) => rsx! {
			div { class: "summary-content prose max-w-none", dangerous_inner_html: "{html}" }
		},
		ViewState::Error(error) => {
			let title = AppError::TITLE;
			rsx! {
				div { class: "error-message p-3 bg-red-50 border border-red-200 rounded-md",
					h3 { class: "text-red-700 font-semibold mb-1", "{title}" }
					p { class: "text-red-600", "{error}" }
				}
			}
		},
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn render_panel(state: ViewState) -> String {
		let mut dom = VirtualDom::new_with_props(ResultsPanel, ResultsPanelProps { state });
		dom.rebuild_in_place();
		dioxus_ssr::render(&dom)
	}

	#[test]
	fn idle_shows_hint() {
		let html = render_panel(ViewState::Idle);
		assert!(html.contains(IDLE_HINT));
	}

	#[test]
	fn loading_shows_spinner_and_guidance() {
		let html = render_panel(ViewState::Loading);
		assert!(html.contains(r#"class="spinner"#));
		assert!(html.contains("The AI crew is assembling..."));
		assert!(html.contains("This may take a minute."));
	}

	#[test]
	fn success_wraps_summary_html_in_content_container() {
		let html = render_panel(ViewState::rendered("# Hi"));
		let container = html.find(r#"class="summary-content"#).expect("summary-content container");
		let heading = html.find("<h1>Hi</h1>").expect("rendered heading");
		assert!(container < heading, "{html}");
		assert!(!html.contains("error-message"));
	}

	#[test]
	fn http_error_block_has_title_and_status() {
		let html = render_panel(ViewState::Error(AppError::Http(500)));
		assert!(html.contains(r#"class="error-message"#));
		assert!(html.contains("An Error Occurred"));
		assert!(html.contains("HTTP error! Status: 500"));
	}

	#[test]
	fn validation_and_network_errors_show_their_messages() {
		let html = render_panel(ViewState::Error(AppError::EmptyTopic));
		assert!(html.contains("An Error Occurred"));
		assert!(html.contains("Please enter a topic to analyze."));

		let html = render_panel(ViewState::Error(AppError::Network));
		assert!(html.contains("Make sure the backend server is running and accessible."));
		assert!(!html.contains("summary-content"));
	}

	#[test]
	fn only_enter_submits() {
		assert!(is_submit_key(&Key::Enter));
		assert!(!is_submit_key(&Key::Tab));
		assert!(!is_submit_key(&Key::Character("a".to_owned())));
	}
}
