use markdown::{Options, to_html_with_options};

fn markdown_options() -> Options {
	// GFM without the dangerous-html switches: raw HTML in a summary is escaped.
	Options::gfm()
}

/// Renders a summary to HTML that is safe to inject into the output region.
pub fn render_markdown(summary: &str) -> String {
	to_html_with_options(summary, &markdown_options()).unwrap_or_else(|_| markdown::to_html(summary))
}
