//! askama page templates. Templates live in `templates/` and are checked at
//! compile time; values are HTML-escaped by default.

use askama::Template;
use db::{Show, ShowSummary};

/// Homepage: up to 30 shows, each linking to its detail page.
#[derive(Template)]
#[template(path = "index.html")]
pub struct ListingPage {
    pub shows: Vec<ShowSummary>,
}

/// Detail page for one show.
#[derive(Template)]
#[template(path = "show.html")]
pub struct DetailPage {
    pub show: Show,
    /// Official-site URL, already filtered for presence and non-emptiness.
    pub site: Option<String>,
}
