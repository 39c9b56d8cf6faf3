//! Show pages: the homepage listing and the per-show detail page.

use askama::Template;
use axum::extract::{Path, State};
use axum::response::Html;
use axum::routing::get;
use axum::Router;

use crate::error::AppError;
use crate::state::AppState;
use crate::views::{DetailPage, ListingPage};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_shows))
        .route("/tvshow/:tvid", get(show_detail))
}

/// GET / — the top 30 shows in ascending name order.
async fn list_shows(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let shows = db::list_shows(&state.db).await?;
    let page = ListingPage { shows };
    Ok(Html(page.render()?))
}

/// GET /tvshow/:tvid — full record for one show. The id is parsed at the
/// boundary: non-numeric ids get a 400 and never reach storage.
async fn show_detail(
    State(state): State<AppState>,
    Path(tvid): Path<String>,
) -> Result<Html<String>, AppError> {
    let tvid: i32 = tvid
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid show id: {tvid}")))?;

    let show = db::find_show(&state.db, tvid)
        .await?
        .ok_or_else(|| AppError::NotFound(tvid.to_string()))?;

    let site = show.official_site_link().map(str::to_string);
    let page = DetailPage { show, site };
    Ok(Html(page.render()?))
}
