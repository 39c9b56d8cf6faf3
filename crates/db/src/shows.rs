//! Read-only queries over the external `tv_shows` table.

use sqlx::MySqlPool;

/// Listing row: id and name only, enough for the homepage.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ShowSummary {
    pub tvid: i32,
    pub name: String,
}

/// Full show record for the detail page.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Show {
    pub tvid: i32,
    pub name: String,
    pub rating: Option<f32>,
    pub img: Option<String>,
    pub summary: Option<String>,
    pub official_site: Option<String>,
}

impl Show {
    /// Official-site URL, only when present and non-empty.
    /// An empty string in the column counts as "no site".
    pub fn official_site_link(&self) -> Option<&str> {
        self.official_site.as_deref().filter(|s| !s.is_empty())
    }
}

/// First 30 shows in ascending name order.
pub async fn list_shows(pool: &MySqlPool) -> Result<Vec<ShowSummary>, sqlx::Error> {
    sqlx::query_as("SELECT tvid, name FROM tv_shows ORDER BY name ASC LIMIT 30")
        .fetch_all(pool)
        .await
}

/// Look up one show by id. Returns `None` for an unknown id.
pub async fn find_show(pool: &MySqlPool, tvid: i32) -> Result<Option<Show>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT tvid, name, rating, img, summary, official_site
        FROM tv_shows
        WHERE tvid = ?
        "#,
    )
    .bind(tvid)
    .fetch_optional(pool)
    .await
}
