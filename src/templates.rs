//! Page templates, compiled from the `templates/` directory.

use askama::Template;
use axum::response::Html;

use crate::{
    error::PageResult,
    tmdb::{EpisodeDetails, SearchResults, SeasonDetails, ShowDetails},
};

/// Landing page, also used to list search results
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub search: Option<SearchView>,
}

/// One page of search results plus what the pager needs
pub struct SearchView {
    pub query: String,
    pub page: i64,
    pub previous_page: Option<i64>,
    pub next_page: Option<i64>,
    pub total_pages: i64,
    pub results: SearchResults,
}

impl SearchView {
    #[must_use]
    pub fn new(query: String, page: i64, results: SearchResults) -> Self {
        Self {
            query,
            page,
            previous_page: (page > 1).then(|| page - 1),
            next_page: (page < results.total_pages).then(|| page + 1),
            total_pages: results.total_pages,
            results,
        }
    }
}

#[derive(Template)]
#[template(path = "details.html")]
pub struct DetailsTemplate {
    pub show: ShowDetails,
}

#[derive(Template)]
#[template(path = "season_details.html")]
pub struct SeasonDetailsTemplate {
    pub season: SeasonDetails,
}

#[derive(Template)]
#[template(path = "episode_details.html")]
pub struct EpisodeDetailsTemplate {
    /// Show id as it was requested, for links back to the show
    pub show_id: String,
    pub episode: EpisodeDetails,
}

/// Render a template into an HTML response
pub fn render<T: Template>(template: &T) -> PageResult {
    Ok(Html(template.render()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(total_pages: i64) -> SearchResults {
        SearchResults {
            page: 1,
            results: Vec::new(),
            total_pages,
            total_results: 0,
        }
    }

    #[test]
    fn test_search_view_first_page() {
        let view = SearchView::new("lost".to_string(), 1, results(3));

        assert_eq!(view.previous_page, None);
        assert_eq!(view.next_page, Some(2));
        assert_eq!(view.total_pages, 3);
    }

    #[test]
    fn test_search_view_last_page() {
        let view = SearchView::new("lost".to_string(), 3, results(3));

        assert_eq!(view.previous_page, Some(2));
        assert_eq!(view.next_page, None);
    }

    #[test]
    fn test_index_without_search_renders_hero() {
        let html = IndexTemplate { search: None }.render().unwrap();

        assert!(html.contains("action=\"/search\""));
        assert!(!html.contains("class=\"pagination\""));
    }

    #[test]
    fn test_index_escapes_query() {
        let view = SearchView::new("<b>lost</b>".to_string(), 1, results(1));
        let html = IndexTemplate { search: Some(view) }.render().unwrap();

        assert!(!html.contains("<b>lost</b>"));
        assert!(html.contains("No shows found"));
    }
}
