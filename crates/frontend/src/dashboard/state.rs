//! Transient UI state helpers and the documented reset defaults
//!
//! The page holds its state in signals; everything here is the plain-data
//! side of that state so the interesting transitions stay testable.

use contracts::dashboard::dto::GraphDataResponse;

/// Statistics cards fall back to this before and between fetches
pub const STAT_PLACEHOLDER: &str = "N/A";
/// Company description before a company is selected
pub const DESCRIPTION_PLACEHOLDER: &str = "Select a company to view details.";
/// Description fallback when the server sends none
pub const NO_DESCRIPTION: &str = "No description available.";

pub const REPORTS_EMPTY_STATE: &str = "<p>Please select a company to view reports.</p>";
pub const ANALYTICS_EMPTY_STATE: &str = "<p>Please select a company to view analytics data.</p>";
pub const REPORTS_ERROR: &str = "<p>Error loading reports. Please try again.</p>";
pub const ANALYTICS_ERROR: &str = "<p>Error loading analytics data. Please try again.</p>";
pub const ANALYTICS_NO_DATA: &str = "<p>No analytics data available.</p>";

/// The three mutually exclusive tab panes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveTab {
    Overview,
    Reports,
    Analytics,
}

impl ActiveTab {
    /// Pane element id, also used for the nav link anchors
    pub fn key(self) -> &'static str {
        match self {
            ActiveTab::Overview => "overview",
            ActiveTab::Reports => "reports",
            ActiveTab::Analytics => "analytics",
        }
    }
}

/// Text for a statistics card: the value when present, N/A otherwise
pub fn stat_text(value: Option<u32>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| STAT_PLACEHOLDER.to_string())
}

/// Heading suffix shown next to each tab title once a company is chosen
pub fn company_heading(company: &str) -> String {
    if company.is_empty() {
        String::new()
    } else {
        format!("for {}", company)
    }
}

/// What a graph fetch writes into the overview pane
///
/// Statistics entries are `None` when the response carried no statistics
/// object at all; the cards then keep their previous values.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphView {
    pub plot: String,
    pub total_companies: Option<String>,
    pub categories: Option<String>,
    pub hierarchy_depth: Option<String>,
    pub description: String,
}

/// Project a graph response into display values
///
/// `None` means the response carried no plot and the placeholder stays.
pub fn graph_view(response: GraphDataResponse) -> Option<GraphView> {
    let plot = response.plot?;

    let (total_companies, categories, hierarchy_depth) = match response.statistics {
        Some(stats) => (
            Some(stat_text(stats.total_companies)),
            Some(stat_text(stats.categories)),
            Some(stat_text(stats.hierarchy_depth)),
        ),
        None => (None, None, None),
    };

    let description = response
        .info
        .and_then(|info| info.description)
        .unwrap_or_else(|| NO_DESCRIPTION.to_string());

    Some(GraphView {
        plot,
        total_companies,
        categories,
        hierarchy_depth,
        description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboard::dto::{CompanyInfo, GraphStatistics};

    #[test]
    fn tab_keys_match_the_pane_ids() {
        assert_eq!(ActiveTab::Overview.key(), "overview");
        assert_eq!(ActiveTab::Reports.key(), "reports");
        assert_eq!(ActiveTab::Analytics.key(), "analytics");
    }

    #[test]
    fn missing_stat_shows_na() {
        assert_eq!(stat_text(Some(5)), "5");
        assert_eq!(stat_text(None), "N/A");
    }

    #[test]
    fn heading_is_empty_without_a_company() {
        assert_eq!(company_heading(""), "");
        assert_eq!(company_heading("CompanyB1234"), "for CompanyB1234");
    }

    #[test]
    fn response_without_plot_keeps_the_placeholder() {
        assert_eq!(graph_view(GraphDataResponse::default()), None);
    }

    #[test]
    fn partial_statistics_fall_back_per_field() {
        let response = GraphDataResponse {
            plot: Some("<svg/>".to_string()),
            statistics: Some(GraphStatistics {
                total_companies: Some(5),
                categories: None,
                hierarchy_depth: None,
            }),
            info: None,
        };
        let view = graph_view(response).unwrap();
        assert_eq!(view.plot, "<svg/>");
        assert_eq!(view.total_companies.as_deref(), Some("5"));
        assert_eq!(view.categories.as_deref(), Some("N/A"));
        assert_eq!(view.hierarchy_depth.as_deref(), Some("N/A"));
        assert_eq!(view.description, NO_DESCRIPTION);
    }

    #[test]
    fn absent_statistics_object_leaves_the_cards_alone() {
        let response = GraphDataResponse {
            plot: Some("<svg/>".to_string()),
            statistics: None,
            info: Some(CompanyInfo {
                description: Some("A company.".to_string()),
            }),
        };
        let view = graph_view(response).unwrap();
        assert_eq!(view.total_companies, None);
        assert_eq!(view.categories, None);
        assert_eq!(view.hierarchy_depth, None);
        assert_eq!(view.description, "A company.");
    }
}
