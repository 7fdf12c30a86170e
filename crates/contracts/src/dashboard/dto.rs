use serde::{Deserialize, Serialize};

/// Query parameters for the graph data endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDataRequest {
    /// Company name as typed (or picked) in the search box
    #[serde(default)]
    pub company_name: String,
    /// Category filter, absent means "all"
    pub category: Option<String>,
}

impl GraphDataRequest {
    /// Effective category filter value
    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or("all")
    }
}

/// Response for the graph data endpoint
///
/// Every field is optional: a response without `plot` means the client
/// keeps (or reverts to) its placeholder state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphDataResponse {
    /// Rendered graph markup (SVG), injected verbatim into the page
    pub plot: Option<String>,
    /// Hierarchy statistics for the statistics cards
    pub statistics: Option<GraphStatistics>,
    /// Free-text company info
    pub info: Option<CompanyInfo>,
}

/// Statistics block shown next to the graph
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphStatistics {
    pub total_companies: Option<u32>,
    pub categories: Option<u32>,
    pub hierarchy_depth: Option<u32>,
}

/// Company info block
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub description: Option<String>,
}

/// Response for the company list endpoint, preloaded by the page for
/// autocomplete suggestions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyListResponse {
    pub companies: Vec<String>,
}

/// Query parameters for the reports endpoint (answers with an HTML
/// fragment, not JSON)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportsRequest {
    pub company_name: Option<String>,
}

/// Query parameters for the analytics endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsRequest {
    pub company_name: Option<String>,
}

/// Response for the analytics endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsResponse {
    /// Rendered analytics markup (SVG), absent when there is no data
    pub plot: Option<String>,
}

/// JSON error body returned by the API on request failures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_graph_response_deserializes_to_all_none() {
        let response: GraphDataResponse = serde_json::from_str("{}").unwrap();
        assert!(response.plot.is_none());
        assert!(response.statistics.is_none());
        assert!(response.info.is_none());
    }

    #[test]
    fn partial_statistics_leave_missing_fields_none() {
        let response: GraphDataResponse =
            serde_json::from_str(r#"{"plot":"<svg/>","statistics":{"total_companies":5}}"#)
                .unwrap();
        assert_eq!(response.plot.as_deref(), Some("<svg/>"));
        let stats = response.statistics.unwrap();
        assert_eq!(stats.total_companies, Some(5));
        assert_eq!(stats.categories, None);
        assert_eq!(stats.hierarchy_depth, None);
    }

    #[test]
    fn request_category_defaults_to_all() {
        let request = GraphDataRequest {
            company_name: "CompanyB1234".to_string(),
            category: None,
        };
        assert_eq!(request.category(), "all");
    }
}
