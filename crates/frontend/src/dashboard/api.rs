use contracts::dashboard::dto::{AnalyticsResponse, CompanyListResponse, GraphDataResponse};
use gloo_net::http::Request;

/// Load the known company list used by the autocomplete
pub async fn fetch_companies() -> Result<Vec<String>, String> {
    let response = Request::get("/api/companies")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    let list: CompanyListResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    Ok(list.companies)
}

/// Fetch graph markup and statistics for a company
pub async fn fetch_graph_data(
    company_name: &str,
    category: &str,
) -> Result<GraphDataResponse, String> {
    let url = format!(
        "/get_graph_data/?company_name={}&category={}",
        urlencoding::encode(company_name),
        urlencoding::encode(category)
    );
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch the reports pane fragment (HTML) for a company
pub async fn fetch_reports(company_name: &str) -> Result<String, String> {
    let url = format!(
        "/reports/?company_name={}",
        urlencoding::encode(company_name)
    );
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))
}

/// Fetch the analytics plot for a company
pub async fn fetch_analytics(company_name: &str) -> Result<AnalyticsResponse, String> {
    let url = format!(
        "/analytics/?company_name={}",
        urlencoding::encode(company_name)
    );
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
