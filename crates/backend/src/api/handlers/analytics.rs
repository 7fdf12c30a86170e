use axum::{extract::Query, Json};
use contracts::dashboard::dto::{AnalyticsRequest, AnalyticsResponse};

use crate::domain::analytics::service;

/// GET /analytics/?company_name=CompanyB1234
///
/// The regional dataset is global; the company parameter is accepted for
/// symmetry with the other endpoints.
pub async fn get_analytics(Query(request): Query<AnalyticsRequest>) -> Json<AnalyticsResponse> {
    tracing::info!(
        "Dashboard: analytics requested (company: {:?})",
        request.company_name
    );
    Json(AnalyticsResponse {
        plot: Some(service::render_analytics_plot()),
    })
}
