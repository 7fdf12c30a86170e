use axum::{extract::Query, response::Html};
use contracts::dashboard::dto::ReportsRequest;

use crate::domain::reports::service;
use crate::shared::config;

/// GET /reports/?company_name=CompanyB1234
///
/// Always 200; failures are reported inside the fragment.
pub async fn get_reports(Query(request): Query<ReportsRequest>) -> Html<String> {
    let company_name = request.company_name.unwrap_or_default();
    tracing::info!("Dashboard: reports for '{}'", company_name);

    let data_dir = config::resolve_path(&config::get().dashboard.data_dir);
    Html(service::render_company_report(&data_dir, &company_name))
}
