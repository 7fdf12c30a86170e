use axum::{extract::Query, http::StatusCode, Json};
use contracts::dashboard::dto::{
    ApiError, CompanyInfo, CompanyListResponse, GraphDataRequest, GraphDataResponse,
    GraphStatistics,
};

use crate::domain::company::service::{self, CompanyError};
use crate::domain::company::repository;
use crate::shared::plot;

/// GET /api/companies
pub async fn list_companies() -> Json<CompanyListResponse> {
    let companies = repository::company_names();
    tracing::info!("Dashboard: returning {} companies", companies.len());
    Json(CompanyListResponse { companies })
}

/// GET /get_graph_data/?company_name=CompanyB1234&category=all
pub async fn get_graph_data(
    Query(request): Query<GraphDataRequest>,
) -> Result<Json<GraphDataResponse>, (StatusCode, Json<ApiError>)> {
    let company_name = request.company_name.trim().to_string();
    if company_name.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError {
                error: "No company name provided.".to_string(),
            }),
        ));
    }

    let category = request.category();
    tracing::info!(
        "Dashboard: graph data for '{}' (category '{}')",
        company_name,
        category
    );

    match service::company_graph(&company_name, category) {
        Ok(graph) => {
            let plot = plot::render_tree_plot(&graph.vertices, &graph.edges);
            Ok(Json(GraphDataResponse {
                plot: Some(plot),
                statistics: Some(GraphStatistics {
                    total_companies: Some(graph.stats.total_companies),
                    categories: Some(graph.stats.categories),
                    hierarchy_depth: Some(graph.stats.hierarchy_depth),
                }),
                info: Some(CompanyInfo {
                    description: Some(graph.description),
                }),
            }))
        }
        Err(e @ CompanyError::NotFound(_)) => {
            tracing::warn!("Dashboard: {}", e);
            Err((
                StatusCode::NOT_FOUND,
                Json(ApiError {
                    error: e.to_string(),
                }),
            ))
        }
    }
}
