use thiserror::Error;

use super::repository::{self, CompanyStats};

#[derive(Debug, Error)]
pub enum CompanyError {
    #[error("Company '{0}' not found.")]
    NotFound(String),
}

/// Company hierarchy prepared for rendering
#[derive(Debug, Clone)]
pub struct CompanyGraph {
    pub vertices: Vec<String>,
    /// Edges as indices into `vertices`
    pub edges: Vec<(usize, usize)>,
    pub stats: CompanyStats,
    pub description: String,
}

/// Build the (optionally category-filtered) hierarchy for a company
///
/// With a concrete category, a vertex survives when it belongs to the
/// category, is the selected company itself, or is a category grouping
/// node; an edge survives when both endpoints do. Filtering can
/// disconnect the tree. Statistics are the precomputed per-company
/// values, not derived from the filtered graph.
pub fn company_graph(company_name: &str, category: &str) -> Result<CompanyGraph, CompanyError> {
    let record = repository::find(company_name)
        .ok_or_else(|| CompanyError::NotFound(company_name.to_string()))?;

    let vertices: Vec<&'static str> = if category == "all" {
        record.vertices.to_vec()
    } else {
        let members = record.category_members(category);
        record
            .vertices
            .iter()
            .copied()
            .filter(|v| members.contains(v) || *v == company_name || v.contains("Category"))
            .collect()
    };

    let index_of = |name: &str| vertices.iter().position(|v| *v == name);
    let edges: Vec<(usize, usize)> = record
        .edges
        .iter()
        .filter_map(|(from, to)| Some((index_of(from)?, index_of(to)?)))
        .collect();

    Ok(CompanyGraph {
        vertices: vertices.into_iter().map(str::to_string).collect(),
        edges,
        stats: record.stats,
        description: record.description.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_category_keeps_the_full_hierarchy() {
        let graph = company_graph("Amalfi midco Ltd 14185820", "all").unwrap();
        assert_eq!(graph.vertices.len(), 7);
        assert_eq!(graph.edges.len(), 6);
        assert_eq!(graph.stats.total_companies, 7);
        assert!(graph.description.contains("care homes"));
    }

    #[test]
    fn category_filter_keeps_members_self_and_grouping_nodes() {
        let graph = company_graph("CompanyB1234", "new_company").unwrap();
        // CompanyB1234 (self), the two Category nodes, and CompanyB2
        assert_eq!(
            graph.vertices,
            vec!["CompanyB1234", "Category1234", "Category5678", "CompanyB2"]
        );
        // Both root edges survive, plus Category1234 -> CompanyB2
        assert_eq!(graph.edges.len(), 3);
    }

    #[test]
    fn edges_with_a_dropped_endpoint_are_dropped() {
        let graph = company_graph("CompanyB1234", "update").unwrap();
        // CompanyB5 hangs off Category5678, the other leaves disappear
        assert!(graph.vertices.contains(&"CompanyB5".to_string()));
        assert!(!graph.vertices.contains(&"CompanyB2".to_string()));
        for &(from, to) in &graph.edges {
            assert!(from < graph.vertices.len());
            assert!(to < graph.vertices.len());
        }
        assert_eq!(graph.edges.len(), 3);
    }

    #[test]
    fn statistics_ignore_the_filter() {
        let all = company_graph("CompanyD012", "all").unwrap();
        let filtered = company_graph("CompanyD012", "update").unwrap();
        assert_eq!(
            all.stats.total_companies,
            filtered.stats.total_companies
        );
        assert!(filtered.vertices.len() < all.vertices.len());
    }

    #[test]
    fn unknown_company_is_an_error() {
        let err = company_graph("No Such Company", "all").unwrap_err();
        assert_eq!(err.to_string(), "Company 'No Such Company' not found.");
    }
}
