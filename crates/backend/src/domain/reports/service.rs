//! Reports pane rendering
//!
//! Always answers with an HTML fragment; failures are reported in-band so
//! the page can drop the fragment straight into the pane.

use std::path::Path;

use super::repository::{self, ProviderRow, ReportsError};
use crate::shared::plot;

pub const EMPTY_STATE: &str = "<p>Please select a company to view reports.</p>";
pub const NOT_AVAILABLE: &str = "<p>Data not available for the selected company.</p>";
pub const RENDER_ERROR: &str =
    "<p>An error occurred while generating the report. Please try again later.</p>";

/// Sum the value column grouped by a label column, preserving the order
/// labels first appear in
pub fn group_shares<F>(rows: &[ProviderRow], label: F) -> Vec<(String, f64)>
where
    F: Fn(&ProviderRow) -> &str,
{
    let mut grouped: Vec<(String, f64)> = Vec::new();
    for row in rows {
        let key = label(row);
        match grouped.iter_mut().find(|(existing, _)| existing == key) {
            Some((_, sum)) => *sum += row.providers_share,
            None => grouped.push((key.to_string(), row.providers_share)),
        }
    }
    grouped
}

/// Render the reports pane fragment for a company
pub fn render_company_report(data_dir: &Path, company_name: &str) -> String {
    let company_name = company_name.trim();
    if company_name.is_empty() {
        return EMPTY_STATE.to_string();
    }

    let rows = match repository::load_company_report(data_dir, company_name) {
        Ok(rows) => rows,
        Err(ReportsError::NotAvailable) => return NOT_AVAILABLE.to_string(),
        Err(e) => {
            tracing::error!("Error loading reports for '{}': {}", company_name, e);
            return RENDER_ERROR.to_string();
        }
    };

    let provider_chart = plot::render_vertical_bar_chart(
        &group_shares(&rows, |row| &row.provider_type),
        "Provider Types",
    );
    let region_chart = plot::render_pie_chart(
        &group_shares(&rows, |row| &row.provider_region),
        "Providers by Region",
    );
    let inspection_chart = plot::render_vertical_bar_chart(
        &group_shares(&rows, |row| &row.overall_effectiveness),
        "Full Inspection Outcomes",
    );

    format!(
        "<div class=\"report-charts\">\
         <div class=\"report-chart\">{provider_chart}</div>\
         <div class=\"report-chart\">{region_chart}</div>\
         <div class=\"report-chart\">{inspection_chart}</div>\
         </div>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reports::repository::ProviderRow;

    fn row(provider_type: &str, region: &str, effectiveness: &str, share: f64) -> ProviderRow {
        ProviderRow {
            provider_type: provider_type.to_string(),
            provider_region: region.to_string(),
            overall_effectiveness: effectiveness.to_string(),
            providers_share: share,
        }
    }

    #[test]
    fn grouping_sums_in_first_seen_order() {
        let rows = vec![
            row("Nursing home", "London", "Good", 10.0),
            row("Residential care home", "London", "Good", 5.0),
            row("Nursing home", "Midlands", "Outstanding", 2.5),
        ];
        let grouped = group_shares(&rows, |r| &r.provider_type);
        assert_eq!(
            grouped,
            vec![
                ("Nursing home".to_string(), 12.5),
                ("Residential care home".to_string(), 5.0),
            ]
        );
    }

    #[test]
    fn blank_company_gets_the_empty_state() {
        let fragment = render_company_report(Path::new("no-such-dir"), "   ");
        assert_eq!(fragment, EMPTY_STATE);
    }

    #[test]
    fn missing_file_gets_the_not_available_fragment() {
        let fragment = render_company_report(Path::new("no-such-dir"), "Nobody Ltd");
        assert_eq!(fragment, NOT_AVAILABLE);
    }
}
