//! Per-company report data
//!
//! Reports are CSV files named after the company (spaces as underscores)
//! in the configured data directory.

use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportsError {
    #[error("Data not available for the selected company.")]
    NotAvailable,
    #[error("Malformed report data: {0}")]
    Malformed(String),
}

/// One provider row of a company report
#[derive(Debug, Clone)]
pub struct ProviderRow {
    pub provider_type: String,
    pub provider_region: String,
    pub overall_effectiveness: String,
    /// Value column "Number of providers(% of chain)"
    pub providers_share: f64,
}

/// Load the report rows for a company
pub fn load_company_report(
    data_dir: &Path,
    company_name: &str,
) -> Result<Vec<ProviderRow>, ReportsError> {
    // Company names map to flat files, anything path-like has no data
    if company_name.contains(['/', '\\']) {
        return Err(ReportsError::NotAvailable);
    }

    let file_name = format!("{}.csv", company_name.replace(' ', "_"));
    let csv_path = data_dir.join(file_name);
    if !csv_path.exists() {
        return Err(ReportsError::NotAvailable);
    }

    let csv_text =
        std::fs::read_to_string(&csv_path).map_err(|e| ReportsError::Malformed(e.to_string()))?;
    parse_report_csv(&csv_text)
}

/// Parse report CSV text into provider rows
pub fn parse_report_csv(csv_text: &str) -> Result<Vec<ProviderRow>, ReportsError> {
    // Strip UTF-8 BOM if present
    let text = csv_text.trim_start_matches('\u{FEFF}');

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| ReportsError::Malformed(format!("failed to read CSV headers: {e}")))?
        .clone();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("Skipping malformed CSV record: {}", e);
                continue;
            }
        };

        // Get field by header name (case-insensitive), None when empty
        let get_field = |name: &str| -> Option<String> {
            headers
                .iter()
                .position(|h| h.eq_ignore_ascii_case(name))
                .and_then(|i| record.get(i))
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let (
            Some(provider_type),
            Some(provider_region),
            Some(overall_effectiveness),
            Some(share),
        ) = (
            get_field("Provider type"),
            get_field("Provider region"),
            get_field("Overall effectiveness"),
            get_field("Number of providers(% of chain)"),
        )
        else {
            continue;
        };

        let providers_share = share
            .parse::<f64>()
            .map_err(|e| ReportsError::Malformed(format!("bad share value '{share}': {e}")))?;

        rows.push(ProviderRow {
            provider_type,
            provider_region,
            overall_effectiveness,
            providers_share,
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Provider type,Provider region,Overall effectiveness,Number of providers(% of chain)
Residential care home,London,Good,34.5
Nursing home,North West,Requires improvement,8.6
";

    #[test]
    fn parses_rows_by_header_name() {
        let rows = parse_report_csv(SAMPLE).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].provider_type, "Residential care home");
        assert_eq!(rows[1].provider_region, "North West");
        assert_eq!(rows[0].providers_share, 34.5);
    }

    #[test]
    fn header_lookup_is_order_independent() {
        let reordered = "\
Number of providers(% of chain),Provider type,Provider region,Overall effectiveness
12.0,Supported living,Midlands,Good
";
        let rows = parse_report_csv(reordered).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].provider_type, "Supported living");
        assert_eq!(rows[0].providers_share, 12.0);
    }

    #[test]
    fn rows_with_empty_required_fields_are_skipped() {
        let gappy = "\
Provider type,Provider region,Overall effectiveness,Number of providers(% of chain)
,London,Good,10.0
Nursing home,London,Good,5.0
";
        let rows = parse_report_csv(gappy).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].provider_type, "Nursing home");
    }

    #[test]
    fn non_numeric_share_is_malformed() {
        let bad = "\
Provider type,Provider region,Overall effectiveness,Number of providers(% of chain)
Nursing home,London,Good,lots
";
        assert!(matches!(
            parse_report_csv(bad),
            Err(ReportsError::Malformed(_))
        ));
    }

    #[test]
    fn path_like_company_names_have_no_data() {
        let err = load_company_report(Path::new("data"), "../../etc/passwd").unwrap_err();
        assert!(matches!(err, ReportsError::NotAvailable));
    }
}
