//! Analytics pane rendering

use super::repository::REGIONS;
use crate::shared::plot::{self, Bar};

/// Render the regional risk plot shown in the analytics pane
///
/// The dataset is global; colors follow the risk band of each region.
pub fn render_analytics_plot() -> String {
    let bars: Vec<Bar> = REGIONS
        .iter()
        .map(|record| Bar {
            label: format!("{} ({})", record.city, record.risk.label()),
            value: record.value,
            color: record.risk.color().to_string(),
        })
        .collect();

    plot::render_colored_bar_chart(&bars, "London & Surrounding Areas Analytics", "darkblue")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analytics::repository::RiskLevel;

    #[test]
    fn plot_contains_every_region_with_its_risk_color() {
        let svg = render_analytics_plot();
        assert!(svg.contains("London &amp; Surrounding Areas Analytics"));
        assert!(svg.contains("Manchester (High)"));
        assert!(svg.contains(RiskLevel::High.color()));
        assert!(svg.contains(RiskLevel::Medium.color()));
        assert!(svg.contains(RiskLevel::Low.color()));
        assert_eq!(svg.matches("<rect").count(), 1 + REGIONS.len());
    }
}
