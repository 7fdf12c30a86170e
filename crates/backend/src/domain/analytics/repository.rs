//! Regional analytics dataset
//!
//! Static risk figures for London and the surrounding areas, keyed by
//! local authority region.

/// Risk band for a region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    /// Chart color for the band
    pub fn color(self) -> &'static str {
        match self {
            RiskLevel::High => "darkred",
            RiskLevel::Medium => "orange",
            RiskLevel::Low => "green",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::High => "High",
            RiskLevel::Medium => "Medium",
            RiskLevel::Low => "Low",
        }
    }
}

/// One regional analytics record
#[derive(Debug)]
pub struct RegionRecord {
    pub city: &'static str,
    pub region: &'static str,
    pub value: f64,
    pub risk: RiskLevel,
}

pub const REGIONS: &[RegionRecord] = &[
    RegionRecord { city: "London", region: "City of London", value: 1200.0, risk: RiskLevel::High },
    RegionRecord { city: "Berkshire", region: "Reading", value: 800.0, risk: RiskLevel::Medium },
    RegionRecord { city: "Oxford", region: "Oxford", value: 750.0, risk: RiskLevel::Medium },
    RegionRecord { city: "Brighton", region: "Brighton and Hove", value: 600.0, risk: RiskLevel::Low },
    RegionRecord { city: "Bristol", region: "Bristol", value: 950.0, risk: RiskLevel::Medium },
    RegionRecord { city: "Cambridge", region: "Cambridge", value: 700.0, risk: RiskLevel::Medium },
    RegionRecord { city: "Southampton", region: "Southampton", value: 650.0, risk: RiskLevel::Low },
    RegionRecord { city: "Portsmouth", region: "Portsmouth", value: 600.0, risk: RiskLevel::Low },
    RegionRecord { city: "Manchester", region: "Manchester", value: 1100.0, risk: RiskLevel::High },
    RegionRecord { city: "Liverpool", region: "Liverpool", value: 1000.0, risk: RiskLevel::High },
    RegionRecord { city: "Leeds", region: "Leeds", value: 900.0, risk: RiskLevel::Medium },
    RegionRecord { city: "Nottingham", region: "Nottingham", value: 850.0, risk: RiskLevel::Medium },
    RegionRecord { city: "Sheffield", region: "Sheffield", value: 800.0, risk: RiskLevel::Medium },
    RegionRecord { city: "Birmingham", region: "Birmingham", value: 1150.0, risk: RiskLevel::High },
    RegionRecord { city: "Coventry", region: "Coventry", value: 780.0, risk: RiskLevel::Medium },
    RegionRecord { city: "Leicester", region: "Leicester", value: 720.0, risk: RiskLevel::Medium },
    RegionRecord { city: "Exeter", region: "Exeter", value: 650.0, risk: RiskLevel::Low },
    RegionRecord { city: "Norwich", region: "Norwich", value: 600.0, risk: RiskLevel::Low },
];
