pub mod analytics;
pub mod company;
pub mod reports;
