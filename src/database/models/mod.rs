pub mod company;

pub use company::{trim_values, Company, CompanyChanges, CompanyRow};
