//! Flat records produced by the listing fetcher.

use serde::{Deserialize, Serialize};

/// Currency assumed when the API leaves it out.
pub const DEFAULT_CURRENCY: &str = "RUR";

/// Salary bounds of a vacancy. Always present on a record, even when the
/// API publishes no salary at all.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SalaryRange {
    pub from: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<i64>,
    pub currency: String,
}

impl Default for SalaryRange {
    fn default() -> Self {
        Self {
            from: 0,
            to: None,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct VacancyRecord {
    pub id: String,
    pub title: String,
    pub salary: SalaryRange,
    pub description: Option<String>,
    pub employer: String,
    pub url: String,
}

/// Employer details paired with one of its vacancy ids.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct EmployerRecord {
    pub id_company: String,
    pub employer_name: String,
    pub description: Option<String>,
    pub site: String,
    pub id_vacancy: String,
}
