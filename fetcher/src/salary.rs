use common::{SalaryRange, DEFAULT_CURRENCY};
use serde::Deserialize;

/// Salary block as published by the API. Every key may be missing or null.
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
pub struct RawSalary {
    #[serde(default)]
    pub from: Option<i64>,
    #[serde(default)]
    pub to: Option<i64>,
    #[serde(default)]
    pub currency: Option<String>,
}

/// Shapes a raw salary block into a [`SalaryRange`].
///
/// A lone upper bound is reported as the lower bound, and an upper bound is
/// only kept when both bounds are known. Bounds are not checked against each
/// other.
pub fn normalize_salary(raw: Option<&RawSalary>) -> SalaryRange {
    let Some(raw) = raw else {
        return SalaryRange::default();
    };

    let currency = raw
        .currency
        .clone()
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

    match (raw.from, raw.to) {
        (from, None) => SalaryRange {
            from: from.unwrap_or(0),
            to: None,
            currency,
        },
        (None, Some(to)) => SalaryRange {
            from: to,
            to: None,
            currency,
        },
        (Some(from), Some(to)) => SalaryRange {
            from,
            to: Some(to),
            currency,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> RawSalary {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_missing_salary_defaults_to_zero_rur() {
        assert_eq!(
            normalize_salary(None),
            SalaryRange {
                from: 0,
                to: None,
                currency: "RUR".to_string()
            }
        );
    }

    #[test]
    fn test_lower_bound_only() {
        let raw = parse(r#"{"from": 100, "currency": "USD"}"#);
        assert_eq!(
            normalize_salary(Some(&raw)),
            SalaryRange {
                from: 100,
                to: None,
                currency: "USD".to_string()
            }
        );
    }

    #[test]
    fn test_upper_bound_only_becomes_lower_bound() {
        let raw = parse(r#"{"to": 500}"#);
        assert_eq!(
            normalize_salary(Some(&raw)),
            SalaryRange {
                from: 500,
                to: None,
                currency: "RUR".to_string()
            }
        );
    }

    #[test]
    fn test_full_range_is_kept() {
        let raw = parse(r#"{"from": 100, "to": 200, "currency": "EUR"}"#);
        assert_eq!(
            normalize_salary(Some(&raw)),
            SalaryRange {
                from: 100,
                to: Some(200),
                currency: "EUR".to_string()
            }
        );
    }

    #[test]
    fn test_explicit_nulls_fall_back_to_defaults() {
        let raw = parse(r#"{"from": null, "to": null, "currency": null, "gross": true}"#);
        assert_eq!(normalize_salary(Some(&raw)), SalaryRange::default());
    }

    #[test]
    fn test_inverted_range_is_not_corrected() {
        let raw = parse(r#"{"from": 300, "to": 100, "currency": "KZT"}"#);
        let salary = normalize_salary(Some(&raw));
        assert_eq!((salary.from, salary.to), (300, Some(100)));
    }
}
