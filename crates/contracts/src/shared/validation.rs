//! Validation rules for panel input fields
//!
//! All checks are pure: they never touch the network and never change
//! session state. Messages are shown to the user verbatim.

use thiserror::Error;

/// Upper bound for the sum of the thermometer weights, in percent.
pub const WEIGHT_SUM_LIMIT: f64 = 100.0;

/// Slack allowed on [`WEIGHT_SUM_LIMIT`] for float rounding in the inputs.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// A locally detected input problem
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Field name as sent to the service (`n`, `start_date`, ...)
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Inclusive integer range for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntRule {
    pub field: &'static str,
    pub min: i64,
    pub max: i64,
}

impl IntRule {
    pub const fn new(field: &'static str, min: i64, max: i64) -> Self {
        Self { field, min, max }
    }

    /// Parse a raw input value.
    ///
    /// Accepts anything that denotes a whole number (`"10"`, `" 10 "`,
    /// `"10.0"`); rejects blanks, fractions and non-finite values.
    pub fn parse(&self, raw: &str) -> Result<i64, ValidationError> {
        let value = parse_whole_number(raw.trim()).ok_or_else(|| {
            ValidationError::new(
                self.field,
                format!("{} 必须为整数（{}-{}）。", self.field, self.min, self.max),
            )
        })?;

        if value < self.min || value > self.max {
            return Err(ValidationError::new(
                self.field,
                format!("{} 超出范围（{}-{}）。", self.field, self.min, self.max),
            ));
        }

        Ok(value)
    }
}

fn parse_whole_number(raw: &str) -> Option<i64> {
    if raw.is_empty() {
        return None;
    }
    if let Ok(value) = raw.parse::<i64>() {
        return Some(value);
    }

    let value = raw.parse::<f64>().ok()?;
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if value < i64::MIN as f64 || value > i64::MAX as f64 {
        return None;
    }
    Some(value as i64)
}

/// Parse a percentage weight in `[0, 100]`
pub fn parse_weight(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| {
            ValidationError::new(field, format!("{} 必须为 0-100 之间的数字。", field))
        })?;

    if !(0.0..=WEIGHT_SUM_LIMIT).contains(&value) {
        return Err(ValidationError::new(
            field,
            format!("{} 超出范围（0-100）。", field),
        ));
    }

    Ok(value)
}

/// Cross-field check: the weights together may not exceed 100%
pub fn check_weight_sum(field: &'static str, weights: &[f64]) -> Result<(), ValidationError> {
    let total: f64 = weights.iter().sum();
    if total > WEIGHT_SUM_LIMIT + WEIGHT_SUM_TOLERANCE {
        return Err(ValidationError::new(field, "权重之和不能超过 100%。"));
    }
    Ok(())
}

/// Parse a `YYYY-MM-DD` literal.
///
/// Format only: `2023-02-30` passes, the service decides whether the date
/// exists. `label` is the human name used in messages (`起始日期`).
pub fn parse_date(field: &'static str, label: &str, raw: &str) -> Result<String, ValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ValidationError::new(
            field,
            format!("请填写{}（YYYY-MM-DD）。", label),
        ));
    }
    if !is_iso_date_literal(value) {
        return Err(ValidationError::new(
            field,
            format!("{}格式必须为 YYYY-MM-DD。", label),
        ));
    }
    Ok(value.to_string())
}

/// `^[0-9]{4}-[0-9]{2}-[0-9]{2}$`
pub fn is_iso_date_literal(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Validate the name of a workbook in the service's input directory.
///
/// Mirrors what the service accepts: a bare `.xlsx` name that is not an
/// Office lock file.
pub fn parse_xlsx_filename(field: &'static str, raw: &str) -> Result<String, ValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ValidationError::new(field, "请选择要转换的文件。"));
    }

    let is_bare = !value.contains('/') && !value.contains('\\');
    let is_xlsx = value.to_lowercase().ends_with(".xlsx");
    if !is_bare || !is_xlsx || value.starts_with("~$") {
        return Err(ValidationError::new(field, "文件名不合法。"));
    }

    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const N: IntRule = IntRule::new("n", 1, 4000);

    #[test]
    fn test_int_rule_bounds_are_inclusive() {
        assert_eq!(N.parse("1"), Ok(1));
        assert_eq!(N.parse("4000"), Ok(4000));
        assert_eq!(N.parse(" 250 "), Ok(250));
        assert_eq!(N.parse("10.0"), Ok(10));
    }

    #[test]
    fn test_int_rule_out_of_range() {
        for raw in ["0", "-5", "4001", "1e9"] {
            let err = N.parse(raw).unwrap_err();
            assert_eq!(err.field, "n");
            assert_eq!(err.message, "n 超出范围（1-4000）。");
        }
    }

    #[test]
    fn test_int_rule_rejects_non_integers() {
        for raw in ["", "   ", "abc", "1.5", "NaN", "inf", "12px"] {
            let err = N.parse(raw).unwrap_err();
            assert_eq!(err.message, "n 必须为整数（1-4000）。", "input {:?}", raw);
        }
    }

    #[test]
    fn test_weight_parsing() {
        assert_eq!(parse_weight("weight_gdp", "0"), Ok(0.0));
        assert_eq!(parse_weight("weight_gdp", "100"), Ok(100.0));
        assert_eq!(parse_weight("weight_gdp", " 12.5 "), Ok(12.5));
        assert!(parse_weight("weight_gdp", "100.01").is_err());
        assert!(parse_weight("weight_gdp", "-1").is_err());
        assert!(parse_weight("weight_gdp", "").is_err());
        assert!(parse_weight("weight_gdp", "inf").is_err());
    }

    #[test]
    fn test_weight_sum_tolerance() {
        assert!(check_weight_sum("weights", &[25.0, 25.0, 25.0, 25.0]).is_ok());
        assert!(check_weight_sum("weights", &[100.0, 0.0, 0.0, 1e-7]).is_ok());
        assert!(check_weight_sum("weights", &[33.3, 33.3, 33.4, 0.0]).is_ok());

        let err = check_weight_sum("weights", &[40.0, 30.0, 30.0, 1.0]).unwrap_err();
        assert_eq!(err.message, "权重之和不能超过 100%。");
        assert!(check_weight_sum("weights", &[100.0, 0.0, 0.0, 1e-5]).is_err());
    }

    #[test]
    fn test_date_format_only() {
        assert_eq!(
            parse_date("start_date", "起始日期", "2024-01-01"),
            Ok("2024-01-01".to_string())
        );
        assert_eq!(
            parse_date("start_date", "起始日期", "2023-02-30"),
            Ok("2023-02-30".to_string())
        );
    }

    #[test]
    fn test_date_empty_and_malformed_differ() {
        let empty = parse_date("start_date", "起始日期", "  ").unwrap_err();
        assert_eq!(empty.message, "请填写起始日期（YYYY-MM-DD）。");

        for raw in ["2024/01/01", "2024-1-01", "24-01-01", "2024-01-011", "２０２４-01-01"] {
            let err = parse_date("start_date", "起始日期", raw).unwrap_err();
            assert_eq!(err.message, "起始日期格式必须为 YYYY-MM-DD。", "input {:?}", raw);
        }
    }

    #[test]
    fn test_xlsx_filename() {
        assert_eq!(
            parse_xlsx_filename("filename", "data_PE.xlsx"),
            Ok("data_PE.xlsx".to_string())
        );
        assert_eq!(
            parse_xlsx_filename("filename", "REPORT.XLSX"),
            Ok("REPORT.XLSX".to_string())
        );
        assert_eq!(
            parse_xlsx_filename("filename", "").unwrap_err().message,
            "请选择要转换的文件。"
        );
        for raw in ["../data.xlsx", "a\\b.xlsx", "~$data.xlsx", "data.csv"] {
            assert_eq!(
                parse_xlsx_filename("filename", raw).unwrap_err().message,
                "文件名不合法。"
            );
        }
    }
}
