use std::collections::BTreeMap;

/// Raw form values keyed by the field name the service expects.
///
/// Text values are kept exactly as typed; validation trims them. Missing
/// text reads as empty, missing flags read as `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInputs {
    text: BTreeMap<String, String>,
    flags: BTreeMap<String, bool>,
}

impl RawInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_text(field, value);
        self
    }

    pub fn with_flag(mut self, field: impl Into<String>, value: bool) -> Self {
        self.set_flag(field, value);
        self
    }

    pub fn set_text(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.text.insert(field.into(), value.into());
    }

    pub fn set_flag(&mut self, field: impl Into<String>, value: bool) {
        self.flags.insert(field.into(), value);
    }

    pub fn text(&self, field: &str) -> &str {
        self.text.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn flag(&self, field: &str) -> bool {
        self.flags.get(field).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_values_have_defaults() {
        let inputs = RawInputs::new()
            .with_text("n", " 10 ")
            .with_flag("include_gdp", true);
        assert_eq!(inputs.text("n"), " 10 ");
        assert_eq!(inputs.text("start_date"), "");
        assert!(inputs.flag("include_gdp"));
        assert!(!inputs.flag("include_close"));
    }
}
