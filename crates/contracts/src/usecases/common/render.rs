use std::collections::BTreeMap;

use crate::shared::config::PanelConfig;

/// Header line above the list of generated files
pub const GENERATED_HEADER: &str = "已生成：";

/// A value the service corrected and the form should pick up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUpdate {
    pub field: String,
    pub value: String,
}

/// Notice lines built from a successful reply
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedResult {
    pub lines: Vec<String>,
    pub field_updates: Vec<FieldUpdate>,
}

/// A typed service reply that knows how to describe itself
pub trait RenderResult {
    fn render(&self, config: &PanelConfig) -> RenderedResult;
}

/// `- docs/data/<name>` for every present, non-blank name
pub fn file_lines<'a, I>(config: &PanelConfig, names: I) -> Vec<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    names
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| format!("- {}", config.output_path(name)))
        .collect()
}

/// Values of an `outputs` map: `known` keys first in the given order, then
/// the rest in key order.
pub fn ordered_outputs<'a>(
    outputs: &'a BTreeMap<String, Option<String>>,
    known: &[&str],
) -> Vec<Option<&'a str>> {
    let known_values = known
        .iter()
        .map(|key| outputs.get(*key).and_then(|v| v.as_deref()));
    let extra_values = outputs
        .iter()
        .filter(|(key, _)| !known.contains(&key.as_str()))
        .map(|(_, v)| v.as_deref());
    known_values.chain(extra_values).collect()
}

/// Header plus file lines
pub fn generated_block<'a, I>(config: &PanelConfig, names: I) -> Vec<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut lines = vec![GENERATED_HEADER.to_string()];
    lines.extend(file_lines(config, names));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_lines_skip_blanks() {
        let config = PanelConfig::default();
        let lines = file_lines(&config, [Some("ERP.csv"), None, Some("  "), Some("ERP.xlsx")]);
        assert_eq!(lines, vec!["- docs/data/ERP.csv", "- docs/data/ERP.xlsx"]);
    }

    #[test]
    fn test_ordered_outputs() {
        let outputs: BTreeMap<String, Option<String>> = [
            ("zz_extra", Some("extra.csv")),
            ("erp_csv", Some("ERP.csv")),
            ("aa_extra", None),
            ("merged_csv", Some("merged.csv")),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
        .collect();

        let ordered = ordered_outputs(&outputs, &["merged_csv", "missing", "erp_csv"]);
        assert_eq!(
            ordered,
            vec![Some("merged.csv"), None, Some("ERP.csv"), None, Some("extra.csv")]
        );
    }
}
