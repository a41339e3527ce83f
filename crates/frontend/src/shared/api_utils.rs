//! Page location helpers
//!
//! The panel is served by the compute service itself, so API paths are
//! same-origin unless the query string says otherwise.

use contracts::shared::config::PanelConfig;

/// Panel configuration from the page query string.
///
/// Example: `index.html?api_base=http://127.0.0.1:5000` points the panel at a
/// service on another origin. Unknown keys are ignored; a malformed query
/// falls back to the defaults.
pub fn panel_config() -> PanelConfig {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    parse_config(search.trim_start_matches('?'))
}

pub fn parse_config(query: &str) -> PanelConfig {
    if query.is_empty() {
        return PanelConfig::default();
    }
    serde_qs::from_str(query).unwrap_or_else(|e| {
        log::warn!("ignoring malformed panel query {:?}: {}", query, e);
        PanelConfig::default()
    })
}

/// The page was opened straight from disk (`file:`), not via the service
pub fn is_local_file_origin() -> bool {
    web_sys::window()
        .and_then(|w| w.location().protocol().ok())
        .is_some_and(|protocol| protocol == "file:")
}
