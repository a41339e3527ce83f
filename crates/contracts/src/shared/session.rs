use serde::{Deserialize, Serialize};

use super::notice::Notice;

/// Transient flags that gate every control on the panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// An action (or the availability probe) is in flight
    pub busy: bool,
    /// The last probe reached the service
    pub service_available: bool,
}

/// Which controls the view may enable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    /// Buttons that dispatch a request
    pub actions_enabled: bool,
    /// Text, number, date and checkbox inputs
    pub inputs_enabled: bool,
    /// The manual "check service again" button
    pub recheck_enabled: bool,
}

impl SessionState {
    pub fn controls(&self) -> ControlState {
        ControlState {
            actions_enabled: !self.busy && self.service_available,
            inputs_enabled: !self.busy,
            recheck_enabled: !self.busy,
        }
    }
}

/// Everything the panel renders
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PanelState {
    pub session: SessionState,
    /// One-line status under the header
    pub status: String,
    /// Currently open notice; a new one replaces it
    pub notice: Option<Notice>,
    /// Workbooks reported by the last successful probe
    pub files: Vec<String>,
    /// The "start the service" notice has been shown in this session
    pub unavailable_notice_shown: bool,
}

impl PanelState {
    pub fn controls(&self) -> ControlState {
        self.session.controls()
    }
}
