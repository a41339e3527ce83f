use contracts::shared::session::PanelState;
use contracts::usecases::common::PanelStore;
use leptos::prelude::*;

/// Panel state in a reactive signal.
///
/// The controller reads untracked; views subscribe with `state()`.
#[derive(Clone, Copy)]
pub struct PanelSignal(RwSignal<PanelState>);

impl PanelSignal {
    pub fn new() -> Self {
        Self(RwSignal::new(PanelState::default()))
    }

    pub fn state(&self) -> RwSignal<PanelState> {
        self.0
    }
}

impl Default for PanelSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelStore for PanelSignal {
    fn read<R>(&self, f: impl FnOnce(&PanelState) -> R) -> R {
        self.0.with_untracked(f)
    }

    fn update(&self, f: impl FnOnce(&mut PanelState)) {
        self.0.update(f);
    }
}
