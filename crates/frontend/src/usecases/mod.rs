pub mod api;
pub mod form;
pub mod store;
pub mod view;

use contracts::usecases::common::ActionController;

/// The controller as wired in the browser
pub type PanelController = ActionController<api::HttpComputeService, store::PanelSignal>;
