//! Common types and traits for all panel use cases

pub mod action;
pub mod controller;
pub mod inputs;
pub mod render;
pub mod service;
pub mod usecase_metadata;
pub mod usecase_result;

// Re-exports
pub use action::{validate, ActionKind, ActionRequest, ActionSpec, ActionSummary, PanelAction};
pub use controller::{ActionController, BusyGuard, PanelStore};
pub use inputs::RawInputs;
pub use render::{FieldUpdate, RenderResult, RenderedResult};
pub use service::{ComputeService, FilesResponse, ServiceErrorBody, ServiceFailure};
pub use usecase_metadata::UseCaseMetadata;
pub use usecase_result::{PanelError, UseCaseResult};
