//! Shared types for the ERP export control panel.
//!
//! Everything here is framework independent: the frontend binds these types
//! to Leptos signals, the tests drive them with in-memory fakes.

pub mod shared;
pub mod usecases;
