pub mod config;
pub mod notice;
pub mod session;
pub mod validation;
