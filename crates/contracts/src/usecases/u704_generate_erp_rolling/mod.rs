pub mod request;
pub mod response;

pub use request::{RollingRequest, ROLLING_WINDOW};
pub use response::RollingResponse;
