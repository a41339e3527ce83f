pub mod request;
pub mod response;

pub use request::{PercentilesRequest, ThermometerWindows, WINDOW_RULES};
pub use response::PercentilesResponse;
