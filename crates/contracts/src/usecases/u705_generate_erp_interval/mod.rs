pub mod request;
pub mod response;

pub use request::{IntervalRequest, FIELD_END_DATE, FIELD_START_DATE};
pub use response::IntervalResponse;
