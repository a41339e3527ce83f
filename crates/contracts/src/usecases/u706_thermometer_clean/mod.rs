pub mod request;
pub mod response;

pub use request::ThermometerCleanRequest;
pub use response::ThermometerCleanResponse;
