pub mod request;
pub mod response;

pub use request::Erp10yRequest;
pub use response::Erp10yResponse;
