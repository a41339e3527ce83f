pub mod request;
pub mod response;

pub use request::ErpRequest;
pub use response::ErpResponse;
