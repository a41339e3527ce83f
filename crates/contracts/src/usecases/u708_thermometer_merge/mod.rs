pub mod request;
pub mod response;

pub use request::{MergeInclusions, MergeRequest, MergeWeights, INCLUSION_FIELDS, WEIGHT_FIELDS};
pub use response::MergeResponse;
