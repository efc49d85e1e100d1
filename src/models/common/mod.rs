pub mod pagination;
pub mod response;

pub use pagination::PagedResult;
pub use response::{DataEnvelope, ErrorBody};
