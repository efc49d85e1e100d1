pub mod requests;
pub mod responses;

pub use requests::{LoginRequest, RefreshTokenRequest, RegisterRequest};
pub use responses::{AuthData, ProfileData, RefreshData, TokenPair};
