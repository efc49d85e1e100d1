pub mod api;
pub mod tokens;
pub mod transport;

pub use api::ApiClient;
pub use tokens::{FileTokenStore, MemoryTokenStore, StoredTokens, TokenStore};
pub use transport::{ApiRequest, ApiResponseParts, HttpTransport, Method, ReqwestTransport};
