pub mod api_key;

pub use api_key::{AuthError, fingerprint, get_api_key};
