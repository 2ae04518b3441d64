pub mod cache;
pub mod http;
pub mod loader;

pub use cache::Cache;
pub use http::HttpClient;
pub use loader::{LoadError, Loader};
