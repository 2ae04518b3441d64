pub mod app;
pub mod catalog;
pub mod net;
pub mod repl;

pub use app::Session;
pub use net::Cache;
