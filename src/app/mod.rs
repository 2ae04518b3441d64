pub mod pager;
pub mod pokedex;
pub mod session;
pub mod settings;

pub use pager::Pager;
pub use pokedex::{CatchOutcome, Pokedex};
pub use session::Session;
pub use settings::Settings;
