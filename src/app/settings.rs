use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/";
pub const DEFAULT_CACHE_INTERVAL: Duration = Duration::from_secs(5);
pub const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: String,
    /// How long a response stays cached; also the reaper's sweep period.
    pub cache_interval: Duration,
    pub page_size: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cache_interval: DEFAULT_CACHE_INTERVAL,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
