use super::pager::Pager;
use super::pokedex::Pokedex;
use super::settings::Settings;
use crate::catalog::Endpoints;
use crate::net::{Cache, LoadError, Loader};
use serde::de::DeserializeOwned;
use tokio::runtime::Runtime;
use url::Url;

/// Everything the command handlers share for one run of the explorer.
pub struct Session {
    pub settings: Settings,
    pub endpoints: Endpoints,
    pub loader: Loader,
    pub pager: Pager,
    pub pokedex: Pokedex,
    runtime: Runtime,
}

impl Session {
    pub fn new(settings: Settings) -> Result<Self, LoadError> {
        let runtime = Runtime::new()?;
        let endpoints = Endpoints::new(&settings.base_url)?;

        // The reaper is spawned onto the runtime and keeps ticking between commands.
        let cache = {
            let _guard = runtime.enter();
            Cache::new(settings.cache_interval)
        };
        log::info!(
            "Session started against {} (cache interval {:?})",
            endpoints.base(),
            settings.cache_interval
        );

        Ok(Self {
            settings,
            endpoints,
            loader: Loader::new(cache)?,
            pager: Pager::new(),
            pokedex: Pokedex::new(),
            runtime,
        })
    }

    pub fn cache(&self) -> &Cache {
        self.loader.cache()
    }

    /// Fetch and decode `url`, blocking until the request completes.
    pub fn fetch<T: DeserializeOwned>(&self, url: &Url) -> Result<T, LoadError> {
        self.runtime.block_on(self.loader.fetch_json(url))
    }
}
