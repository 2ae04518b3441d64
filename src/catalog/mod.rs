//! Typed records for the remote catalog and the URLs they live at.

pub mod location;
pub mod pokemon;

pub use location::{LocationArea, LocationAreaPage};
pub use pokemon::Pokemon;

use crate::net::LoadError;
use serde::Deserialize;
use url::Url;

/// A `{ name, url }` reference to another catalog resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Builds resource URLs relative to the catalog root.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Result<Self, LoadError> {
        let mut base = Url::parse(base_url)?;
        if base.cannot_be_a_base() {
            return Err(LoadError::NotABase(base_url.to_string()));
        }
        // Url::join replaces the last path segment unless the path ends in '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// One page of location areas, in the same query order the API uses for
    /// its own `next`/`previous` links.
    pub fn location_areas(&self, offset: u32, limit: u32) -> Result<Url, LoadError> {
        let mut url = self.base.join("location-area")?;
        url.query_pairs_mut()
            .append_pair("offset", &offset.to_string())
            .append_pair("limit", &limit.to_string());
        Ok(url)
    }

    pub fn location_area(&self, name: &str) -> Result<Url, LoadError> {
        self.resource("location-area", name)
    }

    pub fn pokemon(&self, name: &str) -> Result<Url, LoadError> {
        self.resource("pokemon", name)
    }

    /// `<base>/<kind>/<name>` with `name` escaped as a single path segment.
    fn resource(&self, kind: &str, name: &str) -> Result<Url, LoadError> {
        // Dot segments are dropped by the url crate rather than escaped
        if name.is_empty() || name == "." || name == ".." {
            return Err(LoadError::InvalidName(name.to_string()));
        }

        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| LoadError::NotABase(self.base.to_string()))?
            .pop_if_empty()
            .push(kind)
            .push(name);
        Ok(url)
    }
}
