use super::Coordinate;

pub const DEFAULT_MAPS_URL: &str = "https://www.google.com/maps";

/// Builds map search links centred on a coordinate
#[derive(Debug, Clone, PartialEq)]
pub struct MapsSearch {
    base_url: String,
    query: String,
    zoom: u8,
}

impl MapsSearch {
    /// Creates a search for `query` against `base_url` at zoom 15
    pub fn new(base_url: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            query: query.into(),
            zoom: 15,
        }
    }

    /// Nearest-hospital search, used by the emergency action
    pub fn hospital(base_url: impl Into<String>) -> Self {
        Self::new(base_url, "hospital")
    }

    pub fn with_zoom(mut self, zoom: u8) -> Self {
        self.zoom = zoom;
        self
    }

    /// Returns the search URL for the given coordinate
    pub fn url(&self, coord: &Coordinate) -> String {
        format!(
            "{}/search/{}/@{},{},{}z",
            self.base_url,
            self.query,
            coord.latitude(),
            coord.longitude(),
            self.zoom
        )
    }
}

impl Default for MapsSearch {
    fn default() -> Self {
        Self::hospital(DEFAULT_MAPS_URL)
    }
}
