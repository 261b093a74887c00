use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Declared-page manifest, relative to the project root.
pub const MAIN_PAGES_PROFILE: &str = "entry/src/main/resources/base/profile/main_pages.json";

/// Router map naming navigation destinations, relative to the project root.
pub const ROUTER_MAP_PROFILE: &str = "entry/src/main/resources/base/profile/router_map.json";

/// The project's declared main-page list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MainPages {
    pub src: Vec<String>,
}

impl MainPages {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Router map: named navigation destinations and the source files backing them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouterMap {
    pub router_map: Vec<RouterEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouterEntry {
    /// The alias navigation call sites use to reference the page.
    pub name: String,
    /// Source file backing the destination, e.g. `src/main/ets/pages/Detail.ets`.
    pub page_source_file: String,
}

impl RouterMap {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl RouterEntry {
    /// Page path relative to the ets source root, e.g. `pages/Detail`.
    #[must_use]
    pub fn page(&self) -> &str {
        self.page_source_file
            .trim_start_matches("src/main/ets/")
            .trim_end_matches(".ets")
    }
}
