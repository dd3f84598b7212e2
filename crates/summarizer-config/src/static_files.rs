use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

/// Static frontend served next to the API
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StaticFilesConfig {
    /// Directory holding the frontend assets
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
    /// URL prefix the directory is mounted under
    #[serde(default = "default_mount")]
    pub mount: String,
    /// Page served at `/` and for unknown GET paths
    #[serde(default = "default_index")]
    pub index: String,
    /// Extra pages served at fixed routes, as route -> file under `dir`
    #[serde(default = "default_pages")]
    pub pages: BTreeMap<String, String>,
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            mount: default_mount(),
            index: default_index(),
            pages: default_pages(),
        }
    }
}

impl StaticFilesConfig {
    /// Full path of the index page
    pub fn index_path(&self) -> PathBuf {
        self.dir.join(&self.index)
    }

    /// Routes of the extra pages with the full path of each file
    pub fn page_paths(&self) -> impl Iterator<Item = (&str, PathBuf)> {
        self.pages
            .iter()
            .map(|(route, file)| (route.as_str(), self.dir.join(file)))
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from("./static")
}

fn default_mount() -> String {
    "/static".to_string()
}

fn default_index() -> String {
    "index.html".to_string()
}

fn default_pages() -> BTreeMap<String, String> {
    BTreeMap::from([("/about".to_string(), "about.html".to_string())])
}
