//! Static UI bundle configuration.

use serde::{Deserialize, Serialize};

/// Location of the built web UI and the path shares are served under.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Directory holding the built UI (`index.html` and its assets).
    #[serde(default = "default_directory")]
    pub directory: String,
    /// URL path prefix for public shares.
    #[serde(default = "default_share_path")]
    pub share_path: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            share_path: default_share_path(),
        }
    }
}

fn default_directory() -> String {
    "ui/build".to_string()
}

fn default_share_path() -> String {
    "/share".to_string()
}
