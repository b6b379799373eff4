use serde::{Deserialize, Serialize};

fn default_author() -> String {
    "Stardicter".to_string()
}

fn default_website() -> String {
    "https://cihar.com/software/slovnik/".to_string()
}

/// Generator identity written into `.ifo` and README files
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PackageConfig {
    #[serde(default = "default_author")]
    pub author: String,
    #[serde(default = "default_website")]
    pub website: String,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            author: default_author(),
            website: default_website(),
        }
    }
}
