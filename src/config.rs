use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

pub const CONFIG_NAME: &str = "notify-icon.toml";

#[derive(Debug, PartialEq, Deserialize)]
pub struct Config {
    /// Logo to derive the icon from (default: "assets/images/logo.png")
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Where the icon is written (default: "assets/images/notification_icon.png")
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
        }
    }
}

fn default_input() -> PathBuf {
    PathBuf::from("assets/images/logo.png")
}

fn default_output() -> PathBuf {
    PathBuf::from("assets/images/notification_icon.png")
}

impl Config {
    /// Loads the config at `path`. A missing file yields the defaults, with
    /// paths left relative to the working directory.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        Ok(config.relative_to(config_dir))
    }

    fn relative_to(self, dir: &Path) -> Self {
        Self {
            input: dir.join(self.input),
            output: dir.join(self.output),
        }
    }

    pub fn default_template() -> String {
        r#"# notify-icon configuration
# Paths are relative to this file.

input = "assets/images/logo.png"                # source logo, any decodable format
output = "assets/images/notification_icon.png"  # written as RGBA PNG, overwritten
"#
        .to_string()
    }
}
