use crate::errors::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_IMAGE_BASE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/dream-world";
pub const DEFAULT_IMAGE_EXTENSION: &str = "svg";

/// Host-tunable settings, read from an optional RON file.
///
/// ```ron
/// (
///     image_base_url: "https://example.org/sprites",
///     image_extension: "png",
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub image_base_url: String,
    pub image_extension: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            image_extension: DEFAULT_IMAGE_EXTENSION.to_string(),
        }
    }
}

impl ReportConfig {
    /// Load a config from a RON file. Omitted fields keep their defaults.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: ReportConfig = ron::from_str(&content)?;
        Ok(config)
    }

    /// Image reference for a dex number, with an optional form suffix.
    ///
    /// `(6, Some("Mega X"))` becomes `{base}/6-mega-x.{ext}`. Nothing is fetched.
    pub fn image_url(&self, pokedex_number: u32, form: Option<&str>) -> String {
        let base = self.image_base_url.trim_end_matches('/');
        let suffix = form
            .map(form_slug)
            .filter(|slug| !slug.is_empty())
            .map(|slug| format!("-{slug}"))
            .unwrap_or_default();
        format!("{base}/{pokedex_number}{suffix}.{}", self.image_extension)
    }
}

fn form_slug(form: &str) -> String {
    form.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
