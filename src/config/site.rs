use crate::utils::error::{FolioError, Result};
use crate::utils::validation::{
    validate_email, validate_non_empty_string, validate_path, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Endpoint baked in at build time; set `FOLIO_API_URL` when compiling to point elsewhere.
pub const DEFAULT_API_URL: &str = match option_env!("FOLIO_API_URL") {
    Some(url) => url,
    None => "https://script.google.com/macros/s/AKfycbwB69Xkl_s0IDW516561HFx88oQ7CKcQu8R3P6Nf6fphmmWpB75i0JiaJxMKc3Gwq-P/exec",
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub source: SourceConfig,
    pub site: PageConfig,
    pub owner: OwnerConfig,
    pub links: LinksConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub endpoint: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_API_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub title: String,
    /// Prefix of the deployed site, e.g. `/portfolio/` on a project page.
    pub base_url: String,
    pub resume_path: String,
    pub resume_download_name: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            base_url: "/".to_string(),
            resume_path: "resume.pdf".to_string(),
            resume_download_name: "Sneha_Resume.pdf".to_string(),
        }
    }
}

impl PageConfig {
    pub fn resume_href(&self) -> String {
        let base = if self.base_url.ends_with('/') {
            self.base_url.clone()
        } else {
            format!("{}/", self.base_url)
        };
        format!("{}{}", base, self.resume_path.trim_start_matches('/'))
    }
}

/// Placeholders used when the fetched profile leaves a field out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OwnerConfig {
    pub name: String,
    pub image: String,
    pub about: String,
}

impl Default for OwnerConfig {
    fn default() -> Self {
        Self {
            name: "Sneha".to_string(),
            image: "https://via.placeholder.com/300".to_string(),
            about: "Loading bio...".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub credit: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            email: "sneharoy1806@gmail.com".to_string(),
            linkedin: "https://www.linkedin.com/in/sneha-roy-1806sp19/".to_string(),
            github: "https://github.com/SnehaRoy1806".to_string(),
            credit: "Designed & Developed by me ❤️".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| FolioError::ConfigError {
            message: format!("Failed to read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(|e| FolioError::ConfigError {
            message: format!("Failed to parse TOML: {}", e),
        })?;
        tracing::debug!("Loaded site config for endpoint {}", config.source.endpoint);
        Ok(config)
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validate_url("source.endpoint", &self.source.endpoint)?;
        validate_non_empty_string("site.title", &self.site.title)?;
        validate_path("site.resume_path", &self.site.resume_path)?;
        validate_non_empty_string("owner.name", &self.owner.name)?;
        validate_url("owner.image", &self.owner.image)?;
        validate_email("links.email", &self.links.email)?;
        validate_url("links.linkedin", &self.links.linkedin)?;
        validate_url("links.github", &self.links.github)?;
        Ok(())
    }
}
