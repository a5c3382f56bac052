pub mod cli;
pub mod site;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use site::SiteConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "folio")]
#[command(about = "Fetches portfolio data and renders it as a single themed page")]
pub struct CliConfig {
    /// Overrides the endpoint from the config file and the built-in default
    #[arg(long)]
    pub api_endpoint: Option<String>,

    #[arg(long, default_value = "./dist")]
    pub output_path: String,

    /// Optional TOML file with [source], [site], [owner] and [links] sections
    #[arg(short, long)]
    pub config: Option<String>,

    /// Render the page in light mode instead of the dark default
    #[arg(long)]
    pub light: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the config file (if any) and applies command-line overrides on top.
    pub fn resolve(&self) -> Result<FolioConfig> {
        let mut site = match &self.config {
            Some(path) => {
                tracing::info!("Loading configuration from {}", path);
                SiteConfig::from_file(path)?
            }
            None => SiteConfig::default(),
        };

        if let Some(endpoint) = &self.api_endpoint {
            site.source.endpoint = endpoint.clone();
        }

        Ok(FolioConfig {
            site,
            output_path: self.output_path.clone(),
            start_dark: !self.light,
        })
    }
}

/// Fully merged settings for one run.
#[derive(Debug, Clone)]
pub struct FolioConfig {
    pub site: SiteConfig,
    pub output_path: String,
    pub start_dark: bool,
}

impl FolioConfig {
    pub fn new(site: SiteConfig, output_path: impl Into<String>) -> Self {
        Self {
            site,
            output_path: output_path.into(),
            start_dark: true,
        }
    }
}

impl Validate for FolioConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output_path", &self.output_path)?;
        self.site.validate()
    }
}

impl ConfigProvider for FolioConfig {
    fn api_endpoint(&self) -> &str {
        &self.site.source.endpoint
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn site(&self) -> &SiteConfig {
        &self.site
    }

    fn start_dark(&self) -> bool {
        self.start_dark
    }
}
