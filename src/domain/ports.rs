use crate::config::site::SiteConfig;
use crate::domain::model::PortfolioData;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn output_path(&self) -> &str;
    fn site(&self) -> &SiteConfig;
    fn start_dark(&self) -> bool;
}

/// Where the portfolio payload comes from. Called once per page.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch(&self) -> Result<PortfolioData>;
}

/// Receives the theme every time it is set, including the initial default.
pub trait ThemeMarker {
    fn apply(&mut self, dark: bool);
}

pub trait ProgressSink {
    fn update(&self, percent: f64, caption: &str);
}

/// Supplies the increments of the simulated progress bar.
pub trait StepSource {
    fn next_step(&mut self) -> f64;
}
