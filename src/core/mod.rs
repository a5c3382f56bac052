pub mod engine;
pub mod loader;
pub mod page;
pub mod progress;
pub mod theme;

pub use crate::domain::model::{ExperienceEntry, PortfolioData, Profile, WorkItem};
pub use crate::domain::ports::{
    ConfigProvider, DataSource, ProgressSink, StepSource, Storage, ThemeMarker,
};
pub use crate::utils::error::Result;
