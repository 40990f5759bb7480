pub mod config;
pub mod error;

pub use config::{Config, SelectionConfig, ThemeConfig, WizardConfig};
pub use error::AppError;
