pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::console::{ConsolePrompt, FixedSkinType};
pub use config::{cli::LocalStorage, GeneratorConfig};
pub use core::{engine::GeneratorEngine, pipeline::AnimalPipeline};
pub use utils::error::{EtlError, Result};
