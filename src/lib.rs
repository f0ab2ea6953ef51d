pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{SpeciesApiClient, TranslationApiClient};
pub use config::ServiceConfig;
pub use crate::core::engine::PokedexEngine;
pub use domain::model::{Outcome, RewriteResult, RewriteStyle, SpeciesRecord};
pub use utils::error::{Result, TranslatorError};
