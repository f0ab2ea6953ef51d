pub mod engine;

pub use crate::domain::model::{Outcome, RewriteResult, RewriteStyle, SpeciesRecord};
pub use crate::domain::ports::{ConfigProvider, DescriptionRewriter, SpeciesLookup, SpeciesService};
pub use crate::utils::error::Result;
