// Adapters layer: concrete implementations of the domain ports against the real upstreams.

pub mod dto;
pub mod species_api;
pub mod translation_api;

pub use species_api::SpeciesApiClient;
pub use translation_api::TranslationApiClient;
