//! Wire bindings for the two upstream response bodies.
//!
//! Only the fields the service reads are bound; serde ignores the rest.

use crate::domain::model::{RewriteResult, SpeciesRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlavorTextEntry {
    pub flavor_text: Option<String>,
    pub language: Option<NamedResource>,
}

/// `GET /pokemon-species/{name}` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PokemonSpeciesDto {
    pub name: String,
    #[serde(default)]
    pub habitat: Option<NamedResource>,
    #[serde(default)]
    pub is_legendary: Option<bool>,
    #[serde(default)]
    pub flavor_text_entries: Option<Vec<FlavorTextEntry>>,
}

impl PokemonSpeciesDto {
    /// First flavor text tagged with `language`, in upstream order.
    pub fn flavor_text_for(&self, language: &str) -> Option<&str> {
        self.flavor_text_entries
            .as_deref()?
            .iter()
            .find(|entry| {
                entry
                    .language
                    .as_ref()
                    .and_then(|lang| lang.name.as_deref())
                    == Some(language)
            })
            .and_then(|entry| entry.flavor_text.as_deref())
    }

    pub fn into_record(self) -> SpeciesRecord {
        let description = self.flavor_text_for("en").map(str::to_string);
        SpeciesRecord {
            name: self.name,
            description,
            habitat: self.habitat.and_then(|habitat| habitat.name),
            is_legendary: self.is_legendary,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslationContents {
    pub translated: Option<String>,
    pub text: Option<String>,
    pub translation: Option<String>,
}

/// `POST /translate/{style}.json` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FunTranslationResponseDto {
    pub contents: Option<TranslationContents>,
}

impl FunTranslationResponseDto {
    pub fn into_result(self) -> RewriteResult {
        let contents = self.contents.unwrap_or_default();
        RewriteResult {
            translated_text: contents.translated,
            original_text: contents.text,
            translation: contents.translation,
        }
    }
}
