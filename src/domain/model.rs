use serde::{Deserialize, Serialize};

/// Normalized species record returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesRecord {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub habitat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_legendary: Option<bool>,
}

/// Result of a species lookup. Only `Ok` carries a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Ok(SpeciesRecord),
    InvalidInput,
    NotFound,
    UpstreamError(u16),
}

impl Outcome {
    /// HTTP status the inbound layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            Outcome::Ok(_) => 200,
            Outcome::InvalidInput => 400,
            Outcome::NotFound => 404,
            Outcome::UpstreamError(code) => *code,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    pub fn record(&self) -> Option<&SpeciesRecord> {
        match self {
            Outcome::Ok(record) => Some(record),
            _ => None,
        }
    }

    pub fn into_record(self) -> Option<SpeciesRecord> {
        match self {
            Outcome::Ok(record) => Some(record),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RewriteStyle {
    Shakespeare,
    Yoda,
}

impl RewriteStyle {
    /// Picks the style for a species: cave dwellers and legendaries get `Yoda`.
    pub fn for_species(record: &SpeciesRecord) -> Self {
        let lives_in_cave = record
            .habitat
            .as_deref()
            .is_some_and(|habitat| habitat.eq_ignore_ascii_case("cave"));
        let legendary = record.is_legendary.unwrap_or(false);

        if lives_in_cave || legendary {
            RewriteStyle::Yoda
        } else {
            RewriteStyle::Shakespeare
        }
    }

    /// Upstream path segment, e.g. `yoda` in `/translate/yoda.json`.
    pub fn path_segment(&self) -> &'static str {
        match self {
            RewriteStyle::Shakespeare => "shakespeare",
            RewriteStyle::Yoda => "yoda",
        }
    }
}

impl std::fmt::Display for RewriteStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path_segment())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteResult {
    pub translated_text: Option<String>,
    pub original_text: Option<String>,
    pub translation: Option<String>,
}

impl RewriteResult {
    /// Rewritten text, if the upstream produced something usable.
    pub fn usable_text(&self) -> Option<&str> {
        self.translated_text
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }
}
