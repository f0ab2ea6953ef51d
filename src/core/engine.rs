use crate::core::{DescriptionRewriter, Outcome, RewriteStyle, SpeciesLookup, SpeciesService};
use async_trait::async_trait;

/// Composes a species lookup with an optional description rewrite.
pub struct PokedexEngine<L: SpeciesLookup, R: DescriptionRewriter> {
    lookup: L,
    rewriter: R,
}

impl<L: SpeciesLookup, R: DescriptionRewriter> PokedexEngine<L, R> {
    pub fn new(lookup: L, rewriter: R) -> Self {
        Self { lookup, rewriter }
    }

    pub async fn fetch(&self, identifier: &str) -> Outcome {
        self.lookup.fetch(identifier).await
    }

    /// Fetches the species and swaps in a fun description when one is available.
    pub async fn fetch_with_rewrite(&self, identifier: &str) -> Outcome {
        let mut record = match self.lookup.fetch(identifier).await {
            Outcome::Ok(record) => record,
            other => {
                tracing::debug!(
                    "Species lookup for '{}' ended with status {}, skipping rewrite",
                    identifier,
                    other.status_code()
                );
                return other;
            }
        };

        let description = match record.description.as_deref() {
            Some(text) if !text.trim().is_empty() => text.to_string(),
            _ => {
                tracing::debug!("'{}' has no description to rewrite", record.name);
                return Outcome::Ok(record);
            }
        };

        let style = RewriteStyle::for_species(&record);
        tracing::info!("Rewriting description of '{}' in {} style", record.name, style);

        let rewritten = self
            .rewriter
            .rewrite(&description, style)
            .await
            .and_then(|result| result.usable_text().map(str::to_string));

        // 沒有可用的翻譯就保留原文
        match rewritten {
            Some(text) => record.description = Some(text),
            None => tracing::info!(
                "No usable {} rewrite for '{}', keeping original description",
                style,
                record.name
            ),
        }

        Outcome::Ok(record)
    }
}

#[async_trait]
impl<L: SpeciesLookup, R: DescriptionRewriter> SpeciesService for PokedexEngine<L, R> {
    async fn fetch(&self, identifier: &str) -> Outcome {
        PokedexEngine::fetch(self, identifier).await
    }

    async fn fetch_with_rewrite(&self, identifier: &str) -> Outcome {
        PokedexEngine::fetch_with_rewrite(self, identifier).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RewriteResult, SpeciesRecord};
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    struct StubLookup {
        outcome: Outcome,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl StubLookup {
        fn new(outcome: Outcome) -> Self {
            Self {
                outcome,
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl SpeciesLookup for StubLookup {
        async fn fetch(&self, identifier: &str) -> Outcome {
            self.calls.lock().unwrap().push(identifier.to_string());
            self.outcome.clone()
        }
    }

    #[derive(Clone)]
    struct StubRewriter {
        translated: Option<&'static str>,
        calls: Arc<Mutex<Vec<(String, RewriteStyle)>>>,
    }

    impl StubRewriter {
        fn returning(translated: Option<&'static str>) -> Self {
            Self {
                translated,
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn calls(&self) -> Vec<(String, RewriteStyle)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl DescriptionRewriter for StubRewriter {
        async fn rewrite(&self, text: &str, style: RewriteStyle) -> Option<RewriteResult> {
            self.calls.lock().unwrap().push((text.to_string(), style));
            self.translated.map(|translated| RewriteResult {
                translated_text: Some(translated.to_string()),
                original_text: Some(text.to_string()),
                translation: Some(style.path_segment().to_string()),
            })
        }
    }

    fn species(
        description: Option<&str>,
        habitat: Option<&str>,
        is_legendary: Option<bool>,
    ) -> SpeciesRecord {
        SpeciesRecord {
            name: "mimikyu".to_string(),
            description: description.map(str::to_string),
            habitat: habitat.map(str::to_string),
            is_legendary,
        }
    }

    const ORIGINAL: &str = "Master Obiwan has lost a planet.";

    #[tokio::test]
    async fn test_legendary_species_gets_yoda_rewrite() {
        let lookup = StubLookup::new(Outcome::Ok(species(Some(ORIGINAL), Some("rare"), Some(true))));
        let rewriter = StubRewriter::returning(Some("Lost a planet, master obiwan has."));
        let engine = PokedexEngine::new(lookup, rewriter.clone());

        let outcome = engine.fetch_with_rewrite("mimikyu").await;

        let record = outcome.into_record().unwrap();
        assert_eq!(
            record.description.as_deref(),
            Some("Lost a planet, master obiwan has.")
        );
        assert_eq!(
            rewriter.calls(),
            vec![(ORIGINAL.to_string(), RewriteStyle::Yoda)]
        );
    }

    #[tokio::test]
    async fn test_ordinary_species_gets_shakespeare_rewrite() {
        let lookup = StubLookup::new(Outcome::Ok(species(Some(ORIGINAL), Some("rare"), Some(false))));
        let rewriter = StubRewriter::returning(Some("Master obiwan hath did lose a planet."));
        let engine = PokedexEngine::new(lookup, rewriter.clone());

        let record = engine.fetch_with_rewrite("mimikyu").await.into_record().unwrap();

        assert_eq!(
            record.description.as_deref(),
            Some("Master obiwan hath did lose a planet.")
        );
        assert_eq!(rewriter.calls()[0].1, RewriteStyle::Shakespeare);
    }

    #[tokio::test]
    async fn test_cave_species_gets_yoda_rewrite() {
        let lookup = StubLookup::new(Outcome::Ok(species(Some(ORIGINAL), Some("cave"), Some(false))));
        let rewriter = StubRewriter::returning(Some("yoda text"));
        let engine = PokedexEngine::new(lookup, rewriter.clone());

        engine.fetch_with_rewrite("zubat").await;

        assert_eq!(rewriter.calls()[0].1, RewriteStyle::Yoda);
    }

    #[tokio::test]
    async fn test_unavailable_rewrite_keeps_original() {
        let lookup = StubLookup::new(Outcome::Ok(species(Some(ORIGINAL), Some("rare"), Some(true))));
        let rewriter = StubRewriter::returning(None);
        let engine = PokedexEngine::new(lookup, rewriter.clone());

        let outcome = engine.fetch_with_rewrite("mimikyu").await;

        assert_eq!(
            outcome,
            Outcome::Ok(species(Some(ORIGINAL), Some("rare"), Some(true)))
        );
        assert_eq!(rewriter.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_blank_rewrite_keeps_original() {
        let lookup = StubLookup::new(Outcome::Ok(species(Some(ORIGINAL), None, None)));
        let engine = PokedexEngine::new(lookup, StubRewriter::returning(Some("   ")));

        let record = engine.fetch_with_rewrite("mimikyu").await.into_record().unwrap();

        assert_eq!(record.description.as_deref(), Some(ORIGINAL));
    }

    #[tokio::test]
    async fn test_missing_description_skips_rewrite() {
        for description in [None, Some(""), Some("  ")] {
            let lookup = StubLookup::new(Outcome::Ok(species(description, Some("cave"), None)));
            let rewriter = StubRewriter::returning(Some("never used"));
            let engine = PokedexEngine::new(lookup, rewriter.clone());

            let record = engine.fetch_with_rewrite("zubat").await.into_record().unwrap();

            assert_eq!(record.description.as_deref(), description);
            assert!(rewriter.calls().is_empty());
        }
    }

    #[tokio::test]
    async fn test_failed_lookup_is_propagated_without_rewrite() {
        for failure in [
            Outcome::InvalidInput,
            Outcome::NotFound,
            Outcome::UpstreamError(404),
            Outcome::UpstreamError(503),
        ] {
            let rewriter = StubRewriter::returning(Some("never used"));
            let engine = PokedexEngine::new(StubLookup::new(failure.clone()), rewriter.clone());

            assert_eq!(engine.fetch_with_rewrite("coco").await, failure);
            assert!(rewriter.calls().is_empty());
        }
    }

    #[test]
    fn test_fetch_delegates_to_lookup() {
        let lookup = StubLookup::new(Outcome::Ok(species(Some(ORIGINAL), None, None)));
        let rewriter = StubRewriter::returning(Some("never used"));
        let engine = PokedexEngine::new(lookup.clone(), rewriter.clone());

        let outcome = tokio_test::block_on(engine.fetch("mimikyu"));

        assert!(outcome.is_ok());
        assert_eq!(*lookup.calls.lock().unwrap(), vec!["mimikyu".to_string()]);
        assert!(rewriter.calls().is_empty());
    }
}
