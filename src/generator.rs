//! Generation Pipeline - Single Entry Point
//!
//! CRITICAL: generate MUST validate internally before any rendering
//! work starts. No bypass.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::artifact::{Artifact, ContactInfo};
use crate::params::{validate, CampaignParameters, RawCampaignInput, ValidationError};
use crate::render::PageRenderer;
use crate::sanitize::{is_well_formed, normalize_document};
use crate::score::QualityScorer;
use crate::store::ArtifactStore;

/// Simulated processing latency applied to every generation.
pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Artificial latency before rendering starts.
    pub processing_delay: Duration,
    /// Upper bound on a whole attempt, `None` for unbounded.
    pub timeout: Option<Duration>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            processing_delay: DEFAULT_PROCESSING_DELAY,
            timeout: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("internal generation failure: {0}")]
    Internal(String),

    #[error("generation timed out after {0:?}")]
    Timeout(Duration),

    #[error("superseded by a newer generation")]
    Superseded,
}

/// The landing page generator - single entry point for all generation
/// operations.
///
/// Owns the renderer, the scorer and a handle to the artifact store.
/// Shareable across tasks; overlapping calls race through the store's
/// token protocol and the newest call wins.
pub struct LandingGenerator {
    store: Arc<ArtifactStore>,
    renderer: PageRenderer,
    scorer: QualityScorer,
    config: GeneratorConfig,
}

impl LandingGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_parts(config, PageRenderer::new(), QualityScorer::from_entropy())
    }

    /// Generator with a seeded scorer, for reproducible runs.
    pub fn seeded(config: GeneratorConfig, seed: u64) -> Self {
        Self::with_parts(config, PageRenderer::new(), QualityScorer::from_seed(seed))
    }

    pub fn with_parts(config: GeneratorConfig, renderer: PageRenderer, scorer: QualityScorer) -> Self {
        LandingGenerator {
            store: Arc::new(ArtifactStore::new()),
            renderer,
            scorer,
            config,
        }
    }

    /// Handle to the store backing this generator.
    pub fn store(&self) -> Arc<ArtifactStore> {
        Arc::clone(&self.store)
    }

    /// Runs one generation attempt end to end.
    ///
    /// Always registers the attempt with the store first, so an invalid
    /// request still drives the slot to `Failed` with the validation
    /// message. The renderer is never invoked for invalid input. When a
    /// newer attempt starts before this one publishes, the result is
    /// discarded and the call resolves to [`GenerationError::Superseded`].
    pub async fn generate(
        &self,
        input: &RawCampaignInput,
    ) -> Result<Arc<Artifact>, GenerationError> {
        let token = self.store.begin();

        let params = match validate(input) {
            Ok(params) => params,
            Err(err) => {
                self.store.fail(token, &err.to_string());
                return Err(err.into());
            }
        };
        tracing::debug!(%token, theme = %params.theme, "generation accepted");

        let outcome = match self.config.timeout {
            Some(limit) => match tokio::time::timeout(limit, self.process(&params)).await {
                Ok(outcome) => outcome,
                Err(_) => Err(GenerationError::Timeout(limit)),
            },
            None => self.process(&params).await,
        };

        let (html, quality_score) = match outcome {
            Ok(parts) => parts,
            Err(err) => {
                self.store.fail(token, &err.to_string());
                return Err(err);
            }
        };

        let contact = ContactInfo::for_campaign(&params);
        let artifact = Artifact {
            id: Artifact::new_id(),
            parameters: params,
            created_at: chrono::Utc::now(),
            html,
            quality_score,
            contact,
        };

        match self.store.complete(token, artifact) {
            Some(stored) => Ok(stored),
            None => Err(GenerationError::Superseded),
        }
    }

    /// Delay, render, normalize, gate, score.
    async fn process(&self, params: &CampaignParameters) -> Result<(String, u8), GenerationError> {
        tokio::time::sleep(self.config.processing_delay).await;

        let raw = self.renderer.render(params);
        let html = normalize_document(&raw);
        if !is_well_formed(&html) {
            return Err(GenerationError::Internal(
                "renderer produced a malformed document".to_string(),
            ));
        }
        let quality_score = self.scorer.score_document(&html);
        Ok((html, quality_score))
    }
}
