//! Quality Scoring
//!
//! Assigns each generated document a simulated audit score. The score
//! is sampled uniformly from a fixed high band and carries no signal
//! about the document content.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Inclusive lower bound of the score band.
pub const SCORE_MIN: u8 = 96;
/// Inclusive upper bound of the score band.
pub const SCORE_MAX: u8 = 100;

/// Samples quality scores from `[SCORE_MIN, SCORE_MAX]`.
///
/// Seedable for reproducible runs. The RNG sits behind a mutex so the
/// scorer can be shared across tasks; draws are short and never overlap
/// an await point.
#[derive(Debug)]
pub struct QualityScorer {
    rng: Mutex<StdRng>,
}

impl QualityScorer {
    /// Scorer with a fixed seed. Equal seeds yield equal score streams.
    pub fn from_seed(seed: u64) -> Self {
        QualityScorer {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Scorer seeded from OS entropy.
    pub fn from_entropy() -> Self {
        QualityScorer {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Scores a rendered document.
    pub fn score_document(&self, html: &str) -> u8 {
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let score = rng.gen_range(SCORE_MIN..=SCORE_MAX);
        tracing::debug!(html_len = html.len(), score, "scored document");
        score
    }
}

impl Default for QualityScorer {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores_stay_in_band() {
        let scorer = QualityScorer::from_entropy();
        for _ in 0..1000 {
            let score = scorer.score_document("<!DOCTYPE html><html></html>");
            assert!((SCORE_MIN..=SCORE_MAX).contains(&score));
        }
    }

    #[test]
    fn test_seeded_scorers_agree() {
        let a = QualityScorer::from_seed(42);
        let b = QualityScorer::from_seed(42);
        for _ in 0..32 {
            assert_eq!(a.score_document("x"), b.score_document("x"));
        }
    }

    #[test]
    fn test_score_ignores_document_content() {
        let scorer = QualityScorer::from_seed(7);
        let control = QualityScorer::from_seed(7);
        assert_eq!(
            scorer.score_document("<html>big page</html>"),
            control.score_document("")
        );
    }
}
