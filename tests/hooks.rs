//! Test-hook verification for the render guard paths.
//!
//! The hooks are global counters, so everything that touches them runs
//! inside one test function to keep the readings stable.

#![cfg(feature = "test-hooks")]

use std::time::Duration;

use landingforge_core::render::{fail_next_render, get_render_call_count, reset_render_call_count};
use landingforge_core::{
    GenerationError, GenerationState, GeneratorConfig, LandingGenerator, RawCampaignInput,
};

fn config() -> GeneratorConfig {
    GeneratorConfig {
        processing_delay: Duration::from_millis(10),
        timeout: None,
    }
}

#[tokio::test]
async fn invariant_validation_gates_rendering() {
    let generator = LandingGenerator::seeded(config(), 1);

    // Invalid input: the renderer must never run.
    reset_render_call_count();
    let result = generator.generate(&RawCampaignInput::default()).await;
    assert!(matches!(result, Err(GenerationError::Validation(_))));
    assert_eq!(get_render_call_count(), 0);
    assert_eq!(generator.store().state(), GenerationState::Failed);

    // Valid input renders exactly once.
    let input = RawCampaignInput {
        theme: "Fitness Coaching".to_string(),
        language: "English".to_string(),
        traffic_source: "Google Ads".to_string(),
        target_action: "Sign up".to_string(),
    };
    reset_render_call_count();
    generator.generate(&input).await.unwrap();
    assert_eq!(get_render_call_count(), 1);

    // A renderer breakdown surfaces as an internal failure and leaves
    // the previous artifact in place.
    let previous = generator.store().current().unwrap();
    fail_next_render();
    let result = generator.generate(&input).await;
    assert!(matches!(result, Err(GenerationError::Internal(_))));
    let store = generator.store();
    assert_eq!(store.state(), GenerationState::Failed);
    assert_eq!(store.current().unwrap().id, previous.id);
    assert!(store.snapshot().last_error.unwrap().contains("malformed"));

    // The failure hook is one-shot; the next attempt recovers.
    let recovered = generator.generate(&input).await.unwrap();
    assert_eq!(generator.store().state(), GenerationState::Completed);
    assert_eq!(generator.store().current().unwrap().id, recovered.id);
}
