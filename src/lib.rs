//! LandingForge Core - Campaign Landing Compiler
//!
//! # The Five Guarantees (Non-Negotiable)
//! 1. Validation Gates Every Generation
//! 2. Parameters Are Data, Never Markup
//! 3. Rendering Is Deterministic
//! 4. The Newest Generation Wins
//! 5. Exports Reproduce Stored Bytes

pub mod artifact;
pub mod catalog;
pub mod export;
pub mod generator;
pub mod params;
pub mod render;
pub mod sanitize;
pub mod score;
pub mod store;

pub use artifact::{Artifact, ContactInfo};
pub use catalog::{
    LocaleRegistry, DEFAULT_LANG_CODE, RECOGNIZED_LANGUAGES, RECOGNIZED_TARGET_ACTIONS,
    RECOGNIZED_TRAFFIC_SOURCES, SUGGESTED_THEMES,
};
pub use export::{export, export_named, ExportError, ExportFile, ExportFormat};
pub use generator::{
    GenerationError, GeneratorConfig, LandingGenerator, DEFAULT_PROCESSING_DELAY,
};
pub use params::{validate, CampaignField, CampaignParameters, RawCampaignInput, ValidationError};
pub use render::{escape_html, PageRenderer};
pub use sanitize::{is_well_formed, normalize_document};
pub use score::{QualityScorer, SCORE_MAX, SCORE_MIN};
pub use store::{ArtifactStore, GenerationState, GenerationToken, StoreSnapshot};

pub const GENERATOR_VERSION: &str = env!("CARGO_PKG_VERSION");
