//! Campaign Parameter Validation
//!
//! Completeness is the only gate: the four campaign fields must be
//! present and non-empty. Values outside the recognized catalogs pass
//! through untouched; the renderer treats them as opaque labels.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Generation request exactly as the input surface submits it.
///
/// Fields default to empty strings, so an absent JSON key and an empty
/// value are indistinguishable by the time validation runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawCampaignInput {
    pub theme: String,
    pub language: String,
    pub traffic_source: String,
    pub target_action: String,
}

/// Validated campaign parameters.
///
/// A defensive copy of the accepted input: once constructed the values
/// never change, and the copy stored on an artifact is the one that was
/// rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignParameters {
    pub theme: String,
    pub language: String,
    pub traffic_source: String,
    pub target_action: String,
}

/// The four required fields, named as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CampaignField {
    Theme,
    Language,
    TrafficSource,
    TargetAction,
}

impl CampaignField {
    pub const ALL: [CampaignField; 4] = [
        CampaignField::Theme,
        CampaignField::Language,
        CampaignField::TrafficSource,
        CampaignField::TargetAction,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignField::Theme => "theme",
            CampaignField::Language => "language",
            CampaignField::TrafficSource => "trafficSource",
            CampaignField::TargetAction => "targetAction",
        }
    }
}

impl fmt::Display for CampaignField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more required fields were empty or absent. Every offender
    /// is listed, not just the first one found.
    #[error("missing required campaign fields: {}", join_fields(.fields))]
    MissingField { fields: Vec<CampaignField> },
}

fn join_fields(fields: &[CampaignField]) -> String {
    fields
        .iter()
        .map(CampaignField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Validates a raw request into [`CampaignParameters`].
///
/// Surrounding whitespace is trimmed before the emptiness check and the
/// trimmed values are what the pipeline keeps, so a whitespace-only field
/// counts as missing. Pure: no side effects, no I/O.
pub fn validate(input: &RawCampaignInput) -> Result<CampaignParameters, ValidationError> {
    let theme = input.theme.trim();
    let language = input.language.trim();
    let traffic_source = input.traffic_source.trim();
    let target_action = input.target_action.trim();

    let mut missing = Vec::new();
    if theme.is_empty() {
        missing.push(CampaignField::Theme);
    }
    if language.is_empty() {
        missing.push(CampaignField::Language);
    }
    if traffic_source.is_empty() {
        missing.push(CampaignField::TrafficSource);
    }
    if target_action.is_empty() {
        missing.push(CampaignField::TargetAction);
    }
    if !missing.is_empty() {
        return Err(ValidationError::MissingField { fields: missing });
    }

    Ok(CampaignParameters {
        theme: theme.to_string(),
        language: language.to_string(),
        traffic_source: traffic_source.to_string(),
        target_action: target_action.to_string(),
    })
}
