//! Landing Artifact Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::params::CampaignParameters;

/// A completed landing page generation.
///
/// Immutable once constructed. The parameters are the exact values the
/// document was rendered from, and `html` is the normalized document
/// that export reproduces byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub id: String,
    pub parameters: CampaignParameters,
    pub created_at: DateTime<Utc>,
    pub html: String,
    pub quality_score: u8,
    pub contact: ContactInfo,
}

impl Artifact {
    /// Fresh unique artifact id.
    pub fn new_id() -> String {
        Uuid::new_v4().to_string()
    }
}

/// Placeholder business contact details carried alongside a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub company_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl ContactInfo {
    /// Derives deterministic placeholder contacts from the campaign.
    ///
    /// The company name is the theme verbatim and the email domain is a
    /// slug of it, so two generations with the same parameters carry the
    /// same contact block.
    pub fn for_campaign(params: &CampaignParameters) -> Self {
        let slug = slugify(&params.theme);
        ContactInfo {
            company_name: params.theme.clone(),
            email: format!("contact@{slug}.example"),
            phone: "+1 (555) 010-4477".to_string(),
            address: "100 Market Street, Suite 300".to_string(),
        }
    }
}

/// Lowercase ASCII-alphanumeric slug with single-dash separators.
///
/// Non-ASCII themes can slug to nothing, so an empty result falls back
/// to a fixed stand-in to keep the email domain well formed.
fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    if slug.is_empty() {
        "landing".to_string()
    } else {
        slug
    }
}
