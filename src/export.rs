//! Artifact Export
//!
//! Packages a stored artifact into a downloadable file. Every format
//! carries the exact stored document bytes; the format only decides the
//! filename extension.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::artifact::Artifact;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("unknown export format: {0}")]
    UnknownFormat(String),
}

/// Supported download formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Html,
    Php,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 2] = [ExportFormat::Html, ExportFormat::Php];

    /// Parses a user-supplied format name. Case-insensitive.
    pub fn parse(name: &str) -> Result<Self, ExportError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(ExportFormat::Html),
            "php" => Ok(ExportFormat::Php),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::Php => "php",
        }
    }

    /// Both formats serve plain HTML markup.
    pub fn mime_type(&self) -> &'static str {
        "text/html"
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// A packaged download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub mime_type: String,
    pub sha256: String,
}

/// Packages an artifact for download in the given format.
///
/// The bytes are the artifact's stored document verbatim, so exports in
/// different formats differ only in filename.
pub fn export(artifact: &Artifact, format: ExportFormat) -> ExportFile {
    let bytes = artifact.html.clone().into_bytes();
    let sha256 = sha256_hex(&bytes);
    ExportFile {
        filename: format!("landing-{}.{}", artifact.id, format.extension()),
        bytes,
        mime_type: format.mime_type().to_string(),
        sha256,
    }
}

/// Export with a format given by name, as received from a CLI flag or
/// request field.
pub fn export_named(artifact: &Artifact, format: &str) -> Result<ExportFile, ExportError> {
    Ok(export(artifact, ExportFormat::parse(format)?))
}

/// Compute SHA-256 hash of bytes, return hex string
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    hex::encode(result)
}

// We need hex encoding
mod hex {
    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        bytes.as_ref().iter().map(|b| format!("{:02x}", b)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::ContactInfo;
    use crate::params::CampaignParameters;
    use chrono::Utc;

    fn artifact() -> Artifact {
        let parameters = CampaignParameters {
            theme: "Fitness Coaching".to_string(),
            language: "English".to_string(),
            traffic_source: "Google Ads".to_string(),
            target_action: "Sign up".to_string(),
        };
        let contact = ContactInfo::for_campaign(&parameters);
        Artifact {
            id: "abc-123".to_string(),
            parameters,
            created_at: Utc::now(),
            html: "<!DOCTYPE html><html><body>page</body></html>".to_string(),
            quality_score: 98,
            contact,
        }
    }

    #[test]
    fn test_filename_follows_artifact_id() {
        let file = export(&artifact(), ExportFormat::Html);
        assert_eq!(file.filename, "landing-abc-123.html");
        let file = export(&artifact(), ExportFormat::Php);
        assert_eq!(file.filename, "landing-abc-123.php");
    }

    #[test]
    fn test_bytes_identical_across_formats() {
        let a = artifact();
        let html = export(&a, ExportFormat::Html);
        let php = export(&a, ExportFormat::Php);
        assert_eq!(html.bytes, php.bytes);
        assert_eq!(html.sha256, php.sha256);
        assert_eq!(html.bytes, a.html.as_bytes());
    }

    #[test]
    fn test_mime_type_is_text_html_for_all_formats() {
        for format in ExportFormat::ALL {
            assert_eq!(format.mime_type(), "text/html");
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(ExportFormat::parse("HTML").unwrap(), ExportFormat::Html);
        assert_eq!(ExportFormat::parse(" php ").unwrap(), ExportFormat::Php);
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        let err = ExportFormat::parse("pdf").unwrap_err();
        assert_eq!(err, ExportError::UnknownFormat("pdf".to_string()));
        assert!(export_named(&artifact(), "docx").is_err());
    }

    #[test]
    fn test_hash_deterministic() {
        let data = b"test data";
        let h1 = sha256_hex(data);
        let h2 = sha256_hex(data);
        assert_eq!(h1, h2);
        assert_eq!(h1.len(), 64);
    }
}
