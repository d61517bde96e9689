//! Output Document Normalization
//!
//! Renderer output passes through here before it is stored or exported.
//! Normalization strips markdown code fences that template sources
//! sometimes leak and guarantees the document opens with a DOCTYPE.

const FENCE_OPEN_HTML: &str = "```html";
const FENCE_OPEN: &str = "```";
const DOCTYPE: &str = "<!DOCTYPE html>";

/// Normalizes raw renderer output into a servable HTML document.
///
/// Trims surrounding whitespace, removes a wrapping ` ```html ` (or
/// bare ` ``` `) fence, and prepends the standard DOCTYPE when the
/// document does not already start with one. Idempotent.
pub fn normalize_document(raw: &str) -> String {
    let mut doc = raw.trim();

    if let Some(rest) = doc.strip_prefix(FENCE_OPEN_HTML) {
        doc = rest;
    } else if let Some(rest) = doc.strip_prefix(FENCE_OPEN) {
        doc = rest;
    }
    if let Some(rest) = doc.strip_suffix(FENCE_OPEN) {
        doc = rest;
    }
    let doc = doc.trim();

    if doc.to_uppercase().starts_with("<!DOCTYPE") {
        doc.to_string()
    } else {
        format!("{DOCTYPE}\n{doc}")
    }
}

/// Minimal well-formedness gate applied after normalization.
///
/// Catches truncated or empty renderer output; it is not an HTML
/// validator.
pub fn is_well_formed(document: &str) -> bool {
    !document.trim().is_empty() && document.contains("</html>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_clean_document_unchanged() {
        let doc = "<!DOCTYPE html>\n<html><body></body></html>";
        assert_eq!(normalize_document(doc), doc);
    }

    #[test]
    fn test_fenced_document_unwrapped() {
        let raw = "```html\n<!DOCTYPE html>\n<html></html>\n```";
        assert_eq!(normalize_document(raw), "<!DOCTYPE html>\n<html></html>");
    }

    #[test]
    fn test_bare_fence_unwrapped() {
        let raw = "```\n<html></html>\n```";
        assert_eq!(normalize_document(raw), "<!DOCTYPE html>\n<html></html>");
    }

    #[test]
    fn test_doctype_prepended_when_absent() {
        let normalized = normalize_document("<html><body></body></html>");
        assert!(normalized.starts_with("<!DOCTYPE html>\n<html>"));
    }

    #[test]
    fn test_lowercase_doctype_recognized() {
        let doc = "<!doctype html><html></html>";
        assert_eq!(normalize_document(doc), doc);
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        let normalized = normalize_document("  \n<!DOCTYPE html><html></html>\n  ");
        assert_eq!(normalized, "<!DOCTYPE html><html></html>");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_document("```html\n<html></html>\n```");
        assert_eq!(normalize_document(&once), once);
    }

    #[test]
    fn test_well_formedness_gate() {
        assert!(is_well_formed("<!DOCTYPE html><html></html>"));
        assert!(!is_well_formed(""));
        assert!(!is_well_formed("   "));
        assert!(!is_well_formed("<!DOCTYPE html><html><body>"));
    }
}
