//! Landing Page Renderer
//!
//! Turns validated campaign parameters into a single self-contained
//! HTML document. Rendering is pure string assembly: deterministic for
//! equal parameters, no I/O, no clock reads.

#[cfg(feature = "test-hooks")]
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use crate::artifact::ContactInfo;
use crate::catalog::LocaleRegistry;
use crate::params::CampaignParameters;

/// Stylesheet inlined into every generated document.
const DOCUMENT_CSS: &str = "\
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body { font-family: 'Arial', sans-serif; line-height: 1.6; color: #333; }
        .hero { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 100px 20px; text-align: center; }
        .hero h1 { font-size: 3rem; margin-bottom: 20px; }
        .hero .tagline { font-size: 1.25rem; margin-bottom: 40px; opacity: 0.9; }
        .cta { background: #ff6b6b; color: white; border: none; padding: 18px 48px; font-size: 1.1rem; border-radius: 50px; cursor: pointer; }
        .cta:hover { background: #ee5a52; }
        footer { background: #1a202c; color: #a0aec0; padding: 40px 20px; text-align: center; font-size: 0.9rem; }
        footer .company { color: #fff; font-weight: 600; }";

#[cfg(feature = "test-hooks")]
static RENDER_CALL_COUNT: AtomicU32 = AtomicU32::new(0);

#[cfg(feature = "test-hooks")]
static FAIL_NEXT_RENDER: AtomicBool = AtomicBool::new(false);

#[cfg(feature = "test-hooks")]
pub fn get_render_call_count() -> u32 {
    RENDER_CALL_COUNT.load(Ordering::SeqCst)
}

#[cfg(feature = "test-hooks")]
pub fn reset_render_call_count() {
    RENDER_CALL_COUNT.store(0, Ordering::SeqCst);
}

/// Makes the next render return an empty document, simulating a broken
/// template source. One-shot.
#[cfg(feature = "test-hooks")]
pub fn fail_next_render() {
    FAIL_NEXT_RENDER.store(true, Ordering::SeqCst);
}

/// Renders campaign parameters into landing page markup.
#[derive(Debug, Clone, Default)]
pub struct PageRenderer {
    locales: LocaleRegistry,
}

impl PageRenderer {
    pub fn new() -> Self {
        PageRenderer {
            locales: LocaleRegistry::new(),
        }
    }

    /// Renderer with a custom locale table.
    pub fn with_locales(locales: LocaleRegistry) -> Self {
        PageRenderer { locales }
    }

    /// Renders the hero-section document for a campaign.
    ///
    /// All four parameter values are placed into visible markup: theme
    /// as title and headline, traffic source in the tagline, target
    /// action as the call-to-action label, and language as the document
    /// `lang` attribute. Parameter text is entity-escaped so values can
    /// never introduce markup of their own.
    pub fn render(&self, params: &CampaignParameters) -> String {
        #[cfg(feature = "test-hooks")]
        {
            RENDER_CALL_COUNT.fetch_add(1, Ordering::SeqCst);
            if FAIL_NEXT_RENDER.swap(false, Ordering::SeqCst) {
                return String::new();
            }
        }

        let contact = ContactInfo::for_campaign(params);
        let lang = self.locales.code_for(&params.language);
        let theme = escape_html(&params.theme);
        let traffic_source = escape_html(&params.traffic_source);
        let target_action = escape_html(&params.target_action);
        let company = escape_html(&contact.company_name);

        format!(
            r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{theme}</title>
    <style>
{css}
    </style>
</head>
<body>
    <div class="hero">
        <h1>{theme}</h1>
        <p class="tagline">Built for {traffic_source} visitors who are ready to act.</p>
        <button class="cta">{target_action}</button>
    </div>
    <footer>
        <p class="company">{company}</p>
        <p>{email} | {phone}</p>
        <p>{address}</p>
    </footer>
</body>
</html>"#,
            lang = lang,
            css = DOCUMENT_CSS,
            theme = theme,
            traffic_source = traffic_source,
            target_action = target_action,
            company = company,
            email = contact.email,
            phone = contact.phone,
            address = contact.address,
        )
    }
}

/// Escapes the five HTML-significant characters.
///
/// Ampersand runs first so the entities produced by the later passes
/// are not escaped again.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
