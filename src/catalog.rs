//! Campaign Option Catalogs
//!
//! Suggestion lists surfaced to input UIs, plus the language-to-locale
//! table the renderer consults for the document `lang` attribute. The
//! catalogs are advisory; validation never checks membership.

use std::collections::HashMap;

/// Default locale code for languages with no registered mapping.
pub const DEFAULT_LANG_CODE: &str = "en";

pub const SUGGESTED_THEMES: &[&str] = &[
    "E-commerce",
    "SaaS продукт",
    "Образовательные курсы",
    "Фитнес и здоровье",
    "Недвижимость",
    "Финансовые услуги",
    "Юридические услуги",
    "Медицинские услуги",
];

pub const RECOGNIZED_LANGUAGES: &[&str] = &[
    "Русский",
    "English",
    "Español",
    "Deutsch",
    "Français",
    "Italiano",
    "Português",
    "中文",
    "日本語",
];

pub const RECOGNIZED_TRAFFIC_SOURCES: &[&str] = &[
    "Google Ads",
    "Facebook Ads",
    "Instagram Ads",
    "TikTok Ads",
    "LinkedIn Ads",
    "YouTube Ads",
    "Yandex Direct",
    "VK Ads",
];

pub const RECOGNIZED_TARGET_ACTIONS: &[&str] = &[
    "Заказать звонок",
    "Оставить заявку",
    "Купить сейчас",
    "Зарегистрироваться",
    "Скачать",
    "Получить консультацию",
    "Записаться на демо",
    "Подписаться",
];

const BUILTIN_LOCALES: &[(&str, &str)] = &[
    ("Русский", "ru"),
    ("English", "en"),
    ("Español", "es"),
    ("Deutsch", "de"),
    ("Français", "fr"),
    ("Italiano", "it"),
    ("Português", "pt"),
    ("中文", "zh"),
    ("日本語", "ja"),
];

/// Maps display-language names to ISO 639-1 codes.
///
/// Preloaded with every recognized language. Lookups for unknown
/// languages fall back to [`DEFAULT_LANG_CODE`] rather than failing, so
/// the renderer stays total over arbitrary parameter values.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    codes: HashMap<String, String>,
}

impl LocaleRegistry {
    pub fn new() -> Self {
        let codes = BUILTIN_LOCALES
            .iter()
            .map(|(name, code)| (name.to_string(), code.to_string()))
            .collect();
        LocaleRegistry { codes }
    }

    /// Registers or overrides a mapping.
    pub fn register(&mut self, language: impl Into<String>, code: impl Into<String>) {
        self.codes.insert(language.into(), code.into());
    }

    /// Locale code for a display language, falling back to `en`.
    pub fn code_for(&self, language: &str) -> &str {
        match self.codes.get(language) {
            Some(code) => code.as_str(),
            None => {
                tracing::debug!(language, "no locale mapping, falling back to default");
                DEFAULT_LANG_CODE
            }
        }
    }
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_languages_all_mapped() {
        let registry = LocaleRegistry::new();
        for language in RECOGNIZED_LANGUAGES {
            assert_ne!(
                registry.code_for(language),
                "",
                "no code for {language}"
            );
        }
    }

    #[test]
    fn test_russian_maps_to_ru() {
        let registry = LocaleRegistry::new();
        assert_eq!(registry.code_for("Русский"), "ru");
    }

    #[test]
    fn test_unknown_language_falls_back_to_en() {
        let registry = LocaleRegistry::new();
        assert_eq!(registry.code_for("Esperanto"), DEFAULT_LANG_CODE);
    }

    #[test]
    fn test_register_overrides_builtin() {
        let mut registry = LocaleRegistry::new();
        registry.register("Português", "pt-BR");
        assert_eq!(registry.code_for("Português"), "pt-BR");
    }

    #[test]
    fn test_catalog_sizes_match_published_options() {
        assert_eq!(SUGGESTED_THEMES.len(), 8);
        assert_eq!(RECOGNIZED_LANGUAGES.len(), 9);
        assert_eq!(RECOGNIZED_TRAFFIC_SOURCES.len(), 8);
        assert_eq!(RECOGNIZED_TARGET_ACTIONS.len(), 8);
    }
}
