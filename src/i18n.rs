use fluent_templates::fluent_bundle::FluentValue;
use fluent_templates::{static_loader, Loader};
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

static_loader! {
    static LOCALES = {
        locales: "locales",
        fallback_language: "en-US",
        customise: |bundle| bundle.set_use_isolating(false),
    };
}

/// Pick the UI language: an explicit configuration override wins,
/// otherwise the process locale, otherwise en-US.
pub fn resolve_language(configured: Option<&LanguageIdentifier>) -> LanguageIdentifier {
    if let Some(langid) = configured {
        return langid.clone();
    }
    for key in ["LC_ALL", "LC_MESSAGES", "LANG"] {
        if let Ok(value) = std::env::var(key) {
            if let Some(lang) = normalize_lang(value) {
                if let Ok(langid) = lang.parse::<LanguageIdentifier>() {
                    return langid;
                }
            }
        }
    }
    "en-US".parse().expect("valid fallback language")
}

/// User-facing message for a backend failure code.
pub fn localize_api_code(langid: &LanguageIdentifier, code: i32) -> String {
    match code {
        1 => LOCALES.lookup(langid, "api-error-invalid-params"),
        2 => LOCALES.lookup(langid, "api-error-not-found"),
        3 => LOCALES.lookup(langid, "api-error-conflict"),
        4 => LOCALES.lookup(langid, "api-error-rate-limited"),
        5 => LOCALES.lookup(langid, "api-error-server"),
        -1 => LOCALES.lookup(langid, "api-error-generic"),
        _ => {
            let mut args = HashMap::new();
            args.insert("code", FluentValue::from(code));
            LOCALES.lookup_with_args(langid, "api-error-unknown", &args)
        }
    }
}

/// Toast text for a transport timeout.
pub fn timeout_message(langid: &LanguageIdentifier) -> String {
    LOCALES.lookup(langid, "error-timeout")
}

/// Toast text for failures that never produced a backend envelope.
pub fn generic_error_message(langid: &LanguageIdentifier) -> String {
    LOCALES.lookup(langid, "api-error-generic")
}

/// Success toast text used when the envelope carries no message.
pub fn default_success_message(langid: &LanguageIdentifier) -> String {
    LOCALES.lookup(langid, "toast-success-default")
}

fn normalize_lang(value: String) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    let value = value.split('.').next().unwrap_or(value);
    let value = value.replace('_', "-");
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::{localize_api_code, normalize_lang, resolve_language};

    #[test]
    fn normalize_lang_trims_and_normalizes() {
        assert_eq!(
            normalize_lang("en_US.UTF-8".to_string()),
            Some("en-US".to_string())
        );
        assert_eq!(normalize_lang("".to_string()), None);
    }

    #[test]
    fn configured_language_wins() {
        let configured = "zh-CN".parse().expect("langid");
        assert_eq!(resolve_language(Some(&configured)), configured);
    }

    #[test]
    fn unknown_code_message_includes_code() {
        let langid = "en-US".parse().expect("langid");
        let message = localize_api_code(&langid, 7);
        assert!(message.contains('7'));
    }

    #[test]
    fn known_code_has_dedicated_message() {
        let langid = "en-US".parse().expect("langid");
        let known = localize_api_code(&langid, 1);
        let unknown = localize_api_code(&langid, 999);
        assert_ne!(known, unknown);
    }
}
