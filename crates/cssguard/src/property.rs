//! Per-declaration filtering.
//!
//! A declaration survives only if its property is allow-listed. For
//! `background` and `background-image`, a `url(...)` argument must also
//! pass both URL hooks and is re-emitted in a normalized `url('...')` form.
//!
//! Values of every other allowed property are emitted verbatim. A
//! `background` value without `url(` is emitted verbatim too.

use std::sync::LazyLock;

use cssguard_common::Rejection;
use regex::Regex;

use crate::config::Configuration;

/// Properties whose `url(...)` argument is vetted.
const URL_PROPERTIES: &[&str] = &["background-image", "background"];

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"url\(['"]?(.*?)['"]?\)"#).unwrap());

/// One `property: value` pair from a rule body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    /// Split a raw chunk on its first `:`. Later colons stay in the value.
    pub fn parse(chunk: &str) -> Self {
        let (property, value) = chunk.split_once(':').unwrap_or((chunk, ""));
        Self {
            property: property.trim().to_string(),
            value: value.trim().to_string(),
        }
    }
}

/// Sanitize a single declaration, returning `"property: value;"` or `""`.
pub fn sanitize_property(config: &Configuration, property: &str, value: &str) -> String {
    match check_property(config, property, value) {
        Ok(declaration) => declaration,
        Err(rejection) => {
            tracing::debug!(property = property.trim(), reason = %rejection, "declaration dropped");
            String::new()
        }
    }
}

/// Like [`sanitize_property`], but says why a declaration was dropped.
pub fn check_property(
    config: &Configuration,
    property: &str,
    value: &str,
) -> Result<String, Rejection> {
    let property = property.trim();

    if !config.allows_property(property) {
        return Err(Rejection::DisallowedProperty(property.to_string()));
    }

    if URL_PROPERTIES.contains(&property) {
        if let Some(caps) = URL_RE.captures(value) {
            let url = caps.get(1).map_or("", |m| m.as_str());
            if !config.validate_url(url) {
                return Err(Rejection::InvalidUrl(url.to_string()));
            }
            let sanitized = config.sanitize_url(url);
            if sanitized.is_empty() {
                return Err(Rejection::DisallowedUrlOrigin(url.to_string()));
            }
            return Ok(format!("{property}: url('{sanitized}');"));
        }
    }

    Ok(format!("{property}: {value};"))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Overrides;

    fn with_background_image() -> Configuration {
        Configuration::new(Overrides::default().with_properties(["background-image"]))
    }

    // --- Declaration parsing ---

    #[test]
    fn parse_splits_on_first_colon_only() {
        let decl = Declaration::parse(" background : url('https://a.b/c.png') no-repeat ");
        assert_eq!(decl.property, "background");
        assert_eq!(decl.value, "url('https://a.b/c.png') no-repeat");
    }

    #[test]
    fn parse_without_colon_has_empty_value() {
        let decl = Declaration::parse("color");
        assert_eq!(decl.property, "color");
        assert_eq!(decl.value, "");
    }

    // --- Allow-list ---

    #[test]
    fn disallowed_properties_are_dropped() {
        let config = Configuration::default();
        for property in ["behavior", "-moz-binding", "background-image", "", "COLOR"] {
            assert_eq!(sanitize_property(&config, property, "anything"), "");
        }
        assert_eq!(
            check_property(&config, "behavior", "url(x.htc)"),
            Err(Rejection::DisallowedProperty("behavior".into()))
        );
    }

    #[test]
    fn allowed_property_is_emitted_verbatim() {
        let config = Configuration::default();
        assert_eq!(sanitize_property(&config, "color", "red"), "color: red;");
        assert_eq!(
            sanitize_property(&config, "  font-family ", "'Courier New', monospace"),
            "font-family: 'Courier New', monospace;"
        );
    }

    #[test]
    fn values_of_other_properties_are_not_vetted() {
        let config = Configuration::default();
        assert_eq!(
            sanitize_property(&config, "content", "url('https://evil.example/x')"),
            "content: url('https://evil.example/x');"
        );
    }

    // --- url() handling ---

    #[test]
    fn allowed_origin_is_normalized() {
        let config = with_background_image();
        let url = "https://fonts.googleapis.com/css?family=Inter";
        for property in ["background", "background-image"] {
            for value in [
                format!("url('{url}')"),
                format!("url(\"{url}\")"),
                format!("url({url})"),
            ] {
                assert_eq!(
                    sanitize_property(&config, property, &value),
                    format!("{property}: url('{url}');")
                );
            }
        }
    }

    #[test]
    fn surrounding_background_shorthand_is_discarded() {
        let config = Configuration::default();
        assert_eq!(
            sanitize_property(
                &config,
                "background",
                "#000 url('https://fonts.googleapis.com/a.png') no-repeat"
            ),
            "background: url('https://fonts.googleapis.com/a.png');"
        );
    }

    #[test]
    fn disallowed_origin_is_dropped() {
        let config = with_background_image();
        assert_eq!(
            sanitize_property(&config, "background", "url('https://evil.example/x.css')"),
            ""
        );
        assert_eq!(
            check_property(&config, "background-image", "url('https://evil.example/x.css')"),
            Err(Rejection::DisallowedUrlOrigin(
                "https://evil.example/x.css".into()
            ))
        );
    }

    #[test]
    fn invalid_url_is_dropped() {
        let config = Configuration::default();
        assert_eq!(
            check_property(&config, "background", "url('/relative.png')"),
            Err(Rejection::InvalidUrl("/relative.png".into()))
        );
        assert_eq!(sanitize_property(&config, "background", "url()"), "");
    }

    #[test]
    fn script_urls_are_dropped() {
        let config = Configuration::default();
        assert_eq!(
            check_property(&config, "background", "url('javascript:alert(1)')"),
            Err(Rejection::DisallowedUrlOrigin("javascript:alert(1".into()))
        );
    }

    #[test]
    fn background_without_url_falls_through() {
        let config = Configuration::default();
        assert_eq!(
            sanitize_property(&config, "background", "linear-gradient(red, blue)"),
            "background: linear-gradient(red, blue);"
        );
        assert_eq!(
            sanitize_property(&config, "background", "image-set('https://evil.example/x.png' 1x)"),
            "background: image-set('https://evil.example/x.png' 1x);"
        );
    }

    #[test]
    fn only_first_url_is_vetted() {
        let config = Configuration::default();
        assert_eq!(
            sanitize_property(
                &config,
                "background",
                "url('https://fonts.googleapis.com/a.png'), url('https://evil.example/b.png')"
            ),
            "background: url('https://fonts.googleapis.com/a.png');"
        );
    }

    #[test]
    fn custom_hooks_are_consulted() {
        let config = Configuration::new(
            Overrides::default()
                .with_url_validator(|url: &str| url.starts_with("https://"))
                .with_url_sanitizer(|url: &str| url.replace("cdn", "static")),
        );
        assert_eq!(
            sanitize_property(&config, "background", "url(https://cdn.example/a.png)"),
            "background: url('https://static.example/a.png');"
        );
        assert_eq!(
            sanitize_property(&config, "background", "url(http://cdn.example/a.png)"),
            ""
        );
    }
}
