//! Pluggable URL vetting hooks used for `background` / `background-image`.
//!
//! Both hooks are single-method traits with blanket impls for closures, so
//! callers can pass either a named policy type or a plain `Fn`.

use std::collections::HashSet;

use super::defaults::DEFAULT_ALLOWED_HOSTS;

/// Structural check run on every captured `url(...)` argument.
pub trait UrlValidator: Send + Sync {
    fn validate(&self, url: &str) -> bool;
}

/// Maps a structurally valid URL to the URL to emit, or `""` to drop it.
pub trait UrlSanitizer: Send + Sync {
    fn sanitize(&self, url: &str) -> String;
}

impl<F> UrlValidator for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn validate(&self, url: &str) -> bool {
        self(url)
    }
}

impl<F> UrlSanitizer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn sanitize(&self, url: &str) -> String {
        self(url)
    }
}

/// Accepts anything that parses as an absolute URL.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralUrlValidator;

impl UrlValidator for StructuralUrlValidator {
    fn validate(&self, url: &str) -> bool {
        url::Url::parse(url).is_ok()
    }
}

/// Lets a URL through only when its host is on a fixed list.
///
/// Hosts are compared case-insensitively. The URL is returned exactly as
/// given, not in its normalized form.
#[derive(Debug, Clone)]
pub struct HostAllowList {
    hosts: HashSet<String>,
}

impl HostAllowList {
    pub fn new<I, S>(hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            hosts: hosts
                .into_iter()
                .map(|h| h.as_ref().trim().to_ascii_lowercase())
                .filter(|h| !h.is_empty())
                .collect(),
        }
    }

    pub fn hosts(&self) -> &HashSet<String> {
        &self.hosts
    }

    pub fn allows_host(&self, host: &str) -> bool {
        self.hosts.contains(&host.to_ascii_lowercase())
    }
}

impl Default for HostAllowList {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_HOSTS)
    }
}

impl UrlSanitizer for HostAllowList {
    fn sanitize(&self, url: &str) -> String {
        if url.is_empty() {
            return String::new();
        }
        match url::Url::parse(url) {
            Ok(parsed) if parsed.host_str().is_some_and(|h| self.allows_host(h)) => {
                url.to_string()
            }
            _ => String::new(),
        }
    }
}
