//! URL host list validation.

use crate::schema::GuardSettings;

pub(crate) fn validate_urls(errors: &mut Vec<String>, settings: &GuardSettings) {
    for (i, host) in settings.urls.allowed_hosts.iter().enumerate() {
        let name = format!("urls.allowed_hosts[{i}]");
        if host.trim().is_empty() {
            errors.push(format!("{name} is empty"));
        } else if host.contains("://") || host.contains('/') {
            errors.push(format!(
                "{name} = '{host}' must be a bare host name, not a URL"
            ));
        } else if let Err(e) = url::Host::parse(host) {
            errors.push(format!("{name} = '{host}' is not a valid host: {e}"));
        }
    }
}
