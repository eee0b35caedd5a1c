//! URL building: turning a platform spec plus a username into a probe
//! target.

use crate::types::{PlatformSpec, ProbeTarget};

/// Build a probe target by substituting the username into the spec's
/// template.
///
/// There is no error path here: a template without a `%s` placeholder
/// produces a URL without the username in it, which will simply fail (or
/// mislead) at probe time. Platform-list validation is the source's job.
pub fn build_target(spec: &PlatformSpec, username: &str) -> ProbeTarget {
    let url = spec.url_template.replacen("%s", username, 1);
    let platform = match &spec.name {
        Some(name) => name.clone(),
        None => derive_platform_label(&url),
    };

    ProbeTarget { platform, url }
}

/// Derive a platform label from a URL: the host segment after `://` up to
/// the first `.`.
///
/// This is a best-effort legacy fallback, not a reliable platform
/// identifier. It returns "www" for `www.`-prefixed hosts, breaks on
/// IP-based URLs, and falls back to the leading URL fragment when there is
/// no scheme delimiter. Prefer supplying an explicit name on the spec.
pub fn derive_platform_label(url: &str) -> String {
    let after_scheme = match url.split_once("://") {
        Some((_, rest)) => rest,
        None => url,
    };

    after_scheme
        .split('.')
        .next()
        .unwrap_or(after_scheme)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_username_into_template() {
        let spec = PlatformSpec::named("GitHub", "https://github.com/%s");
        let target = build_target(&spec, "octocat");

        assert_eq!(target.platform, "GitHub");
        assert_eq!(target.url, "https://github.com/octocat");
    }

    #[test]
    fn substitutes_only_first_placeholder() {
        let spec = PlatformSpec::named("Odd", "https://odd.example/%s/%s");
        let target = build_target(&spec, "alice");
        assert_eq!(target.url, "https://odd.example/alice/%s");
    }

    #[test]
    fn template_without_placeholder_passes_through() {
        // No error path: the malformed URL fails at probe time instead.
        let spec = PlatformSpec::named("Broken", "https://broken.example/profile");
        let target = build_target(&spec, "alice");
        assert_eq!(target.url, "https://broken.example/profile");
    }

    #[test]
    fn unnamed_spec_derives_label_from_host() {
        let spec = PlatformSpec::unnamed("https://github.com/%s");
        let target = build_target(&spec, "octocat");
        assert_eq!(target.platform, "github");
    }

    #[test]
    fn label_heuristic_is_documentedly_fragile() {
        // The fallback takes everything before the first '.', which yields
        // "www" for www-prefixed hosts. Accepted legacy behavior.
        assert_eq!(derive_platform_label("https://www.reddit.com/user/a"), "www");
        assert_eq!(derive_platform_label("https://t.me/a"), "t");
    }

    #[test]
    fn label_heuristic_without_scheme_does_not_panic() {
        assert_eq!(derive_platform_label("github.com/octocat"), "github");
        assert_eq!(derive_platform_label("no-dots-here"), "no-dots-here");
        assert_eq!(derive_platform_label(""), "");
    }
}
