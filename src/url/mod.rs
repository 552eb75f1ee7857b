//! URL handling module for Plan-Scout
//!
//! This module decides which listing-page links are plan detail links and
//! turns them into absolute URLs on the target site.

use url::Url;

/// Returns true if an `href` points at a plan detail page
///
/// An `href` qualifies when it contains the configured link pattern
/// (e.g. `/broadband/`) and is not a script, mail, phone, data or
/// fragment-only link.
pub fn is_plan_link(href: &str, link_pattern: &str) -> bool {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return false;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return false;
    }

    href.contains(link_pattern)
}

/// The base URL as a string prefix, without its trailing `/`
fn base_prefix(base_url: &Url) -> &str {
    base_url.as_str().trim_end_matches('/')
}

/// Returns true if `url` lies under `base_url`
///
/// The base is compared as a string prefix, so a base with a path
/// (`https://site/nz`) only admits URLs below that path.
pub fn has_base_prefix(url: &str, base_url: &Url) -> bool {
    let prefix = base_prefix(base_url);
    match url.strip_prefix(prefix) {
        Some(rest) => {
            rest.is_empty() || rest.starts_with('/') || rest.starts_with('?') || rest.starts_with('#')
        }
        None => false,
    }
}

/// Appends a site path to the base URL
///
/// Unlike `Url::join`, any path on the base is kept:
/// `https://site/nz` + `/broadband` is `https://site/nz/broadband`.
pub fn join_base(base_url: &Url, path: &str) -> Result<Url, url::ParseError> {
    let path = path.trim();
    let separator = if path.is_empty() || path.starts_with('/') || path.starts_with('?') {
        ""
    } else {
        "/"
    };
    Url::parse(&format!("{}{}{}", base_prefix(base_url), separator, path))
}

/// Resolves a plan link against the site's base URL
///
/// Relative links are appended to the base URL, keeping any path the base
/// has. Absolute and protocol-relative links are kept only when they already
/// lie under the base URL, so every returned URL starts with the base URL.
///
/// # Examples
///
/// ```
/// use plan_scout::url::resolve_plan_link;
/// use url::Url;
///
/// let base = Url::parse("https://findplanking.com").unwrap();
/// assert_eq!(
///     resolve_plan_link("/broadband/fibre-100", &base).as_deref(),
///     Some("https://findplanking.com/broadband/fibre-100")
/// );
/// ```
pub fn resolve_plan_link(href: &str, base_url: &Url) -> Option<String> {
    let href = href.trim();

    let resolved = if href.starts_with("//") || Url::parse(href).is_ok() {
        base_url.join(href).ok()?
    } else {
        join_base(base_url, href).ok()?
    };

    if !has_base_prefix(resolved.as_str(), base_url) {
        tracing::debug!("Skipping plan link outside {}: {}", base_url, resolved);
        return None;
    }

    Some(resolved.to_string())
}
