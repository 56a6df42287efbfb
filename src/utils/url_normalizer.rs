//! URL validation and normalization.
//!
//! Everything the registry stores passes through [`normalize_url`] first, so two
//! spellings of the same address deduplicate to one short code.

use regex::Regex;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;
use url::{Host, ParseError, Url};

/// Shortest input accepted, after trimming.
pub const MIN_URL_LENGTH: usize = 4;

/// Default upper bound on input length.
pub const DEFAULT_MAX_URL_LENGTH: usize = 2048;

static DOMAIN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]([a-z0-9-]{0,61}[a-z0-9])?(\.[a-z0-9]([a-z0-9-]{0,61}[a-z0-9])?)*$")
        .expect("domain regex is valid")
});

/// Errors that can occur during URL normalization.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("URL cannot be empty")]
    Empty,

    #[error("URL is too short")]
    TooShort,

    #[error("URL is too long (max {max} characters)")]
    TooLong { max: usize },

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must contain a valid domain")]
    MissingHost,

    #[error("URL contains invalid domain format")]
    InvalidDomain,

    #[error("Cannot shorten local or private address '{0}'")]
    ForbiddenHost(String),
}

/// Validates a user-supplied URL and returns its canonical form.
///
/// # Rules
///
/// 1. **Length**: trimmed input must be 4..=`max_length` characters
/// 2. **Scheme**: missing scheme defaults to `http://` (also for bare `host:port`);
///    only HTTP and HTTPS are allowed
/// 3. **Host**: required; loopback, private, link-local and `localhost` hosts are rejected
/// 4. **Canonical form**: lowercase host, no default port, no fragment
///
/// # Errors
///
/// Returns the first [`UrlNormalizationError`] rule that the input breaks.
///
/// # Examples
///
/// ```
/// use short_link_registry::utils::url_normalizer::normalize_url;
///
/// assert_eq!(
///     normalize_url("HTTPS://EXAMPLE.COM:443/Path#top", 2048).unwrap(),
///     "https://example.com/Path"
/// );
/// assert_eq!(
///     normalize_url("example.com/a", 2048).unwrap(),
///     "http://example.com/a"
/// );
/// assert!(normalize_url("http://localhost:3000", 2048).is_err());
/// ```
pub fn normalize_url(input: &str, max_length: usize) -> Result<String, UrlNormalizationError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(UrlNormalizationError::Empty);
    }
    let length = trimmed.chars().count();
    if length < MIN_URL_LENGTH {
        return Err(UrlNormalizationError::TooShort);
    }
    if length > max_length {
        return Err(UrlNormalizationError::TooLong { max: max_length });
    }

    let parsed = if has_bare_port(trimmed) {
        Url::parse(&format!("http://{trimmed}"))
    } else {
        match Url::parse(trimmed) {
            Err(ParseError::RelativeUrlWithoutBase) => Url::parse(&format!("http://{trimmed}")),
            other => other,
        }
    };
    let mut url = parsed.map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedProtocol),
    }

    check_host(&url)?;

    // Parsing already lowercases special-scheme hosts and drops default ports.
    url.set_fragment(None);

    Ok(url.to_string())
}

/// True for scheme-less `host:port` input such as `example.com:8080/path`,
/// which would otherwise parse with `example.com` as its scheme.
fn has_bare_port(input: &str) -> bool {
    if input.contains("://") {
        return false;
    }

    input.split_once(':').is_some_and(|(_, rest)| {
        let port = rest.split(['/', '?', '#']).next().unwrap_or_default();
        !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit())
    })
}

fn check_host(url: &Url) -> Result<(), UrlNormalizationError> {
    match url.host() {
        None => Err(UrlNormalizationError::MissingHost),
        Some(Host::Domain(domain)) => {
            let domain = domain.to_ascii_lowercase();
            if domain == "localhost" || domain.ends_with(".localhost") {
                return Err(UrlNormalizationError::ForbiddenHost(domain));
            }
            if !DOMAIN_REGEX.is_match(&domain) {
                return Err(UrlNormalizationError::InvalidDomain);
            }
            Ok(())
        }
        Some(Host::Ipv4(ip)) if is_forbidden_ipv4(ip) => {
            Err(UrlNormalizationError::ForbiddenHost(ip.to_string()))
        }
        Some(Host::Ipv6(ip)) if is_forbidden_ipv6(ip) => {
            Err(UrlNormalizationError::ForbiddenHost(ip.to_string()))
        }
        Some(_) => Ok(()),
    }
}

fn is_forbidden_ipv4(ip: Ipv4Addr) -> bool {
    ip.is_loopback()
        || ip.is_private()
        || ip.is_unspecified()
        || ip.is_link_local()
        || ip.is_broadcast()
}

fn is_forbidden_ipv6(ip: Ipv6Addr) -> bool {
    if let Some(mapped) = ip.to_ipv4_mapped() {
        return is_forbidden_ipv4(mapped);
    }

    ip.is_loopback() || ip.is_unspecified() || ip.is_unique_local() || ip.is_unicast_link_local()
}
