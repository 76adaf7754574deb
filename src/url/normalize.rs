use crate::UrlError;
use url::Url;

/// Normalizes a documentation root URL
///
/// # Normalization Steps
///
/// 1. Trim surrounding whitespace
/// 2. Parse the URL; reject if malformed or not HTTP(S)
/// 3. Strip a trailing `index.html`
/// 4. Ensure the result ends with `/`
///
/// # Arguments
///
/// * `url_str` - The base URL as given by the caller
///
/// # Returns
///
/// * `Ok(String)` - Normalized base URL, always ending in `/`
/// * `Err(UrlError)` - Failed to parse the URL
///
/// # Examples
///
/// ```
/// use javadoc_harvest::url::normalize_base_url;
///
/// let base = normalize_base_url("https://docs.example.com/lib/1.0/api/index.html").unwrap();
/// assert_eq!(base, "https://docs.example.com/lib/1.0/api/");
/// ```
pub fn normalize_base_url(url_str: &str) -> Result<String, UrlError> {
    let trimmed = url_str.trim();

    let url = Url::parse(trimmed).map_err(|e| UrlError::Parse(e.to_string()))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    let mut base = trimmed
        .strip_suffix("index.html")
        .unwrap_or(trimmed)
        .to_string();
    if !base.ends_with('/') {
        base.push('/');
    }

    Ok(base)
}

/// Converts a dotted package name to its URL path (`a.b.c` -> `a/b/c`)
pub fn package_path(package_name: &str) -> String {
    package_name.replace('.', "/")
}

/// Recovers a dotted package name from a page URL
///
/// Looks for the path between `/api/` and `/package-summary.html`. Returns
/// `None` when the URL does not have that shape.
pub fn package_from_url(url: &str) -> Option<String> {
    let start = url.find("/api/")? + "/api/".len();
    let rest = &url[start..];
    let end = rest.find("/package-summary.html")?;
    let path = &rest[..end];
    if path.is_empty() {
        return None;
    }
    Some(path.replace('/', "."))
}
