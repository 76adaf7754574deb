//! Package summary page parsing
//!
//! Handles `package-summary.html` pages from both the legacy and the modern
//! Javadoc generations.

use crate::parser::selectors::{
    ANCHOR, CANONICAL_LINK, CLASS_TABLE_LINKS, PACKAGE_DESCRIPTION, PACKAGE_LABEL, TITLE,
};
use crate::parser::text::{element_text, extract_first_sentence, non_empty_text, select_first_in};
use crate::parser::ParsedPackage;
use crate::url::package_from_url;
use scraper::Html;
use std::collections::HashSet;

/// Pages that sit next to class pages but are not classes
const EXCLUDED_PAGES: &[&str] = &[
    "package-summary.html",
    "package-tree.html",
    "package-use.html",
    "package-frame.html",
    "allclasses.html",
    "allclasses-index.html",
    "allclasses-noframe.html",
    "allpackages-index.html",
    "constant-values.html",
    "deprecated-list.html",
    "help-doc.html",
    "index.html",
    "index-all.html",
    "overview-summary.html",
    "overview-tree.html",
    "overview-frame.html",
    "serialized-form.html",
];

/// Suffixes that mark a hyphenated page name as navigation rather than a class
const EXCLUDED_SUFFIXES: &[&str] = &[
    "-use", "-summary", "-frame", "-index", "-list", "-tree", "-form", "-values",
];

/// Ways to recover the package name, tried in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PackageNameStrategy {
    /// Header label such as `Package com.example.pkg`
    HeaderLabel,
    /// First token of `<title>com.example.pkg (Library API)</title>`
    PageTitle,
    /// Path of the canonical link (`.../api/com/example/pkg/package-summary.html`)
    CanonicalLink,
}

const PACKAGE_NAME_STRATEGIES: &[PackageNameStrategy] = &[
    PackageNameStrategy::HeaderLabel,
    PackageNameStrategy::PageTitle,
    PackageNameStrategy::CanonicalLink,
];

impl PackageNameStrategy {
    fn apply(self, document: &Html) -> Option<String> {
        match self {
            Self::HeaderLabel => {
                let label = select_first_in(document, &PACKAGE_LABEL).map(element_text)?;
                let name = label.strip_prefix("Package")?.trim();
                is_package_name(name).then(|| name.to_string())
            }
            Self::PageTitle => {
                let title = document.select(&TITLE).next().map(element_text)?;
                if !title.contains(' ') {
                    return None;
                }
                let first = title.split(' ').next()?;
                is_package_name(first).then(|| first.to_string())
            }
            Self::CanonicalLink => {
                let href = document
                    .select(&CANONICAL_LINK)
                    .next()?
                    .value()
                    .attr("href")?;
                package_from_url(href)
            }
        }
    }
}

/// Checks that a string looks like a dotted Java package name
fn is_package_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && !name.ends_with('.')
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '_' || c == '$')
}

/// Parses a package summary page
///
/// Never fails: missing pieces leave the corresponding fields empty.
///
/// # Arguments
///
/// * `html` - The page content
/// * `source_url` - URL the page was fetched from, echoed into the result
///
/// # Returns
///
/// The parsed package, with class FQCNs deduplicated in first-seen order
///
/// # Example
///
/// ```
/// use javadoc_harvest::parser::parse_package_summary;
///
/// let html = r#"<html><head><title>com.example.pkg (Lib API)</title></head>
///     <body><div class="block">Widgets. And more.</div>
///     <table class="typeSummary"><tr><td><a href="Widget.html">Widget</a></td></tr></table>
///     </body></html>"#;
/// let package = parse_package_summary(html, "https://docs.example.com/api/com/example/pkg/package-summary.html");
/// assert_eq!(package.package_name, "com.example.pkg");
/// assert_eq!(package.classes, vec!["com.example.pkg.Widget"]);
/// ```
pub fn parse_package_summary(html: &str, source_url: &str) -> ParsedPackage {
    let document = Html::parse_document(html);

    let package_name = PACKAGE_NAME_STRATEGIES
        .iter()
        .find_map(|strategy| strategy.apply(&document))
        .unwrap_or_default();

    let description = select_first_in(&document, &PACKAGE_DESCRIPTION).and_then(non_empty_text);
    let summary = description.as_deref().and_then(extract_first_sentence);

    let classes = summary_table_classes(&document)
        .into_iter()
        .map(|simple_name| {
            if package_name.is_empty() {
                simple_name
            } else {
                format!("{}.{}", package_name, simple_name)
            }
        })
        .collect();

    ParsedPackage {
        package_name,
        summary,
        description,
        source_url: source_url.to_string(),
        classes,
    }
}

/// Collects class names from the first class table layout present on the page
///
/// Only same-directory hrefs (`Widget.html`) name classes of this package.
/// Hrefs containing `/` point into other packages (`../other/Thing.html`,
/// typically from description text inside the table) and are dropped, as are
/// `#` member anchors.
fn summary_table_classes(document: &Html) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for selector in CLASS_TABLE_LINKS.iter() {
        for link in document.select(selector) {
            let Some(href) = link.value().attr("href") else {
                continue;
            };
            if href.contains('#') || href.contains('/') {
                continue;
            }
            let Some(name) = href.strip_suffix(".html") else {
                continue;
            };
            if !name.is_empty() && seen.insert(name.to_string()) {
                names.push(name.to_string());
            }
        }
        if !names.is_empty() {
            break;
        }
    }

    names
}

/// Extracts the simple names of classes linked from a package summary page
///
/// Every `a[href]` on the page is considered. A link qualifies when its href
/// ends in `.html`, has no `/`, is not a known navigation page, does not start
/// with `class-use`, and (for hyphenated names) does not end in a navigation
/// suffix such as `-summary` or `-tree`.
///
/// # Arguments
///
/// * `html` - The package summary page content
///
/// # Returns
///
/// Simple class names, deduplicated in document order
pub fn class_link_candidates(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for link in document.select(&ANCHOR) {
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        if let Some(name) = candidate_class_name(href.trim()) {
            if seen.insert(name.clone()) {
                names.push(name);
            }
        }
    }

    names
}

/// Applies the candidate filter to a single href
fn candidate_class_name(href: &str) -> Option<String> {
    if href.contains('/') || EXCLUDED_PAGES.contains(&href) || href.starts_with("class-use") {
        return None;
    }

    let name = href.strip_suffix(".html")?;
    if name.is_empty() {
        return None;
    }

    if name.contains('-') && EXCLUDED_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)) {
        return None;
    }

    Some(name.to_string())
}
