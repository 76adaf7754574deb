//! Text extraction helpers shared by the page parsers

use scraper::{ElementRef, Html, Selector};

/// Upper bound (in characters) for the position of the first sentence break
const SENTENCE_BREAK_LIMIT: usize = 300;

/// Length (in characters) a summary is truncated to when no sentence break is found
const SUMMARY_TRUNCATE_AT: usize = 200;

/// Collapses all whitespace runs to single spaces and trims the result
///
/// Zero-width spaces, which Javadoc inserts into long signatures, are dropped.
pub fn collapse_whitespace(text: &str) -> String {
    text.replace('\u{200b}', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Returns the whitespace-normalized text content of an element
pub fn element_text(element: ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

/// Returns the normalized text of the element, or `None` if it is blank
pub fn non_empty_text(element: ElementRef<'_>) -> Option<String> {
    let text = element_text(element);
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Returns the first element matched by the first selector in `selectors` that matches anything
pub fn select_first<'a>(root: ElementRef<'a>, selectors: &[Selector]) -> Option<ElementRef<'a>> {
    selectors
        .iter()
        .find_map(|selector| root.select(selector).next())
}

/// Document-level variant of [`select_first`]
pub fn select_first_in<'a>(document: &'a Html, selectors: &[Selector]) -> Option<ElementRef<'a>> {
    select_first(document.root_element(), selectors)
}

/// Returns all elements matched by the first selector in `selectors` that matches anything
pub fn select_all_first_match<'a>(
    root: ElementRef<'a>,
    selectors: &[Selector],
) -> Vec<ElementRef<'a>> {
    for selector in selectors {
        let matched: Vec<_> = root.select(selector).collect();
        if !matched.is_empty() {
            return matched;
        }
    }
    Vec::new()
}

/// Extracts the first sentence of a description
///
/// # Rules
///
/// 1. If `". "` occurs within the first 300 characters, cut after the period
/// 2. Otherwise, if the text is longer than 200 characters, truncate to 200 and append `"..."`
/// 3. Otherwise, return the whole text
///
/// Returns `None` for blank input.
pub fn extract_first_sentence(text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Some(idx) = text.find(". ") {
        if idx > 0 && text[..idx].chars().count() < SENTENCE_BREAK_LIMIT {
            return Some(text[..=idx].to_string());
        }
    }

    if text.chars().count() > SUMMARY_TRUNCATE_AT {
        let truncated: String = text.chars().take(SUMMARY_TRUNCATE_AT).collect();
        return Some(format!("{}...", truncated));
    }

    Some(text.to_string())
}

/// Removes generic parameters from a type name (`Map<K, V>` -> `Map`)
pub fn strip_generics(name: &str) -> String {
    match name.find('<') {
        Some(idx) => name[..idx].trim().to_string(),
        None => name.trim().to_string(),
    }
}

/// Splits a declaration into whitespace-separated tokens, keeping bracketed
/// groups together (`Map<String, Object> map` -> `["Map<String, Object>", "map"]`)
///
/// Angle brackets, parentheses and braces all count, so annotation arguments
/// such as `@Target({TYPE, METHOD})` stay a single token.
pub fn split_declaration(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;

    for ch in text.chars() {
        match ch {
            '<' | '(' | '{' => {
                depth += 1;
                current.push(ch);
            }
            '>' | ')' | '}' => {
                depth = depth.saturating_sub(1);
                current.push(ch);
            }
            c if c.is_whitespace() && depth == 0 => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            c if c.is_whitespace() => {
                if !current.ends_with(' ') {
                    current.push(' ');
                }
            }
            c => current.push(c),
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

/// Splits a comma-separated list at depth zero (`Map<A, B> m, int x` -> two entries)
pub fn split_top_level_commas(text: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;

    for ch in text.chars() {
        match ch {
            '<' | '(' | '{' => {
                depth += 1;
                current.push(ch);
            }
            '>' | ')' | '}' => {
                depth = depth.saturating_sub(1);
                current.push(ch);
            }
            ',' if depth == 0 => {
                let part = current.trim().to_string();
                if !part.is_empty() {
                    parts.push(part);
                }
                current.clear();
            }
            c => current.push(c),
        }
    }

    let part = current.trim().to_string();
    if !part.is_empty() {
        parts.push(part);
    }

    parts
}

/// Normalizes an annotation token (`@Deprecated(since="9")` -> `@Deprecated`)
pub fn annotation_name(token: &str) -> Option<String> {
    if !token.starts_with('@') || token == "@interface" {
        return None;
    }
    let name = token.split('(').next().unwrap_or(token).trim();
    if name.len() > 1 {
        Some(name.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \n\t b  "), "a b");
        assert_eq!(collapse_whitespace("public\u{a0}void\u{a0}run()"), "public void run()");
        assert_eq!(collapse_whitespace("foo\u{200b}(int x)"), "foo(int x)");
    }

    #[test]
    fn test_first_sentence_cut_at_period() {
        let summary = extract_first_sentence("Creates a widget. Widgets are small.");
        assert_eq!(summary, Some("Creates a widget.".to_string()));
    }

    #[test]
    fn test_first_sentence_without_break() {
        let summary = extract_first_sentence("Creates a widget");
        assert_eq!(summary, Some("Creates a widget".to_string()));
    }

    #[test]
    fn test_first_sentence_truncates_long_text() {
        let text = "x".repeat(250);
        let summary = extract_first_sentence(&text).unwrap();
        assert_eq!(summary.len(), 203);
        assert!(summary.ends_with("..."));
    }

    #[test]
    fn test_first_sentence_break_too_late() {
        let text = format!("{}. tail", "y".repeat(320));
        let summary = extract_first_sentence(&text).unwrap();
        assert_eq!(summary, format!("{}...", "y".repeat(200)));
    }

    #[test]
    fn test_first_sentence_blank() {
        assert_eq!(extract_first_sentence("   "), None);
    }

    #[test]
    fn test_strip_generics() {
        assert_eq!(strip_generics("Widget<T extends Comparable<T>>"), "Widget");
        assert_eq!(strip_generics("Widget"), "Widget");
    }

    #[test]
    fn test_split_declaration_keeps_generics() {
        let tokens = split_declaration("private final Map<String, List<Integer>> cache");
        assert_eq!(
            tokens,
            vec!["private", "final", "Map<String, List<Integer>>", "cache"]
        );
    }

    #[test]
    fn test_split_declaration_keeps_annotation_arguments() {
        let tokens = split_declaration("@Target({TYPE, METHOD}) public @interface Marker");
        assert_eq!(
            tokens,
            vec!["@Target({TYPE, METHOD})", "public", "@interface", "Marker"]
        );
    }

    #[test]
    fn test_split_top_level_commas() {
        let parts = split_top_level_commas("Map<String, Object> values, int count");
        assert_eq!(parts, vec!["Map<String, Object> values", "int count"]);
        assert!(split_top_level_commas("  ").is_empty());
    }

    #[test]
    fn test_annotation_name() {
        assert_eq!(
            annotation_name("@Deprecated(since=\"9\")"),
            Some("@Deprecated".to_string())
        );
        assert_eq!(annotation_name("@interface"), None);
        assert_eq!(annotation_name("public"), None);
        assert_eq!(annotation_name("@"), None);
    }
}
