//! Class page parsing
//!
//! The type name, kind and modifiers are recovered through an ordered list of
//! strategies, from the structured modern markup down to the page header.

use crate::model::ClassKind;
use crate::parser::members::{parse_constructors, parse_fields, parse_methods};
use crate::parser::selectors::{
    CLASS_DESCRIPTION, CLASS_DESCRIPTION_SCOPE, CLASS_HEADER, DEPRECATION_BLOCK,
    DEPRECATION_COMMENT, EXTENDS_IMPLEMENTS, LINK, SUB_TITLE, TITLE, TYPE_MODIFIERS, TYPE_NAME,
    TYPE_SIGNATURE_BLOCK,
};
use crate::parser::text::{
    annotation_name, element_text, extract_first_sentence, non_empty_text, select_first,
    select_first_in, split_declaration, split_top_level_commas, strip_generics,
};
use crate::parser::ParsedClass;
use scraper::Html;

/// Modifiers recognized on type declarations
const CLASS_MODIFIERS: &[&str] = &[
    "public",
    "protected",
    "private",
    "abstract",
    "final",
    "static",
    "sealed",
    "non-sealed",
];

/// Keywords that introduce a type name
const KIND_KEYWORDS: &[&str] = &["class", "interface", "@interface", "enum", "record"];

/// Name and leading declaration text recovered by a title strategy
#[derive(Debug, Clone, PartialEq, Eq)]
struct TypeHeader {
    name: String,
    /// Tokens before the name: annotations, modifiers and the kind keyword
    prefix: Vec<String>,
}

/// Ways to recover the type name, tried in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TitleStrategy {
    /// `.type-signature .element-name` with sibling `.modifiers`
    ElementName,
    /// Whole signature block parsed as a declaration
    SignatureBlock,
    /// `<title>Widget (Library API)</title>`
    PageTitle,
    /// `<h1 class="title">Class Widget</h1>`
    Header,
}

const TITLE_STRATEGIES: &[TitleStrategy] = &[
    TitleStrategy::ElementName,
    TitleStrategy::SignatureBlock,
    TitleStrategy::PageTitle,
    TitleStrategy::Header,
];

impl TitleStrategy {
    fn apply(self, document: &Html) -> Option<TypeHeader> {
        let header = match self {
            Self::ElementName => {
                let name = select_first_in(document, &TYPE_NAME).and_then(non_empty_text)?;
                let prefix = document
                    .select(&TYPE_MODIFIERS)
                    .next()
                    .map(element_text)
                    .map(|text| split_declaration(&text))
                    .unwrap_or_default();
                TypeHeader { name, prefix }
            }
            Self::SignatureBlock => {
                let text = select_first_in(document, &TYPE_SIGNATURE_BLOCK).map(element_text)?;
                let declaration = Declaration::parse(&text);
                TypeHeader {
                    name: declaration.name?,
                    prefix: declaration.prefix,
                }
            }
            Self::PageTitle => {
                let title = document.select(&TITLE).next().map(element_text)?;
                let head = title.split(" (").next()?.trim();
                let name = head.split_whitespace().last()?.to_string();
                TypeHeader {
                    name,
                    prefix: Vec::new(),
                }
            }
            Self::Header => {
                let mut tokens = header_tokens(document);
                let name = tokens.pop()?;
                TypeHeader {
                    name,
                    prefix: tokens,
                }
            }
        };

        if clean_type_name(&header.name).is_empty() {
            None
        } else {
            Some(header)
        }
    }
}

/// Parsed view of a type declaration such as
/// `@Marker public class Widget<T> extends Base implements Runnable`
#[derive(Debug, Default)]
struct Declaration {
    prefix: Vec<String>,
    name: Option<String>,
    extends: Vec<String>,
    implements: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Head,
    Extends,
    Implements,
    Permits,
}

impl Declaration {
    fn parse(text: &str) -> Self {
        let mut declaration = Declaration::default();
        let mut section = Section::Head;
        let mut saw_keyword = false;
        let mut extends = Vec::new();
        let mut implements = Vec::new();

        for token in split_declaration(text) {
            match token.as_str() {
                "extends" => {
                    section = Section::Extends;
                    continue;
                }
                "implements" => {
                    section = Section::Implements;
                    continue;
                }
                "permits" => {
                    section = Section::Permits;
                    continue;
                }
                _ => {}
            }

            match section {
                Section::Head => {
                    if declaration.name.is_some() {
                        continue;
                    }
                    if KIND_KEYWORDS.contains(&token.as_str()) {
                        saw_keyword = true;
                        declaration.prefix.push(token);
                    } else if saw_keyword
                        || !(token.starts_with('@') || CLASS_MODIFIERS.contains(&token.as_str()))
                    {
                        declaration.name = Some(token);
                    } else {
                        declaration.prefix.push(token);
                    }
                }
                Section::Extends => extends.push(token),
                Section::Implements => implements.push(token),
                Section::Permits => {}
            }
        }

        declaration.extends = type_list(&extends.join(" "));
        declaration.implements = type_list(&implements.join(" "));
        declaration
    }
}

/// Splits `A, B<C, D>` into `["A", "B"]`
fn type_list(text: &str) -> Vec<String> {
    split_top_level_commas(text)
        .iter()
        .map(|part| clean_type_name(part))
        .filter(|name| !name.is_empty())
        .collect()
}

/// Strips generic parameters and record components from a type name
fn clean_type_name(name: &str) -> String {
    let name = strip_generics(name);
    match name.find('(') {
        Some(idx) => name[..idx].trim().to_string(),
        None => name,
    }
}

/// Header words, e.g. `["Annotation", "Interface", "Marker"]`
fn header_tokens(document: &Html) -> Vec<String> {
    select_first_in(document, &CLASS_HEADER)
        .map(element_text)
        .map(|text| split_declaration(&text))
        .unwrap_or_default()
}

/// Determines the type kind from declaration or header words
///
/// Annotation types are checked before interfaces, since `@interface`
/// mentions both.
fn detect_kind(tokens: &[String]) -> Option<ClassKind> {
    let lower: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
    let has = |word: &str| lower.iter().any(|t| t == word);

    if has("@interface") || has("annotation") {
        Some(ClassKind::Annotation)
    } else if has("interface") {
        Some(ClassKind::Interface)
    } else if has("enum") {
        Some(ClassKind::Enum)
    } else if has("record") {
        Some(ClassKind::Record)
    } else if has("class") {
        Some(ClassKind::Class)
    } else {
        None
    }
}

/// Joins recognized modifiers in source order
fn extract_modifiers(tokens: &[String]) -> Option<String> {
    let modifiers: Vec<&str> = tokens
        .iter()
        .map(String::as_str)
        .filter(|token| CLASS_MODIFIERS.contains(token))
        .collect();

    if modifiers.is_empty() {
        None
    } else {
        Some(modifiers.join(" "))
    }
}

/// Reads the package from the sub-title (`Package com.example.pkg`)
fn package_qualifier(document: &Html) -> Option<String> {
    let text = select_first_in(document, &SUB_TITLE).map(element_text)?;
    let name = text.strip_prefix("Package").unwrap_or(&text).trim();
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '_' || c == '$');
    valid.then(|| name.to_string())
}

/// First description block that is not a deprecation notice
fn class_description(document: &Html) -> Option<String> {
    for selector in CLASS_DESCRIPTION.iter() {
        let found = document
            .select(selector)
            .map(element_text)
            .find(|text| !text.is_empty() && !text.starts_with("Deprecated"));
        if found.is_some() {
            return found;
        }
    }
    None
}

/// Deprecation flag and message, looked up only inside the class description
fn class_deprecation(document: &Html) -> (bool, Option<String>) {
    let Some(scope) = select_first_in(document, &CLASS_DESCRIPTION_SCOPE) else {
        return (false, None);
    };

    let deprecated = select_first(scope, &DEPRECATION_BLOCK).is_some();
    let message = if deprecated {
        select_first(scope, &DEPRECATION_COMMENT).and_then(non_empty_text)
    } else {
        None
    };

    (deprecated, message)
}

/// Type names linked from the first extends/implements block on the page
///
/// Annotation links in legacy `<pre>` declarations are skipped. Returns
/// `None` when the block is missing or links nothing.
fn inheritance_links(document: &Html) -> Option<Vec<String>> {
    let block = select_first_in(document, &EXTENDS_IMPLEMENTS)?;
    let links: Vec<String> = block
        .select(&LINK)
        .map(element_text)
        .filter(|text| !text.starts_with('@'))
        .map(|text| clean_type_name(&text))
        .filter(|name| !name.is_empty())
        .collect();

    (!links.is_empty()).then_some(links)
}

/// First link is the superclass, the remaining distinct links are interfaces
fn split_inheritance(links: Vec<String>) -> (Option<String>, Vec<String>) {
    let mut links = links.into_iter();
    let super_class = links.next();
    let interfaces = links
        .filter(|name| Some(name) != super_class.as_ref())
        .collect();
    (super_class, dedup(interfaces))
}

/// Keyword reading of the declaration, used when nothing in it is linked
fn declared_inheritance(
    declaration: &Declaration,
    kind: ClassKind,
) -> (Option<String>, Vec<String>) {
    if kind == ClassKind::Interface || kind == ClassKind::Annotation {
        // `extends` on an interface lists super-interfaces
        return (None, dedup(declaration.extends.clone()));
    }

    let super_class = declaration.extends.first().cloned();
    let interfaces = declaration
        .implements
        .iter()
        .filter(|name| Some(*name) != super_class.as_ref())
        .cloned()
        .collect();
    (super_class, dedup(interfaces))
}

/// Parses a class, interface, enum, annotation or record page
///
/// Never fails: missing pieces leave the corresponding fields empty. The
/// returned `fqcn` is only filled in when the page names its package.
///
/// # Arguments
///
/// * `html` - The page content
/// * `source_url` - URL the page was fetched from, echoed into the result
///
/// # Example
///
/// ```
/// use javadoc_harvest::model::ClassKind;
/// use javadoc_harvest::parser::parse_class_page;
///
/// let html = r#"<html><body><div class="type-signature">
///     <span class="modifiers">public final class </span>
///     <span class="element-name type-name-label">Widget</span></div></body></html>"#;
/// let class = parse_class_page(html, "https://docs.example.com/api/Widget.html");
/// assert_eq!(class.simple_name, "Widget");
/// assert_eq!(class.kind, ClassKind::Class);
/// assert_eq!(class.modifiers.as_deref(), Some("public final"));
/// ```
pub fn parse_class_page(html: &str, source_url: &str) -> ParsedClass {
    let document = Html::parse_document(html);

    let header = TITLE_STRATEGIES
        .iter()
        .find_map(|strategy| strategy.apply(&document));

    let (simple_name, prefix) = match header {
        Some(header) => (clean_type_name(&header.name), header.prefix),
        None => (String::new(), Vec::new()),
    };

    let kind = detect_kind(&prefix)
        .or_else(|| {
            let mut tokens = header_tokens(&document);
            tokens.pop();
            detect_kind(&tokens)
        })
        .unwrap_or_default();
    let modifiers = extract_modifiers(&prefix);

    let signature_text = select_first_in(&document, &TYPE_SIGNATURE_BLOCK)
        .map(element_text)
        .unwrap_or_default();
    let declaration = Declaration::parse(&signature_text);

    let (super_class, interfaces) = match inheritance_links(&document) {
        Some(links) => split_inheritance(links),
        None => declared_inheritance(&declaration, kind),
    };

    let annotations = dedup(
        declaration
            .prefix
            .iter()
            .filter_map(|token| annotation_name(token))
            .collect(),
    );

    let fqcn = match package_qualifier(&document) {
        Some(package) if !simple_name.is_empty() => format!("{}.{}", package, simple_name),
        _ => String::new(),
    };

    let description = class_description(&document);
    let summary = description.as_deref().and_then(extract_first_sentence);
    let (deprecated, deprecated_message) = class_deprecation(&document);

    ParsedClass {
        fqcn,
        simple_name,
        kind,
        modifiers,
        summary,
        description,
        super_class,
        interfaces,
        deprecated,
        deprecated_message,
        annotations,
        source_url: source_url.to_string(),
        methods: parse_methods(&document),
        fields: parse_fields(&document),
        constructors: parse_constructors(&document),
    }
}

fn dedup(items: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}
