//! Method, field and constructor extraction
//!
//! Detail sections are preferred. When a page has none (some generators only
//! emit summary tables), the summary table rows are used instead, which yields
//! names and signatures but no parameter documentation.

use crate::model::{Constructor, Field, Method, Parameter};
use crate::parser::selectors::{
    BLOCK, CODE, CONSTRUCTOR_DETAIL, CONSTRUCTOR_SUMMARY, DEPRECATION_BLOCK, DEPRECATION_COMMENT,
    DT, FIELD_DETAIL, FIELD_SUMMARY, LEGACY_SUMMARY_CELL, LINK, MEMBER_NAME, MEMBER_SIGNATURE,
    METHOD_DETAIL, METHOD_SUMMARY, SECTION_HEADING, SIGNATURE,
};
use crate::parser::text::{
    annotation_name, element_text, extract_first_sentence, non_empty_text, select_all_first_match,
    select_first, split_declaration, split_top_level_commas,
};
use scraper::{ElementRef, Html, Selector};

/// Modifiers recognized on field declarations
const FIELD_MODIFIERS: &[&str] = &[
    "public",
    "protected",
    "private",
    "static",
    "final",
    "transient",
    "volatile",
];

/// Where to find one kind of member on a page
struct MemberLayout {
    legacy_detail_headings: &'static [&'static str],
    legacy_summary_heading: &'static str,
    /// Whether the summary row's first column holds the type
    summary_has_type_column: bool,
}

/// Raw material for one member, independent of page generation
struct MemberSource<'a> {
    name_hint: String,
    signature: String,
    /// Element holding the description, tags and deprecation notice
    body: Option<ElementRef<'a>>,
}

impl<'a> MemberSource<'a> {
    fn from_detail(item: ElementRef<'a>) -> Self {
        Self {
            name_hint: select_first(item, &MEMBER_NAME)
                .map(element_text)
                .unwrap_or_default(),
            signature: select_first(item, &MEMBER_SIGNATURE)
                .map(element_text)
                .unwrap_or_default(),
            body: Some(item),
        }
    }

    fn from_summary(cell: ElementRef<'a>, with_type_column: bool) -> Self {
        let name_hint = cell
            .select(&LINK)
            .next()
            .map(element_text)
            .unwrap_or_default();

        let cell_text = cell
            .select(&CODE)
            .next()
            .map(element_text)
            .unwrap_or_else(|| element_text(cell));

        let type_text = if with_type_column {
            previous_element(cell)
                .filter(|prev| is_first_column(*prev))
                .map(element_text)
                .filter(|text| !text.is_empty())
        } else {
            None
        };

        let signature = match type_text {
            Some(type_text) => format!("{} {}", type_text, cell_text),
            None => cell_text,
        };

        // Legacy rows keep the description in the same cell
        let body = if cell.select(&BLOCK).next().is_some() {
            Some(cell)
        } else {
            next_element(cell)
        };

        Self {
            name_hint,
            signature,
            body,
        }
    }

    fn description(&self) -> Option<String> {
        let body = self.body?;
        body.select(&BLOCK)
            .map(element_text)
            .find(|text| !text.is_empty() && !text.starts_with("Deprecated"))
    }

    fn deprecation(&self) -> (bool, Option<String>) {
        let Some(body) = self.body else {
            return (false, None);
        };
        let deprecated = select_first(body, &DEPRECATION_BLOCK).is_some();
        let message = if deprecated {
            select_first(body, &DEPRECATION_COMMENT).and_then(non_empty_text)
        } else {
            None
        };
        (deprecated, message)
    }

    fn tag_entries(&self, label: &str) -> Vec<ElementRef<'a>> {
        match self.body {
            Some(body) => definition_entries(body, label),
            None => Vec::new(),
        }
    }
}

const METHOD_LAYOUT: MemberLayout = MemberLayout {
    legacy_detail_headings: &["Method Detail", "Method Details"],
    legacy_summary_heading: "Method Summary",
    summary_has_type_column: true,
};

const FIELD_LAYOUT: MemberLayout = MemberLayout {
    legacy_detail_headings: &[
        "Field Detail",
        "Field Details",
        "Enum Constant Detail",
        "Enum Constant Details",
    ],
    legacy_summary_heading: "Field Summary",
    summary_has_type_column: true,
};

const CONSTRUCTOR_LAYOUT: MemberLayout = MemberLayout {
    legacy_detail_headings: &["Constructor Detail", "Constructor Details"],
    legacy_summary_heading: "Constructor Summary",
    summary_has_type_column: false,
};

/// Collects member sources using the detail section, then the summary table
fn member_sources<'a>(
    document: &'a Html,
    layout: &MemberLayout,
    detail: &[Selector],
    summary: &[Selector],
) -> Vec<MemberSource<'a>> {
    let root = document.root_element();

    let mut items = select_all_first_match(root, detail);
    if items.is_empty() {
        items = legacy_section_items(document, layout.legacy_detail_headings);
    }
    if !items.is_empty() {
        return items.into_iter().map(MemberSource::from_detail).collect();
    }

    let mut cells = select_all_first_match(root, summary);
    if cells.is_empty() {
        cells = legacy_summary_cells(document, layout.legacy_summary_heading);
    }
    cells
        .into_iter()
        .map(|cell| MemberSource::from_summary(cell, layout.summary_has_type_column))
        .collect()
}

/// Finds the `li` parent of an `h3` with one of the given headings
fn legacy_sections<'a>(document: &'a Html, headings: &[&str]) -> Vec<ElementRef<'a>> {
    document
        .select(&SECTION_HEADING)
        .filter(|heading| {
            let text = element_text(*heading);
            headings.iter().any(|h| text.eq_ignore_ascii_case(h))
        })
        .filter_map(|heading| heading.parent().and_then(ElementRef::wrap))
        .collect()
}

/// Member `li` elements nested as `section > ul > li`
fn legacy_section_items<'a>(document: &'a Html, headings: &[&str]) -> Vec<ElementRef<'a>> {
    let mut items = Vec::new();
    for section in legacy_sections(document, headings) {
        for list in section
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().name() == "ul")
        {
            items.extend(
                list.children()
                    .filter_map(ElementRef::wrap)
                    .filter(|el| el.value().name() == "li"),
            );
        }
    }
    items
}

fn legacy_summary_cells<'a>(document: &'a Html, heading: &str) -> Vec<ElementRef<'a>> {
    legacy_sections(document, &[heading])
        .into_iter()
        .next()
        .map(|section| select_all_first_match(section, &LEGACY_SUMMARY_CELL))
        .unwrap_or_default()
}

fn previous_element(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element.prev_siblings().find_map(ElementRef::wrap)
}

fn next_element(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element.next_siblings().find_map(ElementRef::wrap)
}

fn is_first_column(element: ElementRef<'_>) -> bool {
    element
        .value()
        .attr("class")
        .map_or(false, |class| class.contains("col-first") || class.contains("colFirst"))
}

/// Returns the `dd` entries that follow the `dt` whose text starts with `label`
fn definition_entries<'a>(body: ElementRef<'a>, label: &str) -> Vec<ElementRef<'a>> {
    let Some(term) = body
        .select(&DT)
        .find(|dt| element_text(*dt).starts_with(label))
    else {
        return Vec::new();
    };

    term.next_siblings()
        .filter_map(ElementRef::wrap)
        .take_while(|el| el.value().name() != "dt")
        .filter(|el| el.value().name() == "dd")
        .collect()
}

/// Parses a `Parameters:` entry of the form `name - description` or `Type name - description`
fn parse_param_entry(text: &str) -> Option<Parameter> {
    let (left, description) = text.split_once(" - ")?;
    let left = left.trim();
    let (param_type, name) = match left.split_once(char::is_whitespace) {
        Some((param_type, name)) => (param_type.trim().to_string(), name.trim().to_string()),
        None => (String::new(), left.to_string()),
    };
    if name.is_empty() {
        return None;
    }
    Some(Parameter {
        name,
        param_type,
        description: description.trim().to_string(),
    })
}

/// Text between the first `(` and the last `)`
fn parameter_list(signature: &str) -> Option<&str> {
    let open = signature.find('(')?;
    let close = signature.rfind(')')?;
    (close > open).then(|| &signature[open + 1..close])
}

/// Declared `(type, name)` pairs from a signature's parameter list
fn signature_params(signature: &str) -> Vec<(String, String)> {
    let Some(list) = parameter_list(signature) else {
        return Vec::new();
    };

    split_top_level_commas(list)
        .iter()
        .filter_map(|part| {
            let mut tokens: Vec<String> = split_declaration(part)
                .into_iter()
                .filter(|t| !t.starts_with('@') && t != "final")
                .collect();
            if tokens.len() < 2 {
                return None;
            }
            let name = tokens.pop()?;
            Some((tokens.join(" "), name))
        })
        .collect()
}

/// Documented parameters, typed from the signature where the tag omits the type
fn collect_parameters(source: &MemberSource<'_>) -> Vec<Parameter> {
    let declared = signature_params(&source.signature);

    let mut parameters: Vec<Parameter> = source
        .tag_entries("Parameters")
        .into_iter()
        .filter_map(|dd| parse_param_entry(&element_text(dd)))
        .collect();

    if parameters.is_empty() {
        return declared
            .into_iter()
            .map(|(param_type, name)| Parameter {
                name,
                param_type,
                description: String::new(),
            })
            .collect();
    }

    for parameter in parameters.iter_mut().filter(|p| p.param_type.is_empty()) {
        if let Some((param_type, _)) = declared.iter().find(|(_, name)| *name == parameter.name) {
            parameter.param_type = param_type.clone();
        }
    }

    parameters
}

/// Exception types from the `Throws:` tag, else from the signature's `throws` clause
fn collect_throws(source: &MemberSource<'_>) -> Vec<String> {
    let documented: Vec<String> = source
        .tag_entries("Throws")
        .into_iter()
        .filter_map(|dd| {
            let linked = dd.select(&LINK).next().and_then(non_empty_text);
            linked.or_else(|| {
                let text = element_text(dd);
                let head = text.split(" - ").next().unwrap_or(&text).trim();
                head.split_whitespace().next().map(str::to_string)
            })
        })
        .collect();

    if !documented.is_empty() {
        return documented;
    }

    source
        .signature
        .rfind(')')
        .map(|close| &source.signature[close + 1..])
        .and_then(|tail| tail.trim().strip_prefix("throws"))
        .map(|list| {
            split_top_level_commas(list)
                .into_iter()
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

/// Annotations written before the member name
fn leading_annotations(prefix: &str) -> Vec<String> {
    split_declaration(prefix)
        .iter()
        .filter_map(|token| annotation_name(token))
        .collect()
}

fn is_identifier(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

fn build_method(source: &MemberSource<'_>) -> Option<Method> {
    let captures = SIGNATURE.captures(&source.signature);

    let parsed_name = captures
        .as_ref()
        .and_then(|c| c.get(2))
        .map(|m| m.as_str().to_string());
    let prefix = captures
        .as_ref()
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .unwrap_or("");

    let name = if is_identifier(&source.name_hint) {
        source.name_hint.clone()
    } else {
        parsed_name.unwrap_or_default()
    };
    if name.is_empty() {
        tracing::debug!("Skipping method without a name: {:?}", source.signature);
        return None;
    }

    let return_type = split_declaration(prefix)
        .into_iter()
        .filter(|token| !token.starts_with('@'))
        .last();

    let description = source.description();
    let summary = description.as_deref().and_then(extract_first_sentence);
    let (deprecated, deprecated_message) = source.deprecation();

    Some(Method {
        name,
        signature: source.signature.clone(),
        return_type,
        summary,
        description,
        parameters: collect_parameters(source),
        throws_list: collect_throws(source),
        annotations: leading_annotations(prefix),
        deprecated,
        deprecated_message,
    })
}

fn build_field(source: &MemberSource<'_>) -> Option<Field> {
    // Annotation arguments may contain `=`, so annotations go before the split
    let declaration = split_declaration(&source.signature)
        .into_iter()
        .filter(|token| !token.starts_with('@'))
        .collect::<Vec<_>>()
        .join(" ");

    let (declaration, constant_value) = match declaration.split_once('=') {
        Some((declaration, value)) => {
            let value = value.trim().trim_end_matches(';').trim();
            (
                declaration.to_string(),
                (!value.is_empty()).then(|| value.to_string()),
            )
        }
        None => (declaration, None),
    };

    let tokens = split_declaration(&declaration);

    let modifiers: Vec<&str> = tokens
        .iter()
        .map(String::as_str)
        .filter(|token| FIELD_MODIFIERS.contains(token))
        .collect();
    let mut rest = tokens
        .iter()
        .map(String::as_str)
        .filter(|token| !FIELD_MODIFIERS.contains(token));
    let field_type = rest.next().map(str::to_string);
    let parsed_name = rest.next().map(|name| name.trim_end_matches(';').to_string());

    let name = if is_identifier(&source.name_hint) {
        source.name_hint.clone()
    } else {
        parsed_name.unwrap_or_default()
    };
    if name.is_empty() {
        tracing::debug!("Skipping field without a name: {:?}", source.signature);
        return None;
    }

    let summary = source.description().as_deref().and_then(extract_first_sentence);
    let (deprecated, _) = source.deprecation();

    Some(Field {
        name,
        field_type,
        modifiers: (!modifiers.is_empty()).then(|| modifiers.join(" ")),
        summary,
        deprecated,
        constant_value,
    })
}

fn build_constructor(source: &MemberSource<'_>) -> Option<Constructor> {
    if source.signature.trim().is_empty() {
        tracing::debug!("Skipping constructor without a signature: {:?}", source.name_hint);
        return None;
    }

    let prefix = source
        .signature
        .find('(')
        .map(|open| &source.signature[..open])
        .unwrap_or("");

    let summary = source.description().as_deref().and_then(extract_first_sentence);
    let (deprecated, _) = source.deprecation();

    Some(Constructor {
        signature: source.signature.clone(),
        summary,
        parameters: collect_parameters(source),
        throws_list: collect_throws(source),
        annotations: leading_annotations(prefix),
        deprecated,
    })
}

/// Extracts documented methods, in page order
pub fn parse_methods(document: &Html) -> Vec<Method> {
    member_sources(document, &METHOD_LAYOUT, &METHOD_DETAIL, &METHOD_SUMMARY)
        .iter()
        .filter_map(build_method)
        .collect()
}

/// Extracts documented fields and enum constants, in page order
pub fn parse_fields(document: &Html) -> Vec<Field> {
    member_sources(document, &FIELD_LAYOUT, &FIELD_DETAIL, &FIELD_SUMMARY)
        .iter()
        .filter_map(build_field)
        .collect()
}

/// Extracts documented constructors, in page order
pub fn parse_constructors(document: &Html) -> Vec<Constructor> {
    member_sources(
        document,
        &CONSTRUCTOR_LAYOUT,
        &CONSTRUCTOR_DETAIL,
        &CONSTRUCTOR_SUMMARY,
    )
    .iter()
    .filter_map(build_constructor)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODERN_MEMBERS: &str = r#"<html><body>
<section class="constructor-details" id="constructor-detail"><ul class="member-list">
<li><section class="detail" id="&lt;init&gt;(java.lang.String)">
<h3>Widget</h3>
<div class="member-signature"><span class="modifiers">public</span>&nbsp;<span class="element-name">Widget</span><wbr><span class="parameters">(<a href="String.html">String</a>&nbsp;name)</span></div>
<div class="block">Creates a widget.</div>
<dl class="notes"><dt>Parameters:</dt><dd><code>name</code> - the widget name</dd></dl>
</section></li></ul></section>
<section class="field-details" id="field-detail"><ul class="member-list">
<li><section class="detail" id="MAX_SIZE"><h3>MAX_SIZE</h3>
<div class="member-signature"><span class="modifiers">public static final</span>&nbsp;<span class="return-type">int</span>&nbsp;<span class="element-name">MAX_SIZE</span></div>
<div class="block">Largest size. Really.</div></section></li>
<li><section class="detail" id="cache"><h3>cache</h3>
<div class="member-signature"><span class="annotations">@Nullable</span>
<span class="modifiers">protected transient</span>&nbsp;<span class="return-type">Map&lt;String, List&lt;Integer&gt;&gt;</span>&nbsp;<span class="element-name">cache</span></div>
</section></li></ul></section>
<section class="method-details" id="method-detail"><ul class="member-list">
<li><section class="detail" id="resize(int,int)"><h3>resize</h3>
<div class="member-signature"><span class="annotations">@Deprecated(since="2.0")
</span><span class="modifiers">public</span>&nbsp;<span class="return-type">Map&lt;String, Object&gt;</span>&nbsp;<span class="element-name">resize</span><wbr><span class="parameters">(int&nbsp;width,
 int&nbsp;height)</span>
                      throws <span class="exceptions"><a href="IOException.html">IOException</a></span></div>
<div class="deprecation-block"><span class="deprecated-label">Deprecated.</span>
<div class="deprecation-comment">Use scale instead.</div></div>
<div class="block">Resizes the widget. Both dimensions change.</div>
<dl class="notes"><dt>Parameters:</dt>
<dd><code>width</code> - new width</dd>
<dd><code>height</code> - new height</dd>
<dd>malformed entry</dd>
<dt>Returns:</dt><dd>the old size</dd>
<dt>Throws:</dt><dd><code><a href="IOException.html">IOException</a></code> - if resizing fails</dd></dl>
</section></li>
<li><section class="detail" id="blank()"><h3></h3><div class="member-signature"></div></section></li>
</ul></section></body></html>"#;

    const LEGACY_MEMBERS: &str = r#"<html><body><div class="details"><ul class="blockList"><li class="blockList">
<ul class="blockList"><li class="blockList"><a name="method.detail"></a><h3>Method Detail</h3>
<a name="run--"></a>
<ul class="blockList"><li class="blockList"><h4>run</h4>
<pre>public&nbsp;void&nbsp;run()</pre>
<div class="block">Runs it.</div></li></ul>
<a name="count-java.lang.String-"></a>
<ul class="blockListLast"><li class="blockList"><h4>count</h4>
<pre>public static&nbsp;int&nbsp;count(java.lang.String&nbsp;text)</pre>
<div class="block">Counts things.</div>
<dl><dt><span class="paramLabel">Parameters:</span></dt><dd><code>text</code> - input text</dd></dl>
</li></ul></li></ul></li></ul></div></body></html>"#;

    const SUMMARY_ONLY: &str = r##"<html><body>
<section class="method-summary" id="method-summary"><div class="summary-table three-column-summary">
<div class="table-header col-first">Modifier and Type</div>
<div class="table-header col-second">Method</div>
<div class="table-header col-last">Description</div>
<div class="col-first even-row-color"><code>boolean</code></div>
<div class="col-second even-row-color"><code><a href="#isEmpty()" class="member-name-link">isEmpty</a>()</code></div>
<div class="col-last even-row-color"><div class="block">Whether it is empty.</div></div>
</div></section></body></html>"##;

    fn document(html: &str) -> Html {
        Html::parse_document(html)
    }

    #[test]
    fn test_modern_methods() {
        let methods = parse_methods(&document(MODERN_MEMBERS));
        assert_eq!(methods.len(), 1, "blank member must be skipped");

        let resize = &methods[0];
        assert_eq!(resize.name, "resize");
        assert_eq!(resize.return_type.as_deref(), Some("Map<String, Object>"));
        assert_eq!(resize.summary.as_deref(), Some("Resizes the widget."));
        assert_eq!(resize.parameters.len(), 2);
        assert_eq!(resize.parameters[0].name, "width");
        assert_eq!(resize.parameters[0].param_type, "int");
        assert_eq!(resize.parameters[0].description, "new width");
        assert_eq!(resize.parameters[1].name, "height");
        assert_eq!(resize.throws_list, vec!["IOException"]);
        assert_eq!(resize.annotations, vec!["@Deprecated"]);
        assert!(resize.deprecated);
        assert_eq!(resize.deprecated_message.as_deref(), Some("Use scale instead."));
    }

    #[test]
    fn test_modern_fields() {
        let fields = parse_fields(&document(MODERN_MEMBERS));
        assert_eq!(fields.len(), 2);

        assert_eq!(fields[0].name, "MAX_SIZE");
        assert_eq!(fields[0].field_type.as_deref(), Some("int"));
        assert_eq!(fields[0].modifiers.as_deref(), Some("public static final"));
        assert_eq!(fields[0].summary.as_deref(), Some("Largest size."));

        assert_eq!(fields[1].name, "cache");
        assert_eq!(
            fields[1].field_type.as_deref(),
            Some("Map<String, List<Integer>>")
        );
        assert_eq!(fields[1].modifiers.as_deref(), Some("protected transient"));
    }

    #[test]
    fn test_modern_constructors() {
        let constructors = parse_constructors(&document(MODERN_MEMBERS));
        assert_eq!(constructors.len(), 1);
        assert_eq!(constructors[0].signature, "public Widget(String name)");
        assert_eq!(constructors[0].summary.as_deref(), Some("Creates a widget."));
        assert_eq!(constructors[0].parameters.len(), 1);
        assert_eq!(constructors[0].parameters[0].name, "name");
        assert_eq!(constructors[0].parameters[0].param_type, "String");
    }

    #[test]
    fn test_legacy_methods() {
        let methods = parse_methods(&document(LEGACY_MEMBERS));
        assert_eq!(methods.len(), 2);
        assert_eq!(methods[0].name, "run");
        assert_eq!(methods[0].signature, "public void run()");
        assert_eq!(methods[0].return_type.as_deref(), Some("void"));
        assert!(methods[0].parameters.is_empty());

        assert_eq!(methods[1].name, "count");
        assert_eq!(methods[1].return_type.as_deref(), Some("int"));
        assert_eq!(methods[1].parameters.len(), 1);
        assert_eq!(methods[1].parameters[0].name, "text");
        assert_eq!(methods[1].parameters[0].param_type, "java.lang.String");
        assert_eq!(methods[1].parameters[0].description, "input text");
    }

    #[test]
    fn test_summary_fallback() {
        let methods = parse_methods(&document(SUMMARY_ONLY));
        assert_eq!(methods.len(), 1);
        assert_eq!(methods[0].name, "isEmpty");
        assert_eq!(methods[0].signature, "boolean isEmpty()");
        assert_eq!(methods[0].return_type.as_deref(), Some("boolean"));
        assert_eq!(methods[0].summary.as_deref(), Some("Whether it is empty."));
    }

    #[test]
    fn test_field_constant_value() {
        let source = MemberSource {
            name_hint: String::new(),
            signature: "public static final String NAME = \"widget\";".to_string(),
            body: None,
        };
        let field = build_field(&source).unwrap();
        assert_eq!(field.name, "NAME");
        assert_eq!(field.field_type.as_deref(), Some("String"));
        assert_eq!(field.constant_value.as_deref(), Some("\"widget\""));
    }

    #[test]
    fn test_annotated_field_keeps_type() {
        let html = r#"<html><body>
<section class="field-details" id="field-detail"><ul class="member-list">
<li><section class="detail" id="OLD"><h3>OLD</h3>
<div class="member-signature"><span class="annotations">@Deprecated(since="9")</span>
<span class="modifiers">public static final</span>&nbsp;<span class="return-type">int</span>&nbsp;<span class="element-name">OLD</span></div>
</section></li></ul></section></body></html>"#;

        let fields = parse_fields(&document(html));
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "OLD");
        assert_eq!(fields[0].field_type.as_deref(), Some("int"));
        assert_eq!(fields[0].modifiers.as_deref(), Some("public static final"));
        assert_eq!(fields[0].constant_value, None);
    }

    #[test]
    fn test_annotated_constant_value() {
        let source = MemberSource {
            name_hint: String::new(),
            signature: "@Native(kind = \"x\") public static final long LIMIT = 1024L;".to_string(),
            body: None,
        };
        let field = build_field(&source).unwrap();
        assert_eq!(field.name, "LIMIT");
        assert_eq!(field.field_type.as_deref(), Some("long"));
        assert_eq!(field.constant_value.as_deref(), Some("1024L"));
    }

    #[test]
    fn test_param_entry_parsing() {
        let param = parse_param_entry("int count - how many").unwrap();
        assert_eq!(param.param_type, "int");
        assert_eq!(param.name, "count");
        assert_eq!(param.description, "how many");

        let param = parse_param_entry("count - how many").unwrap();
        assert_eq!(param.param_type, "");
        assert_eq!(param.name, "count");

        assert!(parse_param_entry("no separator here").is_none());
    }

    #[test]
    fn test_signature_throws_clause() {
        let source = MemberSource {
            name_hint: "load".to_string(),
            signature: "public void load(Path path) throws IOException, ParseException".to_string(),
            body: None,
        };
        let method = build_method(&source).unwrap();
        assert_eq!(method.throws_list, vec!["IOException", "ParseException"]);
        assert_eq!(method.parameters[0].name, "path");
        assert_eq!(method.parameters[0].param_type, "Path");
    }

    #[test]
    fn test_enum_constants_are_fields() {
        let html = r#"<html><body>
<section class="constant-details" id="enum-constant-detail"><ul class="member-list">
<li><section class="detail" id="RED"><h3>RED</h3>
<div class="member-signature"><span class="modifiers">public static final</span>&nbsp;<span class="return-type"><a href="Color.html">Color</a></span>&nbsp;<span class="element-name">RED</span></div>
<div class="block">The color red.</div></section></li></ul></section>
<section class="field-details" id="field-detail"><ul class="member-list">
<li><section class="detail" id="DEFAULT"><h3>DEFAULT</h3>
<div class="member-signature"><span class="modifiers">public static</span>&nbsp;<span class="return-type">Color</span>&nbsp;<span class="element-name">DEFAULT</span></div>
</section></li></ul></section></body></html>"#;

        let fields = parse_fields(&document(html));
        let names: Vec<_> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["RED", "DEFAULT"]);
        assert_eq!(fields[0].field_type.as_deref(), Some("Color"));
        assert_eq!(fields[0].summary.as_deref(), Some("The color red."));
    }

    #[test]
    fn test_no_members_on_empty_page() {
        let doc = document("");
        assert!(parse_methods(&doc).is_empty());
        assert!(parse_fields(&doc).is_empty());
        assert!(parse_constructors(&doc).is_empty());
    }
}
