//! Compiled CSS selectors and regular expressions used by the page parsers
//!
//! Lists are ordered: the first selector that matches wins, so modern (Java 11+)
//! layouts come before legacy (Java 8) ones.

use regex::Regex;
use scraper::Selector;
use std::sync::LazyLock;

macro_rules! selector {
    ($name:ident, $css:expr) => {
        pub(crate) static $name: LazyLock<Selector> =
            LazyLock::new(|| Selector::parse($css).unwrap());
    };
}

macro_rules! selectors {
    ($name:ident, [$($css:expr),+ $(,)?]) => {
        pub(crate) static $name: LazyLock<Vec<Selector>> =
            LazyLock::new(|| vec![$(Selector::parse($css).unwrap()),+]);
    };
}

macro_rules! regex {
    ($name:ident, $regex:expr) => {
        pub(crate) static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($regex).unwrap());
    };
}

// Generic building blocks
selector!(TITLE, "title");
selector!(CANONICAL_LINK, "link[rel='canonical'][href]");
selector!(ANCHOR, "a[href]");
selector!(LINK, "a");
selector!(BLOCK, ".block");
selector!(DT, "dt");

// Package summary pages
selectors!(PACKAGE_LABEL, [".header h1.title", "h1.title", ".header .title", "h1"]);
selectors!(
    PACKAGE_DESCRIPTION,
    [
        ".package-description .block",
        "#package-description .block",
        ".docSummary .block",
        ".contentContainer > .block",
        ".block",
    ]
);
selectors!(
    CLASS_TABLE_LINKS,
    [
        ".type-summary a[href]",
        ".summary-table a[href]",
        "table.typeSummary a[href]",
        "table.classes a[href]",
        ".memberSummary a[href]",
    ]
);

// Class pages
selectors!(TYPE_NAME, [".type-signature .element-name", ".type-signature .type-name-label"]);
selector!(TYPE_MODIFIERS, ".type-signature .modifiers");
selectors!(TYPE_SIGNATURE_BLOCK, [".type-signature", ".description pre", ".type-name-link"]);
selectors!(
    EXTENDS_IMPLEMENTS,
    [
        ".type-signature .extends-implements",
        ".extends-implements",
        ".description pre",
    ]
);
selectors!(CLASS_HEADER, ["h1.title", "h2.title", ".header .title", "h1"]);
selectors!(SUB_TITLE, [".sub-title", ".subTitle", ".header .sub-title"]);
selectors!(
    CLASS_DESCRIPTION,
    [
        ".class-description .block",
        ".description .block",
        ".type-signature + .block",
    ]
);
selectors!(CLASS_DESCRIPTION_SCOPE, [".class-description", "#class-description", ".description"]);
selectors!(
    DEPRECATION_BLOCK,
    [
        ".deprecation-block",
        ".deprecationBlock",
        ".deprecatedContent",
        ".deprecated-label",
        ".deprecatedLabel",
    ]
);
selectors!(DEPRECATION_COMMENT, [".deprecation-comment", ".deprecationComment"]);

// Members
selectors!(MEMBER_SIGNATURE, [".member-signature", ".signature", "pre"]);
selectors!(MEMBER_NAME, ["h3", "h4"]);
selectors!(
    METHOD_DETAIL,
    ["#method-detail .member-list > li", ".method-details .member-list > li"]
);
selectors!(
    FIELD_DETAIL,
    [
        // Enum constants are listed as fields, in page order
        "#enum-constant-detail .member-list > li, #field-detail .member-list > li",
        ".constant-details .member-list > li, .field-details .member-list > li",
    ]
);
selectors!(
    CONSTRUCTOR_DETAIL,
    [
        "#constructor-detail .member-list > li",
        ".constructor-details .member-list > li",
    ]
);
selectors!(
    METHOD_SUMMARY,
    [
        "#method-summary .summary-table .col-second:not(.table-header)",
        ".method-summary .summary-table .col-second:not(.table-header)",
    ]
);
selectors!(
    FIELD_SUMMARY,
    [
        "#field-summary .summary-table .col-second:not(.table-header)",
        ".field-summary .summary-table .col-second:not(.table-header)",
    ]
);
selectors!(
    CONSTRUCTOR_SUMMARY,
    [
        "#constructor-summary .summary-table .col-constructor-name:not(.table-header)",
        ".constructor-summary .summary-table .col-constructor-name:not(.table-header)",
    ]
);

// Legacy pages group members under an `h3` heading inside a `li.blockList`
selector!(SECTION_HEADING, "h3");
selectors!(LEGACY_SUMMARY_CELL, [".colSecond", ".colConstructorName", ".colOne", ".colLast"]);
selector!(CODE, "code");

regex!(SIGNATURE, r"^(.+?)\s+(\w+)\s*\((.*)\)");
