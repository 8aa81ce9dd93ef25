//! Keyword & identifier policy.
//!
//! Reserved-word membership, identifier quoting, and keyword casing. The
//! reserved-word set only needs membership, not the PostgreSQL keyword
//! category byte, so it is modeled as a plain frozen set.

use std::sync::LazyLock;

/// PostgreSQL reserved keywords (RESERVED_KEYWORD / TYPE_FUNC_NAME_KEYWORD in
/// `kwlist.h`) that cannot be used as a bare identifier and must be quoted.
/// Lowercase; membership test is case-insensitive via `is_reserved`.
static RESERVED_WORDS: LazyLock<std::collections::HashSet<&'static str>> = LazyLock::new(|| {
    [
        "all", "analyse", "analyze", "and", "any", "array", "as", "asc",
        "asymmetric", "both", "case", "cast", "check", "collate", "column",
        "concurrently", "constraint", "create", "current_catalog", "current_date",
        "current_role", "current_time", "current_timestamp", "current_user",
        "default", "deferrable", "desc", "distinct", "do", "else", "end",
        "except", "false", "fetch", "for", "foreign", "freeze", "from", "full",
        "grant", "group", "having", "ilike", "in", "initially", "inner",
        "intersect", "into", "is", "isnull", "join", "lateral", "leading",
        "left", "like", "limit", "localtime", "localtimestamp", "natural",
        "not", "notnull", "null", "offset", "on", "only", "or", "order",
        "outer", "over", "overlaps", "placing", "primary", "references",
        "returning", "right", "select", "session_user", "similar", "some",
        "symmetric", "table", "tablesample", "then", "to", "trailing", "true",
        "union", "unique", "user", "using", "variadic", "verbose", "when",
        "where", "window", "with",
    ]
    .into_iter()
    .collect()
});

/// True if `word` is a PostgreSQL reserved keyword (case-insensitive).
pub fn is_reserved(word: &str) -> bool {
    RESERVED_WORDS.contains(word.to_lowercase().as_str())
}

/// True when `name` must be quoted: contains `-` or `.`, or any uppercase
/// code point. False when `name` already begins with `"` (idempotent).
pub fn requires_quote(name: &str) -> bool {
    if name.starts_with('"') {
        return false;
    }
    name.contains('-') || name.contains('.') || name.chars().any(|c| c.is_uppercase())
}

/// Double-quotes `name` if reserved or if it requires quoting. Dotted names
/// are split on `.` and each part quoted independently, then rejoined.
pub fn quote_if_needed(name: &str) -> String {
    if name.contains('.') {
        return name
            .split('.')
            .map(quote_part)
            .collect::<Vec<_>>()
            .join(".");
    }
    quote_part(name)
}

fn quote_part(part: &str) -> String {
    if is_reserved(part) || requires_quote(part) {
        format!("\"{part}\"")
    } else {
        part.to_string()
    }
}

/// Upper- or lower-cases `s` per the `lower_keyword` option.
pub fn case_keyword(s: &str, lower_keyword: bool) -> String {
    if lower_keyword {
        s.to_lowercase()
    } else {
        s.to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_word_membership() {
        assert!(is_reserved("select"));
        assert!(is_reserved("SELECT"));
        assert!(!is_reserved("foo"));
    }

    #[test]
    fn quoting_triggers() {
        assert!(requires_quote("Foo"));
        assert!(requires_quote("a-b"));
        assert!(requires_quote("a.b"));
        assert!(!requires_quote("foo"));
        assert!(!requires_quote("\"Foo\""));
    }

    #[test]
    fn quote_if_needed_idempotent_on_already_quoted() {
        let once = quote_if_needed("Foo");
        assert_eq!(once, "\"Foo\"");
        assert!(!requires_quote(&once));
    }

    #[test]
    fn quote_if_needed_dotted() {
        assert_eq!(quote_if_needed("public.foo"), "public.foo");
        assert_eq!(quote_if_needed("Public.Foo"), "\"Public\".\"Foo\"");
    }

    #[test]
    fn quote_if_needed_reserved() {
        assert_eq!(quote_if_needed("select"), "\"select\"");
        assert_eq!(quote_if_needed("widget"), "widget");
    }

    #[test]
    fn case_keyword_respects_option() {
        assert_eq!(case_keyword("select", false), "SELECT");
        assert_eq!(case_keyword("select", true), "select");
    }
}
