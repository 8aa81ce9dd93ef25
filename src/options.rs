//! Rendering options.

/// The full behavioral contract for a rendering call.
#[derive(Debug, Clone, Copy)]
pub struct FormatOptions<'a> {
    pub pretty: bool,
    pub one_result_column_per_line: bool,
    pub lower_keyword: bool,
    pub upper_type: bool,
    pub simple_len: usize,
    pub padding: &'a str,
    pub unterminated: bool,
}

impl Default for FormatOptions<'_> {
    fn default() -> Self {
        Self::compact()
    }
}

impl FormatOptions<'_> {
    /// Single-line, minimal whitespace.
    pub const fn compact() -> Self {
        FormatOptions {
            pretty: false,
            one_result_column_per_line: false,
            lower_keyword: false,
            upper_type: false,
            simple_len: 50,
            padding: "    ",
            unterminated: false,
        }
    }

    /// Multi-line, indented, one SELECT target per line.
    pub const fn pretty() -> Self {
        FormatOptions {
            pretty: true,
            one_result_column_per_line: true,
            lower_keyword: false,
            upper_type: false,
            simple_len: 50,
            padding: "    ",
            unterminated: false,
        }
    }

    /// For rendering a fragment (e.g. a bare expression) rather than a full
    /// statement: compact, no trailing `;`. Mirrors the original's
    /// `DefaultFragmentFormat`, which is its own zero-valued literal, not a
    /// variant of the pretty preset.
    pub const fn pretty_fragment() -> Self {
        FormatOptions {
            pretty: false,
            one_result_column_per_line: false,
            lower_keyword: false,
            upper_type: false,
            simple_len: 0,
            padding: "",
            unterminated: true,
        }
    }
}
