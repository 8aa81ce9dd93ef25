//! Output builder: accumulates token fragments with space-suppression,
//! line feeds, and indentation.

use crate::keyword;
use crate::options::FormatOptions;

pub struct Builder<'a> {
    opt: FormatOptions<'a>,
    tokens: Vec<String>,
}

impl<'a> Builder<'a> {
    pub fn new(opt: FormatOptions<'a>) -> Self {
        Builder {
            opt,
            tokens: Vec::new(),
        }
    }

    /// Trims trailing spaces, drops the token if it becomes empty, appends.
    pub fn append(&mut self, s: &str) -> &mut Self {
        let trimmed = s.trim_end_matches(' ');
        if !trimmed.is_empty() {
            self.tokens.push(trimmed.to_string());
        }
        self
    }

    pub fn append_all(&mut self, parts: &[&str]) -> &mut Self {
        for p in parts {
            self.append(p);
        }
        self
    }

    /// In pretty mode, splits `text` on `\n` and prepends one indentation
    /// level to each non-empty line. In compact mode, equivalent to
    /// [`Builder::append`].
    pub fn append_padded(&mut self, text: &str) -> &mut Self {
        if self.opt.pretty {
            for line in text.split('\n') {
                if line.is_empty() {
                    continue;
                }
                self.tokens.push(format!("{}{}", self.opt.padding, line));
            }
            self
        } else {
            self.append(text)
        }
    }

    /// Concatenates `suffix` directly onto the last token, no separator.
    pub fn add_to_last(&mut self, suffix: &str) -> &mut Self {
        match self.tokens.last_mut() {
            Some(last) => last.push_str(suffix),
            None => self.tokens.push(suffix.to_string()),
        }
        self
    }

    /// Appends `\n` in pretty mode; a no-op in compact mode.
    pub fn line_feed(&mut self) -> &mut Self {
        if self.opt.pretty {
            self.tokens.push("\n".to_string());
        }
        self
    }

    pub fn keyword(&mut self, s: &str) -> &mut Self {
        let cased = keyword::case_keyword(s, self.opt.lower_keyword);
        self.append(&cased)
    }

    pub fn keyword_if(&mut self, s: &str, cond: bool) -> &mut Self {
        if cond {
            self.keyword(s)
        } else {
            self
        }
    }

    pub fn keyword_if_else(&mut self, when_true: &str, when_false: &str, cond: bool) -> &mut Self {
        if cond {
            self.keyword(when_true)
        } else {
            self.keyword(when_false)
        }
    }

    /// Applies `quote_if_needed` to each part and joins with `.`.
    pub fn identifier(&mut self, names: &[&str]) -> &mut Self {
        let joined = names
            .iter()
            .map(|n| keyword::quote_if_needed(n))
            .collect::<Vec<_>>()
            .join(".");
        self.append(&joined)
    }

    /// Materializes the accumulated tokens, inserting `sep` between adjacent
    /// tokens only when neither side already carries whitespace there.
    pub fn join(&self, sep: &str) -> String {
        let mut out = String::new();
        for tok in &self.tokens {
            if !out.is_empty() {
                let prev_has_ws = out.ends_with(|c: char| c.is_whitespace());
                let next_has_ws = tok.starts_with(|c: char| c.is_whitespace());
                if !prev_has_ws && !next_has_ws {
                    out.push_str(sep);
                }
            }
            out.push_str(tok);
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_inserts_separator_between_bare_tokens() {
        let opt = FormatOptions::compact();
        let mut b = Builder::new(opt);
        b.append("SELECT").append("*").append("FROM").append("foo");
        assert_eq!(b.join(" "), "SELECT * FROM foo");
    }

    #[test]
    fn join_suppresses_double_space_around_prespaced_fragment() {
        let opt = FormatOptions::compact();
        let mut b = Builder::new(opt);
        b.append("a").append("AND ").append("b");
        assert_eq!(b.join(" "), "a AND b");
    }

    #[test]
    fn add_to_last_has_no_separator() {
        let opt = FormatOptions::compact();
        let mut b = Builder::new(opt);
        b.append("foo").add_to_last("()");
        assert_eq!(b.join(" "), "foo()");
    }

    #[test]
    fn append_drops_empty_tokens() {
        let opt = FormatOptions::compact();
        let mut b = Builder::new(opt);
        b.append("a").append("").append("b");
        assert_eq!(b.join(" "), "a b");
    }
}
