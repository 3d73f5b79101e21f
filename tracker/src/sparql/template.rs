//! Parameterized SPARQL query construction.
//!
//! Query text is fixed at compile time and carries `$name` placeholders.
//! Values are bound as typed RDF terms and rendered in a single pass, so a
//! bound value is never re-scanned for placeholders and can only ever occupy
//! the term position it was bound to.

use std::fmt;

use crate::error::{Result, TrackerError};

/// A value bound to a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Term {
    /// Rendered as `<iri>`; rejected if it contains characters the `IRIREF`
    /// production forbids.
    Iri(String),
    /// Rendered as a double-quoted string literal with `ECHAR` escapes.
    Literal(String),
}

impl Term {
    fn render(&self, out: &mut String) -> Result<()> {
        match self {
            Term::Iri(iri) => {
                validate_iri(iri)?;
                out.push('<');
                out.push_str(iri);
                out.push('>');
            }
            Term::Literal(value) => {
                out.push('"');
                for c in value.chars() {
                    match c {
                        '\\' => out.push_str("\\\\"),
                        '"' => out.push_str("\\\""),
                        '\n' => out.push_str("\\n"),
                        '\r' => out.push_str("\\r"),
                        '\t' => out.push_str("\\t"),
                        '\u{08}' => out.push_str("\\b"),
                        '\u{0C}' => out.push_str("\\f"),
                        other => out.push(other),
                    }
                }
                out.push('"');
            }
        }
        Ok(())
    }
}

/// Checks an IRI against the characters `IRIREF` excludes:
/// `<>"{}|^\` and backtick, plus anything in `U+0000..=U+0020`.
fn validate_iri(iri: &str) -> Result<()> {
    if iri.is_empty() {
        return Err(TrackerError::InvalidTerm("IRI must not be empty".to_string()));
    }
    if let Some(bad) = iri
        .chars()
        .find(|c: &char| {
            matches!(*c, '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\') || *c <= ' '
        })
    {
        return Err(TrackerError::InvalidTerm(format!(
            "IRI contains forbidden character {bad:?}"
        )));
    }
    Ok(())
}

/// A fixed query text plus the terms bound to its placeholders.
#[derive(Debug, Clone)]
pub struct QueryTemplate {
    text: &'static str,
    bindings: Vec<(&'static str, Term)>,
}

impl QueryTemplate {
    pub fn new(text: &'static str) -> Self {
        Self {
            text,
            bindings: Vec::new(),
        }
    }

    pub fn bind_iri(mut self, name: &'static str, iri: impl Into<String>) -> Self {
        self.bindings.push((name, Term::Iri(iri.into())));
        self
    }

    pub fn bind_literal(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.bindings.push((name, Term::Literal(value.into())));
        self
    }

    fn lookup(&self, name: &str) -> Option<&Term> {
        self.bindings
            .iter()
            .rev()
            .find(|(bound, _)| *bound == name)
            .map(|(_, term)| term)
    }

    /// Substitutes every placeholder. An unbound placeholder is a bug in the
    /// calling code and is reported as [`TrackerError::Internal`]; a term
    /// that cannot be rendered safely is [`TrackerError::InvalidTerm`].
    pub fn render(&self) -> Result<PreparedQuery> {
        let mut out = String::with_capacity(self.text.len() + 64);
        let mut rest = self.text;

        while let Some(pos) = rest.find('$') {
            out.push_str(&rest[..pos]);
            let after = &rest[pos + 1..];
            let name_len = after
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(after.len());
            let name = &after[..name_len];
            if name.is_empty() {
                return Err(TrackerError::Internal(format!(
                    "dangling '$' in query template at byte {}",
                    self.text.len() - rest.len() + pos
                )));
            }
            let term = self.lookup(name).ok_or_else(|| {
                TrackerError::Internal(format!("unbound query parameter ${name}"))
            })?;
            term.render(&mut out)?;
            rest = &after[name_len..];
        }
        out.push_str(rest);

        Ok(PreparedQuery(out))
    }
}

/// Query text produced by [`QueryTemplate::render`]. The triplestore only
/// accepts this type, so every query it runs went through parameter binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedQuery(String);

impl PreparedQuery {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PreparedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
