use super::Value;

/// A single filter condition of a relation.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// A raw SQL conditional fragment with positional `?` placeholders.
    Sql { fragment: String, args: Vec<Value> },

    /// Structured equality between an attribute and a value.
    Eq { attribute: String, value: Value },
}

impl Predicate {
    /// Builds a predicate from a fragment and its arguments.
    ///
    /// A fragment that is a bare attribute name with exactly one argument is
    /// the equality shorthand, so `("year", [1851])` and `("year = ?",
    /// [1851])` select the same rows.
    pub fn new(fragment: impl Into<String>, args: Vec<Value>) -> Predicate {
        let fragment = fragment.into();

        if args.len() == 1 && is_identifier(fragment.trim()) {
            let attribute = fragment.trim().to_string();
            let value = args.into_iter().next().unwrap_or_default();
            return Predicate::Eq { attribute, value };
        }

        Predicate::Sql { fragment, args }
    }

    pub fn eq(attribute: impl Into<String>, value: impl Into<Value>) -> Predicate {
        Predicate::Eq {
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    pub fn is_eq(&self) -> bool {
        matches!(self, Predicate::Eq { .. })
    }
}

/// Splits a raw fragment around its `?` placeholders, skipping any that sit
/// inside quoted SQL literals. A fragment with `n` placeholders yields
/// `n + 1` pieces.
pub fn split_placeholders(fragment: &str) -> Vec<&str> {
    let mut quote = None;
    let mut pieces = vec![];
    let mut start = 0;

    for (pos, ch) in fragment.char_indices() {
        match (quote, ch) {
            (None, '\'' | '"') => quote = Some(ch),
            (Some(q), c) if q == c => quote = None,
            (None, '?') => {
                pieces.push(&fragment[start..pos]);
                start = pos + 1;
            }
            _ => {}
        }
    }

    pieces.push(&fragment[start..]);
    pieces
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl Predicate {
    /// Number of placeholders in a raw fragment; always zero for equality.
    pub fn placeholders(&self) -> usize {
        match self {
            Predicate::Sql { fragment, .. } => split_placeholders(fragment).len() - 1,
            Predicate::Eq { .. } => 0,
        }
    }
}
