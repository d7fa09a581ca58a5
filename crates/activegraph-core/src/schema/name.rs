use heck::ToSnakeCase;
use std::fmt;

/// A model name, normalized to snake case.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Name {
    pub parts: Vec<String>,
}

impl Name {
    pub fn new(src: &str) -> Self {
        let snake = src.to_snake_case();
        let parts = snake
            .split('_')
            .filter(|part| !part.is_empty())
            .map(String::from)
            .collect();
        Self { parts }
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn snake_case(&self) -> String {
        self.parts.join("_")
    }

    /// Snake-cased name with the last word singularized: `book_authors` →
    /// `book_author`.
    pub fn singular(&self) -> String {
        self.inflect_last(1)
    }

    /// Snake-cased name with the last word pluralized: `book` → `books`.
    pub fn plural(&self) -> String {
        self.inflect_last(2)
    }

    /// Conventional foreign-key attribute referencing this model:
    /// `author` → `author_id`.
    pub fn foreign_key(&self) -> String {
        format!("{}_id", self.singular())
    }

    fn inflect_last(&self, count: isize) -> String {
        let Some((last, rest)) = self.parts.split_last() else {
            return String::new();
        };

        let mut parts = rest.to_vec();
        parts.push(pluralizer::pluralize(last, count, false));
        parts.join("_")
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.snake_case())
    }
}
