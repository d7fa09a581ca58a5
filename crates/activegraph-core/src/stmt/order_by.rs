#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

/// Orders a relation by one attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub attribute: String,
    pub direction: Direction,
}

impl OrderBy {
    pub fn asc(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            direction: Direction::Asc,
        }
    }

    pub fn desc(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            direction: Direction::Desc,
        }
    }
}

/// Parses `"<attribute> [asc|desc]"`. Anything that is not a recognized
/// direction is left in the attribute name so the compiler reports it.
impl From<&str> for OrderBy {
    fn from(src: &str) -> Self {
        let src = src.trim();

        if let Some((attribute, direction)) = src.rsplit_once(char::is_whitespace) {
            match &direction.to_ascii_lowercase()[..] {
                "asc" => return OrderBy::asc(attribute.trim_end()),
                "desc" => return OrderBy::desc(attribute.trim_end()),
                _ => {}
            }
        }

        OrderBy::asc(src)
    }
}

impl From<String> for OrderBy {
    fn from(src: String) -> Self {
        OrderBy::from(&src[..])
    }
}
