/// A query for [`Catalog::search`][`crate::Catalog::search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Free text.
    ///
    /// Text that parses as an integer is searched as a number. Empty text matches everything.
    Text(String),
    /// A catalog number.
    Number(i64),
}

impl SearchQuery {
    /// Resolves text that parses as an integer into a number query.
    pub fn normalize(self) -> Self {
        match self {
            Self::Text(text) => match text.parse::<i64>() {
                Ok(number) => Self::Number(number),
                Err(_) => Self::Text(text),
            },
            number => number,
        }
    }
}

impl From<&str> for SearchQuery {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for SearchQuery {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for SearchQuery {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for SearchQuery {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<u32> for SearchQuery {
    fn from(value: u32) -> Self {
        Self::Number(value.into())
    }
}
