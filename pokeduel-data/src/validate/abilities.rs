use std::{
    iter::Peekable,
    str::Chars,
};

use serde_json::Value;

use crate::{
    DataError,
    coerce::{
        coerce_string,
        is_blank,
    },
};

/// Validates the ability list of a catalog entry.
///
/// The catalog stores abilities as a list literal in a string, like `"['Overgrow',
/// 'Chlorophyll']"`. A JSON array of strings is also accepted.
pub fn validate_ability_list(value: &Value) -> Result<Vec<String>, DataError> {
    if is_blank(value) {
        return Err(DataError::DataMissing("ability list is empty".to_owned()));
    }
    let abilities = match value {
        Value::String(literal) => ListLiteralParser::new(literal).parse()?,
        Value::Array(values) => values
            .iter()
            .map(|value| match value {
                Value::String(_) => coerce_string(value),
                _ => Err(DataError::BadConversion(format!(
                    "ability {value} is not a string"
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?,
        _ => {
            return Err(DataError::BadConversion(format!(
                "{value} is not an ability list"
            )));
        }
    };
    if abilities.is_empty() {
        return Err(DataError::DataMissing("ability list is empty".to_owned()));
    }
    if abilities.iter().any(|ability| ability.is_empty()) {
        return Err(DataError::DataMissing("ability name is empty".to_owned()));
    }
    Ok(abilities)
}

/// Parser for a flat list literal of quoted strings.
struct ListLiteralParser<'s> {
    source: &'s str,
    chars: Peekable<Chars<'s>>,
}

impl<'s> ListLiteralParser<'s> {
    fn new(source: &'s str) -> Self {
        Self {
            source,
            chars: source.chars().peekable(),
        }
    }

    fn malformed(&self, reason: &str) -> DataError {
        DataError::BadConversion(format!("malformed ability list {:?}: {reason}", self.source))
    }

    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|c| c.is_whitespace()).is_some() {}
    }

    fn parse(mut self) -> Result<Vec<String>, DataError> {
        self.skip_whitespace();
        if self.chars.next() != Some('[') {
            return Err(self.malformed("expected ["));
        }
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            match self.chars.peek().copied() {
                Some(']') => {
                    self.chars.next();
                    break;
                }
                Some('\'' | '"') => items.push(self.parse_string()?),
                Some(_) => {
                    let token = self.parse_bare_token();
                    return Err(self.malformed(&format!("element {token} is not a string")));
                }
                None => return Err(self.malformed("expected ]")),
            }
            self.skip_whitespace();
            match self.chars.next() {
                Some(',') => (),
                Some(']') => break,
                _ => return Err(self.malformed("expected , or ]")),
            }
        }
        self.skip_whitespace();
        if self.chars.next().is_some() {
            return Err(self.malformed("unexpected trailing characters"));
        }
        Ok(items)
    }

    fn parse_string(&mut self) -> Result<String, DataError> {
        let quote = self.chars.next();
        let mut string = String::new();
        loop {
            match self.chars.next() {
                None => return Err(self.malformed("unterminated string")),
                Some(c) if Some(c) == quote => return Ok(string),
                Some('\\') => match self.chars.next() {
                    Some('n') => string.push('\n'),
                    Some('t') => string.push('\t'),
                    Some(c @ ('\\' | '\'' | '"')) => string.push(c),
                    Some(c) => {
                        string.push('\\');
                        string.push(c);
                    }
                    None => return Err(self.malformed("unterminated string")),
                },
                Some(c) => string.push(c),
            }
        }
    }

    fn parse_bare_token(&mut self) -> String {
        let mut token = String::new();
        while let Some(c) = self.chars.next_if(|c| *c != ',' && *c != ']') {
            token.push(c);
        }
        token.trim().to_owned()
    }
}
