//! Parser for the literal subset that appears in call arguments.
//!
//! Accepts strings (single or double quoted, with backslash escapes), integers,
//! floats, `True`/`False`/`None`, and list, tuple and set displays nested up to
//! [`MAX_DEPTH`] levels. Trailing commas are allowed. Dictionary displays are recognised and
//! rejected with [`LiteralError::UnsupportedDict`].

use crate::error::LiteralError;
use crate::types::{Literal, Number};

/// Deepest collection nesting accepted before [`LiteralError::TooDeep`].
pub const MAX_DEPTH: usize = 64;

/// Parses `text` as exactly one literal, surrounded by optional whitespace.
pub fn parse_literal(text: &str) -> Result<Literal, LiteralError> {
    let mut parser = LiteralParser::new(text);
    let value = parser.parse_value()?;
    parser.skip_whitespace();
    if parser.pos < text.len() {
        return Err(LiteralError::TrailingInput { offset: parser.pos });
    }
    Ok(value)
}

/// Coerces numeric text to a number, integer first.
///
/// Returns `None` for anything that is not a plain decimal literal; words such
/// as `inf` or `nan` are not numbers here.
pub fn coerce_number(text: &str) -> Option<Number> {
    let text = text.trim();
    if !looks_numeric(text) {
        return None;
    }
    if let Ok(value) = text.parse::<i64>() {
        return Some(Number::Int(value));
    }
    text.parse::<f64>().ok().map(Number::Float)
}

fn looks_numeric(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (mantissa, exponent) = match digits.find(['e', 'E']) {
        Some(idx) => (&digits[..idx], Some(&digits[idx + 1..])),
        None => (digits, None),
    };

    let mut parts = mantissa.splitn(2, '.');
    let whole = parts.next().unwrap_or("");
    let fraction = parts.next();
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());

    let mantissa_ok = match fraction {
        Some(fraction) => {
            all_digits(whole) && all_digits(fraction) && !(whole.is_empty() && fraction.is_empty())
        }
        None => !whole.is_empty() && all_digits(whole),
    };
    let exponent_ok = exponent.map_or(true, |exp| {
        let exp = exp.strip_prefix(['+', '-']).unwrap_or(exp);
        !exp.is_empty() && all_digits(exp)
    });

    mantissa_ok && exponent_ok
}

struct LiteralParser<'a> {
    src: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> LiteralParser<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            depth: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn unexpected(&self) -> LiteralError {
        match self.peek() {
            Some(found) => LiteralError::UnexpectedChar {
                found,
                offset: self.pos,
            },
            None => LiteralError::UnexpectedEnd,
        }
    }

    fn parse_value(&mut self) -> Result<Literal, LiteralError> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(LiteralError::UnexpectedEnd),
            Some(quote @ ('"' | '\'')) => self.parse_string(quote).map(Literal::Str),
            Some('[') => self.parse_sequence(']'),
            Some('(') => self.parse_sequence(')'),
            Some('{') => self.parse_sequence('}'),
            Some(ch) if ch.is_ascii_digit() || matches!(ch, '.' | '+' | '-') => {
                self.parse_number()
            }
            Some(ch) if ch.is_alphabetic() || ch == '_' => self.parse_name(),
            Some(_) => Err(self.unexpected()),
        }
    }

    fn parse_string(&mut self, quote: char) -> Result<String, LiteralError> {
        self.bump();
        let mut value = String::new();
        loop {
            match self.bump() {
                None => return Err(LiteralError::UnexpectedEnd),
                Some(ch) if ch == quote => return Ok(value),
                Some('\\') => match self.bump() {
                    None => return Err(LiteralError::UnexpectedEnd),
                    Some('n') => value.push('\n'),
                    Some('t') => value.push('\t'),
                    Some('r') => value.push('\r'),
                    Some(escaped @ ('\\' | '\'' | '"')) => value.push(escaped),
                    Some(other) => {
                        value.push('\\');
                        value.push(other);
                    }
                },
                Some(ch) => value.push(ch),
            }
        }
    }

    fn parse_number(&mut self) -> Result<Literal, LiteralError> {
        let start = self.pos;
        if matches!(self.peek(), Some('+' | '-')) {
            self.bump();
        }
        while let Some(ch) = self.peek() {
            let sign_after_exponent = matches!(ch, '+' | '-')
                && matches!(self.src[start..self.pos].chars().last(), Some('e' | 'E'));
            if ch.is_ascii_digit() || matches!(ch, '.' | 'e' | 'E') || sign_after_exponent {
                self.bump();
            } else {
                break;
            }
        }

        let text = &self.src[start..self.pos];
        coerce_number(text)
            .map(Literal::Number)
            .ok_or_else(|| LiteralError::InvalidNumber(text.to_string()))
    }

    fn parse_name(&mut self) -> Result<Literal, LiteralError> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|ch| ch.is_alphanumeric() || ch == '_')
        {
            self.bump();
        }
        match &self.src[start..self.pos] {
            "True" => Ok(Literal::Bool(true)),
            "False" => Ok(Literal::Bool(false)),
            "None" => Ok(Literal::Absent),
            _ => {
                self.pos = start;
                Err(self.unexpected())
            }
        }
    }

    fn parse_sequence(&mut self, close: char) -> Result<Literal, LiteralError> {
        if self.depth >= MAX_DEPTH {
            return Err(LiteralError::TooDeep {
                limit: MAX_DEPTH,
                offset: self.pos,
            });
        }
        self.depth += 1;
        let result = self.parse_sequence_items(close);
        self.depth -= 1;
        result
    }

    /// Parses a list, tuple or set display. `(x)` without a comma is just `x`.
    fn parse_sequence_items(&mut self, close: char) -> Result<Literal, LiteralError> {
        let open_offset = self.pos;
        self.bump();
        let mut items = Vec::new();
        let mut saw_comma = false;

        loop {
            self.skip_whitespace();
            match self.peek() {
                None => return Err(LiteralError::UnexpectedEnd),
                Some(ch) if ch == close => {
                    self.bump();
                    break;
                }
                Some(_) => {}
            }

            items.push(self.parse_value()?);
            self.skip_whitespace();

            match self.peek() {
                Some(',') => {
                    self.bump();
                    saw_comma = true;
                }
                Some(':') if close == '}' => {
                    return Err(LiteralError::UnsupportedDict {
                        offset: open_offset,
                    })
                }
                Some(ch) if ch == close => {}
                _ => return Err(self.unexpected()),
            }
        }

        if close == '}' && items.is_empty() {
            // `{}` is an empty dict, not an empty set.
            return Err(LiteralError::UnsupportedDict {
                offset: open_offset,
            });
        }
        if close == ')' && items.len() == 1 && !saw_comma {
            return Ok(items.remove(0));
        }
        Ok(Literal::Collection(items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strs(values: &[&str]) -> Literal {
        Literal::Collection(values.iter().map(|v| Literal::str(*v)).collect())
    }

    #[test]
    fn test_parse_flat_list() {
        assert_eq!(parse_literal(r#"["a","b","c"]"#), Ok(strs(&["a", "b", "c"])));
    }

    #[test]
    fn test_parse_nested_list_with_trailing_comma() {
        let parsed = parse_literal(r#"["a", ['b', "c"], ]"#).unwrap();
        assert_eq!(
            parsed,
            Literal::Collection(vec![Literal::str("a"), strs(&["b", "c"])])
        );
    }

    #[test]
    fn test_parse_tuple_and_parenthesized_value() {
        assert_eq!(
            parse_literal("(1, 2.5)"),
            Ok(Literal::Collection(vec![
                Literal::int(1),
                Literal::Number(Number::Float(2.5)),
            ]))
        );
        assert_eq!(parse_literal("(1)"), Ok(Literal::int(1)));
        assert_eq!(
            parse_literal("(1,)"),
            Ok(Literal::Collection(vec![Literal::int(1)]))
        );
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(
            parse_literal("[True, False, None]"),
            Ok(Literal::Collection(vec![
                Literal::Bool(true),
                Literal::Bool(false),
                Literal::Absent,
            ]))
        );
    }

    #[test]
    fn test_parse_escapes() {
        assert_eq!(parse_literal(r#""a\"b""#), Ok(Literal::str("a\"b")));
        assert_eq!(parse_literal(r"'it\'s'"), Ok(Literal::str("it's")));
    }

    #[test]
    fn test_set_is_collection_but_dict_is_rejected() {
        assert_eq!(parse_literal("{'a'}"), Ok(strs(&["a"])));
        assert_eq!(
            parse_literal("{'a': 1}"),
            Err(LiteralError::UnsupportedDict { offset: 0 })
        );
        assert_eq!(
            parse_literal("{}"),
            Err(LiteralError::UnsupportedDict { offset: 0 })
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_literal("[1, 2"), Err(LiteralError::UnexpectedEnd));
        assert_eq!(
            parse_literal("[a]"),
            Err(LiteralError::UnexpectedChar {
                found: 'a',
                offset: 1
            })
        );
        assert_eq!(
            parse_literal("1 2"),
            Err(LiteralError::TrailingInput { offset: 2 })
        );
        assert_eq!(parse_literal(""), Err(LiteralError::UnexpectedEnd));
    }

    #[test]
    fn test_nesting_limit() {
        let nested = |depth: usize| format!("{}{}", "[".repeat(depth), "]".repeat(depth));
        assert!(parse_literal(&nested(MAX_DEPTH)).is_ok());
        assert_eq!(
            parse_literal(&nested(MAX_DEPTH + 1)),
            Err(LiteralError::TooDeep {
                limit: MAX_DEPTH,
                offset: MAX_DEPTH
            })
        );
        assert!(matches!(
            parse_literal(&"[".repeat(100_000)),
            Err(LiteralError::TooDeep { .. })
        ));
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number("2"), Some(Number::Int(2)));
        assert_eq!(coerce_number("-7"), Some(Number::Int(-7)));
        assert_eq!(coerce_number("1.5"), Some(Number::Float(1.5)));
        assert_eq!(coerce_number(".5"), Some(Number::Float(0.5)));
        assert_eq!(coerce_number("1e3"), Some(Number::Float(1000.0)));
        assert_eq!(coerce_number("1.2.3"), None);
        assert_eq!(coerce_number("."), None);
        assert_eq!(coerce_number("inf"), None);
        assert_eq!(coerce_number(""), None);
    }
}
