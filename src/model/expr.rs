//! Compact type expressions used in model files.
//!
//! ```text
//! type    := "stream" type | postfix
//! postfix := atom "?"*
//! atom    := "[" type "]" | "{" type ":" type "}" | ident
//! ```
//!
//! Identifiers naming a primitive become [`Type::Primitive`], `void` becomes [`Type::Void`],
//! everything else is a [`Type::Named`] reference.

use std::fmt;

use super::types::{PrimitiveName, Type};

/// Error raised while reading a model
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The expression ended where a type was expected
    UnexpectedEnd {
        /// The full expression being parsed
        expr: String,
    },
    /// A character that cannot start or continue a type
    UnexpectedChar {
        /// The full expression being parsed
        expr: String,
        /// The offending character
        found: char,
        /// Byte offset of the character
        position: usize,
    },
    /// A complete type was read but input remains
    TrailingInput {
        /// The full expression being parsed
        expr: String,
        /// Byte offset of the first unread character
        position: usize,
    },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::UnexpectedEnd { expr } => {
                write!(f, "type expression '{}' ended unexpectedly", expr)
            }
            ModelError::UnexpectedChar {
                expr,
                found,
                position,
            } => write!(
                f,
                "unexpected character '{}' at offset {} in type expression '{}'",
                found, position, expr
            ),
            ModelError::TrailingInput { expr, position } => write!(
                f,
                "unexpected trailing input at offset {} in type expression '{}'",
                position, expr
            ),
        }
    }
}

impl std::error::Error for ModelError {}

/// Parse a compact type expression such as `{string: [Event?]}`.
pub fn parse_type_expr(expr: &str) -> Result<Type, ModelError> {
    let mut parser = Parser { expr, pos: 0 };
    let ty = parser.parse_type()?;
    parser.skip_ws();
    if parser.pos < expr.len() {
        return Err(ModelError::TrailingInput {
            expr: expr.to_string(),
            position: parser.pos,
        });
    }
    Ok(ty)
}

struct Parser<'a> {
    expr: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<char> {
        self.expr[self.pos..].chars().next()
    }

    fn skip_ws(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn expect(&mut self, want: char) -> Result<(), ModelError> {
        self.skip_ws();
        match self.peek() {
            Some(c) if c == want => {
                self.pos += c.len_utf8();
                Ok(())
            }
            Some(c) => Err(self.unexpected(c)),
            None => Err(self.end()),
        }
    }

    fn unexpected(&self, found: char) -> ModelError {
        ModelError::UnexpectedChar {
            expr: self.expr.to_string(),
            found,
            position: self.pos,
        }
    }

    fn end(&self) -> ModelError {
        ModelError::UnexpectedEnd {
            expr: self.expr.to_string(),
        }
    }

    fn parse_type(&mut self) -> Result<Type, ModelError> {
        self.skip_ws();
        let start = self.pos;
        if let Some(ident) = self.ident() {
            if ident == "stream" {
                self.skip_ws();
                // `stream` alone is a plain named type
                if self.peek().is_some_and(|c| c != '?' && c != ']' && c != '}' && c != ':') {
                    return Ok(Type::Stream(Box::new(self.parse_type()?)));
                }
            }
            self.pos = start;
        }
        self.parse_postfix()
    }

    fn parse_postfix(&mut self) -> Result<Type, ModelError> {
        let mut ty = self.parse_atom()?;
        loop {
            self.skip_ws();
            if self.peek() == Some('?') {
                self.pos += 1;
                ty = Type::Optional(Box::new(ty));
            } else {
                return Ok(ty);
            }
        }
    }

    fn parse_atom(&mut self) -> Result<Type, ModelError> {
        self.skip_ws();
        match self.peek() {
            Some('[') => {
                self.pos += 1;
                let item = self.parse_type()?;
                self.expect(']')?;
                Ok(Type::List(Box::new(item)))
            }
            Some('{') => {
                self.pos += 1;
                let key = self.parse_type()?;
                self.expect(':')?;
                let value = self.parse_type()?;
                self.expect('}')?;
                Ok(Type::Map(Box::new(key), Box::new(value)))
            }
            Some(c) => match self.ident() {
                Some(ident) => Ok(named(ident)),
                None => Err(self.unexpected(c)),
            },
            None => Err(self.end()),
        }
    }

    fn ident(&mut self) -> Option<&'a str> {
        let start = self.pos;
        let expr = self.expr;
        let rest = &expr[start..];
        let len = rest
            .char_indices()
            .find(|(i, c)| {
                !(c.is_ascii_alphanumeric() || *c == '_' || (*i > 0 && *c == '.'))
            })
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        if len == 0 || rest.starts_with(|c: char| c.is_ascii_digit()) {
            return None;
        }
        self.pos += len;
        Some(&expr[start..start + len])
    }
}

fn named(ident: &str) -> Type {
    if ident == "void" {
        return Type::Void;
    }
    match PrimitiveName::from_keyword(ident) {
        Some(p) => Type::Primitive(p),
        None => Type::Named(ident.to_string()),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn boxed(t: Type) -> Box<Type> {
        Box::new(t)
    }

    #[test]
    fn test_parse_primitives_and_names() {
        assert_eq!(
            parse_type_expr("string").unwrap(),
            Type::Primitive(PrimitiveName::String)
        );
        assert_eq!(
            parse_type_expr("datetime").unwrap(),
            Type::Primitive(PrimitiveName::DateTime)
        );
        assert_eq!(parse_type_expr("void").unwrap(), Type::Void);
        assert_eq!(
            parse_type_expr("Event").unwrap(),
            Type::Named("Event".to_string())
        );
    }

    #[test]
    fn test_parse_containers() {
        assert_eq!(
            parse_type_expr("[Event]").unwrap(),
            Type::List(boxed(Type::Named("Event".to_string())))
        );
        assert_eq!(
            parse_type_expr("{ string : [u64?] }").unwrap(),
            Type::Map(
                boxed(Type::Primitive(PrimitiveName::String)),
                boxed(Type::List(boxed(Type::Optional(boxed(Type::Primitive(
                    PrimitiveName::U64
                ))))))
            )
        );
    }

    #[test]
    fn test_parse_stream() {
        assert_eq!(
            parse_type_expr("stream Event?").unwrap(),
            Type::Stream(boxed(Type::Optional(boxed(Type::Named(
                "Event".to_string()
            )))))
        );
        // a type literally named `stream`
        assert_eq!(
            parse_type_expr("stream").unwrap(),
            Type::Named("stream".to_string())
        );
        assert_eq!(
            parse_type_expr("streaming").unwrap(),
            Type::Named("streaming".to_string())
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_type_expr("[string").unwrap_err(),
            ModelError::UnexpectedEnd {
                expr: "[string".to_string()
            }
        );
        assert!(matches!(
            parse_type_expr("{string string}").unwrap_err(),
            ModelError::UnexpectedChar { found: 's', .. }
        ));
        assert!(matches!(
            parse_type_expr("string ]").unwrap_err(),
            ModelError::TrailingInput { position: 7, .. }
        ));
        assert!(matches!(
            parse_type_expr("").unwrap_err(),
            ModelError::UnexpectedEnd { .. }
        ));
    }
}
