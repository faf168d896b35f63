//! Tokenizer shared by the Turtle and N-Triples decoders.
//!
//! Statement terminators are only recognised outside `<...>` and quoted
//! strings, so URIs and literals containing `.` survive intact. Literals are
//! single-line; `"""` long strings are not recognised.

use std::iter::Peekable;
use std::str::CharIndices;

/// A datatype reference after `^^`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DatatypeRef {
    Iri(String),
    Prefixed(String, String),
}

/// Token kinds.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    /// `<...>` with the brackets removed.
    Iri(String),
    /// `prefix:local`; either part may be empty.
    Prefixed(String, String),
    /// `_:label`, kept with its `_:` prefix.
    Blank(String),
    /// A quoted string with escapes decoded.
    Literal {
        lexical: String,
        language: Option<String>,
        datatype: Option<DatatypeRef>,
    },
    /// A bare integer, decimal or boolean, with its XSD datatype IRI.
    Bare { lexical: String, datatype: &'static str },
    /// The `a` keyword.
    A,
    /// `@prefix`.
    PrefixDirective,
    Dot,
    Semicolon,
    Comma,
}

/// A token with the 1-based line it starts on.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Spanned {
    pub token: Token,
    pub line: usize,
}

/// A tokenizer failure. The offending text has already been skipped.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LexError {
    pub line: usize,
    pub message: String,
}

pub(crate) struct Lexer<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
    line: usize,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self::starting_at(input, 1)
    }

    /// Creates a lexer whose line numbers start at `line`.
    pub(crate) fn starting_at(input: &'a str, line: usize) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            line,
        }
    }

    fn bump(&mut self) -> Option<char> {
        let (_, c) = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    fn offset(&mut self) -> usize {
        self.chars.peek().map_or(self.input.len(), |&(i, _)| i)
    }

    fn error(&self, line: usize, message: impl Into<String>) -> LexError {
        LexError {
            line,
            message: message.into(),
        }
    }

    fn skip_trivia(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.bump();
            } else if c == '#' {
                while let Some(c) = self.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.bump();
                }
            } else {
                break;
            }
        }
    }

    /// Skips to the next whitespace after a lexing failure.
    fn recover(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                break;
            }
            self.bump();
        }
    }

    fn iri(&mut self, line: usize) -> Result<String, LexError> {
        self.bump(); // '<'
        let mut out = String::new();
        loop {
            match self.peek() {
                Some('>') => {
                    self.bump();
                    return Ok(out);
                }
                Some(c) if c.is_whitespace() => {
                    return Err(self.error(line, "whitespace inside <...>"));
                }
                Some(c) => {
                    out.push(c);
                    self.bump();
                }
                None => return Err(self.error(line, "unterminated <...>")),
            }
        }
    }

    fn string(&mut self, line: usize) -> Result<String, LexError> {
        self.bump(); // '"'
        let mut out = String::new();
        loop {
            match self.peek() {
                Some('"') => {
                    self.bump();
                    return Ok(out);
                }
                Some('\\') => {
                    self.bump();
                    out.push(self.escape(line)?);
                }
                Some('\n') | None => {
                    return Err(self.error(line, "unterminated string literal"));
                }
                Some(c) => {
                    out.push(c);
                    self.bump();
                }
            }
        }
    }

    fn escape(&mut self, line: usize) -> Result<char, LexError> {
        match self.bump() {
            Some('\\') => Ok('\\'),
            Some('"') => Ok('"'),
            Some('\'') => Ok('\''),
            Some('n') => Ok('\n'),
            Some('r') => Ok('\r'),
            Some('t') => Ok('\t'),
            Some('b') => Ok('\u{8}'),
            Some('f') => Ok('\u{c}'),
            Some('u') => self.unicode_escape(line, 4),
            Some('U') => self.unicode_escape(line, 8),
            Some(c) => Err(self.error(line, format!("invalid escape sequence \\{c}"))),
            None => Err(self.error(line, "unterminated string literal")),
        }
    }

    fn unicode_escape(&mut self, line: usize, digits: usize) -> Result<char, LexError> {
        let mut hex = String::with_capacity(digits);
        for _ in 0..digits {
            match self.peek() {
                Some(c) if c.is_ascii_hexdigit() => {
                    hex.push(c);
                    self.bump();
                }
                _ => return Err(self.error(line, "truncated unicode escape")),
            }
        }
        u32::from_str_radix(&hex, 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| self.error(line, format!("invalid code point U+{hex}")))
    }

    /// Reads a run of name characters, giving back trailing dots (which
    /// terminate the statement rather than belong to the name).
    fn name(&mut self, allow_colon: bool) -> String {
        let input = self.input;
        let start = self.offset();
        let mut end = start;
        let rest = &input[start..];
        for (i, c) in rest.char_indices() {
            if c.is_alphanumeric() || c == '_' || c == '-' || c == '.' || (allow_colon && c == ':')
            {
                end = start + i + c.len_utf8();
            } else {
                break;
            }
        }
        let mut word = &input[start..end];
        while word.ends_with('.') {
            word = &word[..word.len() - 1];
        }
        for _ in word.chars() {
            self.bump();
        }
        word.to_owned()
    }

    fn literal_suffix(&mut self, line: usize, lexical: String) -> Result<Token, LexError> {
        let mut language = None;
        let mut datatype = None;
        match self.peek() {
            Some('@') => {
                self.bump();
                let tag = self.name(false);
                if tag.is_empty() {
                    return Err(self.error(line, "empty language tag"));
                }
                language = Some(tag);
            }
            Some('^') => {
                self.bump();
                if self.peek() != Some('^') {
                    return Err(self.error(line, "expected ^^ before datatype"));
                }
                self.bump();
                datatype = Some(match self.peek() {
                    Some('<') => DatatypeRef::Iri(self.iri(line)?),
                    Some(_) => match self.prefixed_or_word(line)? {
                        Token::Prefixed(prefix, local) => DatatypeRef::Prefixed(prefix, local),
                        _ => return Err(self.error(line, "datatype must be an IRI")),
                    },
                    None => return Err(self.error(line, "missing datatype")),
                });
            }
            _ => {}
        }
        Ok(Token::Literal {
            lexical,
            language,
            datatype,
        })
    }

    fn prefixed_or_word(&mut self, line: usize) -> Result<Token, LexError> {
        let word = self.name(true);
        if let Some((prefix, local)) = word.split_once(':') {
            return Ok(Token::Prefixed(prefix.to_owned(), local.to_owned()));
        }
        match word.as_str() {
            "a" => Ok(Token::A),
            "true" | "false" => Ok(Token::Bare {
                lexical: word,
                datatype: crate::vocab::XSD_BOOLEAN,
            }),
            "" => Err(self.error(line, "unexpected character")),
            _ => Err(self.error(line, format!("unexpected bare word `{word}`"))),
        }
    }

    fn number(&mut self, line: usize) -> Result<Token, LexError> {
        let mut lexical = String::new();
        if let Some(sign @ ('+' | '-')) = self.peek() {
            lexical.push(sign);
            self.bump();
        }
        let digits = self.name(false);
        lexical.push_str(&digits);
        let body = lexical.trim_start_matches(['+', '-']);
        let datatype = if !body.is_empty() && body.chars().all(|c| c.is_ascii_digit()) {
            crate::vocab::XSD_INTEGER
        } else if body.parse::<f64>().is_ok() && body.contains('.') {
            crate::vocab::XSD_DECIMAL
        } else {
            return Err(self.error(line, format!("malformed number `{lexical}`")));
        };
        Ok(Token::Bare { lexical, datatype })
    }

    fn token(&mut self, c: char, line: usize) -> Result<Token, LexError> {
        match c {
            '<' => self.iri(line).map(Token::Iri),
            '"' => {
                let lexical = self.string(line)?;
                self.literal_suffix(line, lexical)
            }
            '.' => {
                self.bump();
                Ok(Token::Dot)
            }
            ';' => {
                self.bump();
                Ok(Token::Semicolon)
            }
            ',' => {
                self.bump();
                Ok(Token::Comma)
            }
            '@' => {
                self.bump();
                let word = self.name(false);
                if word == "prefix" {
                    Ok(Token::PrefixDirective)
                } else {
                    Err(self.error(line, format!("unsupported directive @{word}")))
                }
            }
            '_' => {
                let input = self.input;
                if !input[self.offset()..].starts_with("_:") {
                    return self.prefixed_or_word(line);
                }
                self.bump();
                self.bump();
                let label = self.name(false);
                if label.is_empty() {
                    Err(self.error(line, "empty blank node label"))
                } else {
                    Ok(Token::Blank(format!("_:{label}")))
                }
            }
            '+' | '-' | '0'..='9' => self.number(line),
            _ => self.prefixed_or_word(line),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Spanned, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_trivia();
        let c = self.peek()?;
        let line = self.line;
        let result = self.token(c, line).map(|token| Spanned { token, line });
        if result.is_err() {
            self.recover();
        }
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        Lexer::new(input)
            .map(|t| t.map(|s| s.token))
            .collect::<Result<_, _>>()
            .expect("lexes")
    }

    #[test]
    fn dots_inside_iris_are_not_terminators() {
        assert_eq!(
            tokens("<http://example.org/a.b> ex:p \"x.y\" ."),
            vec![
                Token::Iri("http://example.org/a.b".into()),
                Token::Prefixed("ex".into(), "p".into()),
                Token::Literal { lexical: "x.y".into(), language: None, datatype: None },
                Token::Dot,
            ]
        );
    }

    #[test]
    fn trailing_dot_leaves_names() {
        assert_eq!(
            tokens("_:b0 ex:p ex:o."),
            vec![
                Token::Blank("_:b0".into()),
                Token::Prefixed("ex".into(), "p".into()),
                Token::Prefixed("ex".into(), "o".into()),
                Token::Dot,
            ]
        );
    }

    #[test]
    fn literal_annotations() {
        assert_eq!(
            tokens("\"chat\"@fr \"1\"^^xsd:integer \"2\"^^<http://x.org/t>"),
            vec![
                Token::Literal {
                    lexical: "chat".into(),
                    language: Some("fr".into()),
                    datatype: None,
                },
                Token::Literal {
                    lexical: "1".into(),
                    language: None,
                    datatype: Some(DatatypeRef::Prefixed("xsd".into(), "integer".into())),
                },
                Token::Literal {
                    lexical: "2".into(),
                    language: None,
                    datatype: Some(DatatypeRef::Iri("http://x.org/t".into())),
                },
            ]
        );
    }

    #[test]
    fn escapes_are_decoded() {
        assert_eq!(
            tokens(r#""a\"b\\c\ndé""#),
            vec![Token::Literal {
                lexical: "a\"b\\c\nd\u{e9}".into(),
                language: None,
                datatype: None,
            }]
        );
    }

    #[test]
    fn comments_and_lines() {
        let spans: Vec<Spanned> = Lexer::new("# header\n\n<a> <b> <c> .")
            .collect::<Result<_, _>>()
            .expect("lexes");
        assert_eq!(spans[0].line, 3);
        assert_eq!(spans.len(), 4);
    }

    #[test]
    fn unterminated_string_is_an_error() {
        let results: Vec<_> = Lexer::new("\"open\n<a>").collect();
        assert!(results[0].is_err());
        assert_eq!(
            results.last().cloned(),
            Some(Ok(Spanned {
                token: Token::Iri("a".into()),
                line: 2,
            }))
        );
    }

    #[test]
    fn bare_numbers_and_keywords() {
        assert_eq!(
            tokens("a 42 -1.5 true"),
            vec![
                Token::A,
                Token::Bare { lexical: "42".into(), datatype: crate::vocab::XSD_INTEGER },
                Token::Bare { lexical: "-1.5".into(), datatype: crate::vocab::XSD_DECIMAL },
                Token::Bare { lexical: "true".into(), datatype: crate::vocab::XSD_BOOLEAN },
            ]
        );
    }
}
