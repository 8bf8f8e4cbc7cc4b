//! Directive text tokenizer.
//!
//! ```text
//! # comment
//! md5_hash   $request_hash 0:8 "$request_method$request_uri";
//! crc32_hash $uri_crc $uri;
//! ```
//!
//! Words are separated by whitespace and a directive ends with `;`. A word
//! starting with `"` or `'` is a quoted string and may contain whitespace,
//! `;` and `#`. Quoted strings understand `\"`, `\'`, `\\`, `\n`, `\t` and
//! `\r`; any other backslash is kept as is. `#` at the start of a word
//! comments out the rest of the line.

use std::iter::Peekable;
use std::str::Chars;

use crate::error::ConfigError;

/// A parsed directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// Directive name, the first word.
    pub name: String,
    /// Remaining words.
    pub args: Vec<String>,
    /// 1-based line the directive starts on.
    pub line: usize,
}

struct Tokenizer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
}

impl Tokenizer<'_> {
    fn skip_comment(&mut self) {
        while self.chars.next_if(|&c| c != '\n').is_some() {}
    }

    fn word(&mut self, first: char) -> String {
        let mut word = String::from(first);
        while let Some(c) = self
            .chars
            .next_if(|&c| !c.is_whitespace() && c != ';')
        {
            word.push(c);
        }
        word
    }

    fn quoted(&mut self, quote: char) -> Result<String, ConfigError> {
        let start = self.line;
        let mut word = String::new();
        loop {
            let c = self
                .chars
                .next()
                .ok_or_else(|| ConfigError::syntax(start, "unterminated quoted string"))?;
            match c {
                c if c == quote => break,
                '\\' => match self.chars.next() {
                    Some('n') => word.push('\n'),
                    Some('t') => word.push('\t'),
                    Some('r') => word.push('\r'),
                    Some(c @ ('"' | '\'' | '\\')) => word.push(c),
                    Some(c) => {
                        if c == '\n' {
                            self.line += 1;
                        }
                        word.push('\\');
                        word.push(c);
                    }
                    None => return Err(ConfigError::syntax(start, "unterminated quoted string")),
                },
                c => {
                    if c == '\n' {
                        self.line += 1;
                    }
                    word.push(c);
                }
            }
        }

        match self.chars.peek() {
            None | Some(';') => Ok(word),
            Some(c) if c.is_whitespace() => Ok(word),
            Some(c) => Err(ConfigError::syntax(
                self.line,
                format!("unexpected \"{c}\" after quoted string"),
            )),
        }
    }
}

/// Splits directive text into directives.
pub fn parse(input: &str) -> Result<Vec<Directive>, ConfigError> {
    let mut tokenizer = Tokenizer {
        chars: input.chars().peekable(),
        line: 1,
    };
    let mut directives = Vec::new();
    let mut words: Vec<String> = Vec::new();
    let mut start = 1;

    while let Some(c) = tokenizer.chars.next() {
        match c {
            '\n' => tokenizer.line += 1,
            c if c.is_whitespace() => {}
            '#' => tokenizer.skip_comment(),
            ';' => {
                let mut words = std::mem::take(&mut words).into_iter();
                let name = words
                    .next()
                    .ok_or_else(|| ConfigError::syntax(tokenizer.line, "unexpected \";\""))?;
                directives.push(Directive {
                    name,
                    args: words.collect(),
                    line: start,
                });
            }
            c => {
                if words.is_empty() {
                    start = tokenizer.line;
                }
                let word = match c {
                    '"' | '\'' => tokenizer.quoted(c)?,
                    c => tokenizer.word(c),
                };
                words.push(word);
            }
        }
    }

    if !words.is_empty() {
        return Err(ConfigError::syntax(
            tokenizer.line,
            "unexpected end of file, expecting \";\"",
        ));
    }

    Ok(directives)
}
