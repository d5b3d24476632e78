//! A relaxed tokenizer for OFX documents.
//!
//! OFX 1.x is SGML: leaf elements usually have no closing tag, the file starts with a plain-text
//! header block, and text may contain bare `&` characters. `SgmlReader` drives a `quick_xml`
//! reader with every well-formedness check that would reject such input turned off, and reduces
//! its events to the three kinds of `Token` the statement parser understands.

use quick_xml::events::Event;
use quick_xml::Reader;
use std::borrow::Cow;
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::io::BufRead;
use tracing::trace;

/// A primitive markup event.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Token {
    /// An opening tag, e.g. `<STMTTRN>`.
    Start(String),
    /// Character data between tags, already trimmed.
    Text(String),
    /// A closing tag, e.g. `</STMTTRN>`.
    End(String),
}

/// An error raised by the underlying reader. End-of-stream is not an error.
pub struct TokenError {
    source: quick_xml::Error,
    position: u64,
}

impl Debug for TokenError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.source, f)
    }
}

impl Display for TokenError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at byte {})", self.source, self.position)
    }
}

impl Error for TokenError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// Produces `Token`s from a byte stream. Iteration ends at end-of-stream; a reader error is
/// yielded once and iteration ends after it.
pub struct SgmlReader<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
    done: bool,
}

impl<R: BufRead> SgmlReader<R> {
    pub fn new(input: R) -> Self {
        let mut reader = Reader::from_reader(input);
        let config = reader.config_mut();
        config.trim_text(true);
        config.check_end_names = false;
        config.allow_unmatched_ends = true;
        config.expand_empty_elements = true;
        Self {
            reader,
            buf: Vec::new(),
            done: false,
        }
    }

    fn read_token(&mut self) -> Result<Option<Token>, TokenError> {
        loop {
            self.buf.clear();
            let event = match self.reader.read_event_into(&mut self.buf) {
                Ok(event) => event,
                Err(source) => {
                    return Err(TokenError {
                        source,
                        position: self.reader.buffer_position() as u64,
                    })
                }
            };
            let token = match event {
                Event::Start(e) => Token::Start(lossy(e.name().as_ref()).into_owned()),
                Event::End(e) => Token::End(lossy(e.name().as_ref()).into_owned()),
                Event::Text(e) => Token::Text(unescape_lenient(&e)),
                Event::CData(e) => Token::Text(lossy(&e).into_owned()),
                Event::Eof => return Ok(None),
                other => {
                    trace!("Skipping {other:?}");
                    continue;
                }
            };
            return Ok(Some(token));
        }
    }
}

impl<R: BufRead> Iterator for SgmlReader<R> {
    type Item = Result<Token, TokenError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

fn lossy(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

/// Resolves entity references such as `&amp;`. Text that contains a bare `&` or an unknown
/// entity is returned as written.
fn unescape_lenient(bytes: &[u8]) -> String {
    let raw = lossy(bytes);
    match quick_xml::escape::unescape(&raw) {
        Ok(text) => text.into_owned(),
        Err(_) => raw.into_owned(),
    }
}
