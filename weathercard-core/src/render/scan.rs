//! Splits styled text into control sequences and printable content.
//!
//! A control sequence starts at ESC (0x1B) and runs up to and including the
//! first ASCII letter, which covers SGR colors (`ESC [ 1 ; 31 m`) and cursor
//! movement (`ESC [ 2 J`) without knowing their length up front.

const ESC: char = '\x1b';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Control,
    Content,
}

/// A run of text that is entirely one [`SpanKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    pub kind: SpanKind,
    pub text: &'a str,
}

impl Span<'_> {
    pub fn is_control(&self) -> bool {
        self.kind == SpanKind::Control
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Normal,
    InEscape,
}

/// Iterator over the spans of a string, borrowing from it.
#[derive(Debug, Clone)]
pub struct Spans<'a> {
    rest: &'a str,
}

/// Scan `text` left to right into control and content spans.
///
/// Concatenating the yielded spans reproduces `text` exactly.
pub fn spans(text: &str) -> Spans<'_> {
    Spans { rest: text }
}

impl<'a> Iterator for Spans<'a> {
    type Item = Span<'a>;

    fn next(&mut self) -> Option<Span<'a>> {
        let first = self.rest.chars().next()?;
        let (kind, state) = if first == ESC {
            (SpanKind::Control, State::InEscape)
        } else {
            (SpanKind::Content, State::Normal)
        };

        let mut end = self.rest.len();
        for (idx, c) in self.rest.char_indices().skip(1) {
            match state {
                State::Normal if c == ESC => {
                    end = idx;
                    break;
                }
                State::Normal => {}
                State::InEscape if c.is_ascii_alphabetic() => {
                    end = idx + c.len_utf8();
                    break;
                }
                State::InEscape => {}
            }
        }

        let (text, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(Span { kind, text })
    }
}
