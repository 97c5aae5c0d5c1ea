// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! XML 1.0 character rules for text written into document parts.

/// Whether `ch` may appear in XML 1.0 character data.
///
/// Allowed: tab, line feed, carriage return, `U+0020..=U+D7FF`,
/// `U+E000..=U+FFFD` and the supplementary planes. Surrogates never reach
/// here because `char` cannot hold them.
pub fn is_xml_char(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n'
            | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

/// First character of `text` that XML cannot carry, if any.
pub fn first_invalid_char(text: &str) -> Option<char> {
    text.chars().find(|&ch| !is_xml_char(ch))
}

/// Piece of run content inside a WordprocessingML paragraph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunPiece<'a> {
    Text(&'a str),
    Break,
    Tab,
}

/// Split text into literal pieces, line breaks and tabs.
///
/// `\r\n`, `\r` and `\n` all count as a single break.
pub fn split_run_pieces(text: &str) -> Vec<RunPiece<'_>> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        let piece = match ch {
            '\n' => RunPiece::Break,
            '\r' => {
                if let Some(&(_, '\n')) = chars.peek() {
                    chars.next();
                }
                RunPiece::Break
            }
            '\t' => RunPiece::Tab,
            _ => continue,
        };

        if start < idx {
            pieces.push(RunPiece::Text(&text[start..idx]));
        }
        pieces.push(piece);
        start = chars.peek().map(|&(next, _)| next).unwrap_or(text.len());
    }

    if start < text.len() {
        pieces.push(RunPiece::Text(&text[start..]));
    }
    pieces
}
