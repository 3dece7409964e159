//! Reflowing of PR bodies for changelog blocks.

use textwrap::{Options, WordSeparator, WordSplitter};

/// The column PR bodies are wrapped at unless configured otherwise.
pub const DEFAULT_WRAP_WIDTH: usize = 72;

/// Wraps free text at `width` columns.
///
/// Existing line breaks are kept and each line is wrapped on its own. Words
/// are only broken at ASCII spaces and are never split, so URLs and long
/// identifiers survive intact even when they exceed the width. Windows line
/// endings are normalised to `\n`.
pub fn wrap_body(body: &str, width: usize) -> String {
    let options = Options::new(width.max(1))
        .word_separator(WordSeparator::AsciiSpace)
        .word_splitter(WordSplitter::NoHyphenation)
        .break_words(false);

    body.lines()
        .map(|line| textwrap::fill(line, &options))
        .collect::<Vec<_>>()
        .join("\n")
}
