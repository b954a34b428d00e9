//! Splits raw page text into display-sized chunks.
//!
//! Text is cut into paragraphs at blank lines and Japanese terminal marks.
//! Paragraphs over the size limit are broken into sentences, which are
//! then greedily packed back together up to the limit. A sentence is never
//! split, so one very long sentence yields one oversized chunk.

use std::sync::OnceLock;

use regex::Regex;

use super::options::ChunkLimits;

/// Separator placed between packed sentences.
const SENTENCE_SEPARATOR: &str = "。";

/// Text chunker with fixed limits.
#[derive(Debug, Clone)]
pub struct TextChunker {
    limits: ChunkLimits,
    paragraph_break: Regex,
}

impl TextChunker {
    /// Create a chunker with the given limits.
    pub fn new(limits: ChunkLimits) -> Self {
        Self {
            limits,
            paragraph_break: Regex::new(r"\n\s*\n|[。！？]\s*").unwrap(),
        }
    }

    /// Limits this chunker applies.
    pub fn limits(&self) -> ChunkLimits {
        self.limits
    }

    /// Split `full_text` into ordered chunks.
    pub fn chunk(&self, full_text: &str) -> Vec<String> {
        if full_text.trim().is_empty() {
            return Vec::new();
        }

        let paragraphs = self
            .paragraph_break
            .split(full_text)
            .map(str::trim)
            .filter(|p| !p.is_empty());

        let mut chunks = Vec::new();
        for paragraph in paragraphs {
            if char_len(paragraph) > self.limits.max_chars {
                self.pack_sentences(paragraph, &mut chunks);
            } else {
                chunks.push(paragraph.to_string());
            }
        }

        chunks.retain(|chunk| char_len(chunk.trim()) > self.limits.min_chars);
        chunks
    }

    /// Greedy packing; the accumulator is flushed before a sentence that
    /// would push it past `max_chars`.
    fn pack_sentences(&self, paragraph: &str, out: &mut Vec<String>) {
        let sep_len = char_len(SENTENCE_SEPARATOR);
        let mut current = String::new();
        let mut current_len = 0;

        for sentence in split_sentences(paragraph) {
            let sentence_len = char_len(sentence);

            if !current.is_empty() && current_len + sep_len + sentence_len > self.limits.max_chars {
                out.push(std::mem::take(&mut current));
                current_len = 0;
            }

            if !current.is_empty() {
                current.push_str(SENTENCE_SEPARATOR);
                current_len += sep_len;
            }
            current.push_str(sentence);
            current_len += sentence_len;
        }

        if !current.is_empty() {
            out.push(current);
        }
    }
}

impl Default for TextChunker {
    fn default() -> Self {
        Self::new(ChunkLimits::default())
    }
}

/// Chunk text with the default limits.
pub fn chunk(full_text: &str) -> Vec<String> {
    static DEFAULT: OnceLock<TextChunker> = OnceLock::new();
    DEFAULT.get_or_init(TextChunker::default).chunk(full_text)
}

/// Chunk text with custom limits.
pub fn chunk_with(full_text: &str, limits: &ChunkLimits) -> Vec<String> {
    TextChunker::new(*limits).chunk(full_text)
}

/// Split a paragraph at terminal punctuation, dropping the marks.
///
/// Japanese marks (`。！？`) always end a sentence. ASCII marks (`.!?`)
/// do too unless a digit follows, so decimals like `3.14` stay intact.
/// Runs are joined without separators, so `end.Next` is split as well.
/// Empty sentences are dropped.
fn split_sentences(paragraph: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = paragraph.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        let ends_sentence = match ch {
            '。' | '！' | '？' => true,
            '.' | '!' | '?' => !chars.peek().is_some_and(|(_, next)| next.is_ascii_digit()),
            _ => false,
        };
        if ends_sentence {
            sentences.push(strip_sentence(&paragraph[start..idx]));
            start = idx + ch.len_utf8();
        }
    }
    sentences.push(strip_sentence(&paragraph[start..]));

    sentences.retain(|s| !s.is_empty());
    sentences
}

/// Trim whitespace and any leftover ASCII marks (e.g. the rest of `...`).
fn strip_sentence(text: &str) -> &str {
    text.trim().trim_end_matches(['.', '!', '?']).trim_end()
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
