// Tokenizer trait and the default social-media-aware implementation.
//
// The tokenizer sits behind a trait so the LSM core never depends on a
// particular way of splitting text. The default implementation keeps URLs,
// @mentions, #hashtags and emoticons intact, lower-cases everything else,
// and emits punctuation as separate tokens so the stop list can drop it.

use std::sync::LazyLock;

use regex_lite::Regex;

/// Splits raw text into word-like tokens.
///
/// Implementations must be deterministic: the same input always yields the
/// same tokens, otherwise LSM output is not reproducible.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

// Letters and digits, including non-ASCII letters. General punctuation
// (U+2000..U+206F), Latin-1 symbols, arrows and emoji are left out so curly
// quotes, dashes and pictographs split off as their own tokens. The Ogham
// space mark and the ideographic space are whitespace, not letters.
const WORD_CHAR: &str = concat!(
    r"[A-Za-z0-9_\x{C0}-\x{167F}\x{1681}-\x{1FFF}\x{2070}-\x{218F}",
    r"\x{2C00}-\x{2FFF}\x{3001}-\x{1EFFF}\x{20000}-\x{10FFFF}]"
);

// Everything `char::is_whitespace` accepts. regex-lite's `\s` is ASCII-only.
const SPACE_CHARS: &str =
    r"\s\x{85}\x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}";

static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let w = WORD_CHAR;
    let sp = SPACE_CHARS;
    let pattern = [
        // URLs
        format!(r"(?:https?://|www\.)[^{sp}]+"),
        // Emoticons, kept case-sensitive
        r"(?P<emoticon><3|[<>]?[:;=][\-o*']?[)\](\[dDpP/:}{@|\\])".to_string(),
        // @mentions and #hashtags
        format!(r"[@#]{w}+"),
        // Numbers with separators (plain digit runs fall through to words)
        r"\d+(?:[.,:]\d+)+".to_string(),
        // Words, with inner apostrophes or hyphens
        format!(r"(?P<word>{w}+(?:['’\-]{w}+)*)"),
        // Runs of dots
        r"\.\.+".to_string(),
        // Anything else but whitespace, one character at a time
        format!(r"[^{sp}]"),
    ]
    .join("|");
    Regex::new(&pattern).expect("valid token pattern")
});

/// Default tokenizer, aware of social-media syntax.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwitterAwareTokenizer;

impl Tokenizer for TwitterAwareTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut pos = 0;

        while let Some(caps) = TOKEN_PATTERN.captures_at(text, pos) {
            let Some(whole) = caps.get(0) else { break };

            if caps.name("emoticon").is_some() {
                if glued_to_word(&text[whole.end()..]) {
                    // `Note:Don't` is punctuation then a word, not `:D`.
                    // Emoticons start with an ASCII character.
                    let end = whole.start() + 1;
                    tokens.push(text[whole.start()..end].to_string());
                    pos = end;
                    continue;
                }
                tokens.push(whole.as_str().to_string());
            } else if caps.name("word").is_some() {
                // Dictionaries spell contractions with a straight apostrophe
                tokens.push(whole.as_str().to_lowercase().replace('’', "'"));
            } else {
                tokens.push(whole.as_str().to_lowercase());
            }
            pos = whole.end();
        }

        tokens
    }
}

/// True if `rest` starts with a letter, digit or underscore.
fn glued_to_word(rest: &str) -> bool {
    rest.chars()
        .next()
        .is_some_and(|c| c.is_alphanumeric() || c == '_')
}

/// Lower-cases and splits on whitespace, stripping ASCII punctuation from
/// token edges. Handy for tests and for callers whose text is already clean.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(|t| t.trim_matches(|c: char| c.is_ascii_punctuation()))
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
            .collect()
    }
}
