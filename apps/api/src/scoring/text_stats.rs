//! Text statistics for readability and keyword-density scoring.
//!
//! Three counts, each with its own tokenization:
//! - `sentence_count` splits on terminal punctuation and ignores fragments of
//!   two words or fewer (headings, bullet stubs), but never reports zero for
//!   text that contains any words.
//! - `lexicon_count` counts whitespace tokens that still carry a character
//!   after punctuation is stripped.
//! - `syllable_count` is a vowel-group heuristic with silent-`e` handling.

const SENTENCE_TERMINATORS: &[char] = &['.', '!', '?'];

/// Fragments at or below this many words are not counted as sentences.
const SHORT_SENTENCE_WORDS: u32 = 2;

pub fn sentence_count(text: &str) -> u32 {
    let mut total = 0u32;
    let mut short = 0u32;

    for fragment in text.split(SENTENCE_TERMINATORS) {
        let words = lexicon_count(fragment);
        if words == 0 {
            continue;
        }
        total += 1;
        if words <= SHORT_SENTENCE_WORDS {
            short += 1;
        }
    }

    if total == 0 {
        0
    } else {
        (total - short).max(1)
    }
}

pub fn lexicon_count(text: &str) -> u32 {
    text.split_whitespace()
        .filter(|token| token.chars().any(|c| !c.is_ascii_punctuation()))
        .count() as u32
}

/// Syllables in a single word. Non-alphabetic characters are ignored;
/// a word with at least one letter has at least one syllable.
pub fn syllable_count(word: &str) -> u32 {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();

    if letters.is_empty() {
        return 0;
    }

    let mut count = 0u32;
    let mut previous_was_vowel = false;
    for &c in &letters {
        let vowel = is_vowel(c);
        if vowel && !previous_was_vowel {
            count += 1;
        }
        previous_was_vowel = vowel;
    }

    // silent trailing "e" ("cake"), but not "-le" ("table")
    let n = letters.len();
    if count > 1 && letters[n - 1] == 'e' && !(n >= 2 && letters[n - 2] == 'l') {
        count -= 1;
    }

    count.max(1)
}

pub fn total_syllables(text: &str) -> u32 {
    text.split_whitespace().map(syllable_count).sum()
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}
