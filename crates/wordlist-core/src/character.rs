// Character classification for canonical English words

// ---------------------------------------------------------------------------
// Letter classes
// ---------------------------------------------------------------------------

/// Letters that satisfy the vowel rule. `y` counts as a vowel here so that
/// words such as "gym" or "sky" are accepted.
const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

/// Check whether a character is a lowercase ASCII letter (`a`-`z`).
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_lowercase()
}

/// Check whether a character is a vowel (`a e i o u y`).
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Check whether a character is a consonant: a lowercase ASCII letter that
/// is not in the vowel set.
pub fn is_consonant(c: char) -> bool {
    is_word_char(c) && !is_vowel(c)
}

// ---------------------------------------------------------------------------
// Run detection
// ---------------------------------------------------------------------------

/// Length of the longest run of identical consecutive characters.
///
/// Returns 0 for the empty string.
pub fn longest_repeat_run(word: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut prev = None;
    for c in word.chars() {
        if Some(c) == prev {
            current += 1;
        } else {
            current = 1;
            prev = Some(c);
        }
        longest = longest.max(current);
    }
    longest
}

/// Check whether `word` contains `n` or more identical consecutive characters.
pub fn has_repeated_run(word: &str, n: usize) -> bool {
    n > 0 && longest_repeat_run(word) >= n
}

/// Length of the longest run of consecutive consonants.
pub fn longest_consonant_run(word: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for c in word.chars() {
        if is_consonant(c) {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}
