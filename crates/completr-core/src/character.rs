// Character classification and simple case conversion

// ---------------------------------------------------------------------------
// Filler classification
//
// Filler characters may appear between two consecutive query characters
// inside a matching word. The class is the union of ASCII word characters,
// ECMAScript whitespace, parentheses, and a handful of CJK blocks whose
// words are not separated the way Latin words are.
// ---------------------------------------------------------------------------

/// CJK blocks accepted as filler, as inclusive code point ranges.
const CJK_FILLER_RANGES: &[(u32, u32)] = &[
    (0x4E00, 0x9FFF), // CJK Unified Ideographs
    (0x31C0, 0x31EF), // CJK Strokes
    (0x31F0, 0x31FF), // Katakana Phonetic Extensions
    (0x3200, 0x32FF), // Enclosed CJK Letters and Months
    (0x3300, 0x33FF), // CJK Compatibility
    (0x3400, 0x4DBF), // CJK Unified Ideographs Extension A
    (0x4DC0, 0x4DFF), // Yijing Hexagram Symbols
];

/// Character class of a single character, as seen by the subsequence matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FillerClass {
    /// ASCII letter, digit or underscore.
    Word,
    /// Whitespace or line terminator.
    Whitespace,
    /// `(` or `)`.
    Parenthesis,
    /// Character from one of the accepted CJK blocks.
    Cjk,
    /// Anything else. Such characters break a match in progress.
    None,
}

/// Classify a character for filler purposes.
pub fn filler_class(c: char) -> FillerClass {
    if is_ascii_word_char(c) {
        FillerClass::Word
    } else if is_whitespace(c) {
        FillerClass::Whitespace
    } else if c == '(' || c == ')' {
        FillerClass::Parenthesis
    } else if is_cjk_filler(c) {
        FillerClass::Cjk
    } else {
        FillerClass::None
    }
}

/// Check whether a character may appear between two matched query characters.
#[inline]
pub fn is_filler(c: char) -> bool {
    filler_class(c) != FillerClass::None
}

/// Check whether a character is an ASCII word character (`[A-Za-z0-9_]`).
///
/// Accented and non-Latin letters are deliberately not word characters.
#[inline]
pub fn is_ascii_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Check whether a character is whitespace or a line terminator.
///
/// This is the ECMAScript `\s` set, which differs from `char::is_whitespace`
/// (it includes U+FEFF and excludes U+0085).
pub fn is_whitespace(c: char) -> bool {
    let cp = c as u32;
    (0x09..=0x0D).contains(&cp)
        || cp == 0x20
        || cp == 0xA0
        || cp == 0x1680
        || (0x2000..=0x200A).contains(&cp)
        || cp == 0x2028
        || cp == 0x2029
        || cp == 0x202F
        || cp == 0x205F
        || cp == 0x3000
        || cp == 0xFEFF
}

/// Check whether a character belongs to one of the CJK filler blocks.
pub fn is_cjk_filler(c: char) -> bool {
    let cp = c as u32;
    CJK_FILLER_RANGES
        .iter()
        .any(|&(start, end)| (start..=end).contains(&cp))
}

// ---------------------------------------------------------------------------
// Simple case conversion
//
// The standard library's to_lowercase / to_uppercase produce iterators
// because some characters map to multiple characters. Only one-to-one
// mappings are applied here; characters with expanding mappings (such as
// 'ß' -> "SS" or 'İ' -> "i̇") are returned unchanged so that character
// counts never change under case conversion.
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
pub fn simple_lower(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    let mut iter = c.to_lowercase();
    match (iter.next(), iter.next()) {
        (Some(lower), None) => lower,
        _ => c,
    }
}

/// Convert a character to its simple uppercase equivalent.
pub fn simple_upper(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_uppercase();
    }
    let mut iter = c.to_uppercase();
    match (iter.next(), iter.next()) {
        (Some(upper), None) => upper,
        _ => c,
    }
}
