// Query and candidate normalization: simple case folding and diacritic stripping
//
// The same functions must be applied to the query and to every candidate
// word. Both steps return borrowed data when nothing changes, which is the
// common case for ASCII dictionaries.

use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

use crate::character::simple_lower;
use crate::policy::Policy;

/// Combining diacritical marks removed after canonical decomposition.
const COMBINING_DIACRITICS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Check whether a character is a combining diacritical mark (U+0300–U+036F).
#[inline]
pub fn is_combining_diacritic(c: char) -> bool {
    COMBINING_DIACRITICS.contains(&c)
}

/// Lowercase every character with its simple one-to-one mapping when
/// `ignore_case` is set. Otherwise the input is returned unchanged.
///
/// The result always has the same number of characters as the input.
pub fn fold_case(s: &str, ignore_case: bool) -> Cow<'_, str> {
    if !ignore_case || !s.chars().any(|c| simple_lower(c) != c) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().map(simple_lower).collect())
}

/// Decompose `s` into NFD and drop combining marks in U+0300–U+036F.
///
/// `"café"` becomes `"cafe"`, `"Ångström"` becomes `"Angstrom"`. Marks
/// outside the range (and characters without a canonical decomposition,
/// such as `ø`) are kept.
pub fn strip_diacritics(s: &str) -> Cow<'_, str> {
    if s.is_ascii() {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.nfd().filter(|&c| !is_combining_diacritic(c)).collect())
}

/// Normalize a string under the case and diacritic settings of a policy.
///
/// Case folding runs first, then diacritic stripping when the policy asks for
/// it. Stripping can expose a base letter that had no simple lowercase form
/// while it was precomposed (`'İ'` decomposes to `'I'` plus a dot), so the
/// stripped text is folded once more. Normalizing an already normalized
/// string returns it unchanged.
pub fn normalize<'a>(s: &'a str, policy: &Policy) -> Cow<'a, str> {
    let folded = fold_case(s, policy.ignore_case);
    if !policy.ignore_diacritics {
        return folded;
    }
    let stripped = match folded {
        Cow::Borrowed(b) => strip_diacritics(b),
        Cow::Owned(o) => Cow::Owned(strip_diacritics(&o).into_owned()),
    };
    match stripped {
        Cow::Borrowed(b) => fold_case(b, policy.ignore_case),
        Cow::Owned(o) => Cow::Owned(fold_case(&o, policy.ignore_case).into_owned()),
    }
}
