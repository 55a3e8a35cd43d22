use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block.
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Fold text for accent- and case-insensitive comparison.
///
/// Decomposes to NFD, drops combining diacritical marks and lower-cases the
/// rest, so "Nova Zelândia" and "NOVA ZELANDIA" both become "nova zelandia".
pub fn normalize_text(text: &str) -> String {
    text.nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .collect::<String>()
        .to_lowercase()
}
