// Character classification and Arabic letter tables
//
// Every table here is plain data: rule code checks membership and never
// branches on individual letters.

// ---------------------------------------------------------------------------
// Diacritics
// ---------------------------------------------------------------------------

pub const FATHA: char = '\u{064E}';
pub const DAMMA: char = '\u{064F}';
pub const KASRA: char = '\u{0650}';
pub const SHADDA: char = '\u{0651}';
pub const SUKOON: char = '\u{0652}';
pub const MADDAH: char = '\u{0653}';
/// Small high dotless head of khah, the Uthmani rendering of sukoon.
pub const QURANIC_SUKOON: char = '\u{06E1}';
/// Also called alif khanjariyah (dagger alif).
pub const SUPERSCRIPT_ALIF: char = '\u{0670}';

/// Combining marks that attach to the preceding base letter.
///
/// Harakat, tanween, shadda, sukoon, maddah, superscript alif and the
/// Quranic annotation signs used by Uthmani typesetting.
pub const DIACRITICS: &[char] = &[
    '\u{064B}', // fathatan
    '\u{064C}', // dammatan
    '\u{064D}', // kasratan
    FATHA,
    DAMMA,
    KASRA,
    SHADDA,
    SUKOON,
    MADDAH,
    SUPERSCRIPT_ALIF,
    '\u{06DF}', // small high rounded zero
    '\u{06E0}', // small high upright rectangular zero
    QURANIC_SUKOON,
    '\u{06E2}', // small high meem isolated form
    '\u{06E3}', // small low seen
    '\u{06E4}', // small high madda
    '\u{06E5}', // small waw
    '\u{06E6}', // small yeh
    '\u{06E7}', // small high yeh
    '\u{06E8}', // small high noon
    '\u{06EA}', // empty centre low stop
    '\u{06EB}', // empty centre high stop
    '\u{06EC}', // rounded high stop with filled centre
    '\u{06ED}', // small low meem
];

/// Diacritics ignored when comparing renderings of the same word.
///
/// Everything in [`DIACRITICS`] except shadda, maddah, superscript alif and
/// U+06E0: those change the letter skeleton a reader sees.
pub const MINOR_DIACRITICS: &[char] = &[
    '\u{064B}', '\u{064C}', '\u{064D}', FATHA, DAMMA, KASRA, SUKOON, '\u{06DF}', QURANIC_SUKOON,
    '\u{06E2}', '\u{06E3}', '\u{06E4}', '\u{06E5}', '\u{06E6}', '\u{06E7}', '\u{06E8}', '\u{06EA}',
    '\u{06EB}', '\u{06EC}', '\u{06ED}',
];

/// Sukoon has two glyph variants depending on the script convention.
pub const SUKOON_MARKS: &[char] = &[SUKOON, QURANIC_SUKOON];

/// Fathatan, dammatan, kasratan.
pub const TANWEEN_MARKS: &[char] = &['\u{064B}', '\u{064C}', '\u{064D}'];

// ---------------------------------------------------------------------------
// Letters
// ---------------------------------------------------------------------------

pub const ALIF: char = '\u{0627}';
pub const ALIF_WASLA: char = '\u{0671}';
pub const ALIF_MAQSURA: char = '\u{0649}';
pub const BA: char = '\u{0628}';
pub const LAM: char = '\u{0644}';
pub const MEEM: char = '\u{0645}';
pub const NOON: char = '\u{0646}';
pub const WAW: char = '\u{0648}';
pub const YA: char = '\u{064A}';

/// ق ط ب ج د
pub const QALQALA_LETTERS: &[char] = &['\u{0642}', '\u{0637}', BA, '\u{062C}', '\u{062F}'];

/// Letters before which a silent noon or tanween is concealed.
pub const IKHFA_LETTERS: &[char] = &[
    '\u{062A}', // ت
    '\u{062B}', // ث
    '\u{062C}', // ج
    '\u{062F}', // د
    '\u{0630}', // ذ
    '\u{0632}', // ز
    '\u{0633}', // س
    '\u{0634}', // ش
    '\u{0635}', // ص
    '\u{0636}', // ض
    '\u{0638}', // ظ
    '\u{0641}', // ف
    '\u{0642}', // ق
    '\u{0643}', // ك
];

/// ي ن م و
pub const IDGHAAM_WITH_GHUNNA_LETTERS: &[char] = &[YA, NOON, MEEM, WAW];

/// ل ر
pub const IDGHAAM_WITHOUT_GHUNNA_LETTERS: &[char] = &[LAM, '\u{0631}'];

/// Sun letters: the laam of the definite article assimilates into them.
pub const SHAMSIYYAH_LETTERS: &[char] = &[
    '\u{062A}', // ت
    '\u{062B}', // ث
    '\u{062F}', // د
    '\u{0630}', // ذ
    '\u{0631}', // ر
    '\u{0632}', // ز
    '\u{0633}', // س
    '\u{0634}', // ش
    '\u{0635}', // ص
    '\u{0636}', // ض
    '\u{0637}', // ط
    '\u{0638}', // ظ
    LAM,
    NOON,
];

/// Moon letters: the laam of the definite article is pronounced.
pub const QAMARIYYAH_LETTERS: &[char] = &[
    ALIF,
    BA,
    '\u{062C}', // ج
    '\u{062D}', // ح
    '\u{062E}', // خ
    '\u{0639}', // ع
    '\u{063A}', // غ
    '\u{0641}', // ف
    '\u{0642}', // ق
    '\u{0643}', // ك
    MEEM,
    '\u{0647}', // ه
    WAW,
    YA,
];

/// ء أ ؤ ئ إ
pub const HAMZA_LETTERS: &[char] = &['\u{0621}', '\u{0623}', '\u{0624}', '\u{0626}', '\u{0625}'];

/// Punctuation and digits inside the Arabic block: ، ؛ ؟ ٪ ٫ ٬ ٭ ۔ ۝,
/// Arabic-Indic and extended Arabic-Indic digits.
const ARABIC_PUNCTUATION_RANGES: &[(u32, u32)] = &[
    (0x060C, 0x060C),
    (0x061B, 0x061B),
    (0x061F, 0x061F),
    (0x0660, 0x0669),
    (0x066A, 0x066D),
    (0x06D4, 0x06D4),
    (0x06DD, 0x06DD),
    (0x06F0, 0x06F9),
];

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// The category of a single code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// A code point of the Arabic blocks that carries its own cluster.
    BaseLetter,
    /// A combining mark from [`DIACRITICS`].
    Diacritic,
    /// Spaces, punctuation, digits and anything outside the Arabic blocks.
    Other,
}

/// Classify a code point.
pub fn classify_char(c: char) -> CharClass {
    if is_diacritic(c) {
        CharClass::Diacritic
    } else if is_arabic_letter(c) && !is_arabic_punctuation(c) {
        CharClass::BaseLetter
    } else {
        CharClass::Other
    }
}

pub fn is_diacritic(c: char) -> bool {
    DIACRITICS.contains(&c)
}

/// Arabic punctuation, digits and the end-of-ayah sign.
pub fn is_arabic_punctuation(c: char) -> bool {
    let cp = c as u32;
    ARABIC_PUNCTUATION_RANGES
        .iter()
        .any(|&(lo, hi)| (lo..=hi).contains(&cp))
}

pub fn is_minor_diacritic(c: char) -> bool {
    MINOR_DIACRITICS.contains(&c)
}

/// Check whether a code point lies in the Arabic, Arabic Supplement or
/// Arabic Extended-A blocks.
///
/// Only characters passing this test are evaluated by Tajweed rules, so a
/// Latin or Cyrillic letter that merely looks like a rule letter never is.
pub fn is_arabic_letter(c: char) -> bool {
    let cp = c as u32;
    (0x0600..=0x06FF).contains(&cp)
        || (0x0750..=0x077F).contains(&cp)
        || (0x08A0..=0x08FF).contains(&cp)
}

/// Space or newline: the characters that end a word for same-word lookahead.
pub fn is_word_separator(c: char) -> bool {
    c == ' ' || c == '\n'
}

pub fn is_sun_letter(c: char) -> bool {
    SHAMSIYYAH_LETTERS.contains(&c)
}

pub fn is_moon_letter(c: char) -> bool {
    QAMARIYYAH_LETTERS.contains(&c)
}

pub fn is_hamza(c: char) -> bool {
    HAMZA_LETTERS.contains(&c)
}

/// Fold alif wasla onto plain alif.
///
/// Quranic corpora disagree on which of the two begins a word, so name
/// matching compares them as equal.
pub fn fold_alif(c: char) -> char {
    if c == ALIF_WASLA { ALIF } else { c }
}
