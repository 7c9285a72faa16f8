// Tajweed rule checks
//
// Each check inspects the letter at index `i` and its bounded neighborhood
// and returns a tag or `None`. `RULES` fixes the evaluation order: a letter
// can structurally qualify for several rules, and the first match wins.

use tajweed_core::character::{
    ALIF, ALIF_MAQSURA, ALIF_WASLA, BA, DAMMA, FATHA, IDGHAAM_WITH_GHUNNA_LETTERS,
    IDGHAAM_WITHOUT_GHUNNA_LETTERS, IKHFA_LETTERS, KASRA, LAM, MEEM, NOON, QALQALA_LETTERS,
    SHADDA, SUKOON_MARKS, SUPERSCRIPT_ALIF, WAW, YA, is_hamza, is_sun_letter,
};
use tajweed_core::enums::RuleTag;

use crate::scanner::{
    diacritics_following, has_shadda, has_sukoon, has_tanween, is_word_boundary,
    next_arabic_char, next_base_char, next_base_index, prev_base_char, prev_base_index,
};

/// A single rule check.
pub type RuleCheck = fn(&[char], usize) -> Option<RuleTag>;

/// Rule checks in priority order, with a name for tracing.
pub const RULES: &[(&str, RuleCheck)] = &[
    ("shadda_idghaam", check_shadda_idghaam),
    ("qalqala", check_qalqala),
    ("noon_saakin", check_noon_rules),
    ("meem_saakin", check_meem_rules),
    ("laam", check_laam_rules),
    ("madd", check_madd_rules),
];

/// Tag for the letter following a silent noon or tanween.
fn noon_rule_for(next: char) -> Option<RuleTag> {
    if next == BA {
        Some(RuleTag::Iqlab)
    } else if IDGHAAM_WITH_GHUNNA_LETTERS.contains(&next) {
        Some(RuleTag::Idghaam)
    } else if IDGHAAM_WITHOUT_GHUNNA_LETTERS.contains(&next) {
        Some(RuleTag::IdghaamNoGhunna)
    } else if IKHFA_LETTERS.contains(&next) {
        Some(RuleTag::Ikhfa)
    } else {
        // izhar: pronounced clearly, left uncolored
        None
    }
}

/// Gemination on noon, ya, meem, waw, laam or ra marks an assimilated noon.
pub fn check_shadda_idghaam(text: &[char], i: usize) -> Option<RuleTag> {
    if !has_shadda(text, i) {
        return None;
    }
    let c = text[i];
    if IDGHAAM_WITH_GHUNNA_LETTERS.contains(&c) {
        Some(RuleTag::Idghaam)
    } else if IDGHAAM_WITHOUT_GHUNNA_LETTERS.contains(&c) {
        Some(RuleTag::IdghaamNoGhunna)
    } else {
        None
    }
}

pub fn check_qalqala(text: &[char], i: usize) -> Option<RuleTag> {
    (QALQALA_LETTERS.contains(&text[i]) && has_sukoon(text, i)).then_some(RuleTag::Qalqala)
}

/// Silent noon or tanween, resolved by the next letter even across a space.
pub fn check_noon_rules(text: &[char], i: usize) -> Option<RuleTag> {
    let noon_saakin = text[i] == NOON && has_sukoon(text, i);
    if !noon_saakin && !has_tanween(text, i) {
        return None;
    }
    next_arabic_char(text, i).and_then(noon_rule_for)
}

pub fn check_meem_rules(text: &[char], i: usize) -> Option<RuleTag> {
    if text[i] != MEEM || !has_sukoon(text, i) {
        return None;
    }
    match next_arabic_char(text, i)? {
        MEEM => Some(RuleTag::Idghaam),
        BA => Some(RuleTag::Ikhfa),
        _ => None,
    }
}

/// Laam of the definite article before a sun letter.
///
/// Moon letters are left uncolored.
pub fn check_laam_rules(text: &[char], i: usize) -> Option<RuleTag> {
    if text[i] != LAM || prev_base_char(text, i) != Some(ALIF) {
        return None;
    }
    let next = next_base_char(text, i)?;
    is_sun_letter(next).then_some(RuleTag::LaamShamsiyya)
}

/// Whether the letter at `i` is a prolongation letter in its context.
pub fn is_madd_letter(text: &[char], i: usize) -> bool {
    let c = text[i];
    let marks = diacritics_following(text, i);
    let prev_marks = prev_base_index(text, i)
        .map(|p| diacritics_following(text, p))
        .unwrap_or_default();

    match c {
        ALIF | ALIF_WASLA => {
            marks.contains(&SUPERSCRIPT_ALIF)
                || prev_marks.contains(&FATHA)
                || prev_marks.contains(&SUPERSCRIPT_ALIF)
        }
        WAW => {
            (has_sukoon(text, i) && prev_marks.contains(&DAMMA)) || marks.contains(&SUPERSCRIPT_ALIF)
        }
        YA | ALIF_MAQSURA => {
            (has_sukoon(text, i) && prev_marks.contains(&KASRA))
                || (c == ALIF_MAQSURA && marks.contains(&SUPERSCRIPT_ALIF))
        }
        _ => false,
    }
}

/// Prolongation, typed by what follows the madd letter.
pub fn check_madd_rules(text: &[char], i: usize) -> Option<RuleTag> {
    if !is_madd_letter(text, i) {
        return None;
    }
    let Some(next) = next_base_index(text, i) else {
        return Some(RuleTag::Madd);
    };

    let next_marks = diacritics_following(text, next);
    if next_marks.contains(&SHADDA) {
        return Some(RuleTag::MaddLazim);
    }
    if next_marks.iter().any(|m| SUKOON_MARKS.contains(m)) && !is_word_boundary(text, next) {
        return Some(RuleTag::MaddLazim);
    }
    if is_hamza(text[next]) {
        return Some(RuleTag::MaddMunfasil);
    }
    if text[next] == ' ' && next_base_char(text, next).is_some_and(is_hamza) {
        return Some(RuleTag::MaddMunfasil);
    }
    Some(RuleTag::Madd)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn rule_order_is_fixed() {
        let names: Vec<&str> = RULES.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            ["shadda_idghaam", "qalqala", "noon_saakin", "meem_saakin", "laam", "madd"]
        );
    }

    #[test]
    fn noon_table() {
        assert_eq!(noon_rule_for(BA), Some(RuleTag::Iqlab));
        assert_eq!(noon_rule_for(YA), Some(RuleTag::Idghaam));
        assert_eq!(noon_rule_for('\u{0631}'), Some(RuleTag::IdghaamNoGhunna));
        assert_eq!(noon_rule_for('\u{0643}'), Some(RuleTag::Ikhfa));
        assert_eq!(noon_rule_for('\u{0639}'), None); // ع: izhar
    }

    #[test]
    fn shadda_on_noon_and_ra() {
        // نَّ
        let t = chars("\u{0646}\u{064E}\u{0651}");
        assert_eq!(check_shadda_idghaam(&t, 0), Some(RuleTag::Idghaam));
        // رَّ
        let t = chars("\u{0631}\u{064E}\u{0651}");
        assert_eq!(check_shadda_idghaam(&t, 0), Some(RuleTag::IdghaamNoGhunna));
        // بِّ: shadda on a letter outside both sets
        let t = chars("\u{0628}\u{0650}\u{0651}");
        assert_eq!(check_shadda_idghaam(&t, 0), None);
    }

    #[test]
    fn qalqala_needs_sukoon() {
        let t = chars("\u{062F}\u{0652}");
        assert_eq!(check_qalqala(&t, 0), Some(RuleTag::Qalqala));
        let t = chars("\u{062F}\u{064E}");
        assert_eq!(check_qalqala(&t, 0), None);
        let t = chars("\u{0633}\u{0652}");
        assert_eq!(check_qalqala(&t, 0), None);
    }

    #[test]
    fn tanween_triggers_noon_rules() {
        // عَلِيمٌ بِ
        let t = chars("\u{0645}\u{064C} \u{0628}\u{0650}");
        assert_eq!(check_noon_rules(&t, 0), Some(RuleTag::Iqlab));
    }

    #[test]
    fn noon_at_end_of_text_is_unresolved() {
        let t = chars("\u{0646}\u{0652}");
        assert_eq!(check_noon_rules(&t, 0), None);
    }

    #[test]
    fn meem_saakin() {
        let t = chars("\u{0645}\u{0652} \u{0645}\u{064E}");
        assert_eq!(check_meem_rules(&t, 0), Some(RuleTag::Idghaam));
        let t = chars("\u{0645}\u{0652} \u{0628}\u{0650}");
        assert_eq!(check_meem_rules(&t, 0), Some(RuleTag::Ikhfa));
        let t = chars("\u{0645}\u{0652} \u{0648}\u{064E}");
        assert_eq!(check_meem_rules(&t, 0), None);
    }

    #[test]
    fn laam_of_article() {
        // الشَّمْس
        let t = chars("\u{0627}\u{0644}\u{0634}\u{0651}\u{064E}\u{0645}\u{0652}\u{0633}");
        assert_eq!(check_laam_rules(&t, 1), Some(RuleTag::LaamShamsiyya));
        // القَمَر: moon letter
        let t = chars("\u{0627}\u{0644}\u{0642}\u{064E}\u{0645}\u{064E}\u{0631}");
        assert_eq!(check_laam_rules(&t, 1), None);
        // laam not preceded by alif
        let t = chars("\u{0628}\u{0644}\u{0634}");
        assert_eq!(check_laam_rules(&t, 1), None);
    }

    #[test]
    fn alif_after_fatha_is_madd_letter() {
        let t = chars("\u{0642}\u{064E}\u{0627}\u{0644}\u{064E}");
        assert!(is_madd_letter(&t, 2));
        assert_eq!(check_madd_rules(&t, 2), Some(RuleTag::Madd));
    }

    #[test]
    fn alif_without_preceding_fatha_is_not_madd() {
        let t = chars("\u{0642}\u{0650}\u{0627}");
        assert!(!is_madd_letter(&t, 2));
        let t = chars("\u{0627}");
        assert!(!is_madd_letter(&t, 0));
    }

    #[test]
    fn waw_and_ya_saakin() {
        // قُوْ
        let t = chars("\u{0642}\u{064F}\u{0648}\u{0652}");
        assert!(is_madd_letter(&t, 2));
        // قِيْ
        let t = chars("\u{0642}\u{0650}\u{064A}\u{0652}");
        assert!(is_madd_letter(&t, 2));
        // قَيْ: diphthong, not madd
        let t = chars("\u{0642}\u{064E}\u{064A}\u{0652}");
        assert!(!is_madd_letter(&t, 2));
    }

    #[test]
    fn alif_maqsura_with_superscript_alif() {
        let t = chars("\u{0647}\u{064F}\u{062F}\u{064B}\u{0649}\u{0670}");
        assert!(is_madd_letter(&t, 4));
    }

    #[test]
    fn madd_before_shadda_is_lazim() {
        // الضَّالِّينَ, second alif
        let t = chars(
            "\u{0627}\u{0644}\u{0636}\u{0651}\u{064E}\u{0627}\u{0644}\u{0651}\u{0650}\u{064A}\u{0646}\u{064E}",
        );
        assert_eq!(check_madd_rules(&t, 5), Some(RuleTag::MaddLazim));
    }

    #[test]
    fn madd_before_word_internal_sukoon_is_lazim() {
        // قَالْم: sukoon on a letter that is not word-final
        let t = chars("\u{0642}\u{064E}\u{0627}\u{0644}\u{0652}\u{0645}");
        assert_eq!(check_madd_rules(&t, 2), Some(RuleTag::MaddLazim));
        // قَالْ: sukoon at the end of the word stays natural madd
        let t = chars("\u{0642}\u{064E}\u{0627}\u{0644}\u{0652}");
        assert_eq!(check_madd_rules(&t, 2), Some(RuleTag::Madd));
    }

    #[test]
    fn madd_before_hamza_across_space() {
        // بِمَآ أُنزِلَ
        let t = chars(
            "\u{0628}\u{0650}\u{0645}\u{064E}\u{0627}\u{0653} \u{0623}\u{064F}\u{0646}\u{0632}\u{0650}\u{0644}\u{064E}",
        );
        assert_eq!(check_madd_rules(&t, 4), Some(RuleTag::MaddMunfasil));
    }

    #[test]
    fn madd_before_hamza_in_same_word() {
        // جَاءَ
        let t = chars("\u{062C}\u{064E}\u{0627}\u{0621}\u{064E}");
        assert_eq!(check_madd_rules(&t, 2), Some(RuleTag::MaddMunfasil));
    }

    #[test]
    fn madd_at_end_of_text() {
        let t = chars("\u{0645}\u{064E}\u{0627}");
        assert_eq!(check_madd_rules(&t, 2), Some(RuleTag::Madd));
    }
}
