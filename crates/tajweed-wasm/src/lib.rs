// WASM bindings for the Tajweed annotation engine.
//
// Exports a `WasmAnnotator` class wrapping the memoizing `Annotator` from
// tajweed-engine. Segment arrays are serialized to plain JavaScript objects
// with serde-wasm-bindgen. Rule identity crosses the boundary as a color
// token string ("qalqala", "madd_lazim", ...); mapping tokens to actual
// colors is left to the stylesheet.
//
// Usage from JavaScript:
//
//   const annotator = new WasmAnnotator(true, true);
//   annotator.classifyTajweed(verse);  // => [{ text, color }, ...]
//   annotator.partitionTawafuq(verse); // => [{ text, isAllah }, ...]
//   annotator.combine(verse);          // => [{ text, color, isAllah }, ...]
//   annotator.annotate(verse);         // => as combine, honoring the toggles
//   WasmAnnotator.ruleTags();          // => [{ token, name, description, example }, ...]
//
// A null or undefined verse yields an empty array.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use tajweed_core::enums::{AnnotateOptions, Mode, ParseModeError, RuleTag};
use tajweed_core::segment::{AnnotatedSegment, NameSegment, Occurrence, TajweedSegment};
use tajweed_engine::handle::Annotator;

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsTajweedSegment {
    text: String,
    color: Option<&'static str>,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsNameSegment {
    text: String,
    is_allah: bool,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsAnnotatedSegment {
    text: String,
    color: Option<&'static str>,
    is_allah: bool,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsOccurrence {
    start: usize,
    length: usize,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsRuleTag {
    token: &'static str,
    name: &'static str,
    description: &'static str,
    example: Option<&'static str>,
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn color(rule: Option<RuleTag>) -> Option<&'static str> {
    rule.map(RuleTag::as_str)
}

impl From<TajweedSegment> for JsTajweedSegment {
    fn from(s: TajweedSegment) -> Self {
        Self {
            text: s.text,
            color: color(s.rule),
        }
    }
}

impl From<NameSegment> for JsNameSegment {
    fn from(s: NameSegment) -> Self {
        Self {
            text: s.text,
            is_allah: s.is_allah,
        }
    }
}

impl From<AnnotatedSegment> for JsAnnotatedSegment {
    fn from(s: AnnotatedSegment) -> Self {
        Self {
            text: s.text,
            color: color(s.rule),
            is_allah: s.is_allah,
        }
    }
}

impl From<Occurrence> for JsOccurrence {
    fn from(o: Occurrence) -> Self {
        Self {
            start: o.start,
            length: o.len,
        }
    }
}

impl From<RuleTag> for JsRuleTag {
    fn from(tag: RuleTag) -> Self {
        Self {
            token: tag.as_str(),
            name: tag.display_name(),
            description: tag.description(),
            example: tag.example(),
        }
    }
}

fn convert<T, U: From<T>>(items: Vec<T>) -> Vec<U> {
    items.into_iter().map(U::from).collect()
}

fn mode_options(mode: &str) -> Result<AnnotateOptions, ParseModeError> {
    mode.parse::<Mode>().map(Mode::options)
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

// ============================================================================
// WasmAnnotator
// ============================================================================

/// Tajweed and divine-name annotator for WebAssembly.
#[wasm_bindgen]
pub struct WasmAnnotator {
    annotator: Annotator,
}

#[wasm_bindgen]
impl WasmAnnotator {
    /// Create an annotator with the given passes enabled.
    #[wasm_bindgen(constructor)]
    pub fn new(tajweed: bool, tawafuq: bool) -> WasmAnnotator {
        WasmAnnotator {
            annotator: Annotator::new(AnnotateOptions { tajweed, tawafuq }),
        }
    }

    /// Create an annotator from a mode name: "plain", "tajweed", "tawafuq"
    /// or "both".
    #[wasm_bindgen(js_name = "fromMode")]
    pub fn from_mode(mode: &str) -> Result<WasmAnnotator, JsError> {
        let options = mode_options(mode).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(WasmAnnotator {
            annotator: Annotator::new(options),
        })
    }

    /// Split a verse into rule-colored segments.
    ///
    /// Returns `[{ text, color }]` where `color` is a token or `null`.
    #[wasm_bindgen(js_name = "classifyTajweed")]
    pub fn classify_tajweed(&self, text: Option<String>) -> Result<JsValue, JsError> {
        let segs = text
            .map(|t| self.annotator.classify_tajweed(&t))
            .unwrap_or_default();
        to_js(&convert::<_, JsTajweedSegment>(segs))
    }

    /// Split a verse into name and non-name segments.
    ///
    /// Returns `[{ text, isAllah }]`.
    #[wasm_bindgen(js_name = "partitionTawafuq")]
    pub fn partition_tawafuq(&self, text: Option<String>) -> Result<JsValue, JsError> {
        let segs = text
            .map(|t| self.annotator.partition_tawafuq(&t))
            .unwrap_or_default();
        to_js(&convert::<_, JsNameSegment>(segs))
    }

    /// Rule coloring with name spans taking precedence.
    ///
    /// Returns `[{ text, color, isAllah }]`.
    pub fn combine(&self, text: Option<String>) -> Result<JsValue, JsError> {
        let segs = text
            .map(|t| self.annotator.combine(&t))
            .unwrap_or_default();
        to_js(&convert::<_, JsAnnotatedSegment>(segs))
    }

    /// Annotate according to the enabled passes. Results are memoized.
    pub fn annotate(&self, text: Option<String>) -> Result<JsValue, JsError> {
        let segs = text
            .map(|t| self.annotator.annotate(&t))
            .unwrap_or_default();
        to_js(&convert::<_, JsAnnotatedSegment>(segs))
    }

    /// Name occurrences as `[{ start, length }]`, in characters. For Arabic
    /// text these equal UTF-16 code units.
    #[wasm_bindgen(js_name = "findOccurrences")]
    pub fn find_occurrences(&self, text: Option<String>) -> Result<JsValue, JsError> {
        let occ = text
            .map(|t| tajweed_engine::find_occurrences(&t))
            .unwrap_or_default();
        to_js(&convert::<_, JsOccurrence>(occ))
    }

    /// The rule legend: `[{ token, name, description, example }]`.
    #[wasm_bindgen(js_name = "ruleTags")]
    pub fn rule_tags() -> Result<JsValue, JsError> {
        let tags: Vec<JsRuleTag> = RuleTag::ALL.into_iter().map(JsRuleTag::from).collect();
        to_js(&tags)
    }

    // -- Options --

    #[wasm_bindgen(js_name = "setTajweed")]
    pub fn set_tajweed(&mut self, value: bool) {
        self.annotator.set_tajweed(value);
    }

    #[wasm_bindgen(js_name = "setTawafuq")]
    pub fn set_tawafuq(&mut self, value: bool) {
        self.annotator.set_tawafuq(value);
    }

    /// Memo cache capacity; 0 disables caching.
    #[wasm_bindgen(js_name = "setCacheSize")]
    pub fn set_cache_size(&mut self, size: usize) {
        self.annotator.set_cache_size(size);
    }

    /// Current mode name.
    #[wasm_bindgen(getter)]
    pub fn mode(&self) -> String {
        self.annotator.mode().as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tajweed_dto_carries_token() {
        let segs = tajweed_engine::classify("\u{0642}\u{064E}\u{062F}\u{0652}");
        let dto: Vec<JsTajweedSegment> = convert(segs);
        assert_eq!(
            dto,
            vec![
                JsTajweedSegment {
                    text: "\u{0642}\u{064E}".into(),
                    color: None,
                },
                JsTajweedSegment {
                    text: "\u{062F}\u{0652}".into(),
                    color: Some("qalqala"),
                },
            ]
        );
    }

    #[test]
    fn annotated_dto_marks_name() {
        let dto = JsAnnotatedSegment::from(AnnotatedSegment::name("x"));
        assert!(dto.is_allah);
        assert_eq!(dto.color, None);
    }

    #[test]
    fn legend_covers_every_tag() {
        let tags: Vec<JsRuleTag> = RuleTag::ALL.into_iter().map(JsRuleTag::from).collect();
        assert_eq!(tags.len(), 10);
        assert!(tags.iter().all(|t| !t.token.is_empty()));
        assert_eq!(tags.iter().filter(|t| t.example.is_none()).count(), 1);
    }

    #[test]
    fn mode_getter_follows_setters() {
        let mut annotator = WasmAnnotator::new(true, true);
        assert_eq!(annotator.mode(), "both");
        annotator.set_tawafuq(false);
        assert_eq!(annotator.mode(), "tajweed");
        annotator.set_tajweed(false);
        assert_eq!(annotator.mode(), "plain");
    }

    #[test]
    fn from_mode_accepts_mode_names() {
        let Ok(annotator) = WasmAnnotator::from_mode("both") else {
            panic!("\"both\" should parse");
        };
        assert_eq!(annotator.mode(), "both");
        let Ok(annotator) = WasmAnnotator::from_mode("tawafuq") else {
            panic!("\"tawafuq\" should parse");
        };
        assert_eq!(annotator.mode(), "tawafuq");
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let err = mode_options("loud").unwrap_err();
        assert!(err.to_string().contains("loud"));
        assert_eq!(mode_options("plain"), Ok(AnnotateOptions { tajweed: false, tawafuq: false }));
    }

    #[test]
    fn occurrence_dto_uses_length() {
        let dto = JsOccurrence::from(Occurrence::new(6, 7));
        assert_eq!(dto, JsOccurrence { start: 6, length: 7 });
    }
}
