// ============================================================
// Layer 4 — Text Preprocessors
// ============================================================
// Named batch transforms applied to every utterance before the
// dataset reaches a classifier. IntentDataset never looks a name
// up globally: the caller hands it a PreprocessorRegistry.
//
// Built-in entries:
//   clean             : normalise odd whitespace, drop control chars,
//                        collapse runs of spaces, trim
//   lowercase         : Unicode lowercase
//   strip_punctuation : drop punctuation, then clean
//
// Reference: Rust Book §8 (Strings), §13 (Closures)

use std::collections::BTreeMap;

use crate::domain::error::{DatasetError, Result};
use crate::domain::record::{Record, SplitMap};
use crate::domain::traits::TextTransform;

/// Normalise a single utterance to one line of single-spaced text.
pub fn clean(text: &str) -> String {
    let mut out        = String::with_capacity(text.len());
    let mut last_space = true;

    for c in text.chars() {
        let c = match c {
            '\u{00A0}' | '\u{200B}' | '\u{FEFF}' => ' ',
            c if c.is_whitespace() => ' ',
            c if c.is_control()    => continue,
            c => c,
        };

        if c == ' ' {
            if !last_space {
                out.push(' ');
            }
            last_space = true;
        } else {
            out.push(c);
            last_space = false;
        }
    }

    // At most one trailing space can remain
    if out.ends_with(' ') {
        out.pop();
    }
    out
}

pub fn lowercase(text: &str) -> String {
    text.to_lowercase()
}

/// Remove punctuation but keep apostrophes inside words ("don't").
pub fn strip_punctuation(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let kept: String = chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let inner_apostrophe = c == '\''
                && i > 0
                && chars[i - 1].is_alphanumeric()
                && chars.get(i + 1).is_some_and(|n| n.is_alphanumeric());
            if c.is_ascii_punctuation() && !inner_apostrophe { ' ' } else { c }
        })
        .collect();
    clean(&kept)
}

/// Lift a per-string function into a batch transform.
fn per_item(f: fn(&str) -> String) -> impl Fn(&[&str]) -> Vec<String> {
    move |batch: &[&str]| batch.iter().map(|s| f(s)).collect::<Vec<String>>()
}

// ─── PreprocessorRegistry ─────────────────────────────────────────────────────
/// Name → transform lookup injected into IntentDataset.
#[derive(Default)]
pub struct PreprocessorRegistry {
    entries: BTreeMap<String, Box<dyn TextTransform>>,
}

impl PreprocessorRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-loaded with clean, lowercase and strip_punctuation
    pub fn with_builtins() -> Self {
        let mut reg = Self::new();
        reg.register("clean", per_item(clean));
        reg.register("lowercase", per_item(lowercase));
        reg.register("strip_punctuation", per_item(strip_punctuation));
        reg
    }

    /// Add or replace a transform under `name`
    pub fn register(&mut self, name: impl Into<String>, transform: impl TextTransform + 'static) {
        self.entries.insert(name.into(), Box::new(transform));
    }

    pub fn get(&self, name: &str) -> Result<&dyn TextTransform> {
        self.entries
            .get(name)
            .map(|t| t.as_ref())
            .ok_or_else(|| DatasetError::unknown_preprocessor(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Apply `transform` to every utterance of every split and return a new
/// split map. Labels and record order are kept; `data` is not touched.
///
/// Each split is sent to the transform as one batch. Field utterances
/// contribute one batch item per field.
pub fn preprocess_splits(
    data:      &SplitMap,
    name:      &str,
    transform: &dyn TextTransform,
) -> Result<SplitMap> {
    let mut out = SplitMap::new();

    for (split, records) in data {
        let batch: Vec<&str> = records
            .iter()
            .flat_map(|r| r.utterance.pieces())
            .collect();

        let processed = transform.transform(&batch);
        if processed.len() != batch.len() {
            return Err(DatasetError::TransformLength {
                name:     name.to_string(),
                expected: batch.len(),
                got:      processed.len(),
            });
        }

        let mut processed = processed.into_iter();
        let rebuilt: Vec<Record> = records
            .iter()
            .map(|r| {
                let n = r.utterance.piece_count();
                Record {
                    utterance: r.utterance.with_pieces(processed.by_ref().take(n)),
                    labels:    r.labels.clone(),
                }
            })
            .collect();

        tracing::debug!("Preprocessed split '{}' with '{}' ({} records)", split, name, rebuilt.len());
        out.insert(split.clone(), rebuilt);
    }

    Ok(out)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::Utterance;

    fn sample_data() -> SplitMap {
        let mut data = SplitMap::new();
        data.insert(
            "train".into(),
            vec![
                Record::new("  Hello\tWorld ", ["greet"]),
                Record::new("BYE now", ["farewell", "smalltalk"]),
            ],
        );
        data.insert("valid".into(), vec![Record::new("Hi!", ["greet"])]);
        data
    }

    #[test]
    fn test_clean_collapses_and_trims() {
        assert_eq!(clean("  hello   world  "), "hello world");
        assert_eq!(clean("line1\r\nline2"), "line1 line2");
        assert_eq!(clean("a\u{00A0}b\u{200B}c"), "a b c");
        assert_eq!(clean("hel\x01lo"), "hello");
        assert_eq!(clean(""), "");
    }

    #[test]
    fn test_strip_punctuation_keeps_inner_apostrophe() {
        assert_eq!(strip_punctuation("Don't go, please!"), "Don't go please");
        assert_eq!(strip_punctuation("'quoted'"), "quoted");
    }

    #[test]
    fn test_registry_lookup() {
        let reg = PreprocessorRegistry::with_builtins();
        assert_eq!(reg.names().collect::<Vec<_>>(), vec!["clean", "lowercase", "strip_punctuation"]);
        assert_eq!(reg.get("lowercase").unwrap().transform(&["ABC"]), vec!["abc"]);
        assert!(matches!(
            reg.get("stemmer"),
            Err(DatasetError::UnknownPreprocessor(_))
        ));
    }

    #[test]
    fn test_custom_closure_registration() {
        let mut reg = PreprocessorRegistry::new();
        reg.register("shout", |b: &[&str]| b.iter().map(|s| s.to_uppercase()).collect::<Vec<_>>());
        assert_eq!(reg.get("shout").unwrap().transform(&["hi"]), vec!["HI"]);
    }

    #[test]
    fn test_preprocess_keeps_counts_and_labels() {
        let data = sample_data();
        let reg  = PreprocessorRegistry::with_builtins();
        let out  = preprocess_splits(&data, "lowercase", reg.get("lowercase").unwrap()).unwrap();

        assert_eq!(out["train"].len(), 2);
        assert_eq!(out["valid"].len(), 1);
        assert_eq!(out["train"][1], Record::new("bye now", ["farewell", "smalltalk"]));
        assert_eq!(out["valid"][0], Record::new("hi!", ["greet"]));
        for (split, records) in &data {
            for (a, b) in records.iter().zip(&out[split]) {
                assert_eq!(a.labels, b.labels);
            }
        }
    }

    #[test]
    fn test_preprocess_does_not_mutate_source() {
        let data = sample_data();
        let reg  = PreprocessorRegistry::with_builtins();
        let _    = preprocess_splits(&data, "clean", reg.get("clean").unwrap()).unwrap();
        assert_eq!(data, sample_data());
    }

    #[test]
    fn test_preprocess_fields_are_transformed_individually() {
        let mut data = SplitMap::new();
        data.insert(
            "train".into(),
            vec![
                Record::new(Utterance::Fields(vec!["A B".into(), "C".into()]), ["x"]),
                Record::new("D", ["y"]),
            ],
        );
        let reg = PreprocessorRegistry::with_builtins();
        let out = preprocess_splits(&data, "lowercase", reg.get("lowercase").unwrap()).unwrap();
        assert_eq!(out["train"][0].utterance, Utterance::Fields(vec!["a b".into(), "c".into()]));
        assert_eq!(out["train"][1].utterance, Utterance::from("d"));
    }

    #[test]
    fn test_preprocess_rejects_short_batches() {
        let data = sample_data();
        let drop_last = |b: &[&str]| b.iter().skip(1).map(|s| s.to_string()).collect::<Vec<_>>();
        let err = preprocess_splits(&data, "drop_last", &drop_last).unwrap_err();
        assert!(matches!(err, DatasetError::TransformLength { expected: 2, got: 1, .. }));
    }
}
