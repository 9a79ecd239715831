// ============================================================
// Layer 3 — Record Domain Type
// ============================================================
// A record pairs an utterance with the intents it expresses.
// On disk (and in JSON) a record is a two-element array:
//
//   ["book a table for two", ["restaurant_booking"]]
//   [["first field", "second field"], ["greet", "smalltalk"]]
//
// The utterance is either plain text or a list of text fields.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Split name → ordered records. "train", "valid", "test", or any
/// field produced by a merge or split.
pub type SplitMap = BTreeMap<String, Vec<Record>>;

/// The input side of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Utterance {
    Text(String),
    Fields(Vec<String>),
}

impl Utterance {
    /// Number of text pieces this utterance carries
    pub fn piece_count(&self) -> usize {
        match self {
            Utterance::Text(_)       => 1,
            Utterance::Fields(parts) => parts.len(),
        }
    }

    /// Borrow every text piece in order
    pub fn pieces(&self) -> Vec<&str> {
        match self {
            Utterance::Text(text)    => vec![text.as_str()],
            Utterance::Fields(parts) => parts.iter().map(String::as_str).collect(),
        }
    }

    /// Rebuild an utterance of the same shape from replacement pieces.
    /// `pieces` must yield exactly `piece_count()` items.
    pub fn with_pieces(&self, pieces: impl IntoIterator<Item = String>) -> Self {
        let mut pieces = pieces.into_iter();
        match self {
            Utterance::Text(_)   => Utterance::Text(pieces.next().unwrap_or_default()),
            Utterance::Fields(_) => Utterance::Fields(pieces.collect()),
        }
    }
}

impl From<&str> for Utterance {
    fn from(text: &str) -> Self {
        Utterance::Text(text.to_string())
    }
}

impl From<String> for Utterance {
    fn from(text: String) -> Self {
        Utterance::Text(text)
    }
}

/// One labelled sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(Utterance, Vec<String>)", into = "(Utterance, Vec<String>)")]
pub struct Record {
    /// Raw text (or text fields) of the sample
    pub utterance: Utterance,

    /// Intent labels, in the order the source listed them
    pub labels: Vec<String>,
}

impl Record {
    /// Create a record from anything string-like.
    ///
    /// Example:
    ///   let r = Record::new("hi", ["greet"]);
    pub fn new<U, L, S>(utterance: U, labels: L) -> Self
    where
        U: Into<Utterance>,
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            utterance: utterance.into(),
            labels:    labels.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<(Utterance, Vec<String>)> for Record {
    fn from((utterance, labels): (Utterance, Vec<String>)) -> Self {
        Self { utterance, labels }
    }
}

impl From<Record> for (Utterance, Vec<String>) {
    fn from(r: Record) -> Self {
        (r.utterance, r.labels)
    }
}
