use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::annotation::Annotation;
use crate::taxonomy::Detail;

/// One dictionary record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Headword forms, never empty. Kana-only words carry their kana here.
    pub kanji: Vec<String>,
    /// Readings, empty when the line has no `[...]` block.
    pub kana: Vec<String>,
    /// Tags applying to the entry as a whole.
    pub information: Vec<Detail>,
    /// Senses, never empty.
    pub glosses: Vec<Gloss>,
    pub sequence: String,
    pub recording_available: bool,
    pub priority: bool,
}

impl Entry {
    /// First headword form, used as the display key.
    pub fn headword(&self) -> &str {
        self.kanji.first().map_or("", String::as_str)
    }

    /// Every headword form followed by every reading.
    pub fn forms(&self) -> impl Iterator<Item = &str> {
        self.kanji.iter().chain(self.kana.iter()).map(String::as_str)
    }
}

/// One sense of an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gloss {
    pub definition: String,
    pub details: Vec<Detail>,
    pub xrefs: Vec<String>,
}

impl Gloss {
    pub fn new(definition: &str) -> Self {
        Self {
            definition: definition.trim().to_owned(),
            ..Self::default()
        }
    }

    /// Files a sense-level annotation. Sense numbers and free text have no slot and are dropped.
    pub(crate) fn annotate(&mut self, annotation: Annotation<'_>) {
        match annotation {
            Annotation::CrossReference(target) => self.xrefs.push(target.to_owned()),
            Annotation::Known { tags, .. } => self.details.extend(tags),
            Annotation::FreeText(text) => tracing::trace!(text, "dropping free-text annotation"),
            Annotation::Ignorable => {}
        }
    }
}

/// Renders the sense the way it would appear in a line. This is lossy:
/// sense numbers and free-text notes are gone.
impl fmt::Display for Gloss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.details.is_empty() {
            write!(f, "({}) ", self.details.iter().join(","))?;
        }
        for xref in &self.xrefs {
            write!(f, "(See {}) ", xref)?;
        }
        f.write_str(&self.definition)
    }
}
