use std::path::Path;
use std::slice;

use encoding_rs::Encoding;
use unicode_normalization::UnicodeNormalization;

use crate::document::{self, Entries};
use crate::error::EdictError;

/// The first line of an EDICT distribution starts with this instead of a headword.
const BANNER_PREFIX: &str = "\u{3000}？？？";
const BANNER_SEPARATOR: char = '/';

/// How to turn the bytes of a dictionary file into lines.
#[derive(Debug, Clone, Copy)]
pub struct SourceOptions {
    pub encoding: &'static Encoding,
    /// Apply NFC to every line.
    pub normalize: bool,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            encoding: encoding_rs::UTF_8,
            normalize: true,
        }
    }
}

impl SourceOptions {
    /// Looks up an encoding by its WHATWG label, e.g. `utf-8` or `euc-jp`.
    pub fn with_encoding_label(mut self, label: &str) -> Result<Self, EdictError> {
        self.encoding =
            Encoding::for_label(label.as_bytes()).ok_or_else(|| EdictError::UnknownEncoding(label.to_owned()))?;
        Ok(self)
    }
}

/// Decoded lines of a dictionary file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionarySource {
    /// Description fields of the banner line, when the file has one.
    pub banner: Option<Vec<String>>,
    /// Every line after the banner, blank lines included.
    pub lines: Vec<String>,
    /// File line number of `lines[0]`: 2 after a banner, 1 otherwise.
    pub first_line: usize,
}

impl DictionarySource {
    pub fn from_text(text: &str, normalize: bool) -> Self {
        let mut lines = text.lines().map(|line| {
            if normalize {
                line.nfc().collect::<String>()
            } else {
                line.to_owned()
            }
        });

        let mut source = DictionarySource {
            banner: None,
            lines: Vec::new(),
            first_line: 1,
        };
        if let Some(first) = lines.next() {
            match banner_fields(&first) {
                Some(fields) => {
                    source.banner = Some(fields);
                    source.first_line = 2;
                }
                None => source.lines.push(first),
            }
        }
        source.lines.extend(lines);
        source
    }

    pub fn from_bytes(bytes: &[u8], options: SourceOptions) -> Self {
        let (text, encoding, had_errors) = options.encoding.decode(bytes);
        if had_errors {
            tracing::warn!(encoding = encoding.name(), "input contained malformed sequences");
        }
        Self::from_text(&text, options.normalize)
    }

    /// Parses the lines lazily, numbering errors by their line in the file.
    pub fn entries(&self) -> Entries<slice::Iter<'_, String>> {
        document::entries(&self.lines).starting_at(self.first_line)
    }
}

pub fn read_dictionary<P: AsRef<Path>>(path: P, options: SourceOptions) -> Result<DictionarySource, EdictError> {
    let bytes = std::fs::read(&path)?;
    tracing::debug!(path = %path.as_ref().display(), bytes = bytes.len(), "read dictionary file");
    Ok(DictionarySource::from_bytes(&bytes, options))
}

fn banner_fields(line: &str) -> Option<Vec<String>> {
    let rest = line.strip_prefix(BANNER_PREFIX)?;
    Some(
        rest.split(BANNER_SEPARATOR)
            .map(str::trim)
            .filter(|field| !field.is_empty())
            .map(str::to_owned)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const BANNER: &str = "\u{3000}？？？ /EDICT, EDICT_SUB(P), EDICT2 Japanese-English Electronic Dictionary Files/Copyright Electronic Dictionary Research & Development Group - 2011/Created: 2011-12-09/";

    #[test]
    fn splits_off_banner() {
        let text = format!("{}\n刖 [げつ] /(n) foo/EntL2542160/\n", BANNER);
        let source = DictionarySource::from_text(&text, true);
        let banner = source.banner.unwrap();
        assert_eq!(banner.len(), 3);
        assert_eq!(banner[2], "Created: 2011-12-09");
        assert_eq!(source.lines, ["刖 [げつ] /(n) foo/EntL2542160/"]);
        assert_eq!(source.first_line, 2);
    }

    #[test]
    fn errors_count_the_banner_line() {
        let text = format!("{}\nA;B [C /(n) foo/EntL1/\n", BANNER);
        let source = DictionarySource::from_text(&text, true);
        match source.entries().next() {
            Some(Err(EdictError::LineParseFailure { number, error })) => {
                assert_eq!(number, 2);
                assert_eq!(error.line, "A;B [C /(n) foo/EntL1/");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn no_banner() {
        let source = DictionarySource::from_text("A /foo/EntL1/\r\n\r\nB /bar/EntL2/", false);
        assert_eq!(source.banner, None);
        assert_eq!(source.first_line, 1);
        assert_eq!(source.lines, ["A /foo/EntL1/", "", "B /bar/EntL2/"]);
        let sequences: Vec<String> = source.entries().map(|entry| entry.unwrap().sequence).collect();
        assert_eq!(sequences, ["EntL1", "EntL2"]);
    }

    #[test]
    fn normalizes_to_nfc() {
        // か + combining dakuten
        let source = DictionarySource::from_text("\u{304B}\u{3099} /x/EntL1/", true);
        assert_eq!(source.lines, ["\u{304C} /x/EntL1/"]);
        let raw = DictionarySource::from_text("\u{304B}\u{3099} /x/EntL1/", false);
        assert_eq!(raw.lines, ["\u{304B}\u{3099} /x/EntL1/"]);
    }

    #[test]
    fn decodes_euc_jp() {
        let options = SourceOptions::default().with_encoding_label("euc-jp").unwrap();
        let (bytes, _, had_errors) = encoding_rs::EUC_JP.encode("辞書 [じしょ] /(n) dictionary/EntL1/");
        assert!(!had_errors);
        let source = DictionarySource::from_bytes(&bytes, options);
        assert_eq!(source.lines, ["辞書 [じしょ] /(n) dictionary/EntL1/"]);
    }

    #[test]
    fn unknown_encoding_label() {
        assert!(matches!(
            SourceOptions::default().with_encoding_label("klingon"),
            Err(EdictError::UnknownEncoding(label)) if label == "klingon"
        ));
    }
}
