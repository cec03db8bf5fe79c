use crate::annotation::Annotation;
use crate::entry::{Entry, Gloss};
use crate::error::{LineError, SyntaxError};
use crate::gloss;
use crate::key::{self, Key};
use crate::parser;

const FIELD_SEPARATOR: char = '/';
const PRIORITY_MARKER: &str = "(P)";
const RECORDING_QUALIFIER: &str = "X";

/// Parses one raw line into an [`Entry`].
///
/// Layout: `key /sense/sense/.../sequence/`. Any failure carries the line.
pub fn parse_line(line: &str) -> Result<Entry, LineError> {
    parse_fields(line).map_err(|kind| LineError::new(line, kind))
}

/// A field consisting of exactly `(P)` marks a common word.
pub fn is_priority_marker(field: &str) -> bool {
    field.trim() == PRIORITY_MARKER
}

/// Whether a sequence identifier such as `EntL1039140X` flags an audio clip.
pub fn has_recording(sequence: &str) -> bool {
    matches!(parser::sequence_qualifier(sequence), Some(Some(RECORDING_QUALIFIER)))
}

fn parse_fields(line: &str) -> Result<Entry, SyntaxError> {
    let mut fields: Vec<&str> = line.trim().split(FIELD_SEPARATOR).collect();
    while fields.last().map_or(false, |field| field.trim().is_empty()) {
        fields.pop();
    }

    let (header, rest) = fields.split_first().ok_or(SyntaxError::MissingFields)?;
    let (sequence, senses) = rest.split_last().ok_or(SyntaxError::MissingFields)?;
    if header.trim().is_empty() {
        return Err(SyntaxError::MissingFields);
    }

    let Key { kanji, kana } = key::split_key(header)?;
    let kanji = canonical_forms(kanji);
    if kanji.is_empty() {
        return Err(SyntaxError::MissingFields);
    }
    let mut information = Vec::new();
    let mut glosses = Vec::with_capacity(senses.len());
    let mut priority = false;

    for block in senses {
        if is_priority_marker(block) {
            priority = true;
            continue;
        }
        if block.trim().is_empty() {
            continue;
        }

        let (annotations, definition) = gloss::peel_annotations(block)?;
        let mut gloss = Gloss::new(definition);
        // Codes ahead of the first sense number of the first sense describe the whole entry.
        let mut entry_level = glosses.is_empty();
        for annotation in annotations {
            match annotation {
                Annotation::Ignorable => entry_level = false,
                Annotation::Known { tags, .. } if entry_level => information.extend(tags),
                other => gloss.annotate(other),
            }
        }
        glosses.push(gloss);
    }

    if glosses.is_empty() {
        return Err(SyntaxError::MissingFields);
    }

    let sequence = sequence.trim();
    Ok(Entry {
        kanji,
        kana: canonical_forms(kana),
        information,
        glosses,
        sequence: sequence.to_owned(),
        recording_available: has_recording(sequence),
        priority,
    })
}

/// Canonical forms with blank ones removed, so `"A;;B"` keeps `A` and `B`.
fn canonical_forms(forms: Vec<String>) -> Vec<String> {
    forms
        .into_iter()
        .map(|form| key::canonical_key(&form).trim().to_owned())
        .filter(|form| !form.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::taxonomy::Detail;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn single_sense_entry() {
        let line = "刖 [げつ] /(n) (arch) (obsc) (See 剕) cutting off the leg at the knee (form of punishment in ancient China)/EntL2542160/";
        let expected = Entry {
            kanji: strings(&["刖"]),
            kana: strings(&["げつ"]),
            information: vec![Detail::N, Detail::Arch, Detail::Obsc],
            glosses: vec![Gloss {
                definition: "cutting off the leg at the knee (form of punishment in ancient China)".to_owned(),
                details: Vec::new(),
                xrefs: strings(&["剕"]),
            }],
            sequence: "EntL2542160".to_owned(),
            recording_available: false,
            priority: false,
        };
        assert_eq!(parse_line(line), Ok(expected));
    }

    #[test]
    fn numbered_senses() {
        let line = "ジョン;Jon [じょん] /(n) (1) (abbr) (uK) (See jrockway) my name/(2) (uk) apparently a common name for dogs/EntL0000000/";
        let expected = Entry {
            kanji: strings(&["ジョン", "Jon"]),
            kana: strings(&["じょん"]),
            information: vec![Detail::N],
            glosses: vec![
                Gloss {
                    definition: "my name".to_owned(),
                    details: vec![Detail::Abbr, Detail::UsuallyKanji],
                    xrefs: strings(&["jrockway"]),
                },
                Gloss {
                    definition: "apparently a common name for dogs".to_owned(),
                    details: vec![Detail::UsuallyKana],
                    xrefs: Vec::new(),
                },
            ],
            sequence: "EntL0000000".to_owned(),
            recording_available: false,
            priority: false,
        };
        assert_eq!(parse_line(line), Ok(expected));
    }

    #[test]
    fn priority_field_and_recording() {
        let line = "咖哩(ateji) [カレー(P);カリー] /(n) (1) (uk) curry/(2) (abbr) (uk) (See カレーライス) rice and curry/(P)/EntL1039140X/";
        let entry = parse_line(line).unwrap();
        assert_eq!(entry.kanji, ["咖哩"]);
        assert_eq!(entry.kana, ["カレー", "カリー"]);
        assert_eq!(entry.information, [Detail::N]);
        assert_eq!(entry.glosses.len(), 2);
        assert_eq!(entry.glosses[0].definition, "curry");
        assert_eq!(entry.glosses[0].details, [Detail::UsuallyKana]);
        assert_eq!(entry.glosses[1].details, [Detail::Abbr, Detail::UsuallyKana]);
        assert_eq!(entry.glosses[1].xrefs, ["カレーライス"]);
        assert_eq!(entry.sequence, "EntL1039140X");
        assert!(entry.priority);
        assert!(entry.recording_available);
    }

    #[test]
    fn unnumbered_senses_share_entry_information() {
        let line = "嗉嚢;そ嚢 [そのう] /(n) bird's crop/bird's craw/EntL2542030/";
        let entry = parse_line(line).unwrap();
        assert_eq!(entry.information, [Detail::N]);
        assert_eq!(
            entry.glosses.iter().map(|gloss| gloss.definition.as_str()).collect::<Vec<_>>(),
            ["bird's crop", "bird's craw"]
        );
    }

    #[test]
    fn free_text_before_definition_is_dropped() {
        let line = "嘈囃;そう囃 [そうざつ] /(n,vs) (obsc) (嘈囃 is sometimes read むねやけ) (See 胸焼け) heartburn/sour stomach/EntL2542040/";
        let entry = parse_line(line).unwrap();
        assert_eq!(entry.information, [Detail::N, Detail::Vs, Detail::Obsc]);
        assert_eq!(entry.glosses[0].definition, "heartburn");
        assert_eq!(entry.glosses[0].xrefs, ["胸焼け"]);
        assert!(entry.glosses[0].details.is_empty());
    }

    #[test]
    fn kana_only_headword() {
        let entry = parse_line("ジョン /(n) a name/EntL0000001/").unwrap();
        assert_eq!(entry.kanji, ["ジョン"]);
        assert!(entry.kana.is_empty());
    }

    #[rstest]
    #[case("A;B [C /(n) foo/EntL1/", SyntaxError::MalformedKey("A;B [C".to_owned()))]
    #[case("A [a] /(n foo/EntL1/", SyntaxError::MalformedGloss("(n foo".to_owned()))]
    #[case("A [a]", SyntaxError::MissingFields)]
    #[case("A [a] /EntL1/", SyntaxError::MissingFields)]
    #[case("A [a] /(P)/EntL1/", SyntaxError::MissingFields)]
    #[case(" /foo/EntL1/", SyntaxError::MissingFields)]
    #[case("[かな] /foo/EntL1/", SyntaxError::MissingFields)]
    #[case("(ateji) [x] /foo/EntL1/", SyntaxError::MissingFields)]
    fn failures_carry_the_line(#[case] line: &str, #[case] kind: SyntaxError) {
        let error = parse_line(line).unwrap_err();
        assert_eq!(error.line, line);
        assert_eq!(error.kind, kind);
    }

    #[rstest]
    #[case("(P)", true)]
    #[case(" (P) ", true)]
    #[case("(P) foo", false)]
    #[case("P", false)]
    fn priority_markers(#[case] field: &str, #[case] expected: bool) {
        assert_eq!(is_priority_marker(field), expected);
    }

    #[rstest]
    #[case("EntL1039140X", true)]
    #[case("EntL1039140", false)]
    #[case("EntL1039140Y", false)]
    #[case("X", false)]
    fn recordings(#[case] sequence: &str, #[case] expected: bool) {
        assert_eq!(has_recording(sequence), expected);
    }

    #[test]
    fn blank_forms_are_dropped() {
        let entry = parse_line("A;;B [x;;(P)] /foo/EntL1/").unwrap();
        assert_eq!(entry.kanji, ["A", "B"]);
        assert_eq!(entry.kana, ["x"]);
    }

    #[test]
    fn sequence_is_opaque() {
        let entry = parse_line("A /foo/not-a-sequence/").unwrap();
        assert_eq!(entry.sequence, "not-a-sequence");
        assert!(!entry.recording_available);
    }
}
