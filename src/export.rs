use std::io::Write;

use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::{ContentArrangement, Table};
use itertools::Itertools;

use crate::entry::Entry;
use crate::error::EdictError;

const LIST_SEPARATOR: &str = ";";
const TSV_HEADER: [&str; 7] = [
    "sequence",
    "kanji",
    "kana",
    "information",
    "glosses",
    "priority",
    "recording",
];

/// One JSON object per line.
pub fn write_json_lines<W: Write>(mut writer: W, entries: &[Entry]) -> Result<(), EdictError> {
    for entry in entries {
        serde_json::to_writer(&mut writer, entry)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_tsv<W: Write>(writer: W, entries: &[Entry]) -> Result<(), EdictError> {
    let mut tsv = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(writer);

    tsv.write_record(TSV_HEADER)?;
    for entry in entries {
        tsv.write_record([
            entry.sequence.clone(),
            entry.kanji.join(LIST_SEPARATOR),
            entry.kana.join(LIST_SEPARATOR),
            entry.information.iter().join(","),
            numbered_glosses(entry),
            entry.priority.to_string(),
            entry.recording_available.to_string(),
        ])?;
    }
    tsv.flush()?;
    Ok(())
}

pub fn entries_table<'a, I>(entries: I, ascii: bool) -> Table
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut table = Table::new();
    table
        .load_preset(if ascii { ASCII_FULL } else { UTF8_FULL })
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["KANJI", "KANA", "INFO", "GLOSSES"]);

    for entry in entries {
        table.add_row(vec![
            entry.kanji.join(LIST_SEPARATOR),
            entry.kana.join(LIST_SEPARATOR),
            entry.information.iter().join(","),
            numbered_glosses(entry),
        ]);
    }
    table
}

/// `"1. (abbr) my name 2. (uk) ..."`; a single sense is not numbered.
pub fn numbered_glosses(entry: &Entry) -> String {
    if entry.glosses.len() == 1 {
        return entry.glosses[0].to_string();
    }
    entry
        .glosses
        .iter()
        .enumerate()
        .map(|(index, gloss)| format!("{}. {}", index + 1, gloss))
        .join(" ")
}
