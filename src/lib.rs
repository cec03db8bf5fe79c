//! Parser for the EDICT/EDICT2 Japanese-English dictionary line format.
//!
//! A line such as
//!
//! ```text
//! 刖 [げつ] /(n) (arch) (obsc) (See 剕) cutting off the leg at the knee/EntL2542160/
//! ```
//!
//! becomes an [`Entry`] with its headwords, readings, entry-level tags,
//! senses and sequence identifier. Every line is parsed on its own, so
//! callers may split large inputs across threads.

#[macro_use]
extern crate pest_derive;

mod annotation;
mod document;
mod entry;
mod error;
mod export;
mod gloss;
mod key;
mod line;
mod lookup;
mod parser;
mod source;
mod taxonomy;

pub use annotation::{classify, Annotation};
pub use document::{entries, parse_lines, parse_lines_isolated, parse_reader, Entries};
pub use entry::{Entry, Gloss};
pub use error::{EdictError, LineError, SyntaxError, UnknownCode};
pub use export::{entries_table, numbered_glosses, write_json_lines, write_tsv};
pub use gloss::{parse_gloss, peel_annotations};
pub use key::{canonical_key, split_key, Key};
pub use line::{has_recording, is_priority_marker, parse_line};
pub use lookup::Lookup;
pub use source::{read_dictionary, DictionarySource, SourceOptions};
pub use taxonomy::{Category, Detail};
