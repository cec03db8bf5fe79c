mod cli;

use std::io::stdout;
use std::path::Path;

use cli::{OutputFormat, Settings};
use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::{ContentArrangement, Table};
use edict_parse::{Category, Detail, EdictError, Entry, Lookup, SourceOptions};
use rustyline::completion::Completer;
use rustyline::config::BellStyle;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Config, Editor, Helper};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "EDICT_LOG";

#[derive(Error, Debug)]
enum AppError {
    #[error(transparent)]
    Edict(#[from] EdictError),
    #[error("Readline error: {0}")]
    Readline(#[from] ReadlineError),
}

fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match cli::parse_settings()? {
        Settings::Parse {
            file,
            source,
            format,
            keep_going,
            ascii,
        } => {
            let entries = load_entries(&file, source, keep_going)?;
            let stdout_lock = stdout().lock();
            match format {
                OutputFormat::Json => edict_parse::write_json_lines(stdout_lock, &entries)?,
                OutputFormat::Tsv => edict_parse::write_tsv(stdout_lock, &entries)?,
                OutputFormat::Table => println!("{}", edict_parse::entries_table(&entries, ascii)),
            }
        }
        Settings::Lookup {
            file,
            source,
            keep_going,
            limit_results,
            minimum_similarity,
            completion_type,
            ascii,
            search,
        } => {
            let entries = load_entries(&file, source, keep_going)?;
            let lookup = Lookup::new(&entries);
            let search_entries = SearchEntries {
                lookup: &lookup,
                limit_results,
                minimum_similarity,
                ascii,
            };

            if let Some(search) = search {
                search_entries.print_results(&search);
                return Ok(());
            }

            let mut readline_editor = Editor::<TabCompletion>::with_config(
                Config::builder()
                    .completion_type(completion_type)
                    .bell_style(BellStyle::None)
                    .tab_stop(4)
                    .indent_size(4)
                    .build(),
            )?;
            readline_editor.set_helper(Some(TabCompletion { lookup: &lookup }));

            loop {
                let readline = readline_editor.readline("> ");

                match readline {
                    Ok(line) => {
                        readline_editor.add_history_entry(&line);
                        search_entries.print_results(&line);
                    }
                    Err(ReadlineError::Interrupted) => {
                        continue;
                    }
                    Err(ReadlineError::Eof) => {
                        break;
                    }
                    Err(err) => {
                        tracing::error!("Readline error: {}", err);
                        break;
                    }
                }
            }
        }
        Settings::Codes { category, ascii } => {
            print_codes(category, ascii);
        }
    }

    Ok(())
}

fn load_entries(file: &Path, source: SourceOptions, keep_going: bool) -> Result<Vec<Entry>, EdictError> {
    let source = edict_parse::read_dictionary(file, source)?;
    if let Some(banner) = &source.banner {
        tracing::info!(banner = %banner.join(" / "), "dictionary banner");
    }

    let entries = if keep_going {
        source
            .entries()
            .filter_map(|parsed| match parsed {
                Ok(entry) => Some(entry),
                Err(err) => {
                    tracing::warn!("{}", err);
                    None
                }
            })
            .collect()
    } else {
        source.entries().collect::<Result<Vec<_>, _>>()?
    };

    if entries.is_empty() {
        return Err(EdictError::NoEntries);
    }
    tracing::info!(entries = entries.len(), file = %file.display(), "loaded dictionary");
    Ok(entries)
}

struct SearchEntries<'a> {
    lookup: &'a Lookup<'a>,
    limit_results: Option<u32>,
    minimum_similarity: Option<u16>,
    ascii: bool,
}

impl SearchEntries<'_> {
    fn print_results(&self, line: &str) {
        let results = self.lookup.search(line, self.minimum_similarity);
        if results.is_empty() {
            return;
        }

        let limit = self.limit_results.map_or(results.len(), |limit| limit as usize);
        let table = edict_parse::entries_table(results.into_iter().take(limit), self.ascii);
        println!("{}", table);
    }
}

fn print_codes(category: Option<Category>, ascii: bool) {
    let mut table = Table::new();
    table
        .load_preset(if ascii { ASCII_FULL } else { UTF8_FULL })
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["CODE", "CATEGORY", "DESCRIPTION"]);

    for tag in Detail::ALL
        .iter()
        .filter(|tag| category.map_or(true, |category| tag.category() == category))
    {
        table.add_row(vec![tag.code(), tag.category().name(), tag.description()]);
    }

    println!("{}", table);
}

struct TabCompletion<'a> {
    lookup: &'a Lookup<'a>,
}
impl Helper for TabCompletion<'_> {}
impl Validator for TabCompletion<'_> {}
impl Highlighter for TabCompletion<'_> {}
impl Hinter for TabCompletion<'_> {
    type Hint = String;
}
impl Completer for TabCompletion<'_> {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        _pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        Ok((0, self.lookup.completions(line)))
    }
}
