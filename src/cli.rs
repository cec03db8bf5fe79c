use std::path::PathBuf;

use clap::builder::{NonEmptyStringValueParser, PathBufValueParser, PossibleValuesParser};
use clap::{arg, crate_description, crate_name, crate_version, ArgMatches, Command};
use edict_parse::{Category, EdictError, SourceOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Json,
    Tsv,
    Table,
}

pub(crate) enum Settings {
    Parse {
        file: PathBuf,
        source: SourceOptions,
        format: OutputFormat,
        keep_going: bool,
        ascii: bool,
    },
    Lookup {
        file: PathBuf,
        source: SourceOptions,
        keep_going: bool,
        limit_results: Option<u32>,
        minimum_similarity: Option<u16>,
        completion_type: rustyline::config::CompletionType,
        ascii: bool,
        search: Option<String>,
    },
    Codes {
        category: Option<Category>,
        ascii: bool,
    },
}

pub(crate) fn parse_settings() -> Result<Settings, EdictError> {
    let args = parse_args();

    match args.subcommand() {
        Some(("parse", parse)) => {
            let format = match parse.get_one::<String>("format").map(|format| format.to_lowercase()).as_deref() {
                Some("tsv") => OutputFormat::Tsv,
                Some("table") => OutputFormat::Table,
                _ => OutputFormat::Json,
            };

            Ok(Settings::Parse {
                file: file_arg(parse),
                source: source_options(parse)?,
                format,
                keep_going: parse.get_flag("keep-going"),
                ascii: parse.get_flag("ascii"),
            })
        }
        Some(("lookup", lookup)) => {
            let completion_type = match lookup
                .get_one::<String>("completion-type")
                .map(|completion_type| completion_type.to_lowercase())
                .as_deref()
            {
                Some("circular") => rustyline::config::CompletionType::Circular,
                _ => rustyline::config::CompletionType::List,
            };

            Ok(Settings::Lookup {
                file: file_arg(lookup),
                source: source_options(lookup)?,
                keep_going: lookup.get_flag("keep-going"),
                limit_results: lookup.get_one::<u32>("limit-results").copied(),
                minimum_similarity: lookup.get_one::<u16>("min-similarity").copied(),
                completion_type,
                ascii: lookup.get_flag("ascii"),
                search: lookup.get_one::<String>("SEARCH").map(|search| search.to_owned()),
            })
        }
        Some(("codes", codes)) => Ok(Settings::Codes {
            category: codes
                .get_one::<String>("category")
                .map(|category| category.parse::<Category>())
                .transpose()?,
            ascii: codes.get_flag("ascii"),
        }),
        _ => unreachable!("a subcommand is required"),
    }
}

fn file_arg(args: &ArgMatches) -> PathBuf {
    args.get_one::<PathBuf>("FILE").cloned().unwrap_or_default()
}

fn source_options(args: &ArgMatches) -> Result<SourceOptions, EdictError> {
    let mut options = SourceOptions {
        normalize: !args.get_flag("raw"),
        ..SourceOptions::default()
    };
    if let Some(label) = args.get_one::<String>("encoding") {
        options = options.with_encoding_label(label)?;
    }
    Ok(options)
}

fn source_args(command: Command) -> Command {
    command
        .arg(
            arg!(
                <FILE> "EDICT or EDICT2 dictionary file"
            )
            .required(true)
            .value_parser(PathBufValueParser::new()),
        )
        .arg(
            arg!(
                -e --encoding <LABEL> "Text encoding of the file, e.g. utf-8 or euc-jp"
            )
            .required(false)
            .value_parser(NonEmptyStringValueParser::new())
            .default_value("utf-8"),
        )
        .arg(
            arg!(
                --raw "Do not apply Unicode NFC normalization to lines"
            )
            .required(false),
        )
        .arg(
            arg!(
                -k --"keep-going" "Skip malformed lines instead of aborting"
            )
            .required(false),
        )
        .arg(
            arg!(
                --ascii "Use ASCII tables"
            )
            .required(false),
        )
}

fn parse_args() -> ArgMatches {
    let mut command = Command::new(crate_name!()).version(crate_version!());
    let description = crate_description!();

    if !description.is_empty() {
        command = command.about(description);
    }

    command
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            source_args(Command::new("parse").about("Parse a dictionary file and print its entries")).arg(
                arg!(
                    -f --format <FORMAT> "Output format"
                )
                .required(false)
                .ignore_case(true)
                .value_parser(["json", "tsv", "table"])
                .default_value("json"),
            ),
        )
        .subcommand(
            source_args(Command::new("lookup").about("Search a dictionary file"))
                .arg(
                    arg!(
                        -r --"limit-results" <LIMIT> "Limit the amount of results"
                    )
                    .required(false)
                    .value_parser(clap::value_parser!(u32).range(1..)),
                )
                .arg(
                    arg!(
                        -s --"min-similarity" <LIMIT> "Only show results with a specific minimum of similarity [possible values: 0 to 1000]"
                    )
                    .required(false)
                    .value_parser(clap::value_parser!(u16).range(0..=1000)),
                )
                .arg(
                    arg!(
                        -c --"completion-type" <TYPE> "Tab completion style"
                    )
                    .required(false)
                    .ignore_case(true)
                    .value_parser(["circular", "list"])
                    .default_value("list"),
                )
                .arg(
                    arg!(
                        [SEARCH] "Search without interactive mode"
                    )
                    .required(false)
                    .value_parser(NonEmptyStringValueParser::new()),
                ),
        )
        .subcommand(
            Command::new("codes")
                .about("List the known annotation codes")
                .arg(
                    arg!(
                        --category <CATEGORY> "Only list codes of one category"
                    )
                    .required(false)
                    .value_parser(PossibleValuesParser::new(Category::ALL.iter().map(|category| category.name()))),
                )
                .arg(
                    arg!(
                        --ascii "Use ASCII tables"
                    )
                    .required(false),
                ),
        )
        .get_matches()
}
