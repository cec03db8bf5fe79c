extern crate pest;

use pest::iterators::Pairs;
use pest::Parser;

#[derive(Parser)]
#[grammar = "edict.pest"]
struct EdictLineParser;

pub(crate) fn parse_key(key: &str) -> Result<Pairs<'_, Rule>, pest::error::Error<Rule>> {
    EdictLineParser::parse(Rule::key, key)
}

/// A parenthesised group at the very start of a sense block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AnnotationGroup<'a> {
    /// Text between the parentheses.
    pub(crate) content: &'a str,
    /// Byte offset just past the closing parenthesis.
    pub(crate) end: usize,
}

/// `None` when `text` does not start with a closed group.
pub(crate) fn parse_annotation_group(text: &str) -> Option<AnnotationGroup<'_>> {
    let group = EdictLineParser::parse(Rule::annotation_group, text).ok()?.next()?;
    let end = group.as_span().end();
    let content = group
        .into_inner()
        .find(|pair| pair.as_rule() == Rule::annotation_text)
        .map_or("", |pair| pair.as_str());
    Some(AnnotationGroup { content, end })
}

/// Qualifier letter of a well-formed sequence identifier, `Some(None)` when it has none.
pub(crate) fn sequence_qualifier(sequence: &str) -> Option<Option<&str>> {
    let pairs = EdictLineParser::parse(Rule::sequence, sequence).ok()?;
    Some(
        pairs
            .flatten()
            .find(|pair| pair.as_rule() == Rule::sequence_qualifier)
            .map(|pair| pair.as_str()),
    )
}
