use crate::annotation::{self, Annotation};
use crate::entry::Gloss;
use crate::error::SyntaxError;
use crate::parser;

/// Peels the leading annotation groups off a sense block.
///
/// A group only counts when its `)` is followed by whitespace or the end of
/// the block, so `"(n)foo"` is all definition. Returns the classified groups
/// in source order and the trimmed remainder.
pub fn peel_annotations(block: &str) -> Result<(Vec<Annotation<'_>>, &str), SyntaxError> {
    let mut annotations = Vec::new();
    let mut rest = block.trim_start();

    while rest.starts_with('(') {
        let group = parser::parse_annotation_group(rest).ok_or_else(|| SyntaxError::MalformedGloss(block.to_owned()))?;
        let after = &rest[group.end..];
        if !after.is_empty() && !after.starts_with(char::is_whitespace) {
            break;
        }
        annotations.push(annotation::classify(group.content));
        rest = after.trim_start();
    }

    Ok((annotations, rest.trim_end()))
}

/// Parses one sense block such as `"(n) (See foobar) foo"`.
pub fn parse_gloss(block: &str) -> Result<Gloss, SyntaxError> {
    let (annotations, definition) = peel_annotations(block)?;
    let mut gloss = Gloss::new(definition);
    for annotation in annotations {
        gloss.annotate(annotation);
    }
    Ok(gloss)
}
