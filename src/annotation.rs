use crate::taxonomy::Detail;

const CROSS_REFERENCE_PREFIX: &str = "See ";
const CODE_SEPARATOR: char = ',';

/// What the inside of one `(...)` group turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation<'a> {
    /// A sense number such as `1`.
    Ignorable,
    /// `See <target>`, with the target kept verbatim.
    CrossReference(&'a str),
    /// One code, or a comma-separated list where every element is a code.
    Known { text: &'a str, tags: Vec<Detail> },
    /// Anything else. Trailing whitespace is kept.
    FreeText(&'a str),
}

impl<'a> Annotation<'a> {
    /// The payload of the annotation; empty for sense numbers.
    pub fn identifier(&self) -> &'a str {
        match *self {
            Annotation::Ignorable => "",
            Annotation::CrossReference(target) => target,
            Annotation::Known { text, .. } => text,
            Annotation::FreeText(text) => text,
        }
    }
}

/// Classifies the content of one annotation group. Never fails.
pub fn classify(content: &str) -> Annotation<'_> {
    if is_sense_number(content) {
        return Annotation::Ignorable;
    }

    if let Some(target) = content.strip_prefix(CROSS_REFERENCE_PREFIX) {
        return Annotation::CrossReference(target);
    }

    match known_tags(content) {
        Some(tags) => Annotation::Known { text: content, tags },
        None => Annotation::FreeText(content),
    }
}

fn is_sense_number(content: &str) -> bool {
    !content.is_empty() && content.bytes().all(|byte| byte.is_ascii_digit())
}

fn known_tags(content: &str) -> Option<Vec<Detail>> {
    content.split(CODE_SEPARATOR).map(Detail::from_code).collect()
}
