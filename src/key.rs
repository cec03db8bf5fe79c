use crate::error::SyntaxError;
use crate::parser::{self, Rule};

/// Headword forms and readings of one line, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Key {
    pub kanji: Vec<String>,
    pub kana: Vec<String>,
}

/// Splits `"A;B;C [x;y;z]"` into its kanji and kana forms.
///
/// Without a `[` the kana list is empty. A `[` that is never closed is a
/// [`SyntaxError::MalformedKey`]. Anything after the closing `]` is ignored.
pub fn split_key(key: &str) -> Result<Key, SyntaxError> {
    let key = key.trim();
    let pairs = parser::parse_key(key).map_err(|_| SyntaxError::MalformedKey(key.to_owned()))?;

    let mut split = Key::default();
    for pair in pairs.flatten() {
        match pair.as_rule() {
            Rule::key_form => split.kanji.push(pair.as_str().trim().to_owned()),
            Rule::kana_form => split.kana.push(pair.as_str().trim().to_owned()),
            _ => {}
        }
    }
    Ok(split)
}

/// Drops a qualifier glued onto a headword: `"咖哩(ateji)"` becomes `"咖哩"`.
pub fn canonical_key(form: &str) -> &str {
    match form.find('(') {
        Some(index) => &form[..index],
        None => form,
    }
}
