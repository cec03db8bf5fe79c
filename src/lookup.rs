use std::cmp::Reverse;
use std::collections::HashSet;

use unicode_normalization::UnicodeNormalization;

use crate::entry::Entry;

/// Linear search over parsed entries, ranked by similarity to the query.
pub struct Lookup<'a> {
    entries: &'a [Entry],
}

impl<'a> Lookup<'a> {
    pub fn new(entries: &'a [Entry]) -> Self {
        Self { entries }
    }

    /// Entries whose forms or definitions contain the query, most similar first.
    ///
    /// Similarity is the Sørensen–Dice coefficient scaled to `0..=1000`.
    pub fn search(&self, query: &str, min_similarity: Option<u16>) -> Vec<&'a Entry> {
        let query: String = query.trim().to_lowercase().nfc().collect();
        if query.is_empty() {
            return Vec::new();
        }

        let mut ranked: Vec<(&Entry, u16)> = self
            .entries
            .iter()
            .filter(|entry| contains_query(entry, &query))
            .filter_map(|entry| {
                let similarity = similarity(entry, &query);
                if let Some(min_similarity) = min_similarity {
                    if similarity < min_similarity {
                        return None;
                    }
                }
                Some((entry, similarity))
            })
            .collect();

        ranked.sort_by_key(|&(_, similarity)| Reverse(similarity));
        tracing::debug!(query = %query, results = ranked.len(), "lookup");
        ranked.into_iter().map(|(entry, _)| entry).collect()
    }

    /// Headword forms and readings starting with `line`, shortest first.
    pub fn completions(&self, line: &str) -> Vec<String> {
        let line: String = line.trim().nfc().collect();
        if line.is_empty() {
            return Vec::new();
        }

        let mut completions: Vec<String> = self
            .entries
            .iter()
            .flat_map(|entry| entry.forms())
            .filter(|form| form.starts_with(&line))
            .map(str::to_owned)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        completions.sort_unstable_by(|completion1, completion2| {
            completion1
                .chars()
                .count()
                .cmp(&completion2.chars().count())
                .then_with(|| completion1.cmp(completion2))
        });
        completions
    }
}

fn contains_query(entry: &Entry, query: &str) -> bool {
    entry.forms().any(|form| form.to_lowercase().contains(query))
        || entry
            .glosses
            .iter()
            .any(|gloss| gloss.definition.to_lowercase().contains(query))
}

fn similarity(entry: &Entry, query: &str) -> u16 {
    let best = entry
        .forms()
        .map(|form| form.to_lowercase())
        .chain(
            entry
                .glosses
                .iter()
                .map(|gloss| gloss.definition.to_lowercase().replace(['(', ')'], "")),
        )
        .map(|candidate| strsim::sorensen_dice(&candidate, query))
        .fold(0.0, f64::max);
    (best * 1000.0) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parse_lines;

    fn entries() -> Vec<Entry> {
        parse_lines([
            "刖 [げつ] /(n) (arch) (obsc) (See 剕) cutting off the leg at the knee (form of punishment in ancient China)/EntL2542160/",
            "剕 [あしきり] /(n) (arch) (See 五刑) cutting off the leg at the knee (form of punishment in ancient China)/EntL2542150/",
            "劓 [はなきり] /(n) (arch) (See 五刑) cutting off the nose (form of punishment in ancient China)/EntL2542140/",
            "咖哩(ateji) [カレー(P);カリー] /(n) (1) (uk) curry/(2) (abbr) (uk) (See カレーライス) rice and curry/(P)/EntL1039140X/",
        ])
        .unwrap()
    }

    #[test]
    fn finds_by_reading() {
        let entries = entries();
        let results = Lookup::new(&entries).search("カレー", None);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].sequence, "EntL1039140X");
    }

    #[test]
    fn ranks_closer_definitions_first() {
        let entries = entries();
        let results = Lookup::new(&entries).search("Curry", None);
        assert_eq!(results[0].headword(), "咖哩");

        let results = Lookup::new(&entries).search("cutting off the nose", None);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].headword(), "劓");
    }

    #[test]
    fn minimum_similarity_filters() {
        let entries = entries();
        let lookup = Lookup::new(&entries);
        assert_eq!(lookup.search("leg", None).len(), 2);
        assert!(lookup.search("leg", Some(1000)).is_empty());
        assert!(lookup.search("   ", None).is_empty());
    }

    #[test]
    fn completes_forms() {
        let entries = entries();
        let lookup = Lookup::new(&entries);
        assert_eq!(lookup.completions("カ"), ["カリー", "カレー"]);
        assert_eq!(lookup.completions("は"), ["はなきり"]);
        assert!(lookup.completions("").is_empty());
    }
}
