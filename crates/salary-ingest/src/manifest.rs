//! Parsing of the plain-text `contents.txt` manifests.
//!
//! The asset root holds a year manifest (one year per line). Each year
//! directory holds a location manifest with `location:filename` lines.
//! Both are sorted and reversed so the newest year, and the
//! reverse-alphabetical first location, come first.

use serde::Serialize;
use tracing::warn;

/// One `location:filename` entry of a year's manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationEntry {
    pub location: String,
    pub filename: String,
}

/// Ordered location entries for one year. The first entry is the default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LocationManifest {
    entries: Vec<LocationEntry>,
}

impl LocationManifest {
    pub fn entries(&self) -> &[LocationEntry] {
        &self.entries
    }

    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.location.clone()).collect()
    }

    pub fn filename(&self, location: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.location == location)
            .map(|e| e.filename.as_str())
    }

    pub fn default_location(&self) -> Option<&str> {
        self.entries.first().map(|e| e.location.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn insert(&mut self, location: String, filename: String) {
        match self.entries.iter_mut().find(|e| e.location == location) {
            Some(existing) => existing.filename = filename,
            None => self.entries.push(LocationEntry { location, filename }),
        }
    }
}

fn sorted_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    lines.sort_unstable();
    lines.reverse();
    lines
}

/// Parses the top-level year manifest, newest year first.
pub fn parse_year_manifest(text: &str) -> Vec<String> {
    sorted_lines(text).into_iter().map(str::to_string).collect()
}

/// Splits a manifest line on its first `:`.
///
/// The filename keeps any further `:` characters. Returns `None` when the
/// separator is missing or either side is blank.
pub fn split_entry(line: &str) -> Option<(&str, &str)> {
    let (key, filename) = line.split_once(':')?;
    let key = key.trim();
    let filename = filename.trim();
    if key.is_empty() || filename.is_empty() {
        return None;
    }
    Some((key, filename))
}

/// Parses a year's location manifest.
///
/// Malformed lines are skipped with a warning. A repeated location keeps its
/// first position and takes the filename of its last line.
pub fn parse_location_manifest(text: &str) -> LocationManifest {
    let mut manifest = LocationManifest::default();
    for line in sorted_lines(text) {
        match split_entry(line) {
            Some((location, filename)) => {
                manifest.insert(location.to_string(), filename.to_string());
            }
            None => warn!(entry = %line, "skipping malformed manifest line"),
        }
    }
    manifest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn years_are_newest_first() {
        let years = parse_year_manifest("2021\n2023\n\n2022\r\n");
        assert_eq!(years, vec!["2023", "2022", "2021"]);
    }

    #[test]
    fn surrounding_whitespace_does_not_reorder() {
        let years = parse_year_manifest("2021\n 2025\n2023\t\n");
        assert_eq!(years, vec!["2025", "2023", "2021"]);

        let manifest = parse_location_manifest("UIC:uic.json\n  UIS:uis.json\nUIUC:uiuc.json\n");
        assert_eq!(manifest.labels(), vec!["UIUC", "UIS", "UIC"]);
    }

    #[test]
    fn filename_keeps_extra_colons() {
        assert_eq!(
            split_entry("UIUC:2023:final.json"),
            Some(("UIUC", "2023:final.json"))
        );
        assert_eq!(split_entry("UIUC"), None);
        assert_eq!(split_entry("UIUC:"), None);
        assert_eq!(split_entry(":file.json"), None);
    }

    #[test]
    fn locations_sorted_reversed_and_malformed_skipped() {
        let manifest =
            parse_location_manifest("UIC:uic.json\nbogus line\nUIUC:uiuc.json\nUIS:uis:v2.json\n");
        assert_eq!(manifest.labels(), vec!["UIUC", "UIS", "UIC"]);
        assert_eq!(manifest.filename("UIS"), Some("uis:v2.json"));
        assert_eq!(manifest.default_location(), Some("UIUC"));
        assert_eq!(manifest.len(), 3);
    }

    #[test]
    fn repeated_location_takes_last_filename() {
        // After sort+reverse, "UIC:b.json" precedes "UIC:a.json".
        let manifest = parse_location_manifest("UIC:a.json\nUIC:b.json\n");
        assert_eq!(manifest.len(), 1);
        assert_eq!(manifest.filename("UIC"), Some("a.json"));
    }
}
