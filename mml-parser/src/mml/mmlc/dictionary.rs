//! Word dictionary for MMLC
//!
//! Substitution is case-sensitive and whole-word. Word boundaries are Unicode
//! aware, so `Évacuation` is one word and `Rapports` does not contain `Rapport`.
//! All words go into a single alternation sorted longest first, which makes the
//! longest word win when two words overlap at the same position.

use crate::mml::error::MmlcError;
use crate::mml::lexing::tag::PAIR_SEPARATOR;
use crate::mml::lexing::DELIMITER;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

/// Built-in `(word, code)` pairs
pub const DEFAULT_ENTRIES: [(&str, &str); 10] = [
    ("Rapport", "R"),
    ("Urgent", "U"),
    ("Critique", "C"),
    ("Patient", "P1"),
    ("Victime", "V"),
    ("Secteur", "S"),
    ("Évacuation", "E"),
    ("Médical", "M"),
    ("Stable", "S1"),
    ("Alerte", "A"),
];

static DEFAULT: Lazy<Dictionary> =
    Lazy::new(|| Dictionary::new(DEFAULT_ENTRIES).expect("built-in dictionary is valid"));

#[derive(Debug, Clone)]
pub struct Dictionary {
    entries: Vec<(String, String)>,
    codes: HashMap<String, String>,
    words: HashMap<String, String>,
    forward: Option<Regex>,
    reverse: Option<Regex>,
}

impl Dictionary {
    /// Build a dictionary from `(word, code)` pairs.
    ///
    /// Words and codes must be non-empty and unique, and must not contain the
    /// tag delimiter, the pair separator or a line break. An empty list is valid
    /// and substitutes nothing.
    pub fn new<I, W, C>(entries: I) -> Result<Self, MmlcError>
    where
        I: IntoIterator<Item = (W, C)>,
        W: Into<String>,
        C: Into<String>,
    {
        let entries: Vec<(String, String)> = entries
            .into_iter()
            .map(|(word, code)| (word.into(), code.into()))
            .collect();

        let mut codes = HashMap::new();
        let mut words = HashMap::new();
        for (word, code) in &entries {
            if word.trim().is_empty() || code.trim().is_empty() {
                return Err(MmlcError::InvalidDictionary(format!(
                    "empty word or code in entry '{word}' -> '{code}'"
                )));
            }
            if let Some(reserved) = reserved_char(word).or_else(|| reserved_char(code)) {
                return Err(MmlcError::InvalidDictionary(format!(
                    "entry '{}' -> '{}' contains reserved character {:?}",
                    word.escape_debug(),
                    code.escape_debug(),
                    reserved
                )));
            }
            if codes.insert(word.clone(), code.clone()).is_some() {
                return Err(MmlcError::InvalidDictionary(format!(
                    "word '{word}' listed twice"
                )));
            }
            if words.insert(code.clone(), word.clone()).is_some() {
                return Err(MmlcError::InvalidDictionary(format!(
                    "code '{code}' used for more than one word"
                )));
            }
        }

        let forward = alternation(entries.iter().map(|(word, _)| word.as_str()))?;
        let reverse = alternation(entries.iter().map(|(_, code)| code.as_str()))?;

        Ok(Self {
            entries,
            codes,
            words,
            forward,
            reverse,
        })
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn code_for(&self, word: &str) -> Option<&str> {
        self.codes.get(word).map(String::as_str)
    }

    pub fn word_for(&self, code: &str) -> Option<&str> {
        self.words.get(code).map(String::as_str)
    }

    /// Replace every whole word with its code
    pub fn substitute(&self, text: &str) -> String {
        replace_with(self.forward.as_ref(), text, &self.codes)
    }

    /// Replace every whole code with its word
    pub fn expand(&self, text: &str) -> String {
        replace_with(self.reverse.as_ref(), text, &self.words)
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        DEFAULT.clone()
    }
}

/// Characters that would change a line's structure if substituted in
fn reserved_char(term: &str) -> Option<char> {
    term.chars()
        .find(|&c| c == DELIMITER || c == PAIR_SEPARATOR || c == '\r' || c == '\n')
}

/// `\b(?:longest|...|short)\b`, or `None` when there is nothing to match
fn alternation<'a>(terms: impl Iterator<Item = &'a str>) -> Result<Option<Regex>, MmlcError> {
    let mut terms: Vec<&str> = terms.collect();
    if terms.is_empty() {
        return Ok(None);
    }
    terms.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));

    let pattern = format!(
        r"\b(?:{})\b",
        terms
            .iter()
            .map(|term| regex::escape(term))
            .collect::<Vec<_>>()
            .join("|")
    );
    Regex::new(&pattern)
        .map(Some)
        .map_err(|e| MmlcError::InvalidDictionary(e.to_string()))
}

fn replace_with(regex: Option<&Regex>, text: &str, table: &HashMap<String, String>) -> String {
    match regex {
        Some(regex) => regex
            .replace_all(text, |caps: &Captures| {
                let matched = &caps[0];
                table
                    .get(matched)
                    .cloned()
                    .unwrap_or_else(|| matched.to_string())
            })
            .into_owned(),
        None => text.to_string(),
    }
}
