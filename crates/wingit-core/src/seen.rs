//! Personal-history index (species already recorded by the user)

use crate::checklist::PersonalChecklist;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeenIndex {
    species: HashSet<String>,
}

impl SeenIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a checklist. A non-empty species summary wins over raw
    /// sightings; empty species codes are skipped.
    pub fn from_checklist(checklist: &PersonalChecklist) -> Self {
        let codes: Vec<&str> = if checklist.species_index.is_empty() {
            checklist
                .sightings
                .iter()
                .map(|s| s.species_code.as_str())
                .collect()
        } else {
            checklist
                .species_index
                .iter()
                .map(|s| s.species_code.as_str())
                .collect()
        };
        codes.into_iter().collect()
    }

    pub fn insert(&mut self, species_code: impl Into<String>) -> bool {
        let code = species_code.into();
        if code.is_empty() {
            return false;
        }
        self.species.insert(code)
    }

    pub fn contains(&self, species_code: &str) -> bool {
        self.species.contains(species_code)
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SeenIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut index = SeenIndex::new();
        for code in iter {
            index.insert(code);
        }
        index
    }
}
