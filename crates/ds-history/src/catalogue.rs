//! `ActivityCatalogue` — the environment's discrete action set.
//!
//! Distinct activity codes are sorted ascending; an action is an index into
//! that list.  With label-encoded data (codes `0..n`) the index and the code
//! coincide.

use std::collections::BTreeMap;

use ds_core::ActivityCode;

use crate::HistoryDataset;

/// Sorted distinct activity codes with their display names.
#[derive(Clone, Debug)]
pub struct ActivityCatalogue {
    /// Ascending, no duplicates.
    codes: Vec<ActivityCode>,
    /// Parallel to `codes`.
    names: Vec<String>,
}

impl ActivityCatalogue {
    /// Collect distinct codes from `dataset`.
    ///
    /// When the dataset has a name column, each code takes the name of the
    /// first record carrying it; codes whose first record has no name (or all
    /// codes, when there is no name column) get `"Activity {code}"`.
    pub fn from_dataset(dataset: &HistoryDataset) -> Self {
        let use_names = dataset.columns().activity_name;
        let mut first_name: BTreeMap<ActivityCode, Option<&str>> = BTreeMap::new();

        for record in dataset.records() {
            first_name
                .entry(record.activity_code)
                .or_insert_with(|| record.activity_name.as_deref().filter(|_| use_names));
        }

        let (codes, names) = first_name
            .into_iter()
            .map(|(code, name)| {
                let name = name.map_or_else(|| fallback_name(code), str::to_owned);
                (code, name)
            })
            .unzip();

        Self { codes, names }
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// All codes, ascending.
    pub fn codes(&self) -> &[ActivityCode] {
        &self.codes
    }

    /// Code at catalogue position `index`.
    #[inline]
    pub fn code_at(&self, index: usize) -> Option<ActivityCode> {
        self.codes.get(index).copied()
    }

    /// Catalogue position of `code`.
    #[inline]
    pub fn index_of(&self, code: ActivityCode) -> Option<usize> {
        self.codes.binary_search(&code).ok()
    }

    /// Display name for `code`.  Unknown codes get `"Activity {code}"`.
    pub fn name(&self, code: ActivityCode) -> String {
        match self.index_of(code) {
            Some(i) => self.names[i].clone(),
            None => fallback_name(code),
        }
    }
}

fn fallback_name(code: ActivityCode) -> String {
    format!("Activity {code}")
}
