// Copyright © 2022 The Radicle Link Contributors
//
// This file is part of radicle-link, distributed under the GPLv3 with Radicle
// Linking Exception. For full terms see the included LICENSE file.

use std::{
    collections::{btree_map, BTreeMap},
    fmt,
    iter::FromIterator,
    str::FromStr,
};

use crate::{parse, ser};

/// A normalized field tree.
///
/// Every field maps to either `None` (a leaf) or to the tree of its
/// sub-fields. Fields are kept in lexicographic order. They are serialised in
/// UTF-16 code unit order, which is the same unless names mix characters
/// outside the BMP with characters in `U+E000..=U+FFFF`.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fields(BTreeMap<String, Option<Fields>>);

impl Fields {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub(crate) fn leaf(name: impl Into<String>) -> Self {
        let mut fields = Self::new();
        fields.insert(name, None);
        fields
    }

    pub fn insert(
        &mut self,
        name: impl Into<String>,
        sub: Option<Fields>,
    ) -> Option<Option<Fields>> {
        self.0.insert(name.into(), sub)
    }

    /// `None` if `name` is absent, `Some(None)` if it is a leaf.
    pub fn get(&self, name: &str) -> Option<Option<&Fields>> {
        self.0.get(name).map(Option::as_ref)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Option<Fields>> {
        self.0.iter()
    }

    /// Deep union of `self` and `other`.
    ///
    /// Where one side has sub-fields for a name and the other has a leaf, the
    /// sub-fields are kept. Sub-trees present on both sides are merged
    /// recursively.
    pub fn merge(mut self, other: Fields) -> Self {
        for (name, theirs) in other.0 {
            let ours = self.0.remove(&name).flatten();
            self.0.insert(name, union(ours, theirs));
        }
        self
    }

    /// Structural difference of `self` and `excluded`.
    ///
    /// * A name whose excluded value has sub-fields is recursed into, and
    ///   dropped if nothing remains of it. A leaf is left alone in this case.
    /// * A leaf excluded by a leaf is dropped.
    /// * Everything else, including names with sub-fields excluded by a leaf,
    ///   is retained.
    pub fn exclude(&self, excluded: &Fields) -> Self {
        let mut rest = Self::new();
        for (name, ours) in self.iter() {
            match (ours, excluded.get(name)) {
                (Some(ours), Some(Some(theirs))) => {
                    let sub = ours.exclude(theirs);
                    if !sub.is_empty() {
                        rest.insert(name.clone(), Some(sub));
                    }
                },
                (None, Some(None)) => {},
                (ours, _) => {
                    rest.insert(name.clone(), ours.clone());
                },
            }
        }
        rest
    }

    /// Serialise, factoring repeated sub-expressions out into `@n`
    /// back-references.
    ///
    /// The compression is greedy and not guaranteed to find the shortest
    /// representation. It is, however, deterministic: the same tree always
    /// yields the same string.
    pub fn zip(&self) -> String {
        ser::zip(self)
    }
}

pub(crate) fn union(ours: Option<Fields>, theirs: Option<Fields>) -> Option<Fields> {
    match (ours, theirs) {
        (Some(ours), Some(theirs)) => Some(ours.merge(theirs)),
        (ours, theirs) => ours.or(theirs),
    }
}

impl<K: Into<String>> FromIterator<(K, Option<Fields>)> for Fields {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = (K, Option<Fields>)>,
    {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl IntoIterator for Fields {
    type Item = (String, Option<Fields>);
    type IntoIter = btree_map::IntoIter<String, Option<Fields>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = (&'a String, &'a Option<Fields>);
    type IntoIter = btree_map::Iter<'a, String, Option<Fields>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Fields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ser::plain(self))
    }
}

impl FromStr for Fields {
    type Err = parse::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse(s)
    }
}
