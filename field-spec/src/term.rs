// Copyright © 2022 The Radicle Link Contributors
//
// This file is part of radicle-link, distributed under the GPLv3 with Radicle
// Linking Exception. For full terms see the included LICENSE file.

use std::collections::BTreeMap;

use crate::{
    parse::{self, is_separator},
    FieldSpec,
    Fields,
};

/// The shapes of input a [`FieldSpec`] can be built from.
///
/// Most values convert into a `Term` via [`From`], so that eg.
/// `build(["id", "name"])` or `build("id,project(id)")` work directly. Mixed
/// lists can be written with the [`crate::terms`] macro.
#[derive(Clone, Debug)]
pub enum Term {
    /// A field name, or a selector string such as `"value(id),name"`.
    Name(String),
    /// A numeric field name.
    Number(i64),
    /// Terms to be merged into one tree.
    List(Vec<Term>),
    /// Field names with their sub-terms. A [`Term::Null`] value denotes a leaf.
    Map(BTreeMap<String, Term>),
    /// The normalized tree of another spec, copied on normalization.
    Spec(FieldSpec),
    /// Contributes nothing.
    Null,
}

impl Term {
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Term>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Normalize a [`Term`] into a tree, or `None` if it contributes nothing.
pub(crate) fn normalize(term: &Term) -> Result<Option<Fields>, parse::Error> {
    match term {
        Term::Spec(spec) => spec.normalized().map(|fields| Some(fields.clone())),
        Term::List(terms) => terms
            .iter()
            .try_fold(Fields::new(), |acc, term| -> Result<_, parse::Error> {
                Ok(match normalize(term)? {
                    Some(fields) => acc.merge(fields),
                    None => acc,
                })
            })
            .map(Some),
        Term::Map(entries) => entries
            .iter()
            .map(|(name, term)| Ok((name.as_str(), normalize(term)?)))
            .collect::<Result<Fields, parse::Error>>()
            .map(Some),
        Term::Name(name) if name.is_empty() => Ok(None),
        Term::Name(name) if name.contains(is_separator) => parse::parse(name).map(Some),
        Term::Name(name) => Ok(Some(Fields::leaf(name.as_str()))),
        Term::Number(n) => Ok(Some(Fields::leaf(n.to_string()))),
        Term::Null => Ok(None),
    }
}

/// Build a [`Term::List`] from heterogeneous elements.
///
/// ```ignore
/// terms!["id", Term::map([("project", ["id"])]), &base]
/// ```
#[macro_export]
macro_rules! terms {
    ($($term:expr),* $(,)?) => {
        $crate::Term::List(vec![$($crate::Term::from($term)),*])
    };
}

impl From<&str> for Term {
    fn from(s: &str) -> Self {
        Self::Name(s.to_owned())
    }
}

impl From<String> for Term {
    fn from(s: String) -> Self {
        Self::Name(s)
    }
}

macro_rules! number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Term {
                fn from(n: $ty) -> Self {
                    Self::Number(n.into())
                }
            }
        )*
    };
}

number!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! unsigned {
    ($($ty:ty),*) => {
        $(
            /// Values beyond `i64::MAX` are kept as names.
            impl From<$ty> for Term {
                fn from(n: $ty) -> Self {
                    i64::try_from(n).map_or_else(|_| Self::Name(n.to_string()), Self::Number)
                }
            }
        )*
    };
}

unsigned!(u64, usize);

impl From<f64> for Term {
    fn from(n: f64) -> Self {
        Self::Name(n.to_string())
    }
}

impl<T: Into<Term>> From<Vec<T>> for Term {
    fn from(terms: Vec<T>) -> Self {
        Self::List(terms.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Term>, const N: usize> From<[T; N]> for Term {
    fn from(terms: [T; N]) -> Self {
        Self::List(IntoIterator::into_iter(terms).map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<Term>> From<BTreeMap<K, V>> for Term {
    fn from(entries: BTreeMap<K, V>) -> Self {
        Self::map(entries)
    }
}

impl<T: Into<Term>> From<Option<T>> for Term {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Into::into)
    }
}

impl From<FieldSpec> for Term {
    fn from(spec: FieldSpec) -> Self {
        Self::Spec(spec)
    }
}

impl From<&FieldSpec> for Term {
    fn from(spec: &FieldSpec) -> Self {
        Self::Spec(spec.clone())
    }
}

impl From<Fields> for Term {
    fn from(fields: Fields) -> Self {
        Self::Spec(FieldSpec::from(fields))
    }
}

impl From<&Fields> for Term {
    fn from(fields: &Fields) -> Self {
        fields.clone().into()
    }
}
