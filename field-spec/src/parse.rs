// Copyright © 2022 The Radicle Link Contributors
//
// This file is part of radicle-link, distributed under the GPLv3 with Radicle
// Linking Exception. For full terms see the included LICENSE file.

use std::mem;

use nom::{
    bytes::complete::take_while,
    character::complete::one_of,
    sequence::pair,
    IResult,
};
use thiserror::Error;

use crate::Fields;

const SEPARATORS: &str = ",()";

#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("unmatched open brace in string \"{0}\"")]
    UnmatchedOpen(String),

    #[error("unmatched close brace in string \"{0}\"")]
    UnmatchedClose(String),
}

pub(crate) fn is_separator(c: char) -> bool {
    SEPARATORS.contains(c)
}

/// Parse a selector string, eg. `"field(value(id),anotherValue)"`.
///
/// Names are trimmed, and empty names are skipped. A name repeated within the
/// same level replaces the earlier occurrence, ie. `"a(x),a"` yields a bare
/// `a`. An opening brace not preceded by a name opens a level which is
/// discarded when closed.
pub fn parse(s: &str) -> Result<Fields, Error> {
    let mut current = Level::default();
    let mut parents = Vec::new();

    for (name, sep) in Tokens::new(s) {
        let name = name.trim();
        match sep {
            Some('(') => {
                let child = Level::named(name);
                parents.push(mem::replace(&mut current, child));
            },
            Some(')') => {
                current.leaf(name);
                let parent = parents.pop().ok_or_else(|| {
                    tracing::debug!(input = s, "unmatched close brace");
                    Error::UnmatchedClose(s.to_owned())
                })?;
                let child = mem::replace(&mut current, parent);
                current.attach(child);
            },
            _ => current.leaf(name),
        }
    }

    if !parents.is_empty() {
        tracing::debug!(input = s, depth = parents.len(), "unmatched open brace");
        return Err(Error::UnmatchedOpen(s.to_owned()));
    }

    Ok(current.fields)
}

#[derive(Default)]
struct Level {
    name: Option<String>,
    fields: Fields,
}

impl Level {
    fn named(name: &str) -> Self {
        Self {
            name: (!name.is_empty()).then(|| name.to_owned()),
            fields: Fields::new(),
        }
    }

    fn leaf(&mut self, name: &str) {
        if !name.is_empty() {
            self.fields.insert(name, None);
        }
    }

    fn attach(&mut self, child: Level) {
        if let Some(name) = child.name {
            self.fields.insert(name, Some(child.fields));
        }
    }
}

/// Splits the input into names, each paired with the separator which
/// terminates it. The last name is paired with `None`.
struct Tokens<'a> {
    rest: Option<&'a str>,
}

impl<'a> Tokens<'a> {
    fn new(s: &'a str) -> Self {
        Self { rest: Some(s) }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = (&'a str, Option<char>);

    fn next(&mut self) -> Option<Self::Item> {
        let s = self.rest?;
        match terminated_name(s) {
            Ok((rest, (name, sep))) => {
                self.rest = Some(rest);
                Some((name, Some(sep)))
            },
            Err(_) => {
                self.rest = None;
                Some((s, None))
            },
        }
    }
}

fn terminated_name(s: &str) -> IResult<&str, (&str, char)> {
    pair(take_while(|c| !is_separator(c)), one_of(SEPARATORS))(s)
}
