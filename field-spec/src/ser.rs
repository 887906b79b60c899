// Copyright © 2022 The Radicle Link Contributors
//
// This file is part of radicle-link, distributed under the GPLv3 with Radicle
// Linking Exception. For full terms see the included LICENSE file.

use std::{cmp::Reverse, collections::HashMap};

use regex::Regex;

use crate::Fields;

/// Characters (or runs of whitespace) which may delimit a zip candidate.
const BOUNDARY: &str = r"[,()]|\s+";

pub(super) fn plain(fields: &Fields) -> String {
    tree(fields, &mut |_| ())
}

pub(super) fn zip(fields: &Fields) -> String {
    let mut candidates = Candidates::default();
    let plain = tree(fields, &mut |part| candidates.visit(part));

    let mut zipped = plain;
    let mut next = 1usize;
    for part in candidates.into_ordered() {
        let reference = format!("@{}", next);
        let replaced = match substitute(&zipped, &part, &reference) {
            Ok(replaced) => replaced,
            Err(e) => {
                tracing::warn!(err = %e, part = %part, "skipping zip candidate");
                continue;
            },
        };
        let candidate = format!("{};{}:{}", replaced, reference, part);

        let len = units(&candidate);
        if len < units(&zipped) {
            tracing::trace!(part = %part, reference = %reference, len, "zip accepted");
            zipped = candidate;
            next += 1;
        } else {
            tracing::trace!(part = %part, len, "zip rejected");
        }
    }

    zipped
}

/// Lengths are measured in UTF-16 code units.
fn units(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Serialise `fields` bottom-up, reporting every field expression and every
/// comma-joined level to `visit`, the whole string last.
///
/// Names are ordered by their UTF-16 code units. This only differs from the
/// byte order of [`Fields`] when characters outside the BMP meet characters in
/// `U+E000..=U+FFFF`.
fn tree<V>(fields: &Fields, visit: &mut V) -> String
where
    V: FnMut(&str),
{
    let mut entries = fields.iter().collect::<Vec<_>>();
    entries.sort_by(|(x, _), (y, _)| x.encode_utf16().cmp(y.encode_utf16()));

    let mut buf = String::new();
    intercalate(&mut buf, entries.into_iter(), |buf, (name, sub)| {
        let field = match sub {
            Some(sub) => {
                let sub = tree(sub, visit);
                if sub.is_empty() {
                    name.clone()
                } else {
                    format!("{}({})", name, sub)
                }
            },
            None => name.clone(),
        };
        visit(&field);
        buf.push_str(&field);
    });
    visit(&buf);
    buf
}

fn intercalate<F, T>(
    buf: &mut String,
    collection: impl ExactSizeIterator<Item = T>,
    mut callback: F,
) where
    F: FnMut(&mut String, T),
{
    let length = collection.len();
    for (i, v) in collection.enumerate() {
        callback(buf, v);
        if i + 1 != length {
            buf.push(',');
        }
    }
}

/// Replace every occurrence of `part` which is delimited by a boundary on
/// both sides. Boundaries are consumed by the match they delimit, so two
/// occurrences sharing a single separator are not both replaced.
fn substitute(s: &str, part: &str, reference: &str) -> Result<String, regex::Error> {
    let pattern = format!(
        "(^|{boundary}){part}({boundary}|$)",
        boundary = BOUNDARY,
        part = regex::escape(part)
    );
    let re = Regex::new(&pattern)?;
    let replacement = format!("${{1}}{}${{2}}", reference);
    Ok(re.replace_all(s, replacement.as_str()).into_owned())
}

/// Serialised sub-expressions in the order they were first visited, together
/// with how often each was visited.
#[derive(Default)]
struct Candidates {
    index: HashMap<String, usize>,
    parts: Vec<(String, usize)>,
}

impl Candidates {
    fn visit(&mut self, part: &str) {
        match self.index.get(part) {
            Some(&i) => self.parts[i].1 += 1,
            None => {
                self.index.insert(part.to_owned(), self.parts.len());
                self.parts.push((part.to_owned(), 1));
            },
        }
    }

    /// Longest first, then most frequent first.
    ///
    /// Ties are broken by a base order in which parts that are array indices
    /// come first, ascending, and all others follow in visiting order.
    fn into_ordered(self) -> impl Iterator<Item = String> {
        let (mut parts, rest): (Vec<_>, Vec<_>) = self
            .parts
            .into_iter()
            .partition(|(part, _)| array_index(part).is_some());
        parts.sort_by_key(|(part, _)| array_index(part));
        parts.extend(rest);

        parts.sort_by_key(|(part, n)| (Reverse(units(part)), Reverse(*n)));
        parts
            .into_iter()
            .map(|(part, _)| part)
            .filter(|part| !part.is_empty())
    }
}

/// A canonical decimal `u32` below `u32::MAX`, eg. `0` or `17` but not `017`.
fn array_index(s: &str) -> Option<u32> {
    s.parse::<u32>()
        .ok()
        .filter(|n| *n != u32::MAX && n.to_string() == s)
}
