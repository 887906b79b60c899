// Copyright © 2022 The Radicle Link Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::HashMap;

use regex::{Captures, Regex};

/// Expand the back-references of a zipped field string.
///
/// A definition may only refer to references introduced after it, so
/// definitions are expanded last to first.
pub fn unzip(zipped: &str) -> String {
    let reference = Regex::new(r"@\d+").unwrap();

    let mut clauses = zipped.split(';');
    let body = clauses.next().unwrap_or_default();
    let definitions = clauses
        .map(|clause| {
            let (id, part) = clause
                .split_once(':')
                .unwrap_or_else(|| panic!("malformed definition {:?}", clause));
            (id.to_owned(), part.to_owned())
        })
        .collect::<Vec<_>>();

    let mut expanded = HashMap::<String, String>::new();
    for (id, part) in definitions.into_iter().rev() {
        let part = expand(&reference, &part, &expanded);
        expanded.insert(id, part);
    }

    expand(&reference, body, &expanded)
}

fn expand(reference: &Regex, s: &str, expanded: &HashMap<String, String>) -> String {
    reference
        .replace_all(s, |caps: &Captures| {
            expanded
                .get(&caps[0])
                .unwrap_or_else(|| panic!("undefined reference {}", &caps[0]))
                .clone()
        })
        .into_owned()
}
