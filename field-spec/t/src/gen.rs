// Copyright © 2022 The Radicle Link Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use field_spec::Fields;
use proptest::prelude::*;

/// Field names as they appear in REST APIs.
pub fn name() -> impl Strategy<Value = String> + Clone {
    "\\$?[a-z][a-zA-Z0-9_]{0,7}"
}

/// Names drawn from a tiny alphabet, so that independently generated trees
/// overlap.
pub fn short_name() -> impl Strategy<Value = String> + Clone {
    "[a-d]"
}

/// Trees without empty sub-trees, ie. trees which survive a trip through
/// their string form.
pub fn fields() -> impl Strategy<Value = Fields> {
    fields_from(name())
}

pub fn fields_from<S>(name: S) -> impl Strategy<Value = Fields>
where
    S: Strategy<Value = String> + Clone + 'static,
{
    let leaves = prop::collection::btree_map(name.clone(), Just(None::<Fields>), 1..6)
        .prop_map(|tree| tree.into_iter().collect::<Fields>());

    leaves.prop_recursive(4, 64, 5, move |inner| {
        prop::collection::btree_map(name.clone(), prop::option::of(inner), 1..6)
            .prop_map(|tree| tree.into_iter().collect::<Fields>())
    })
}

/// A tree, along with its top-level fields rendered as individual selector
/// strings in random order.
pub fn shuffled_selectors() -> impl Strategy<Value = (Fields, Vec<String>)> {
    fields().prop_flat_map(|fields| {
        let selectors = fields
            .iter()
            .map(|(name, sub)| match sub {
                Some(sub) => format!("{}({})", name, sub),
                None => name.clone(),
            })
            .collect::<Vec<_>>();
        (Just(fields), Just(selectors).prop_shuffle())
    })
}
