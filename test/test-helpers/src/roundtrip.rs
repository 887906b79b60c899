// Copyright © 2022 The Radicle Link Contributors
// SPDX-License-Identifier: GPLv3-or-later

use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

use pretty_assertions::assert_eq;

/// Assert that `a` survives serialisation to and from JSON.
pub fn json<A>(a: A)
where
    for<'de> A: Debug + PartialEq + serde::Serialize + serde::Deserialize<'de>,
{
    let json = serde_json::to_string(&a).unwrap();
    assert_eq!(a, serde_json::from_str(&json).unwrap(), "via {}", json)
}

/// Assert that `a` survives a trip through its [`Display`] form.
pub fn str<A>(a: A)
where
    A: Debug + PartialEq + Display + FromStr,
    <A as FromStr>::Err: Debug,
{
    let s = a.to_string();
    assert_eq!(a, s.parse().unwrap(), "via {:?}", s)
}
