// Copyright © 2022 The Radicle Link Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use field_spec::{build, Fields, Term};
use proptest::prelude::*;
use test_helpers::roundtrip;

use crate::gen;

proptest! {
    #[test]
    fn order_independent((fields, selectors) in gen::shuffled_selectors()) {
        assert_eq!(fields.to_string(), build(selectors).render(false).unwrap())
    }

    #[test]
    fn deterministic(fields in gen::fields()) {
        let a = build(&fields);
        let b = build(&fields);
        assert_eq!(a.render(false).unwrap(), b.render(false).unwrap());
        assert_eq!(a.render(true).unwrap(), b.render(true).unwrap())
    }

    #[test]
    fn roundtrip_str(fields in gen::fields()) {
        roundtrip::str(fields)
    }

    #[test]
    fn roundtrip_json(fields in gen::fields()) {
        roundtrip::json(fields)
    }

    #[test]
    fn reparse(fields in gen::fields()) {
        let spec = build(&fields);
        let rendered = spec.render(false).unwrap();
        assert_eq!(spec.normalized().unwrap(), build(rendered).normalized().unwrap())
    }

    #[test]
    fn map_and_list_agree(fields in gen::fields()) {
        let as_map = Term::map(fields.iter().map(|(name, sub)| {
            let sub = sub.as_ref().map_or(Term::Null, |sub| Term::from(sub.to_string()));
            (name.clone(), sub)
        }));
        assert_eq!(&fields, build(as_map).normalized().unwrap())
    }

    #[test]
    fn merge_is_commutative(x in gen::fields(), y in gen::fields()) {
        assert_eq!(x.clone().merge(y.clone()), y.merge(x))
    }

    #[test]
    fn merge_is_idempotent(x in gen::fields()) {
        assert_eq!(x.clone(), x.clone().merge(x))
    }
}

#[test]
fn merge_empty() {
    let x = "a(b),c".parse::<Fields>().unwrap();
    assert_eq!(x.clone(), x.clone().merge(Fields::new()));
    assert_eq!(x.clone(), Fields::new().merge(x))
}
