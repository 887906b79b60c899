// Copyright © 2022 The Radicle Link Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use field_spec::build;
use proptest::prelude::*;

use crate::gen;

proptest! {
    #[test]
    fn idempotent(
        x in gen::fields_from(gen::short_name()),
        y in gen::fields_from(gen::short_name())
    ) {
        let once = build(&x).exclude(&y).unwrap();
        let twice = once.exclude(&y).unwrap();
        assert_eq!(once.normalized().unwrap(), twice.normalized().unwrap())
    }

    #[test]
    fn does_not_mutate(
        x in gen::fields_from(gen::short_name()),
        y in gen::fields_from(gen::short_name())
    ) {
        let spec = build(&x);
        let before = spec.render(false).unwrap().to_owned();
        let _ = spec.exclude(&y).unwrap();
        assert_eq!(before, spec.render(false).unwrap());
        assert_eq!(&x, spec.normalized().unwrap())
    }

    #[test]
    fn excluding_self_leaves_nothing(x in gen::fields()) {
        assert!(build(&x).exclude(&x).unwrap().normalized().unwrap().is_empty())
    }

    #[test]
    fn excluding_nothing_leaves_everything(x in gen::fields()) {
        assert_eq!(&x, build(&x).exclude(Vec::<&str>::new()).unwrap().normalized().unwrap())
    }

    #[test]
    fn result_is_contained(
        x in gen::fields_from(gen::short_name()),
        y in gen::fields_from(gen::short_name())
    ) {
        let rest = build(&x).exclude(&y).unwrap();
        assert_eq!(&x, &x.clone().merge(rest.normalized().unwrap().clone()))
    }
}
