// Copyright © 2022 The Radicle Link Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use proptest::prelude::*;

use crate::{gen, unzip::unzip};

proptest! {
    #[test]
    fn unzips_to_plain(fields in gen::fields()) {
        assert_eq!(fields.to_string(), unzip(&fields.zip()))
    }

    #[test]
    fn never_longer(fields in gen::fields()) {
        assert!(fields.zip().len() <= fields.to_string().len())
    }

    #[test]
    fn repetitive_trees_unzip(fields in gen::fields_from(gen::short_name())) {
        assert_eq!(fields.to_string(), unzip(&fields.zip()))
    }
}
