// Copyright © 2022 The Radicle Link Contributors
// SPDX-License-Identifier: GPLv3-or-later

pub mod logging;
pub mod roundtrip;
