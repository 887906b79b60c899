// Copyright © 2022 The Radicle Link Contributors
//
// This file is part of radicle-link, distributed under the GPLv3 with Radicle
// Linking Exception. For full terms see the included LICENSE file.

//! Field selections for shaping REST responses.
//!
//! # Overview
//!
//! Many REST APIs let the client choose which attributes of a resource are
//! returned, via a `fields` query parameter such as
//!
//! ```text
//! id,project(id),user(avatar(url),id)
//! ```
//!
//! This crate builds such selector strings from structured input, merges and
//! subtracts them, and renders them in a canonical form.
//!
//! ## Building
//!
//! A [`FieldSpec`] is built from a [`Term`], which most values convert into:
//! field names, selector strings, lists, maps of names to sub-terms, and other
//! [`FieldSpec`]s. Lists are merged into a single tree, so
//!
//! ```ignore
//! build(terms!["id", Term::map([("project", ["id"])]), "project(name)"])
//! ```
//!
//! renders as `id,project(id,name)`.
//!
//! Normalization is lazy: a selector string with unbalanced parentheses is
//! reported the first time the spec is normalized or rendered, not when it is
//! built.
//!
//! ## Canonical form
//!
//! The normalized tree is a [`Fields`] value. Names are unique per level, and
//! are rendered in lexicographic order. A field with an empty set of
//! sub-fields renders as a bare name.
//!
//! ## Exclusion
//!
//! [`FieldSpec::exclude`] returns a new spec without the given fields. The
//! original is never modified, and neither is any spec embedded into it.
//!
//! ## Zipping
//!
//! [`FieldSpec::render`] can optionally compress the rendered string by
//! replacing repeated sub-expressions with numbered back-references, which are
//! defined after the main expression:
//!
//! ```text
//! bar(@1),foo(@1);@1:id,name,type
//! ```
//!
//! The compression is greedy: candidates are tried longest first, then most
//! frequent first, and a substitution is kept only if it makes the output
//! shorter. It does not generally find the shortest encoding, but its output
//! is stable.
//!
//! # Features
//!
//! * `serde`: (de)serialisation of [`Fields`], and deserialisation of [`Term`]
//!   and [`FieldSpec`] from JSON-like input.
//! * `percent-encoding`: [`FieldSpec::percent_encode`].

mod field;
pub use field::FieldSpec;

mod parse;
pub use parse::Error;

mod ser;

mod term;
pub use term::Term;

mod tree;
pub use tree::Fields;

#[cfg(feature = "percent-encoding")]
pub use percent_encoding::PercentEncode;

#[cfg(feature = "serde")]
mod serde;

/// Build a [`FieldSpec`] from any accepted input.
pub fn build(input: impl Into<Term>) -> FieldSpec {
    FieldSpec::new(input)
}
