// Copyright © 2022 The Radicle Link Contributors
//
// This file is part of radicle-link, distributed under the GPLv3 with Radicle
// Linking Exception. For full terms see the included LICENSE file.

use std::{str::FromStr, sync::Arc};

use once_cell::sync::OnceCell;

use crate::{
    parse::Error,
    term::{self, Term},
    Fields,
};

/// An immutable field selection.
///
/// The input is normalized on first access, and both the plain and the zipped
/// serialisation are computed at most once. Clones share these caches.
#[derive(Clone, Debug)]
pub struct FieldSpec {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    input: Term,
    normalized: OnceCell<Fields>,
    plain: OnceCell<String>,
    zipped: OnceCell<String>,
}

impl FieldSpec {
    /// Create a spec from `input`. Selector strings are not parsed until the
    /// spec is first normalized, so this never fails.
    pub fn new(input: impl Into<Term>) -> Self {
        Self::with_cache(input.into(), OnceCell::new())
    }

    fn with_cache(input: Term, normalized: OnceCell<Fields>) -> Self {
        Self {
            inner: Arc::new(Inner {
                input,
                normalized,
                plain: OnceCell::new(),
                zipped: OnceCell::new(),
            }),
        }
    }

    /// The normalized field tree.
    ///
    /// Fails if the input contains a selector string with unbalanced
    /// parentheses. Failures are not cached.
    pub fn normalized(&self) -> Result<&Fields, Error> {
        self.inner
            .normalized
            .get_or_try_init(|| term::normalize(&self.inner.input).map(Option::unwrap_or_default))
    }

    /// Serialise the normalized tree, eg. `id,project(id),user(avatar(url),id)`.
    ///
    /// If `zip` is `true`, repeated sub-expressions are factored out into
    /// back-references, as in `bar(@1),foo(@1);@1:id,name,type`.
    pub fn render(&self, zip: bool) -> Result<&str, Error> {
        let rendered = if zip {
            self.inner
                .zipped
                .get_or_try_init(|| self.normalized().map(Fields::zip))?
        } else {
            self.inner
                .plain
                .get_or_try_init(|| self.normalized().map(ToString::to_string))?
        };
        Ok(rendered.as_str())
    }

    /// A new spec containing everything in `self` which is not in `excluded`.
    ///
    /// See [`Fields::exclude`] for the precise rules. `self` is left untouched.
    pub fn exclude(&self, excluded: impl Into<Term>) -> Result<Self, Error> {
        let excluded = term::normalize(&excluded.into())?.unwrap_or_default();
        let rest = self.normalized()?.exclude(&excluded);
        tracing::trace!(
            excluded = excluded.len(),
            remaining = rest.len(),
            "excluded fields"
        );
        Ok(Self::from(rest))
    }

    /// The rendered spec, percent-encoded for use as a query parameter value.
    #[cfg(feature = "percent-encoding")]
    pub fn percent_encode(&self, zip: bool) -> Result<percent_encoding::PercentEncode<'_>, Error> {
        use percent_encoding::{AsciiSet, CONTROLS};

        /// https://url.spec.whatwg.org/#query-percent-encode-set
        const QUERY_PERCENT_ENCODE_SET: &AsciiSet = &CONTROLS
            .add(b' ')
            .add(b'"')
            .add(b'#')
            .add(b'<')
            .add(b'>');

        const QUERY_VALUE_PERCENT_ENCODE_SET: &AsciiSet =
            &QUERY_PERCENT_ENCODE_SET.add(b'&').add(b'+').add(b'=');

        self.render(zip)
            .map(|s| percent_encoding::utf8_percent_encode(s, QUERY_VALUE_PERCENT_ENCODE_SET))
    }
}

impl From<Fields> for FieldSpec {
    fn from(fields: Fields) -> Self {
        let normalized = OnceCell::new();
        let _ = normalized.set(fields);
        Self::with_cache(Term::Null, normalized)
    }
}

impl FromStr for FieldSpec {
    type Err = Error;

    /// Unlike [`FieldSpec::new`], parses eagerly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(|fields: Fields| Self::from(fields))
    }
}
