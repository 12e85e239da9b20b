//! Token input parsing.
//!
//! Host expressions pass a single free-text argument such as
//! `"Foo.Bar, volume.music"`. Parsing splits on commas, trims each piece and
//! drops empty segments, so `"a,,b"` and `" a , b "` both yield two arguments.

use std::fmt;

use crate::{ComponentId, ProviderError};

/// Number of arguments every provider in this workspace requires.
pub const TOKEN_ARITY: usize = 2;

/// Splits comma-delimited text into trimmed, non-empty segments.
pub fn split_delimited(raw: &str) -> impl Iterator<Item = &str> + '_ {
    raw.split(',').map(str::trim).filter(|segment| !segment.is_empty())
}

/// Ordered input arguments parsed from a raw token input string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputArguments {
    segments: Vec<String>,
}

impl InputArguments {
    /// Parses the raw input; `None` produces no arguments.
    pub fn parse(raw: Option<&str>) -> Self {
        let segments = raw
            .map(|raw| split_delimited(raw).map(str::to_string).collect())
            .unwrap_or_default();
        Self { segments }
    }

    /// The empty-input sentinel handed to externally owned tokens.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.segments.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }
}

impl fmt::Display for InputArguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join(", "))
    }
}

/// Validated `(component id, key)` pair.
///
/// The meaning of `key` depends on the provider: a dotted config path, a flat
/// translation key, a raw asset path, or the name of an external token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenInput {
    pub component: ComponentId,
    pub key: String,
}

impl TokenInput {
    /// Parses raw input into a component/key pair.
    ///
    /// Fails with [`ProviderError::InvalidArity`] when the input does not
    /// contain exactly two arguments. Registry membership is checked by the
    /// caller.
    pub fn parse(raw: Option<&str>) -> Result<Self, ProviderError> {
        let segments = InputArguments::parse(raw).segments;
        let [component, key] = <[String; TOKEN_ARITY]>::try_from(segments)
            .map_err(|segments| ProviderError::InvalidArity { actual: segments.len() })?;
        Ok(Self {
            component: ComponentId::from_segment(component),
            key,
        })
    }
}

impl fmt::Display for TokenInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.component, self.key)
    }
}
