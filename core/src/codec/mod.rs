//! Storage codecs turning an [`InvertedIndex`] into bytes and back.

use crate::error::{IndexError, Result};
use crate::index::InvertedIndex;
use std::fmt;
use std::str::FromStr;

mod binary;
mod json;

pub use binary::BinaryCodec;
pub use json::JsonCodec;

pub trait Codec {
    fn encode(&self, index: &InvertedIndex) -> Result<Vec<u8>>;
    fn decode(&self, bytes: &[u8]) -> Result<InvertedIndex>;
}

/// Which codec persists the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoragePolicy {
    /// JSON object, word -> list of document ids.
    Text,
    /// Length-prefixed JSON header followed by big-endian u16 postings.
    Binary,
}

impl StoragePolicy {
    pub fn codec(self) -> &'static dyn Codec {
        match self {
            StoragePolicy::Text => &JsonCodec,
            StoragePolicy::Binary => &BinaryCodec,
        }
    }

    pub fn encode(self, index: &InvertedIndex) -> Result<Vec<u8>> {
        self.codec().encode(index)
    }

    pub fn decode(self, bytes: &[u8]) -> Result<InvertedIndex> {
        self.codec().decode(bytes)
    }

    pub fn name(self) -> &'static str {
        match self {
            StoragePolicy::Text => "text",
            StoragePolicy::Binary => "binary",
        }
    }
}

impl fmt::Display for StoragePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StoragePolicy {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "json" => Ok(StoragePolicy::Text),
            "binary" | "struct" => Ok(StoragePolicy::Binary),
            "pickle" => Err(IndexError::Unsupported(s.trim().to_string())),
            _ => Err(IndexError::UnknownPolicy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_policy_aliases() {
        assert_eq!("json".parse::<StoragePolicy>().unwrap(), StoragePolicy::Text);
        assert_eq!("Text".parse::<StoragePolicy>().unwrap(), StoragePolicy::Text);
        assert_eq!("struct".parse::<StoragePolicy>().unwrap(), StoragePolicy::Binary);
        assert_eq!("BINARY".parse::<StoragePolicy>().unwrap(), StoragePolicy::Binary);
    }

    #[test]
    fn unknown_and_unsupported_policies_differ() {
        assert!(matches!("yaml".parse::<StoragePolicy>(), Err(IndexError::UnknownPolicy(_))));
        assert!(matches!("pickle".parse::<StoragePolicy>(), Err(IndexError::Unsupported(_))));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for policy in [StoragePolicy::Text, StoragePolicy::Binary] {
            assert_eq!(policy.to_string().parse::<StoragePolicy>().unwrap(), policy);
        }
    }
}
