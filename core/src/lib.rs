use std::collections::{BTreeMap, BTreeSet};

pub mod builder;
pub mod codec;
pub mod documents;
pub mod error;
pub mod index;
pub mod persist;
pub mod tokenizer;

pub use builder::{build_from_iter, build_inverted_index};
pub use codec::{BinaryCodec, Codec, JsonCodec, StoragePolicy};
pub use documents::{load_documents, load_documents_from_path};
pub use error::{IndexError, Result};
pub use index::InvertedIndex;
pub use persist::{dump_index, load_index};

pub type DocId = u32;

/// Document id -> lower-cased document text, as produced by the loader.
pub type Documents = BTreeMap<DocId, String>;

/// Set of documents containing a word. Each id appears at most once.
pub type PostingList = BTreeSet<DocId>;

/// Largest document id the binary codec can represent (ids are stored as u16).
pub const MAX_BINARY_DOC_ID: DocId = u16::MAX as DocId;
