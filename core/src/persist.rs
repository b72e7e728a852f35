use crate::codec::StoragePolicy;
use crate::error::Result;
use crate::index::InvertedIndex;
use std::fs;
use std::path::Path;

/// Encode the index with `policy` and write it to `path` in one go.
///
/// Nothing is written when encoding fails. A failed write may leave a partial
/// file behind.
pub fn dump_index<P: AsRef<Path>>(index: &InvertedIndex, path: P, policy: StoragePolicy) -> Result<()> {
    let path = path.as_ref();
    let bytes = policy.encode(index)?;
    fs::write(path, &bytes)?;
    tracing::info!(path = %path.display(), %policy, num_words = index.len(), bytes = bytes.len(), "dumped index");
    Ok(())
}

pub fn load_index<P: AsRef<Path>>(path: P, policy: StoragePolicy) -> Result<InvertedIndex> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let index = policy.decode(&bytes)?;
    tracing::info!(path = %path.display(), %policy, num_words = index.len(), "loaded index");
    Ok(index)
}
