use super::Codec;
use crate::error::Result;
use crate::index::InvertedIndex;

/// Whole index as one JSON object.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn encode(&self, index: &InvertedIndex) -> Result<Vec<u8>> {
        let bytes = serde_json::to_vec(index)?;
        tracing::debug!(num_words = index.len(), bytes = bytes.len(), "encoded json index");
        Ok(bytes)
    }

    fn decode(&self, bytes: &[u8]) -> Result<InvertedIndex> {
        let index: InvertedIndex = serde_json::from_slice(bytes)?;
        tracing::debug!(num_words = index.len(), "decoded json index");
        Ok(index)
    }
}
