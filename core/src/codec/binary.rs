use super::Codec;
use crate::error::{IndexError, Result};
use crate::index::InvertedIndex;
use crate::{DocId, PostingList, MAX_BINARY_DOC_ID};
use byteorder::{BigEndian, ByteOrder, ReadBytesExt, WriteBytesExt};
use std::collections::BTreeMap;

const HEADER_LEN_BYTES: usize = 4;
const DOC_ID_BYTES: usize = 2;

/// Fixed-width big-endian layout:
///
/// ```text
/// u32 header_len | header (JSON [[word, count], ...]) | u16 doc ids ...
/// ```
///
/// Postings follow the header in header order, `count` ids per word, with no
/// padding anywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryCodec;

impl Codec for BinaryCodec {
    fn encode(&self, index: &InvertedIndex) -> Result<Vec<u8>> {
        check_doc_ids(index)?;

        let pairs: Vec<(&str, usize)> = index.iter().map(|(word, list)| (word, list.len())).collect();
        let header = serde_json::to_vec(&pairs)?;
        let header_len = header_len_prefix(header.len())?;
        let num_postings: usize = pairs.iter().map(|(_, count)| count).sum();

        let mut out = Vec::with_capacity(HEADER_LEN_BYTES + header.len() + num_postings * DOC_ID_BYTES);
        out.write_u32::<BigEndian>(header_len)?;
        out.extend_from_slice(&header);
        for (_, list) in index.iter() {
            for &doc_id in list {
                // Range checked above.
                out.write_u16::<BigEndian>(doc_id as u16)?;
            }
        }
        tracing::debug!(num_words = pairs.len(), num_postings, bytes = out.len(), "encoded binary index");
        Ok(out)
    }

    fn decode(&self, bytes: &[u8]) -> Result<InvertedIndex> {
        let mut cursor = bytes;
        let header_len = cursor
            .read_u32::<BigEndian>()
            .map_err(|_| IndexError::corrupt(format!("stream of {} bytes is too short for the header length", bytes.len())))?
            as usize;
        if cursor.len() < header_len {
            return Err(IndexError::corrupt(format!(
                "header declares {header_len} bytes but only {} remain",
                cursor.len()
            )));
        }
        let (header, mut rest) = cursor.split_at(header_len);
        let pairs: Vec<(String, usize)> = serde_json::from_slice(header)
            .map_err(|e| IndexError::corrupt(format!("invalid header: {e}")))?;

        let mut postings: BTreeMap<String, PostingList> = BTreeMap::new();
        for (word, count) in pairs {
            let needed = count
                .checked_mul(DOC_ID_BYTES)
                .filter(|needed| *needed <= rest.len())
                .ok_or_else(|| {
                    IndexError::corrupt(format!(
                        "word '{word}' declares {count} postings but only {} bytes remain",
                        rest.len()
                    ))
                })?;
            let (chunk, tail) = rest.split_at(needed);
            let list: PostingList = chunk
                .chunks_exact(DOC_ID_BYTES)
                .map(|raw| DocId::from(BigEndian::read_u16(raw)))
                .collect();
            if list.len() != count {
                return Err(IndexError::corrupt(format!(
                    "word '{word}' repeats a document id in its {count} postings"
                )));
            }
            if postings.insert(word, list).is_some() {
                return Err(IndexError::corrupt("header lists the same word twice"));
            }
            rest = tail;
        }
        if !rest.is_empty() {
            return Err(IndexError::corrupt(format!("{} trailing bytes after the last posting", rest.len())));
        }
        tracing::debug!(num_words = postings.len(), bytes = bytes.len(), "decoded binary index");
        Ok(InvertedIndex::from_postings(postings))
    }
}

fn header_len_prefix(len: usize) -> Result<u32> {
    u32::try_from(len)
        .map_err(|_| IndexError::FormatLimit(format!("header of {len} bytes overflows the u32 length prefix")))
}

fn check_doc_ids(index: &InvertedIndex) -> Result<()> {
    if index.max_doc_id().map_or(true, |max| max <= MAX_BINARY_DOC_ID) {
        return Ok(());
    }
    for (word, list) in index.iter() {
        if let Some(&doc_id) = list.iter().find(|id| **id > MAX_BINARY_DOC_ID) {
            return Err(IndexError::DocIdOutOfRange { word: word.to_string(), doc_id });
        }
    }
    Ok(())
}
