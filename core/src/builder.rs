use crate::index::InvertedIndex;
use crate::tokenizer::tokenize;
use crate::{DocId, Documents, PostingList};
use std::collections::{BTreeMap, HashSet};

/// Build the inverted index over a document mapping.
pub fn build_inverted_index(documents: &Documents) -> InvertedIndex {
    build_from_iter(documents.iter().map(|(doc_id, text)| (*doc_id, text.as_str())))
}

/// Build from `(doc_id, text)` pairs in any order. The text is tokenized as
/// is, so callers feeding raw text should lower-case it first.
pub fn build_from_iter<'a, I>(documents: I) -> InvertedIndex
where
    I: IntoIterator<Item = (DocId, &'a str)>,
{
    let mut postings: BTreeMap<String, PostingList> = BTreeMap::new();
    let mut num_docs = 0usize;
    for (doc_id, text) in documents {
        num_docs += 1;
        let distinct: HashSet<&str> = tokenize(text).into_iter().collect();
        for word in distinct {
            postings.entry(word.to_string()).or_default().insert(doc_id);
        }
    }
    tracing::debug!(num_docs, num_words = postings.len(), "built inverted index");
    InvertedIndex::from_postings(postings)
}

impl InvertedIndex {
    pub fn from_documents(documents: &Documents) -> Self {
        build_inverted_index(documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_words_post_once() {
        let index = build_from_iter([(4, "spam spam spam eggs")]);
        assert_eq!(index.postings("spam"), Some(&PostingList::from([4])));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn input_order_does_not_matter() {
        let forward = build_from_iter([(1, "a b"), (2, "b c"), (3, "c a")]);
        let backward = build_from_iter([(3, "c a"), (2, "b c"), (1, "a b")]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn from_documents_matches_builder() {
        let documents = Documents::from([(1, "one word".to_string()), (2, "two words".to_string())]);
        let index = InvertedIndex::from_documents(&documents);
        assert_eq!(index, build_inverted_index(&documents));
        assert_eq!(index.query(&["words"]), PostingList::from([2]));
    }

    #[test]
    fn punctuation_never_becomes_a_word() {
        let index = build_from_iter([(1, "hello, world!"), (2, "--")]);
        assert!(!index.contains_word(""));
        assert_eq!(index.words().collect::<Vec<_>>(), vec!["hello", "world"]);
    }
}
