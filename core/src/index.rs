use crate::{DocId, PostingList};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Word -> set of documents containing it.
///
/// Built once (by the builder or a codec) and read-only afterwards. Equality
/// compares key sets and posting contents; posting order never matters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvertedIndex {
    postings: BTreeMap<String, PostingList>,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    pub fn from_postings(postings: BTreeMap<String, PostingList>) -> Self {
        Self { postings }
    }

    /// Documents containing every word of the query.
    ///
    /// An empty query matches nothing, and so does a query with any word the
    /// index has never seen.
    pub fn query<S: AsRef<str>>(&self, words: &[S]) -> PostingList {
        let mut lists = Vec::with_capacity(words.len());
        for word in words {
            match self.postings.get(word.as_ref()) {
                Some(list) => lists.push(list),
                None => return PostingList::new(),
            }
        }
        // Start from the shortest list so the intersection only shrinks.
        lists.sort_by_key(|list| list.len());
        let Some((first, rest)) = lists.split_first() else {
            return PostingList::new();
        };
        let mut result: PostingList = (*first).clone();
        for list in rest {
            result.retain(|doc_id| list.contains(doc_id));
            if result.is_empty() {
                break;
            }
        }
        result
    }

    pub fn postings(&self, word: &str) -> Option<&PostingList> {
        self.postings.get(word)
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.postings.contains_key(word)
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PostingList)> {
        self.postings.iter().map(|(word, list)| (word.as_str(), list))
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize { self.postings.len() }

    pub fn is_empty(&self) -> bool { self.postings.is_empty() }

    pub fn max_doc_id(&self) -> Option<DocId> {
        self.postings.values().filter_map(|list| list.last().copied()).max()
    }
}
