use crate::error::{IndexError, Result};
use crate::{DocId, Documents};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Read `<id>\t<content>` lines into a document mapping.
///
/// The line is lower-cased before splitting on the first tab; the content is
/// trimmed. Blank lines are skipped, bytes that are not UTF-8 are an input
/// error for their line. A repeated id replaces the earlier
/// document.
pub fn load_documents<R: BufRead>(reader: R) -> Result<Documents> {
    let mut documents = Documents::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| match e.kind() {
            io::ErrorKind::InvalidData => IndexError::InvalidDocument { line: idx + 1, reason: "line is not valid UTF-8".into() },
            _ => IndexError::Io(e),
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let (doc_id, content) = parse_line(&line, idx + 1)?;
        if documents.insert(doc_id, content).is_some() {
            tracing::debug!(doc_id, line = idx + 1, "duplicate document id, keeping the last one");
        }
    }
    tracing::debug!(num_docs = documents.len(), "loaded documents");
    Ok(documents)
}

pub fn load_documents_from_path<P: AsRef<Path>>(path: P) -> Result<Documents> {
    let f = File::open(path.as_ref())?;
    load_documents(BufReader::new(f))
}

fn parse_line(line: &str, line_no: usize) -> Result<(DocId, String)> {
    let lowered = line.to_lowercase();
    let (id, content) = lowered.split_once('\t').ok_or_else(|| IndexError::InvalidDocument {
        line: line_no,
        reason: "missing tab separator".into(),
    })?;
    let doc_id = id.trim().parse::<DocId>().map_err(|e| IndexError::InvalidDocument {
        line: line_no,
        reason: format!("document id '{}' is not a non-negative integer: {e}", id.trim()),
    })?;
    Ok((doc_id, content.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(text: &str) -> Result<Documents> {
        load_documents(text.as_bytes())
    }

    #[test]
    fn lowercases_and_trims() {
        let docs = load("1\tThis Doc  \n2\t  Два Слова\n").unwrap();
        assert_eq!(docs.get(&1).map(String::as_str), Some("this doc"));
        assert_eq!(docs.get(&2).map(String::as_str), Some("два слова"));
    }

    #[test]
    fn splits_on_first_tab_only() {
        let docs = load("7\tleft\tright\n").unwrap();
        assert_eq!(docs[&7], "left\tright");
    }

    #[test]
    fn missing_tab_is_rejected() {
        let err = load("1\tok\n2 no tab here\n").unwrap_err();
        assert!(matches!(err, IndexError::InvalidDocument { line: 2, .. }));
    }

    #[test]
    fn non_integer_id_is_rejected() {
        assert!(matches!(load("abc\ttext\n"), Err(IndexError::InvalidDocument { line: 1, .. })));
        assert!(matches!(load("-3\ttext\n"), Err(IndexError::InvalidDocument { .. })));
    }

    #[test]
    fn duplicate_id_last_write_wins() {
        let docs = load("1\tfirst\n1\tsecond\n").unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[&1], "second");
    }

    #[test]
    fn non_utf8_line_is_an_input_error() {
        let bytes: &[u8] = b"1\tok\n2\t\xff\xfe\n";
        let err = load_documents(bytes).unwrap_err();
        assert!(matches!(err, IndexError::InvalidDocument { line: 2, .. }));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let docs = load("\n1\ta\n\n2\tb\n").unwrap();
        assert_eq!(docs.len(), 2);
    }
}
