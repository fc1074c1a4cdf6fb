//! Doc-Comment Synchronizer.
//!
//! Rewrites `@return <name> ...` lines after the result transformer has
//! reshaped a method's signature:
//!
//! ```text
//! @return value the total      (Moved)    -> @return the total
//! @return status the outcome   (Removed)  -> The following return was removed
//!                                            @return status the outcome
//! @return extra more data      (kept)     -> @param out extra more data
//! ```

use hidl2aidl_ast::{DocComment, Location};

use crate::result_transform::{ResultTransformation, TransformKind};

const REMOVED_NOTE: &str = "The following return was removed\n";

/// Produce the doc comment to emit ahead of the translated method.
///
/// The rewritten text is re-parsed as a fresh comment with generated
/// provenance.
pub fn sync_doc_comment(doc: &DocComment, transformations: &[ResultTransformation]) -> DocComment {
    let mut rewritten = Vec::with_capacity(doc.lines().len());

    for line in doc.lines() {
        let mut tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() <= 1 || tokens[0] != "@return" {
            rewritten.push(line.clone());
            continue;
        }

        let result_name = tokens[1];
        let kind = transformations
            .iter()
            .find(|t| t.result_name == result_name)
            .map(|t| t.kind);
        match kind {
            Some(TransformKind::Moved) => {
                tokens.remove(1);
            }
            Some(TransformKind::Removed) => {
                tokens.insert(0, REMOVED_NOTE);
            }
            None => {
                tokens[0] = "@param out";
            }
        }
        rewritten.push(tokens.join(" "));
    }

    DocComment::parse(&rewritten.join("\n"), Location::generated())
}
