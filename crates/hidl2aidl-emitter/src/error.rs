use std::io;
use std::path::PathBuf;

use hidl2aidl_ast::FqName;

/// Failures while handing emitted text to its collaborators.
///
/// Translation itself cannot fail; only output sinks can.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("failed to write {path} for {fq_name}")]
    Output {
        fq_name: FqName,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write conversion notes")]
    Notes(#[source] io::Error),
}
