//! HIDL-to-AIDL translation engine.
//!
//! Translation of one declaration runs leaf-first through:
//! - `type_mapper`: HIDL type nodes to AIDL type syntax
//! - `names`: AIDL package/type names and per-file import sets
//! - `method_merger`: flattening an inheritance chain by version suffix
//! - `result_transform`: out-parameters to return values
//! - `doc_sync`: keeping `@return` annotations in step with the signature
//! - `wrapped_printer`: width-bounded, parameter-atomic line wrapping
//! - `file_emitter`: one `.aidl` output unit per declaration
//!
//! The engine never mutates the `Ast`; all derived state is local to one
//! declaration's emission.

pub mod options;
pub use options::EmitOptions;

pub mod error;
pub use error::EmitError;

pub mod source_writer;
pub use source_writer::SourceWriter;

pub mod wrapped_printer;
pub use wrapped_printer::WrappedLinePrinter;

pub mod names;
pub use names::{ImportSet, aidl_fq_name, aidl_name, aidl_package, aidl_relative_path};

pub mod type_mapper;
pub use type_mapper::TypeMapper;

pub mod method_merger;
pub use method_merger::{MergeResult, MergedMethod, VersionSuffix, merge_methods};

pub mod result_transform;
pub use result_transform::{ResultTransformation, SignaturePlan, TransformKind};

pub mod doc_sync;
pub use doc_sync::sync_doc_comment;

pub mod output;
pub use output::{MemoryOutput, OutputProvider};

pub mod file_emitter;
pub use file_emitter::AidlEmitter;
