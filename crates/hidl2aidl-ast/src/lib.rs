//! Source model for the hidl2aidl translator.
//!
//! This crate provides the read-only HIDL model the translator consumes:
//! - Fully-qualified names (`FqName`) with their package version
//! - Type nodes (`TypeRef`, `PrimitiveKind`)
//! - Declarations (`Declaration`, `Interface`, `Method`, `CompoundType`)
//! - Doc comments with provenance (`DocComment`, `Location`)
//! - The declaration arena (`Ast`, `DeclId`) and its builder (`AstBuilder`)
//!
//! The model is constructed once, then shared immutably by every consumer.

pub mod fq_name;
pub use fq_name::{BASE_INTERFACE, FqName, FqNameError};

pub mod doc_comment;
pub use doc_comment::{DocComment, Location};

pub mod types;
pub use types::{PrimitiveKind, TypeRef, UnknownPrimitive};

pub mod decl;
pub use decl::{CompoundKind, CompoundType, DeclKind, Declaration, Field, Interface, Method, NamedRef};

pub mod arena;
pub use arena::{Ast, DeclId};

pub mod builder;
pub use builder::{AstBuilder, BuildError};
