//! Command-line driver for hidl2aidl.
//!
//! Loads JSON package models, expands the requested targets and runs the
//! translation engine over them, writing `.aidl` files and a conversion log.

pub mod args;
pub mod config;
pub mod coordinator;
pub mod driver;
pub mod output;
pub mod tracing_config;
