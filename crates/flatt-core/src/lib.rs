//! # flatt-core
//!
//! A library for turning compiled FlatBuffers schemas (`.bfbs`) into an
//! ordered, serializable document for code generators.
//!
//! This crate provides the core functionality for:
//! - Reading binary schemas through verified `reflection.fbs` bindings
//! - Classifying the 19 FlatBuffers base types
//! - Walking tables, structs, enums, unions and services in declaration order
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`reader`]: Buffer verification and the reflection bindings
//! - [`types`]: Base type classification
//! - [`metadata`]: Attributes and documentation
//! - [`reflect`]: The walkers and the schema assembler
//! - [`model`]: The output document
//! - [`visit`]: Document traversal
//! - [`error`]: Error types and handling
//!
//! ## Example
//!
//! ```no_run
//! use std::fs;
//!
//! // Compiled with `flatc --binary --schema --bfbs-comments monster.fbs`
//! let data = fs::read("monster.bfbs")?;
//! let schema = flatt_core::parse(&data)?;
//!
//! for table in &schema.tables {
//!     println!("{} ({} fields)", table.qualified_name(), table.fields.len());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Extensibility
//!
//! - [`SchemaVisitor`]: Walk a finished document without serializing it
//!

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unreachable_pub)]

pub mod error;
pub mod metadata;
pub mod model;
pub mod naming;
pub mod reader;
pub mod reflect;
pub mod types;
pub mod visit;

#[cfg(test)]
mod testing;

// Re-export primary types for convenience
pub use error::{Error, Result};
pub use metadata::{Attributes, Documentation};
pub use model::{
    AdvancedFeatures, EnumType, EnumValue, Field, IncludedFile, RpcCall, Schema, SchemaObject,
    Service,
};
pub use naming::stable_id;
pub use reflect::{parse, parse_file, Reflector, ReflectorConfig};
pub use types::{BaseType, TypeDescriptor};
pub use visit::{NullVisitor, SchemaVisitor, StatsVisitor};

/// Crate version for programmatic access
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
