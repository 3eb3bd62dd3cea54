//! Verified access to compiled FlatBuffers schemas.
//!
//! A `.bfbs` file is itself a FlatBuffer whose root table is
//! `reflection.Schema`. [`SchemaReader`] runs the `flatbuffers` verifier over
//! the whole buffer once, then hands out the [`reflection`] bindings, whose
//! accessors cannot fail. Verifier failures surface as
//! [`Error::CorruptSchema`] with the offending byte offset.
//!
//! Pointers the reflection schema declares `required` are `Option` below the
//! root table. [`required`] turns a null one into
//! [`Error::MissingRequiredField`] naming the table and field.

mod reflection_generated;

pub use reflection_generated::reflection;

use crate::error::{Error, Result};
use flatbuffers::{VerifierOptions, FILE_IDENTIFIER_LENGTH, FLATBUFFERS_MAX_BUFFER_SIZE, SIZE_UOFFSET};
use tracing::trace;

/// File identifier written by `flatc` into binary schemas
pub const SCHEMA_IDENTIFIER: &str = "BFBS";

/// Configuration for the reader
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Reject buffers that do not carry the `BFBS` file identifier
    pub require_identifier: bool,
    /// Deepest table nesting the verifier accepts
    pub max_depth: usize,
    /// Most tables the verifier visits before giving up
    pub max_tables: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        let opts = VerifierOptions::default();
        Self {
            require_identifier: false,
            max_depth: opts.max_depth,
            max_tables: opts.max_tables,
        }
    }
}

impl ReaderConfig {
    /// Creates a new reader config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the `BFBS` identifier is mandatory
    pub fn require_identifier(mut self, require: bool) -> Self {
        self.require_identifier = require;
        self
    }

    /// Sets the maximum table nesting depth
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Sets the maximum number of tables
    pub fn max_tables(mut self, tables: usize) -> Self {
        self.max_tables = tables;
        self
    }

    fn verifier_options(&self) -> VerifierOptions {
        VerifierOptions {
            max_depth: self.max_depth,
            max_tables: self.max_tables,
            ..VerifierOptions::default()
        }
    }
}

/// Verified entry point over a binary schema buffer
#[derive(Debug, Clone, Copy)]
pub struct SchemaReader<'a> {
    len: usize,
    root: reflection::Schema<'a>,
}

impl<'a> SchemaReader<'a> {
    /// Verifies the buffer with the default configuration
    pub fn new(data: &'a [u8]) -> Result<Self> {
        Self::with_config(data, &ReaderConfig::default())
    }

    /// Verifies the buffer and decodes the root table
    pub fn with_config(data: &'a [u8], config: &ReaderConfig) -> Result<Self> {
        if data.len() > FLATBUFFERS_MAX_BUFFER_SIZE {
            return Err(Error::corrupt_schema(
                0,
                format!("buffer of {} bytes exceeds format limit", data.len()),
            ));
        }
        if config.require_identifier && !has_identifier(data) {
            return Err(Error::corrupt_schema(SIZE_UOFFSET, "missing BFBS file identifier"));
        }

        let root = flatbuffers::root_with_opts::<reflection::Schema<'a>>(
            &config.verifier_options(),
            data,
        )?;

        trace!("Verified schema root at {} ({} bytes)", root._tab.loc(), data.len());
        Ok(Self {
            len: data.len(),
            root,
        })
    }

    /// Returns the root schema table
    pub fn schema(&self) -> reflection::Schema<'a> {
        self.root
    }

    /// Returns the size of the underlying buffer
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the underlying buffer is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Returns true if the buffer carries the `BFBS` identifier at bytes 4..8
pub fn has_identifier(data: &[u8]) -> bool {
    data.len() >= SIZE_UOFFSET + FILE_IDENTIFIER_LENGTH
        && flatbuffers::buffer_has_identifier(data, SCHEMA_IDENTIFIER, false)
}

/// Unwraps a pointer the reflection schema declares `required`
pub fn required<T>(value: Option<T>, table: &'static str, field: &'static str) -> Result<T> {
    value.ok_or_else(|| Error::missing_field(table, field))
}

/// Raw contents of a `reflection.Type` table, schema defaults applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawType {
    /// Base type code
    pub base_type: i8,
    /// Element type code
    pub element: i8,
    /// Object or enum index, -1 when none
    pub index: i32,
    /// Fixed array length
    pub fixed_length: u16,
    /// Inline size in bytes
    pub base_size: u32,
    /// Element size in bytes, 0 for non-vector kinds
    pub element_size: u32,
}

impl From<reflection::Type<'_>> for RawType {
    fn from(ty: reflection::Type<'_>) -> Self {
        Self {
            base_type: ty.base_type(),
            element: ty.element(),
            index: ty.index(),
            fixed_length: ty.fixed_length(),
            base_size: ty.base_size(),
            element_size: ty.element_size(),
        }
    }
}
