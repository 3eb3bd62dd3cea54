//! Error types for the flatt-core library.
//!
//! Every failure the walker can report is a variant of [`Error`]. Optional
//! sections of a descriptor that are simply absent never produce an error.

use flatbuffers::{ErrorTraceDetail, InvalidFlatbuffer};
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for flatt operations
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error type for all flatt operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Failed to read input file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        /// Path to the file that failed to read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The buffer is not a well-formed binary schema
    #[error("corrupt schema at offset {offset}: {details}")]
    CorruptSchema {
        /// Byte offset where the problem was detected
        offset: usize,
        /// Detailed description of the issue
        details: String,
    },

    /// A base-type code outside the known set, usually a format version skew
    #[error("unknown base type code {code}: descriptor was produced by an incompatible compiler")]
    UnknownBaseType {
        /// The unrecognized code
        code: i8,
    },

    /// A reference the format guarantees to be present is null
    #[error("missing required field '{field}' in {table}")]
    MissingRequiredField {
        /// Name of the reflection table being read
        table: &'static str,
        /// Name of the absent field
        field: &'static str,
    },
}

impl Error {
    /// Creates a new file read error
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Creates a new corrupt schema error
    pub fn corrupt_schema(offset: usize, details: impl Into<String>) -> Self {
        Self::CorruptSchema {
            offset,
            details: details.into(),
        }
    }

    /// Creates a new unknown base type error
    pub fn unknown_base_type(code: i8) -> Self {
        Self::UnknownBaseType { code }
    }

    /// Creates a new missing field error
    pub fn missing_field(table: &'static str, field: &'static str) -> Self {
        Self::MissingRequiredField { table, field }
    }

    /// Returns true if the error concerns a single descriptor's contents,
    /// so a batch caller may skip that descriptor and carry on
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::CorruptSchema { .. }
                | Self::UnknownBaseType { .. }
                | Self::MissingRequiredField { .. }
        )
    }
}

impl From<InvalidFlatbuffer> for Error {
    fn from(err: InvalidFlatbuffer) -> Self {
        let (offset, trace): (usize, &[ErrorTraceDetail]) = match &err {
            InvalidFlatbuffer::Utf8Error {
                range, error_trace, ..
            }
            | InvalidFlatbuffer::MissingNullTerminator { range, error_trace }
            | InvalidFlatbuffer::RangeOutOfBounds { range, error_trace } => {
                (range.start, error_trace.as_ref())
            }
            InvalidFlatbuffer::Unaligned {
                position,
                error_trace,
                ..
            }
            | InvalidFlatbuffer::SignedOffsetOutOfBounds {
                position,
                error_trace,
                ..
            } => (*position, error_trace.as_ref()),
            InvalidFlatbuffer::MissingRequiredField { error_trace, .. }
            | InvalidFlatbuffer::InconsistentUnion { error_trace, .. } => {
                let trace: &[ErrorTraceDetail] = error_trace.as_ref();
                (trace.first().map_or(0, trace_position), trace)
            }
            InvalidFlatbuffer::TooManyTables
            | InvalidFlatbuffer::ApparentSizeTooLarge
            | InvalidFlatbuffer::DepthLimitReached => (0, <&[ErrorTraceDetail]>::default()),
        };

        // The verifier's own message spans several lines; keep the headline
        // and render the trace as a path from the root.
        let rendered = err.to_string();
        let headline = rendered.lines().next().unwrap_or_default().trim_end_matches('.');
        let details = if trace.is_empty() {
            headline.to_string()
        } else {
            format!("{} (at {})", headline, trace_path(trace))
        };
        Self::corrupt_schema(offset, details)
    }
}

fn trace_position(detail: &ErrorTraceDetail) -> usize {
    match detail {
        ErrorTraceDetail::VectorElement { position, .. }
        | ErrorTraceDetail::TableField { position, .. }
        | ErrorTraceDetail::UnionVariant { position, .. } => *position,
    }
}

/// Renders a verifier trace, innermost first, as `root.objects[2].name`
fn trace_path(trace: &[ErrorTraceDetail]) -> String {
    let mut path = String::from("root");
    for detail in trace.iter().rev() {
        match detail {
            ErrorTraceDetail::VectorElement { index, .. } => path.push_str(&format!("[{}]", index)),
            ErrorTraceDetail::TableField { field_name, .. } => {
                path.push('.');
                path.push_str(field_name);
            }
            ErrorTraceDetail::UnionVariant { variant, .. } => {
                path.push('.');
                path.push_str(variant);
            }
        }
    }
    path
}
