//! Schema reflection: binary descriptor in, [`Schema`] document out.
//!
//! ## Architecture
//!
//! The walk is handled by [`Reflector`], which:
//!
//! 1. Validates the buffer with [`SchemaReader`]
//! 2. Indexes object and enum names so type references can be resolved
//! 3. Walks objects, enums and services in declaration order
//! 4. Assembles file metadata, feature flags and provenance
//!
//! The walk is a pure function of the input bytes. It holds no state between
//! calls and can run concurrently on any number of buffers.

mod enums;
mod objects;
mod services;

use crate::error::{Error, Result};
use crate::model::{AdvancedFeatures, IncludedFile, Schema};
use crate::reader::reflection::{self, Enum, Object};
use crate::reader::{required, RawType, ReaderConfig, SchemaReader};
use crate::types::TypeDescriptor;
use flatbuffers::{ForwardsUOffset, Vector};
use std::path::Path;
use tracing::debug;

pub use enums::EnumStats;

/// Configuration for reflection
#[derive(Debug, Clone, Default)]
pub struct ReflectorConfig {
    /// Reject buffers without the `BFBS` file identifier
    pub require_identifier: bool,
    /// Omit RPC services from the document
    pub skip_services: bool,
}

impl ReflectorConfig {
    /// Creates a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the `BFBS` identifier is mandatory
    pub fn require_identifier(mut self, require: bool) -> Self {
        self.require_identifier = require;
        self
    }

    /// Sets whether services are skipped
    pub fn skip_services(mut self, skip: bool) -> Self {
        self.skip_services = skip;
        self
    }
}

/// Turns binary schemas into [`Schema`] documents
#[derive(Debug, Clone, Default)]
pub struct Reflector {
    config: ReflectorConfig,
}

impl Reflector {
    /// Creates a new reflector with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new reflector with custom configuration
    pub fn with_config(config: ReflectorConfig) -> Self {
        Self { config }
    }

    /// Reflects over a binary schema buffer
    pub fn reflect(&self, data: &[u8]) -> Result<Schema> {
        let reader_config = ReaderConfig::new().require_identifier(self.config.require_identifier);
        let reader = SchemaReader::with_config(data, &reader_config)?;
        let view = reader.schema();

        let object_list = required(view.objects(), "Schema", "objects")?;
        let enum_list = required(view.enums(), "Schema", "enums")?;
        let ctx = Context::index(object_list, enum_list)?;

        let buckets = objects::walk_objects(&ctx, object_list)?;
        let enums = enums::walk_enums(&ctx, enum_list)?;
        let services = match (self.config.skip_services, view.services()) {
            (false, Some(list)) => services::walk_services(list)?,
            _ => Vec::new(),
        };

        let schema = Schema {
            file_ident: view.file_ident().unwrap_or_default().to_string(),
            file_ext: view.file_ext().unwrap_or_default().to_string(),
            root_table: view
                .root_table()
                .map(|root| required(root.name(), "Object", "name").map(str::to_string))
                .transpose()?,
            advanced_features: AdvancedFeatures::from_bits(view.advanced_features()),
            tables: buckets.tables,
            structs: buckets.structs,
            enums,
            services,
            files: collect_files(&view),
        };

        debug!(
            "Reflected {} tables, {} structs, {} enums, {} services from {} bytes",
            schema.tables.len(),
            schema.structs.len(),
            schema.enums.len(),
            schema.services.len(),
            data.len()
        );
        Ok(schema)
    }

    /// Reads a file and reflects over its contents
    pub fn reflect_file(&self, path: impl AsRef<Path>) -> Result<Schema> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| Error::file_read(path, e))?;
        self.reflect(&data)
    }
}

/// Reflects over a binary schema with the default configuration
pub fn parse(data: &[u8]) -> Result<Schema> {
    Reflector::new().reflect(data)
}

/// Reads a `.bfbs` file and reflects over it
pub fn parse_file(path: impl AsRef<Path>) -> Result<Schema> {
    Reflector::new().reflect_file(path)
}

/// Name tables used to resolve type indices during the walk
struct Context<'a> {
    objects: Vec<&'a str>,
    enums: Vec<&'a str>,
}

impl<'a> Context<'a> {
    fn index(
        objects: Vector<'a, ForwardsUOffset<Object<'a>>>,
        enums: Vector<'a, ForwardsUOffset<Enum<'a>>>,
    ) -> Result<Self> {
        let objects = objects
            .iter()
            .map(|object| required(object.name(), "Object", "name"))
            .collect::<Result<Vec<_>>>()?;
        let enums = enums
            .iter()
            .map(|e| required(e.name(), "Enum", "name"))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { objects, enums })
    }

    /// Classifies a type and resolves its index to a qualified name
    fn describe(&self, ty: reflection::Type<'_>) -> Result<TypeDescriptor> {
        let mut descriptor = TypeDescriptor::classify(&RawType::from(ty))?;
        if descriptor.index >= 0 {
            let table = if descriptor.references_object() {
                &self.objects
            } else {
                &self.enums
            };
            let name = table.get(descriptor.index as usize).ok_or_else(|| {
                Error::corrupt_schema(
                    ty._tab.loc(),
                    format!(
                        "type index {} out of range ({} {})",
                        descriptor.index,
                        table.len(),
                        if descriptor.references_object() { "objects" } else { "enums" }
                    ),
                )
            })?;
            descriptor.reference = Some(name.to_string());
        }
        Ok(descriptor)
    }
}

/// Collects source files with a recorded path; others are skipped
fn collect_files(view: &reflection::Schema<'_>) -> Vec<IncludedFile> {
    let Some(list) = view.fbs_files() else {
        return Vec::new();
    };

    list.iter()
        .filter_map(|file| {
            let path = file.filename()?;
            let includes = file
                .included_filenames()
                .map(|list| list.iter().map(str::to_string).collect())
                .unwrap_or_default();
            Some(IncludedFile {
                path: path.to_string(),
                includes,
            })
        })
        .collect()
}
