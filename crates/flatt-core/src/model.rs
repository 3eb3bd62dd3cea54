//! The reflection document.
//!
//! Every type here is plain owned data with `serde::Serialize`, so a
//! [`Schema`] can be handed to a template engine as-is. All sequences keep
//! the order of the descriptor; nothing is re-sorted.

use crate::metadata::{Attributes, Documentation};
use crate::types::TypeDescriptor;
use bitflags::bitflags;
use serde::Serialize;

bitflags! {
    /// The `reflection.AdvancedFeatures` bitmask
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FeatureFlags: u64 {
        /// Arrays of structs, nested arrays
        const ADVANCED_ARRAY_FEATURES = 1;
        /// Unions of strings and structs, vectors of unions
        const ADVANCED_UNION_FEATURES = 1 << 1;
        /// Scalars declared `= null`
        const OPTIONAL_SCALARS = 1 << 2;
        /// Non-empty defaults for vectors and strings
        const DEFAULT_VECTORS_AND_STRINGS = 1 << 3;
    }
}

/// Advanced features a consumer must support to handle the schema
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AdvancedFeatures {
    /// Arrays of structs, nested arrays
    pub advanced_array_features: bool,
    /// Unions of strings and structs, vectors of unions
    pub advanced_union_features: bool,
    /// Scalars declared `= null`
    pub optional_scalars: bool,
    /// Non-empty defaults for vectors and strings
    pub default_vectors_and_strings: bool,
}

impl AdvancedFeatures {
    /// Decodes the raw bitmask. Unknown bits are ignored and each flag is
    /// tested on its own.
    pub fn from_bits(bits: u64) -> Self {
        let flags = FeatureFlags::from_bits_truncate(bits);
        Self {
            advanced_array_features: flags.contains(FeatureFlags::ADVANCED_ARRAY_FEATURES),
            advanced_union_features: flags.contains(FeatureFlags::ADVANCED_UNION_FEATURES),
            optional_scalars: flags.contains(FeatureFlags::OPTIONAL_SCALARS),
            default_vectors_and_strings: flags
                .contains(FeatureFlags::DEFAULT_VECTORS_AND_STRINGS),
        }
    }

    /// Returns true if no advanced feature is in use
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Root document produced from one binary schema
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Schema {
    /// `file_identifier`, empty when not declared
    pub file_ident: String,
    /// `file_extension`, empty when not declared
    pub file_ext: String,
    /// Fully-qualified name of the `root_type`, if declared
    pub root_table: Option<String>,
    /// Feature flags
    pub advanced_features: AdvancedFeatures,
    /// Table declarations
    pub tables: Vec<SchemaObject>,
    /// Struct declarations
    pub structs: Vec<SchemaObject>,
    /// Enum and union declarations
    pub enums: Vec<EnumType>,
    /// RPC service declarations
    pub services: Vec<Service>,
    /// Source files and their direct includes
    pub files: Vec<IncludedFile>,
}

impl Schema {
    /// Iterates over tables and structs (tables first)
    pub fn objects(&self) -> impl Iterator<Item = &SchemaObject> {
        self.tables.iter().chain(self.structs.iter())
    }

    /// Looks up a table or struct by fully-qualified name
    pub fn object(&self, qualified_name: &str) -> Option<&SchemaObject> {
        self.objects().find(|o| o.qualified_name() == qualified_name)
    }

    /// Looks up an enum or union by fully-qualified name
    pub fn enumeration(&self, qualified_name: &str) -> Option<&EnumType> {
        self.enums
            .iter()
            .find(|e| e.qualified_name() == qualified_name)
    }
}

fn qualify(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", namespace, name)
    }
}

/// A table or struct
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaObject {
    /// Stable id of the fully-qualified name
    pub id: u32,
    /// Short name
    pub name: String,
    /// Dotted namespace, empty at top level
    pub namespace: String,
    /// Minimum alignment
    pub minalign: i32,
    /// Declaring `.fbs` file
    pub declaration_file: String,
    /// Attributes
    pub attributes: Attributes,
    /// Documentation
    pub documentation: Documentation,
    /// Fields in declaration order
    pub fields: Vec<Field>,
    /// Struct flag
    pub is_struct: bool,
    /// Inline size, structs only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub byte_size: Option<i32>,
}

impl SchemaObject {
    /// `namespace.name`, or just `name` at top level
    pub fn qualified_name(&self) -> String {
        qualify(&self.namespace, &self.name)
    }

    /// Looks up a field by name
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A table or struct field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    /// Author-assigned id; gaps mark deprecated slots
    pub id: u16,
    /// Field name
    pub name: String,
    /// Resolved type
    #[serde(rename = "type")]
    pub type_: TypeDescriptor,
    /// Attributes
    pub attributes: Attributes,
    /// Documentation
    pub documentation: Documentation,
    /// Vtable offset (tables) or byte offset (structs)
    pub offset: u16,
    /// Padding after the field (structs)
    pub padding: u16,
    /// `(key)`
    pub is_key: bool,
    /// `(deprecated)`
    pub is_deprecated: bool,
    /// Optional scalar
    pub is_optional: bool,
    /// `(required)`
    pub is_required: bool,
    /// `(offset64)`
    pub is_offset64: bool,
    /// Integer default
    pub default_integer: i64,
    /// Floating point default
    pub default_float: f64,
}

/// An enum or union
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumType {
    /// Stable id of the fully-qualified name
    pub id: u32,
    /// Short name
    pub name: String,
    /// Dotted namespace, empty at top level
    pub namespace: String,
    /// Declaring `.fbs` file
    pub declaration_file: String,
    /// Underlying integer type
    pub underlying_type: TypeDescriptor,
    /// Attributes
    pub attributes: Attributes,
    /// Documentation
    pub documentation: Documentation,
    /// Union flag
    pub is_union: bool,
    /// Enumerators in declaration order
    pub values: Vec<EnumValue>,
    /// Smallest value, absent without enumerators
    pub min: Option<i64>,
    /// Largest value, absent without enumerators
    pub max: Option<i64>,
    /// `max - min`, absent without enumerators
    pub range: Option<u64>,
    /// Number of enumerators
    pub count: usize,
}

impl EnumType {
    /// `namespace.name`, or just `name` at top level
    pub fn qualified_name(&self) -> String {
        qualify(&self.namespace, &self.name)
    }

    /// Looks up an enumerator by name
    pub fn value(&self, name: &str) -> Option<&EnumValue> {
        self.values.iter().find(|v| v.name == name)
    }
}

/// An enumerator or union variant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumValue {
    /// Enumerator name
    pub name: String,
    /// Integer value
    pub value: i64,
    /// Variant type, unions only
    pub union_type: Option<TypeDescriptor>,
    /// Attributes
    pub attributes: Attributes,
    /// Documentation
    pub documentation: Documentation,
}

/// An RPC service
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Service {
    /// Stable id of the fully-qualified name
    pub id: u32,
    /// Short name
    pub name: String,
    /// Dotted namespace, empty at top level
    pub namespace: String,
    /// Declaring `.fbs` file
    pub declaration_file: String,
    /// Attributes
    pub attributes: Attributes,
    /// Documentation
    pub documentation: Documentation,
    /// Calls in declaration order
    pub calls: Vec<RpcCall>,
}

/// A single RPC method
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RpcCall {
    /// Method name
    pub name: String,
    /// Fully-qualified request table name
    pub request: String,
    /// Fully-qualified response table name
    pub response: String,
    /// Attributes
    pub attributes: Attributes,
    /// Documentation
    pub documentation: Documentation,
}

/// A source file and its direct includes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncludedFile {
    /// Project-relative path
    pub path: String,
    /// Included paths in declaration order
    pub includes: Vec<String>,
}
