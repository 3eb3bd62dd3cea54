//! Base type classification.
//!
//! FlatBuffers tags every field, enum and vector element with one of 19 base
//! types. [`BaseType`] is that closed set; codes outside it fail with
//! [`Error::UnknownBaseType`] instead of degrading to a placeholder, since an
//! unknown code means the descriptor came from a newer compiler.

use crate::error::{Error, Result};
use crate::naming::stable_id;
use crate::reader::RawType;
use serde::Serialize;

/// The fixed set of FlatBuffers base types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum BaseType {
    /// No type (union `NONE` member)
    None = 0,
    /// Union discriminant
    UType = 1,
    /// Boolean
    Bool = 2,
    /// Signed 8-bit integer
    Byte = 3,
    /// Unsigned 8-bit integer
    UByte = 4,
    /// Signed 16-bit integer
    Short = 5,
    /// Unsigned 16-bit integer
    UShort = 6,
    /// Signed 32-bit integer
    Int = 7,
    /// Unsigned 32-bit integer
    UInt = 8,
    /// Signed 64-bit integer
    Long = 9,
    /// Unsigned 64-bit integer
    ULong = 10,
    /// 32-bit float
    Float = 11,
    /// 64-bit float
    Double = 12,
    /// UTF-8 string
    String = 13,
    /// Vector with 32-bit length
    Vector = 14,
    /// Table or struct
    Obj = 15,
    /// Union value
    Union = 16,
    /// Fixed-length array (structs only)
    Array = 17,
    /// Vector with 64-bit offsets
    Vector64 = 18,
}

impl BaseType {
    /// Number of recognized base types
    pub const COUNT: usize = 19;

    /// Every base type, in code order
    pub const ALL: [BaseType; Self::COUNT] = [
        BaseType::None,
        BaseType::UType,
        BaseType::Bool,
        BaseType::Byte,
        BaseType::UByte,
        BaseType::Short,
        BaseType::UShort,
        BaseType::Int,
        BaseType::UInt,
        BaseType::Long,
        BaseType::ULong,
        BaseType::Float,
        BaseType::Double,
        BaseType::String,
        BaseType::Vector,
        BaseType::Obj,
        BaseType::Union,
        BaseType::Array,
        BaseType::Vector64,
    ];

    /// Canonical lowercase name
    pub const fn name(self) -> &'static str {
        match self {
            BaseType::None => "none",
            BaseType::UType => "utype",
            BaseType::Bool => "bool",
            BaseType::Byte => "byte",
            BaseType::UByte => "ubyte",
            BaseType::Short => "short",
            BaseType::UShort => "ushort",
            BaseType::Int => "int",
            BaseType::UInt => "uint",
            BaseType::Long => "long",
            BaseType::ULong => "ulong",
            BaseType::Float => "float",
            BaseType::Double => "double",
            BaseType::String => "string",
            BaseType::Vector => "vector",
            BaseType::Obj => "obj",
            BaseType::Union => "union",
            BaseType::Array => "array",
            BaseType::Vector64 => "vector64",
        }
    }

    /// Inline size in bytes as the schema compiler records it. `none` takes
    /// one byte, as the union discriminant does, and an array records 4.
    pub const fn size(self) -> u32 {
        match self {
            BaseType::None | BaseType::UType | BaseType::Bool => 1,
            BaseType::Byte | BaseType::UByte => 1,
            BaseType::Short | BaseType::UShort => 2,
            BaseType::Int | BaseType::UInt | BaseType::Float => 4,
            BaseType::String | BaseType::Vector | BaseType::Obj | BaseType::Union => 4,
            BaseType::Array => 4,
            BaseType::Long | BaseType::ULong | BaseType::Double | BaseType::Vector64 => 8,
        }
    }

    /// Returns true for the kinds that carry an element type
    pub const fn is_vector_like(self) -> bool {
        matches!(self, BaseType::Vector | BaseType::Array | BaseType::Vector64)
    }

    /// Returns true for integer, float and bool kinds (including `utype`)
    pub const fn is_scalar(self) -> bool {
        (self as i8) >= (BaseType::UType as i8) && (self as i8) <= (BaseType::Double as i8)
    }
}

impl TryFrom<i8> for BaseType {
    type Error = Error;

    fn try_from(code: i8) -> Result<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| Error::unknown_base_type(code))
    }
}

impl std::fmt::Display for BaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Fully resolved description of a field, enum or union-variant type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeDescriptor {
    /// Stable id of the base type name
    pub id: u32,
    /// Index into the objects (for `obj`) or enums table, -1 when none
    pub index: i32,
    /// Canonical base type name
    pub name: &'static str,
    /// Inline size in bytes
    pub size: u32,
    /// Length of a fixed-size array, 0 otherwise
    pub fixed_length: u16,
    /// Element type name, vector-like kinds only
    pub element_type: Option<&'static str>,
    /// Element size in bytes, vector-like kinds only
    pub element_size: Option<u32>,
    /// Fully-qualified name of the object or enum `index` points at
    pub reference: Option<String>,
    #[serde(skip)]
    base_type: BaseType,
    #[serde(skip)]
    element: Option<BaseType>,
}

impl TypeDescriptor {
    /// Classifies the raw type slots. `reference` is left unresolved.
    ///
    /// Sizes are taken as read: an absent `base_size` slot already reads as
    /// 4 and an absent `element_size` as 0, the schema defaults.
    pub fn classify(raw: &RawType) -> Result<Self> {
        let base_type = BaseType::try_from(raw.base_type)?;

        let element = if base_type.is_vector_like() {
            Some(BaseType::try_from(raw.element)?)
        } else {
            None
        };

        Ok(Self {
            id: stable_id(base_type.name()),
            index: raw.index,
            name: base_type.name(),
            size: raw.base_size,
            fixed_length: raw.fixed_length,
            element_type: element.map(BaseType::name),
            element_size: element.map(|_| raw.element_size),
            reference: None,
            base_type,
            element,
        })
    }

    /// The classified base type
    pub fn base_type(&self) -> BaseType {
        self.base_type
    }

    /// The classified element type, vector-like kinds only
    pub fn element(&self) -> Option<BaseType> {
        self.element
    }

    /// Returns true if `index` points into the objects table rather than
    /// the enums table
    pub fn references_object(&self) -> bool {
        self.base_type == BaseType::Obj || self.element == Some(BaseType::Obj)
    }
}
