//! Extensible document traversal.
//!
//! This module provides the [`SchemaVisitor`] trait for consumers that walk a
//! finished [`Schema`] instead of serializing it, e.g. to collect statistics
//! or drive a hand-written generator.

use crate::model::{EnumType, EnumValue, Field, IncludedFile, RpcCall, Schema, SchemaObject, Service};

/// Trait for visiting the elements of a [`Schema`].
///
/// Every hook has an empty default, so implementors only override what
/// they need. [`Schema::accept`] calls the hooks in document order: tables,
/// structs, enums, services, then files. Children are visited right after
/// their parent.
///
/// # Example
///
/// ```
/// use flatt_core::{Schema, SchemaObject, SchemaVisitor};
///
/// struct TableNames(Vec<String>);
///
/// impl SchemaVisitor for TableNames {
///     fn visit_table(&mut self, table: &SchemaObject) {
///         self.0.push(table.qualified_name());
///     }
/// }
///
/// let mut names = TableNames(Vec::new());
/// Schema::default().accept(&mut names);
/// assert!(names.0.is_empty());
/// ```
pub trait SchemaVisitor {
    /// Visit a table declaration
    fn visit_table(&mut self, table: &SchemaObject) {
        let _ = table;
    }

    /// Visit a struct declaration
    fn visit_struct(&mut self, structure: &SchemaObject) {
        let _ = structure;
    }

    /// Visit a field of a table or struct
    fn visit_field(&mut self, owner: &SchemaObject, field: &Field) {
        let _ = (owner, field);
    }

    /// Visit an enum or union declaration
    fn visit_enum(&mut self, enum_type: &EnumType) {
        let _ = enum_type;
    }

    /// Visit an enumerator or union variant
    fn visit_enum_value(&mut self, owner: &EnumType, value: &EnumValue) {
        let _ = (owner, value);
    }

    /// Visit a service declaration
    fn visit_service(&mut self, service: &Service) {
        let _ = service;
    }

    /// Visit an RPC call
    fn visit_call(&mut self, owner: &Service, call: &RpcCall) {
        let _ = (owner, call);
    }

    /// Visit a source file entry
    fn visit_file(&mut self, file: &IncludedFile) {
        let _ = file;
    }
}

impl Schema {
    /// Walks the document, calling the visitor's hooks in document order
    pub fn accept<V: SchemaVisitor + ?Sized>(&self, visitor: &mut V) {
        for table in &self.tables {
            visitor.visit_table(table);
            for field in &table.fields {
                visitor.visit_field(table, field);
            }
        }
        for structure in &self.structs {
            visitor.visit_struct(structure);
            for field in &structure.fields {
                visitor.visit_field(structure, field);
            }
        }
        for enum_type in &self.enums {
            visitor.visit_enum(enum_type);
            for value in &enum_type.values {
                visitor.visit_enum_value(enum_type, value);
            }
        }
        for service in &self.services {
            visitor.visit_service(service);
            for call in &service.calls {
                visitor.visit_call(service, call);
            }
        }
        for file in &self.files {
            visitor.visit_file(file);
        }
    }
}

/// A no-op visitor
pub struct NullVisitor;

impl SchemaVisitor for NullVisitor {}

/// A visitor that collects statistics about the schema
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StatsVisitor {
    /// Number of tables
    pub table_count: usize,
    /// Number of structs
    pub struct_count: usize,
    /// Number of fields across tables and structs
    pub field_count: usize,
    /// Number of deprecated fields
    pub deprecated_count: usize,
    /// Number of plain enums
    pub enum_count: usize,
    /// Number of unions
    pub union_count: usize,
    /// Number of enumerators and union variants
    pub value_count: usize,
    /// Number of services
    pub service_count: usize,
    /// Number of RPC calls
    pub call_count: usize,
    /// Number of source files
    pub file_count: usize,
}

impl SchemaVisitor for StatsVisitor {
    fn visit_table(&mut self, _table: &SchemaObject) {
        self.table_count += 1;
    }

    fn visit_struct(&mut self, _structure: &SchemaObject) {
        self.struct_count += 1;
    }

    fn visit_field(&mut self, _owner: &SchemaObject, field: &Field) {
        self.field_count += 1;
        if field.is_deprecated {
            self.deprecated_count += 1;
        }
    }

    fn visit_enum(&mut self, enum_type: &EnumType) {
        if enum_type.is_union {
            self.union_count += 1;
        } else {
            self.enum_count += 1;
        }
    }

    fn visit_enum_value(&mut self, _owner: &EnumType, _value: &EnumValue) {
        self.value_count += 1;
    }

    fn visit_service(&mut self, _service: &Service) {
        self.service_count += 1;
    }

    fn visit_call(&mut self, _owner: &Service, _call: &RpcCall) {
        self.call_count += 1;
    }

    fn visit_file(&mut self, _file: &IncludedFile) {
        self.file_count += 1;
    }
}

impl StatsVisitor {
    /// Collects statistics for a schema
    pub fn collect(schema: &Schema) -> Self {
        let mut stats = Self::default();
        schema.accept(&mut stats);
        stats
    }
}
