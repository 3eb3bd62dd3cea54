//! Table and struct declarations.

use super::Context;
use crate::error::Result;
use crate::metadata::{extract_attributes, extract_documentation};
use crate::model::{Field, SchemaObject};
use crate::naming::{split_qualified, stable_id};
use crate::reader::reflection::{self, Object};
use crate::reader::required;
use flatbuffers::{ForwardsUOffset, Vector};
use tracing::trace;

/// Objects routed by their struct flag, each bucket in declaration order
#[derive(Debug, Default)]
pub(super) struct ObjectBuckets {
    pub(super) tables: Vec<SchemaObject>,
    pub(super) structs: Vec<SchemaObject>,
}

pub(super) fn walk_objects(
    ctx: &Context<'_>,
    list: Vector<'_, ForwardsUOffset<Object<'_>>>,
) -> Result<ObjectBuckets> {
    let mut buckets = ObjectBuckets::default();

    for view in list {
        let object = walk_object(ctx, view)?;
        if object.is_struct {
            buckets.structs.push(object);
        } else {
            buckets.tables.push(object);
        }
    }

    Ok(buckets)
}

fn walk_object(ctx: &Context<'_>, view: Object<'_>) -> Result<SchemaObject> {
    let qualified = required(view.name(), "Object", "name")?;
    let (namespace, name) = split_qualified(qualified);
    let is_struct = view.is_struct();

    let fields = match view.fields() {
        Some(list) => list
            .iter()
            .map(|field| walk_field(ctx, field))
            .collect::<Result<Vec<_>>>()?,
        None => Vec::new(),
    };
    trace!("Object {} with {} fields", qualified, fields.len());

    Ok(SchemaObject {
        id: stable_id(qualified),
        name: name.to_string(),
        namespace: namespace.to_string(),
        minalign: view.minalign(),
        declaration_file: view.declaration_file().unwrap_or_default().to_string(),
        attributes: extract_attributes(view.attributes())?,
        documentation: extract_documentation(view.documentation()),
        fields,
        is_struct,
        byte_size: is_struct.then(|| view.bytesize()),
    })
}

fn walk_field(ctx: &Context<'_>, view: reflection::Field<'_>) -> Result<Field> {
    Ok(Field {
        id: view.id(),
        name: required(view.name(), "Field", "name")?.to_string(),
        type_: ctx.describe(required(view.type_(), "Field", "type")?)?,
        attributes: extract_attributes(view.attributes())?,
        documentation: extract_documentation(view.documentation()),
        offset: view.offset(),
        padding: view.padding(),
        is_key: view.key(),
        is_deprecated: view.deprecated(),
        is_optional: view.optional(),
        is_required: view.required(),
        is_offset64: view.offset64(),
        default_integer: view.default_integer(),
        default_float: view.default_real(),
    })
}
