//! Fixture builder for binary schemas.
//!
//! Describes a schema declaratively and encodes it with the `flatbuffers`
//! builder using the `reflection.fbs` slot layout, so tests exercise the
//! reader on buffers laid out exactly as a real builder lays them out.

use crate::types::BaseType;
use flatbuffers::{FlatBufferBuilder, UnionWIPOffset, WIPOffset};

type Off = WIPOffset<UnionWIPOffset>;

#[derive(Debug, Clone)]
pub(crate) struct TypeSpec {
    pub base_type: i8,
    pub element: i8,
    pub index: i32,
    pub fixed_length: u16,
    pub base_size: u32,
    pub element_size: u32,
}

fn intrinsic(code: i8) -> u32 {
    BaseType::try_from(code).map(BaseType::size).unwrap_or(4)
}

impl TypeSpec {
    pub fn scalar(code: i8) -> Self {
        Self {
            base_type: code,
            element: 0,
            index: -1,
            fixed_length: 0,
            base_size: intrinsic(code),
            element_size: 0,
        }
    }

    pub fn string() -> Self {
        Self::scalar(BaseType::String as i8)
    }

    pub fn vector(element: i8) -> Self {
        Self {
            element,
            element_size: intrinsic(element),
            ..Self::scalar(BaseType::Vector as i8)
        }
    }

    pub fn array(element: i8, fixed_length: u16) -> Self {
        Self {
            element,
            fixed_length,
            element_size: intrinsic(element),
            ..Self::scalar(BaseType::Array as i8)
        }
    }

    pub fn object(index: i32) -> Self {
        Self {
            index,
            ..Self::scalar(BaseType::Obj as i8)
        }
    }

    pub fn indexed(mut self, index: i32) -> Self {
        self.index = index;
        self
    }

    /// Overrides the recorded sizes, e.g. for struct elements
    pub fn sized(mut self, base_size: u32, element_size: u32) -> Self {
        self.base_size = base_size;
        self.element_size = element_size;
        self
    }
}

#[derive(Debug, Clone)]
pub(crate) struct FieldSpec {
    pub name: Option<&'static str>,
    pub ty: Option<TypeSpec>,
    pub id: u16,
    pub offset: u16,
    pub padding: u16,
    pub default_integer: i64,
    pub default_real: f64,
    pub deprecated: bool,
    pub required: bool,
    pub key: bool,
    pub optional: bool,
    pub offset64: bool,
    pub attributes: Vec<(&'static str, Option<&'static str>)>,
    pub documentation: Vec<&'static str>,
}

impl FieldSpec {
    pub fn new(name: &'static str, ty: TypeSpec) -> Self {
        Self {
            name: Some(name),
            ty: Some(ty),
            id: 0,
            offset: 0,
            padding: 0,
            default_integer: 0,
            default_real: 0.0,
            deprecated: false,
            required: false,
            key: false,
            optional: false,
            offset64: false,
            attributes: Vec::new(),
            documentation: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct ObjectSpec {
    pub name: Option<&'static str>,
    pub fields: Option<Vec<FieldSpec>>,
    pub is_struct: bool,
    pub minalign: i32,
    pub bytesize: i32,
    pub attributes: Vec<(&'static str, Option<&'static str>)>,
    pub documentation: Vec<&'static str>,
    pub declaration_file: Option<&'static str>,
}

impl ObjectSpec {
    pub fn table(name: &'static str) -> Self {
        Self {
            name: Some(name),
            fields: Some(Vec::new()),
            is_struct: false,
            minalign: 1,
            bytesize: 0,
            attributes: Vec::new(),
            documentation: Vec::new(),
            declaration_file: Some("//schema.fbs"),
        }
    }

    pub fn structure(name: &'static str, bytesize: i32) -> Self {
        Self {
            is_struct: true,
            bytesize,
            ..Self::table(name)
        }
    }

    /// Appends a field with the next id and a table-style vtable offset
    pub fn field(self, name: &'static str, ty: TypeSpec) -> Self {
        self.with_field(FieldSpec::new(name, ty))
    }

    pub fn with_field(mut self, mut field: FieldSpec) -> Self {
        let fields = self.fields.get_or_insert_with(Vec::new);
        if field.id == 0 && field.offset == 0 {
            field.id = fields.len() as u16;
            field.offset = 4 + 2 * fields.len() as u16;
        }
        fields.push(field);
        self
    }
}

#[derive(Debug, Clone)]
pub(crate) struct EnumValSpec {
    pub name: &'static str,
    pub value: i64,
    pub union_type: Option<TypeSpec>,
    pub attributes: Vec<(&'static str, Option<&'static str>)>,
    pub documentation: Vec<&'static str>,
}

#[derive(Debug, Clone)]
pub(crate) struct EnumSpec {
    pub name: &'static str,
    pub values: Option<Vec<EnumValSpec>>,
    pub is_union: bool,
    pub underlying: Option<TypeSpec>,
    pub attributes: Vec<(&'static str, Option<&'static str>)>,
    pub documentation: Vec<&'static str>,
    pub declaration_file: Option<&'static str>,
}

impl EnumSpec {
    pub fn new(name: &'static str, underlying: i8) -> Self {
        Self {
            name,
            values: Some(Vec::new()),
            is_union: false,
            underlying: Some(TypeSpec::scalar(underlying)),
            attributes: Vec::new(),
            documentation: Vec::new(),
            declaration_file: Some("//schema.fbs"),
        }
    }

    pub fn union(name: &'static str, index: i32) -> Self {
        Self {
            is_union: true,
            underlying: Some(TypeSpec::scalar(BaseType::UType as i8).indexed(index)),
            ..Self::new(name, BaseType::UType as i8)
        }
    }

    pub fn value(mut self, name: &'static str, value: i64) -> Self {
        self.values.get_or_insert_with(Vec::new).push(EnumValSpec {
            name,
            value,
            union_type: None,
            attributes: Vec::new(),
            documentation: Vec::new(),
        });
        self
    }

    pub fn variant(mut self, name: &'static str, value: i64, ty: TypeSpec) -> Self {
        self.values.get_or_insert_with(Vec::new).push(EnumValSpec {
            name,
            value,
            union_type: Some(ty),
            attributes: Vec::new(),
            documentation: Vec::new(),
        });
        self
    }
}

#[derive(Debug, Clone)]
pub(crate) struct CallSpec {
    pub name: &'static str,
    /// Index into the schema's objects
    pub request: usize,
    /// Index into the schema's objects
    pub response: usize,
    pub attributes: Vec<(&'static str, Option<&'static str>)>,
    pub documentation: Vec<&'static str>,
}

#[derive(Debug, Clone)]
pub(crate) struct ServiceSpec {
    pub name: &'static str,
    pub calls: Option<Vec<CallSpec>>,
    pub attributes: Vec<(&'static str, Option<&'static str>)>,
    pub documentation: Vec<&'static str>,
    pub declaration_file: Option<&'static str>,
}

#[derive(Debug, Clone)]
pub(crate) struct FileSpec {
    pub filename: Option<&'static str>,
    pub includes: Vec<&'static str>,
}

#[derive(Debug, Clone)]
pub(crate) struct SchemaSpec {
    pub objects: Option<Vec<ObjectSpec>>,
    pub enums: Option<Vec<EnumSpec>>,
    pub file_ident: Option<&'static str>,
    pub file_ext: Option<&'static str>,
    /// Index into `objects`
    pub root_table: Option<usize>,
    pub services: Vec<ServiceSpec>,
    pub advanced_features: u64,
    pub files: Vec<FileSpec>,
    pub identifier: bool,
}

impl Default for SchemaSpec {
    fn default() -> Self {
        Self {
            objects: Some(Vec::new()),
            enums: Some(Vec::new()),
            file_ident: None,
            file_ext: None,
            root_table: None,
            services: Vec::new(),
            advanced_features: 0,
            files: Vec::new(),
            identifier: true,
        }
    }
}

fn string(fbb: &mut FlatBufferBuilder<'_>, s: &str) -> Off {
    fbb.create_string(s).as_union_value()
}

fn offsets(fbb: &mut FlatBufferBuilder<'_>, items: &[Off]) -> Off {
    fbb.create_vector(items).as_union_value()
}

fn strings(fbb: &mut FlatBufferBuilder<'_>, lines: &[&str]) -> Option<Off> {
    if lines.is_empty() {
        return None;
    }
    let items: Vec<Off> = lines.iter().map(|l| string(fbb, l)).collect();
    Some(offsets(fbb, &items))
}

fn attributes(fbb: &mut FlatBufferBuilder<'_>, attrs: &[(&str, Option<&str>)]) -> Option<Off> {
    if attrs.is_empty() {
        return None;
    }
    let mut items = Vec::with_capacity(attrs.len());
    for (key, value) in attrs {
        let key = string(fbb, key);
        let value = value.map(|v| string(fbb, v));
        let start = fbb.start_table();
        fbb.push_slot_always(4, key);
        if let Some(value) = value {
            fbb.push_slot_always(6, value);
        }
        items.push(fbb.end_table(start).as_union_value());
    }
    Some(offsets(fbb, &items))
}

fn build_type(fbb: &mut FlatBufferBuilder<'_>, ty: &TypeSpec) -> Off {
    let start = fbb.start_table();
    fbb.push_slot::<i8>(4, ty.base_type, 0);
    fbb.push_slot::<i8>(6, ty.element, 0);
    fbb.push_slot::<i32>(8, ty.index, -1);
    fbb.push_slot::<u16>(10, ty.fixed_length, 0);
    // Sizes equal to the schema defaults are omitted, as the compiler does
    fbb.push_slot::<u32>(12, ty.base_size, 4);
    fbb.push_slot::<u32>(14, ty.element_size, 0);
    fbb.end_table(start).as_union_value()
}

fn build_field(fbb: &mut FlatBufferBuilder<'_>, field: &FieldSpec) -> Off {
    let name = field.name.map(|n| string(fbb, n));
    let ty = field.ty.as_ref().map(|t| build_type(fbb, t));
    let attrs = attributes(fbb, &field.attributes);
    let docs = strings(fbb, &field.documentation);

    let start = fbb.start_table();
    if let Some(name) = name {
        fbb.push_slot_always(4, name);
    }
    if let Some(ty) = ty {
        fbb.push_slot_always(6, ty);
    }
    fbb.push_slot::<u16>(8, field.id, 0);
    fbb.push_slot::<u16>(10, field.offset, 0);
    fbb.push_slot::<i64>(12, field.default_integer, 0);
    fbb.push_slot::<f64>(14, field.default_real, 0.0);
    fbb.push_slot::<bool>(16, field.deprecated, false);
    fbb.push_slot::<bool>(18, field.required, false);
    fbb.push_slot::<bool>(20, field.key, false);
    if let Some(attrs) = attrs {
        fbb.push_slot_always(22, attrs);
    }
    if let Some(docs) = docs {
        fbb.push_slot_always(24, docs);
    }
    fbb.push_slot::<bool>(26, field.optional, false);
    fbb.push_slot::<u16>(28, field.padding, 0);
    fbb.push_slot::<bool>(30, field.offset64, false);
    fbb.end_table(start).as_union_value()
}

fn build_object(fbb: &mut FlatBufferBuilder<'_>, object: &ObjectSpec) -> Off {
    let name = object.name.map(|n| string(fbb, n));
    let fields = object.fields.as_ref().map(|fields| {
        let items: Vec<Off> = fields.iter().map(|f| build_field(fbb, f)).collect();
        offsets(fbb, &items)
    });
    let attrs = attributes(fbb, &object.attributes);
    let docs = strings(fbb, &object.documentation);
    let file = object.declaration_file.map(|f| string(fbb, f));

    let start = fbb.start_table();
    if let Some(name) = name {
        fbb.push_slot_always(4, name);
    }
    if let Some(fields) = fields {
        fbb.push_slot_always(6, fields);
    }
    fbb.push_slot::<bool>(8, object.is_struct, false);
    fbb.push_slot::<i32>(10, object.minalign, 0);
    fbb.push_slot::<i32>(12, object.bytesize, 0);
    if let Some(attrs) = attrs {
        fbb.push_slot_always(14, attrs);
    }
    if let Some(docs) = docs {
        fbb.push_slot_always(16, docs);
    }
    if let Some(file) = file {
        fbb.push_slot_always(18, file);
    }
    fbb.end_table(start).as_union_value()
}

fn build_enum_val(fbb: &mut FlatBufferBuilder<'_>, value: &EnumValSpec) -> Off {
    let name = string(fbb, value.name);
    let union_type = value.union_type.as_ref().map(|t| build_type(fbb, t));
    let docs = strings(fbb, &value.documentation);
    let attrs = attributes(fbb, &value.attributes);

    let start = fbb.start_table();
    fbb.push_slot_always(4, name);
    fbb.push_slot::<i64>(6, value.value, 0);
    if let Some(union_type) = union_type {
        fbb.push_slot_always(10, union_type);
    }
    if let Some(docs) = docs {
        fbb.push_slot_always(12, docs);
    }
    if let Some(attrs) = attrs {
        fbb.push_slot_always(14, attrs);
    }
    fbb.end_table(start).as_union_value()
}

fn build_enum(fbb: &mut FlatBufferBuilder<'_>, spec: &EnumSpec) -> Off {
    let name = string(fbb, spec.name);
    let values = spec.values.as_ref().map(|values| {
        let items: Vec<Off> = values.iter().map(|v| build_enum_val(fbb, v)).collect();
        offsets(fbb, &items)
    });
    let underlying = spec.underlying.as_ref().map(|t| build_type(fbb, t));
    let attrs = attributes(fbb, &spec.attributes);
    let docs = strings(fbb, &spec.documentation);
    let file = spec.declaration_file.map(|f| string(fbb, f));

    let start = fbb.start_table();
    fbb.push_slot_always(4, name);
    if let Some(values) = values {
        fbb.push_slot_always(6, values);
    }
    fbb.push_slot::<bool>(8, spec.is_union, false);
    if let Some(underlying) = underlying {
        fbb.push_slot_always(10, underlying);
    }
    if let Some(attrs) = attrs {
        fbb.push_slot_always(12, attrs);
    }
    if let Some(docs) = docs {
        fbb.push_slot_always(14, docs);
    }
    if let Some(file) = file {
        fbb.push_slot_always(16, file);
    }
    fbb.end_table(start).as_union_value()
}

fn build_service(fbb: &mut FlatBufferBuilder<'_>, spec: &ServiceSpec, objects: &[Off]) -> Off {
    let name = string(fbb, spec.name);
    let calls = spec.calls.as_ref().map(|calls| {
        let mut items = Vec::with_capacity(calls.len());
        for call in calls {
            let name = string(fbb, call.name);
            let attrs = attributes(fbb, &call.attributes);
            let docs = strings(fbb, &call.documentation);
            let start = fbb.start_table();
            fbb.push_slot_always(4, name);
            fbb.push_slot_always(6, objects[call.request]);
            fbb.push_slot_always(8, objects[call.response]);
            if let Some(attrs) = attrs {
                fbb.push_slot_always(10, attrs);
            }
            if let Some(docs) = docs {
                fbb.push_slot_always(12, docs);
            }
            items.push(fbb.end_table(start).as_union_value());
        }
        offsets(fbb, &items)
    });
    let attrs = attributes(fbb, &spec.attributes);
    let docs = strings(fbb, &spec.documentation);
    let file = spec.declaration_file.map(|f| string(fbb, f));

    let start = fbb.start_table();
    fbb.push_slot_always(4, name);
    if let Some(calls) = calls {
        fbb.push_slot_always(6, calls);
    }
    if let Some(attrs) = attrs {
        fbb.push_slot_always(8, attrs);
    }
    if let Some(docs) = docs {
        fbb.push_slot_always(10, docs);
    }
    if let Some(file) = file {
        fbb.push_slot_always(12, file);
    }
    fbb.end_table(start).as_union_value()
}

fn build_file(fbb: &mut FlatBufferBuilder<'_>, spec: &FileSpec) -> Off {
    let filename = spec.filename.map(|f| string(fbb, f));
    let includes = strings(fbb, &spec.includes);

    let start = fbb.start_table();
    if let Some(filename) = filename {
        fbb.push_slot_always(4, filename);
    }
    if let Some(includes) = includes {
        fbb.push_slot_always(6, includes);
    }
    fbb.end_table(start).as_union_value()
}

impl SchemaSpec {
    /// Encodes the schema into a finished buffer
    pub fn build(&self) -> Vec<u8> {
        let mut fbb = FlatBufferBuilder::new();

        let objects: Vec<Off> = self
            .objects
            .iter()
            .flatten()
            .map(|o| build_object(&mut fbb, o))
            .collect();
        let enums: Vec<Off> = self
            .enums
            .iter()
            .flatten()
            .map(|e| build_enum(&mut fbb, e))
            .collect();
        let services: Vec<Off> = self
            .services
            .iter()
            .map(|s| build_service(&mut fbb, s, &objects))
            .collect();
        let files: Vec<Off> = self.files.iter().map(|f| build_file(&mut fbb, f)).collect();

        let objects_vec = self.objects.as_ref().map(|_| offsets(&mut fbb, &objects));
        let enums_vec = self.enums.as_ref().map(|_| offsets(&mut fbb, &enums));
        let services_vec = (!services.is_empty()).then(|| offsets(&mut fbb, &services));
        let files_vec = (!files.is_empty()).then(|| offsets(&mut fbb, &files));
        let file_ident = self.file_ident.map(|s| string(&mut fbb, s));
        let file_ext = self.file_ext.map(|s| string(&mut fbb, s));

        let start = fbb.start_table();
        if let Some(objects_vec) = objects_vec {
            fbb.push_slot_always(4, objects_vec);
        }
        if let Some(enums_vec) = enums_vec {
            fbb.push_slot_always(6, enums_vec);
        }
        if let Some(file_ident) = file_ident {
            fbb.push_slot_always(8, file_ident);
        }
        if let Some(file_ext) = file_ext {
            fbb.push_slot_always(10, file_ext);
        }
        if let Some(root) = self.root_table {
            fbb.push_slot_always(12, objects[root]);
        }
        if let Some(services_vec) = services_vec {
            fbb.push_slot_always(14, services_vec);
        }
        fbb.push_slot::<u64>(16, self.advanced_features, 0);
        if let Some(files_vec) = files_vec {
            fbb.push_slot_always(18, files_vec);
        }
        let root = fbb.end_table(start);

        if self.identifier {
            fbb.finish(root, Some("BFBS"));
        } else {
            fbb.finish_minimal(root);
        }
        fbb.finished_data().to_vec()
    }
}
