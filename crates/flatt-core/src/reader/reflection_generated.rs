//! Reader bindings for `reflection.fbs`, laid out the way `flatc --rust`
//! emits them.
//!
//! Only the read side is present. Pointer fields that the schema marks
//! `required` are returned as `Option` below the root so that the walkers can
//! name the table and field that is missing; the verifier therefore checks
//! them as optional. `Schema.objects` and `Schema.enums` stay required.

#![allow(unsafe_code, missing_docs, elided_lifetimes_in_paths)]

pub mod reflection {
    use flatbuffers::{ForwardsUOffset, Follow, InvalidFlatbuffer, Table, Vector, Verifier, VOffsetT};

    /// `[KeyValue]`
    pub type KeyValueList<'a> = Vector<'a, ForwardsUOffset<KeyValue<'a>>>;
    /// `[string]`
    pub type StringList<'a> = Vector<'a, ForwardsUOffset<&'a str>>;

    macro_rules! table {
        ($(#[$meta:meta])* $name:ident) => {
            $(#[$meta])*
            #[derive(Copy, Clone, PartialEq)]
            pub struct $name<'a> {
                pub _tab: Table<'a>,
            }

            impl<'a> Follow<'a> for $name<'a> {
                type Inner = $name<'a>;
                #[inline]
                unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
                    Self {
                        _tab: Table::new(buf, loc),
                    }
                }
            }

            impl std::fmt::Debug for $name<'_> {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.debug_struct(stringify!($name))
                        .field("loc", &self._tab.loc())
                        .finish_non_exhaustive()
                }
            }
        };
    }

    table!(
        /// `reflection.Schema`, the root of every `.bfbs` file
        Schema
    );
    table!(
        /// `reflection.Object`, a table or struct declaration
        Object
    );
    table!(
        /// `reflection.Field`
        Field
    );
    table!(
        /// `reflection.Type`
        Type
    );
    table!(
        /// `reflection.Enum`, also used for unions
        Enum
    );
    table!(
        /// `reflection.EnumVal`
        EnumVal
    );
    table!(
        /// `reflection.KeyValue`
        KeyValue
    );
    table!(
        /// `reflection.Service`
        Service
    );
    table!(
        /// `reflection.RPCCall`
        RPCCall
    );
    table!(
        /// `reflection.SchemaFile`
        SchemaFile
    );

    // Safety for every accessor below: tables are only reachable through
    // `flatbuffers::root_with_opts`, whose verifier has checked each slot
    // against the type it is read with here.

    impl<'a> Schema<'a> {
        pub const VT_OBJECTS: VOffsetT = 4;
        pub const VT_ENUMS: VOffsetT = 6;
        pub const VT_FILE_IDENT: VOffsetT = 8;
        pub const VT_FILE_EXT: VOffsetT = 10;
        pub const VT_ROOT_TABLE: VOffsetT = 12;
        pub const VT_SERVICES: VOffsetT = 14;
        pub const VT_ADVANCED_FEATURES: VOffsetT = 16;
        pub const VT_FBS_FILES: VOffsetT = 18;

        #[inline]
        pub fn objects(&self) -> Option<Vector<'a, ForwardsUOffset<Object<'a>>>> {
            unsafe {
                self._tab
                    .get::<ForwardsUOffset<Vector<'a, ForwardsUOffset<Object<'a>>>>>(Self::VT_OBJECTS, None)
            }
        }
        #[inline]
        pub fn enums(&self) -> Option<Vector<'a, ForwardsUOffset<Enum<'a>>>> {
            unsafe {
                self._tab
                    .get::<ForwardsUOffset<Vector<'a, ForwardsUOffset<Enum<'a>>>>>(Self::VT_ENUMS, None)
            }
        }
        #[inline]
        pub fn file_ident(&self) -> Option<&'a str> {
            unsafe { self._tab.get::<ForwardsUOffset<&str>>(Self::VT_FILE_IDENT, None) }
        }
        #[inline]
        pub fn file_ext(&self) -> Option<&'a str> {
            unsafe { self._tab.get::<ForwardsUOffset<&str>>(Self::VT_FILE_EXT, None) }
        }
        #[inline]
        pub fn root_table(&self) -> Option<Object<'a>> {
            unsafe { self._tab.get::<ForwardsUOffset<Object>>(Self::VT_ROOT_TABLE, None) }
        }
        #[inline]
        pub fn services(&self) -> Option<Vector<'a, ForwardsUOffset<Service<'a>>>> {
            unsafe {
                self._tab
                    .get::<ForwardsUOffset<Vector<'a, ForwardsUOffset<Service<'a>>>>>(Self::VT_SERVICES, None)
            }
        }
        #[inline]
        pub fn advanced_features(&self) -> u64 {
            unsafe { self._tab.get::<u64>(Self::VT_ADVANCED_FEATURES, Some(0)).unwrap_or(0) }
        }
        #[inline]
        pub fn fbs_files(&self) -> Option<Vector<'a, ForwardsUOffset<SchemaFile<'a>>>> {
            unsafe {
                self._tab
                    .get::<ForwardsUOffset<Vector<'a, ForwardsUOffset<SchemaFile<'a>>>>>(Self::VT_FBS_FILES, None)
            }
        }
    }

    impl flatbuffers::Verifiable for Schema<'_> {
        #[inline]
        fn run_verifier(v: &mut Verifier<'_, '_>, pos: usize) -> Result<(), InvalidFlatbuffer> {
            v.visit_table(pos)?
                .visit_field::<ForwardsUOffset<Vector<'_, ForwardsUOffset<Object>>>>("objects", Self::VT_OBJECTS, true)?
                .visit_field::<ForwardsUOffset<Vector<'_, ForwardsUOffset<Enum>>>>("enums", Self::VT_ENUMS, true)?
                .visit_field::<ForwardsUOffset<&str>>("file_ident", Self::VT_FILE_IDENT, false)?
                .visit_field::<ForwardsUOffset<&str>>("file_ext", Self::VT_FILE_EXT, false)?
                .visit_field::<ForwardsUOffset<Object>>("root_table", Self::VT_ROOT_TABLE, false)?
                .visit_field::<ForwardsUOffset<Vector<'_, ForwardsUOffset<Service>>>>("services", Self::VT_SERVICES, false)?
                .visit_field::<u64>("advanced_features", Self::VT_ADVANCED_FEATURES, false)?
                .visit_field::<ForwardsUOffset<Vector<'_, ForwardsUOffset<SchemaFile>>>>("fbs_files", Self::VT_FBS_FILES, false)?
                .finish();
            Ok(())
        }
    }

    impl<'a> Object<'a> {
        pub const VT_NAME: VOffsetT = 4;
        pub const VT_FIELDS: VOffsetT = 6;
        pub const VT_IS_STRUCT: VOffsetT = 8;
        pub const VT_MINALIGN: VOffsetT = 10;
        pub const VT_BYTESIZE: VOffsetT = 12;
        pub const VT_ATTRIBUTES: VOffsetT = 14;
        pub const VT_DOCUMENTATION: VOffsetT = 16;
        pub const VT_DECLARATION_FILE: VOffsetT = 18;

        #[inline]
        pub fn name(&self) -> Option<&'a str> {
            unsafe { self._tab.get::<ForwardsUOffset<&str>>(Self::VT_NAME, None) }
        }
        #[inline]
        pub fn fields(&self) -> Option<Vector<'a, ForwardsUOffset<Field<'a>>>> {
            unsafe {
                self._tab
                    .get::<ForwardsUOffset<Vector<'a, ForwardsUOffset<Field<'a>>>>>(Self::VT_FIELDS, None)
            }
        }
        #[inline]
        pub fn is_struct(&self) -> bool {
            unsafe { self._tab.get::<bool>(Self::VT_IS_STRUCT, Some(false)).unwrap_or(false) }
        }
        #[inline]
        pub fn minalign(&self) -> i32 {
            unsafe { self._tab.get::<i32>(Self::VT_MINALIGN, Some(0)).unwrap_or(0) }
        }
        #[inline]
        pub fn bytesize(&self) -> i32 {
            unsafe { self._tab.get::<i32>(Self::VT_BYTESIZE, Some(0)).unwrap_or(0) }
        }
        #[inline]
        pub fn attributes(&self) -> Option<KeyValueList<'a>> {
            unsafe { self._tab.get::<ForwardsUOffset<KeyValueList<'a>>>(Self::VT_ATTRIBUTES, None) }
        }
        #[inline]
        pub fn documentation(&self) -> Option<StringList<'a>> {
            unsafe { self._tab.get::<ForwardsUOffset<StringList<'a>>>(Self::VT_DOCUMENTATION, None) }
        }
        #[inline]
        pub fn declaration_file(&self) -> Option<&'a str> {
            unsafe { self._tab.get::<ForwardsUOffset<&str>>(Self::VT_DECLARATION_FILE, None) }
        }
    }

    impl flatbuffers::Verifiable for Object<'_> {
        #[inline]
        fn run_verifier(v: &mut Verifier<'_, '_>, pos: usize) -> Result<(), InvalidFlatbuffer> {
            v.visit_table(pos)?
                .visit_field::<ForwardsUOffset<&str>>("name", Self::VT_NAME, false)?
                .visit_field::<ForwardsUOffset<Vector<'_, ForwardsUOffset<Field>>>>("fields", Self::VT_FIELDS, false)?
                .visit_field::<bool>("is_struct", Self::VT_IS_STRUCT, false)?
                .visit_field::<i32>("minalign", Self::VT_MINALIGN, false)?
                .visit_field::<i32>("bytesize", Self::VT_BYTESIZE, false)?
                .visit_field::<ForwardsUOffset<Vector<'_, ForwardsUOffset<KeyValue>>>>("attributes", Self::VT_ATTRIBUTES, false)?
                .visit_field::<ForwardsUOffset<Vector<'_, ForwardsUOffset<&str>>>>("documentation", Self::VT_DOCUMENTATION, false)?
                .visit_field::<ForwardsUOffset<&str>>("declaration_file", Self::VT_DECLARATION_FILE, false)?
                .finish();
            Ok(())
        }
    }

    impl<'a> Field<'a> {
        pub const VT_NAME: VOffsetT = 4;
        pub const VT_TYPE_: VOffsetT = 6;
        pub const VT_ID: VOffsetT = 8;
        pub const VT_OFFSET: VOffsetT = 10;
        pub const VT_DEFAULT_INTEGER: VOffsetT = 12;
        pub const VT_DEFAULT_REAL: VOffsetT = 14;
        pub const VT_DEPRECATED: VOffsetT = 16;
        pub const VT_REQUIRED: VOffsetT = 18;
        pub const VT_KEY: VOffsetT = 20;
        pub const VT_ATTRIBUTES: VOffsetT = 22;
        pub const VT_DOCUMENTATION: VOffsetT = 24;
        pub const VT_OPTIONAL: VOffsetT = 26;
        pub const VT_PADDING: VOffsetT = 28;
        pub const VT_OFFSET64: VOffsetT = 30;

        #[inline]
        pub fn name(&self) -> Option<&'a str> {
            unsafe { self._tab.get::<ForwardsUOffset<&str>>(Self::VT_NAME, None) }
        }
        #[inline]
        pub fn type_(&self) -> Option<Type<'a>> {
            unsafe { self._tab.get::<ForwardsUOffset<Type>>(Self::VT_TYPE_, None) }
        }
        #[inline]
        pub fn id(&self) -> u16 {
            unsafe { self._tab.get::<u16>(Self::VT_ID, Some(0)).unwrap_or(0) }
        }
        #[inline]
        pub fn offset(&self) -> u16 {
            unsafe { self._tab.get::<u16>(Self::VT_OFFSET, Some(0)).unwrap_or(0) }
        }
        #[inline]
        pub fn default_integer(&self) -> i64 {
            unsafe { self._tab.get::<i64>(Self::VT_DEFAULT_INTEGER, Some(0)).unwrap_or(0) }
        }
        #[inline]
        pub fn default_real(&self) -> f64 {
            unsafe { self._tab.get::<f64>(Self::VT_DEFAULT_REAL, Some(0.0)).unwrap_or(0.0) }
        }
        #[inline]
        pub fn deprecated(&self) -> bool {
            unsafe { self._tab.get::<bool>(Self::VT_DEPRECATED, Some(false)).unwrap_or(false) }
        }
        #[inline]
        pub fn required(&self) -> bool {
            unsafe { self._tab.get::<bool>(Self::VT_REQUIRED, Some(false)).unwrap_or(false) }
        }
        #[inline]
        pub fn key(&self) -> bool {
            unsafe { self._tab.get::<bool>(Self::VT_KEY, Some(false)).unwrap_or(false) }
        }
        #[inline]
        pub fn attributes(&self) -> Option<KeyValueList<'a>> {
            unsafe { self._tab.get::<ForwardsUOffset<KeyValueList<'a>>>(Self::VT_ATTRIBUTES, None) }
        }
        #[inline]
        pub fn documentation(&self) -> Option<StringList<'a>> {
            unsafe { self._tab.get::<ForwardsUOffset<StringList<'a>>>(Self::VT_DOCUMENTATION, None) }
        }
        #[inline]
        pub fn optional(&self) -> bool {
            unsafe { self._tab.get::<bool>(Self::VT_OPTIONAL, Some(false)).unwrap_or(false) }
        }
        #[inline]
        pub fn padding(&self) -> u16 {
            unsafe { self._tab.get::<u16>(Self::VT_PADDING, Some(0)).unwrap_or(0) }
        }
        #[inline]
        pub fn offset64(&self) -> bool {
            unsafe { self._tab.get::<bool>(Self::VT_OFFSET64, Some(false)).unwrap_or(false) }
        }
    }

    impl flatbuffers::Verifiable for Field<'_> {
        #[inline]
        fn run_verifier(v: &mut Verifier<'_, '_>, pos: usize) -> Result<(), InvalidFlatbuffer> {
            v.visit_table(pos)?
                .visit_field::<ForwardsUOffset<&str>>("name", Self::VT_NAME, false)?
                .visit_field::<ForwardsUOffset<Type>>("type_", Self::VT_TYPE_, false)?
                .visit_field::<u16>("id", Self::VT_ID, false)?
                .visit_field::<u16>("offset", Self::VT_OFFSET, false)?
                .visit_field::<i64>("default_integer", Self::VT_DEFAULT_INTEGER, false)?
                .visit_field::<f64>("default_real", Self::VT_DEFAULT_REAL, false)?
                .visit_field::<bool>("deprecated", Self::VT_DEPRECATED, false)?
                .visit_field::<bool>("required", Self::VT_REQUIRED, false)?
                .visit_field::<bool>("key", Self::VT_KEY, false)?
                .visit_field::<ForwardsUOffset<Vector<'_, ForwardsUOffset<KeyValue>>>>("attributes", Self::VT_ATTRIBUTES, false)?
                .visit_field::<ForwardsUOffset<Vector<'_, ForwardsUOffset<&str>>>>("documentation", Self::VT_DOCUMENTATION, false)?
                .visit_field::<bool>("optional", Self::VT_OPTIONAL, false)?
                .visit_field::<u16>("padding", Self::VT_PADDING, false)?
                .visit_field::<bool>("offset64", Self::VT_OFFSET64, false)?
                .finish();
            Ok(())
        }
    }

    impl<'a> Type<'a> {
        pub const VT_BASE_TYPE: VOffsetT = 4;
        pub const VT_ELEMENT: VOffsetT = 6;
        pub const VT_INDEX: VOffsetT = 8;
        pub const VT_FIXED_LENGTH: VOffsetT = 10;
        pub const VT_BASE_SIZE: VOffsetT = 12;
        pub const VT_ELEMENT_SIZE: VOffsetT = 14;

        #[inline]
        pub fn base_type(&self) -> i8 {
            unsafe { self._tab.get::<i8>(Self::VT_BASE_TYPE, Some(0)).unwrap_or(0) }
        }
        #[inline]
        pub fn element(&self) -> i8 {
            unsafe { self._tab.get::<i8>(Self::VT_ELEMENT, Some(0)).unwrap_or(0) }
        }
        #[inline]
        pub fn index(&self) -> i32 {
            unsafe { self._tab.get::<i32>(Self::VT_INDEX, Some(-1)).unwrap_or(-1) }
        }
        #[inline]
        pub fn fixed_length(&self) -> u16 {
            unsafe { self._tab.get::<u16>(Self::VT_FIXED_LENGTH, Some(0)).unwrap_or(0) }
        }
        /// Size of the type in bytes, 4 when the slot was left at its default
        #[inline]
        pub fn base_size(&self) -> u32 {
            unsafe { self._tab.get::<u32>(Self::VT_BASE_SIZE, Some(4)).unwrap_or(4) }
        }
        /// Element size for vectors and arrays, 0 when left at its default
        #[inline]
        pub fn element_size(&self) -> u32 {
            unsafe { self._tab.get::<u32>(Self::VT_ELEMENT_SIZE, Some(0)).unwrap_or(0) }
        }
    }

    impl flatbuffers::Verifiable for Type<'_> {
        #[inline]
        fn run_verifier(v: &mut Verifier<'_, '_>, pos: usize) -> Result<(), InvalidFlatbuffer> {
            v.visit_table(pos)?
                .visit_field::<i8>("base_type", Self::VT_BASE_TYPE, false)?
                .visit_field::<i8>("element", Self::VT_ELEMENT, false)?
                .visit_field::<i32>("index", Self::VT_INDEX, false)?
                .visit_field::<u16>("fixed_length", Self::VT_FIXED_LENGTH, false)?
                .visit_field::<u32>("base_size", Self::VT_BASE_SIZE, false)?
                .visit_field::<u32>("element_size", Self::VT_ELEMENT_SIZE, false)?
                .finish();
            Ok(())
        }
    }

    impl<'a> Enum<'a> {
        pub const VT_NAME: VOffsetT = 4;
        pub const VT_VALUES: VOffsetT = 6;
        pub const VT_IS_UNION: VOffsetT = 8;
        pub const VT_UNDERLYING_TYPE: VOffsetT = 10;
        pub const VT_ATTRIBUTES: VOffsetT = 12;
        pub const VT_DOCUMENTATION: VOffsetT = 14;
        pub const VT_DECLARATION_FILE: VOffsetT = 16;

        #[inline]
        pub fn name(&self) -> Option<&'a str> {
            unsafe { self._tab.get::<ForwardsUOffset<&str>>(Self::VT_NAME, None) }
        }
        #[inline]
        pub fn values(&self) -> Option<Vector<'a, ForwardsUOffset<EnumVal<'a>>>> {
            unsafe {
                self._tab
                    .get::<ForwardsUOffset<Vector<'a, ForwardsUOffset<EnumVal<'a>>>>>(Self::VT_VALUES, None)
            }
        }
        #[inline]
        pub fn is_union(&self) -> bool {
            unsafe { self._tab.get::<bool>(Self::VT_IS_UNION, Some(false)).unwrap_or(false) }
        }
        #[inline]
        pub fn underlying_type(&self) -> Option<Type<'a>> {
            unsafe { self._tab.get::<ForwardsUOffset<Type>>(Self::VT_UNDERLYING_TYPE, None) }
        }
        #[inline]
        pub fn attributes(&self) -> Option<KeyValueList<'a>> {
            unsafe { self._tab.get::<ForwardsUOffset<KeyValueList<'a>>>(Self::VT_ATTRIBUTES, None) }
        }
        #[inline]
        pub fn documentation(&self) -> Option<StringList<'a>> {
            unsafe { self._tab.get::<ForwardsUOffset<StringList<'a>>>(Self::VT_DOCUMENTATION, None) }
        }
        #[inline]
        pub fn declaration_file(&self) -> Option<&'a str> {
            unsafe { self._tab.get::<ForwardsUOffset<&str>>(Self::VT_DECLARATION_FILE, None) }
        }
    }

    impl flatbuffers::Verifiable for Enum<'_> {
        #[inline]
        fn run_verifier(v: &mut Verifier<'_, '_>, pos: usize) -> Result<(), InvalidFlatbuffer> {
            v.visit_table(pos)?
                .visit_field::<ForwardsUOffset<&str>>("name", Self::VT_NAME, false)?
                .visit_field::<ForwardsUOffset<Vector<'_, ForwardsUOffset<EnumVal>>>>("values", Self::VT_VALUES, false)?
                .visit_field::<bool>("is_union", Self::VT_IS_UNION, false)?
                .visit_field::<ForwardsUOffset<Type>>("underlying_type", Self::VT_UNDERLYING_TYPE, false)?
                .visit_field::<ForwardsUOffset<Vector<'_, ForwardsUOffset<KeyValue>>>>("attributes", Self::VT_ATTRIBUTES, false)?
                .visit_field::<ForwardsUOffset<Vector<'_, ForwardsUOffset<&str>>>>("documentation", Self::VT_DOCUMENTATION, false)?
                .visit_field::<ForwardsUOffset<&str>>("declaration_file", Self::VT_DECLARATION_FILE, false)?
                .finish();
            Ok(())
        }
    }

    impl<'a> EnumVal<'a> {
        pub const VT_NAME: VOffsetT = 4;
        pub const VT_VALUE: VOffsetT = 6;
        // Slot 8 held the deprecated `object` reference.
        pub const VT_UNION_TYPE: VOffsetT = 10;
        pub const VT_DOCUMENTATION: VOffsetT = 12;
        pub const VT_ATTRIBUTES: VOffsetT = 14;

        #[inline]
        pub fn name(&self) -> Option<&'a str> {
            unsafe { self._tab.get::<ForwardsUOffset<&str>>(Self::VT_NAME, None) }
        }
        #[inline]
        pub fn value(&self) -> i64 {
            unsafe { self._tab.get::<i64>(Self::VT_VALUE, Some(0)).unwrap_or(0) }
        }
        #[inline]
        pub fn union_type(&self) -> Option<Type<'a>> {
            unsafe { self._tab.get::<ForwardsUOffset<Type>>(Self::VT_UNION_TYPE, None) }
        }
        #[inline]
        pub fn documentation(&self) -> Option<StringList<'a>> {
            unsafe { self._tab.get::<ForwardsUOffset<StringList<'a>>>(Self::VT_DOCUMENTATION, None) }
        }
        #[inline]
        pub fn attributes(&self) -> Option<KeyValueList<'a>> {
            unsafe { self._tab.get::<ForwardsUOffset<KeyValueList<'a>>>(Self::VT_ATTRIBUTES, None) }
        }
    }

    impl flatbuffers::Verifiable for EnumVal<'_> {
        #[inline]
        fn run_verifier(v: &mut Verifier<'_, '_>, pos: usize) -> Result<(), InvalidFlatbuffer> {
            v.visit_table(pos)?
                .visit_field::<ForwardsUOffset<&str>>("name", Self::VT_NAME, false)?
                .visit_field::<i64>("value", Self::VT_VALUE, false)?
                .visit_field::<ForwardsUOffset<Type>>("union_type", Self::VT_UNION_TYPE, false)?
                .visit_field::<ForwardsUOffset<Vector<'_, ForwardsUOffset<&str>>>>("documentation", Self::VT_DOCUMENTATION, false)?
                .visit_field::<ForwardsUOffset<Vector<'_, ForwardsUOffset<KeyValue>>>>("attributes", Self::VT_ATTRIBUTES, false)?
                .finish();
            Ok(())
        }
    }

    impl<'a> KeyValue<'a> {
        pub const VT_KEY: VOffsetT = 4;
        pub const VT_VALUE: VOffsetT = 6;

        #[inline]
        pub fn key(&self) -> Option<&'a str> {
            unsafe { self._tab.get::<ForwardsUOffset<&str>>(Self::VT_KEY, None) }
        }
        #[inline]
        pub fn value(&self) -> Option<&'a str> {
            unsafe { self._tab.get::<ForwardsUOffset<&str>>(Self::VT_VALUE, None) }
        }
    }

    impl flatbuffers::Verifiable for KeyValue<'_> {
        #[inline]
        fn run_verifier(v: &mut Verifier<'_, '_>, pos: usize) -> Result<(), InvalidFlatbuffer> {
            v.visit_table(pos)?
                .visit_field::<ForwardsUOffset<&str>>("key", Self::VT_KEY, false)?
                .visit_field::<ForwardsUOffset<&str>>("value", Self::VT_VALUE, false)?
                .finish();
            Ok(())
        }
    }

    impl<'a> Service<'a> {
        pub const VT_NAME: VOffsetT = 4;
        pub const VT_CALLS: VOffsetT = 6;
        pub const VT_ATTRIBUTES: VOffsetT = 8;
        pub const VT_DOCUMENTATION: VOffsetT = 10;
        pub const VT_DECLARATION_FILE: VOffsetT = 12;

        #[inline]
        pub fn name(&self) -> Option<&'a str> {
            unsafe { self._tab.get::<ForwardsUOffset<&str>>(Self::VT_NAME, None) }
        }
        #[inline]
        pub fn calls(&self) -> Option<Vector<'a, ForwardsUOffset<RPCCall<'a>>>> {
            unsafe {
                self._tab
                    .get::<ForwardsUOffset<Vector<'a, ForwardsUOffset<RPCCall<'a>>>>>(Self::VT_CALLS, None)
            }
        }
        #[inline]
        pub fn attributes(&self) -> Option<KeyValueList<'a>> {
            unsafe { self._tab.get::<ForwardsUOffset<KeyValueList<'a>>>(Self::VT_ATTRIBUTES, None) }
        }
        #[inline]
        pub fn documentation(&self) -> Option<StringList<'a>> {
            unsafe { self._tab.get::<ForwardsUOffset<StringList<'a>>>(Self::VT_DOCUMENTATION, None) }
        }
        #[inline]
        pub fn declaration_file(&self) -> Option<&'a str> {
            unsafe { self._tab.get::<ForwardsUOffset<&str>>(Self::VT_DECLARATION_FILE, None) }
        }
    }

    impl flatbuffers::Verifiable for Service<'_> {
        #[inline]
        fn run_verifier(v: &mut Verifier<'_, '_>, pos: usize) -> Result<(), InvalidFlatbuffer> {
            v.visit_table(pos)?
                .visit_field::<ForwardsUOffset<&str>>("name", Self::VT_NAME, false)?
                .visit_field::<ForwardsUOffset<Vector<'_, ForwardsUOffset<RPCCall>>>>("calls", Self::VT_CALLS, false)?
                .visit_field::<ForwardsUOffset<Vector<'_, ForwardsUOffset<KeyValue>>>>("attributes", Self::VT_ATTRIBUTES, false)?
                .visit_field::<ForwardsUOffset<Vector<'_, ForwardsUOffset<&str>>>>("documentation", Self::VT_DOCUMENTATION, false)?
                .visit_field::<ForwardsUOffset<&str>>("declaration_file", Self::VT_DECLARATION_FILE, false)?
                .finish();
            Ok(())
        }
    }

    impl<'a> RPCCall<'a> {
        pub const VT_NAME: VOffsetT = 4;
        pub const VT_REQUEST: VOffsetT = 6;
        pub const VT_RESPONSE: VOffsetT = 8;
        pub const VT_ATTRIBUTES: VOffsetT = 10;
        pub const VT_DOCUMENTATION: VOffsetT = 12;

        #[inline]
        pub fn name(&self) -> Option<&'a str> {
            unsafe { self._tab.get::<ForwardsUOffset<&str>>(Self::VT_NAME, None) }
        }
        #[inline]
        pub fn request(&self) -> Option<Object<'a>> {
            unsafe { self._tab.get::<ForwardsUOffset<Object>>(Self::VT_REQUEST, None) }
        }
        #[inline]
        pub fn response(&self) -> Option<Object<'a>> {
            unsafe { self._tab.get::<ForwardsUOffset<Object>>(Self::VT_RESPONSE, None) }
        }
        #[inline]
        pub fn attributes(&self) -> Option<KeyValueList<'a>> {
            unsafe { self._tab.get::<ForwardsUOffset<KeyValueList<'a>>>(Self::VT_ATTRIBUTES, None) }
        }
        #[inline]
        pub fn documentation(&self) -> Option<StringList<'a>> {
            unsafe { self._tab.get::<ForwardsUOffset<StringList<'a>>>(Self::VT_DOCUMENTATION, None) }
        }
    }

    impl flatbuffers::Verifiable for RPCCall<'_> {
        #[inline]
        fn run_verifier(v: &mut Verifier<'_, '_>, pos: usize) -> Result<(), InvalidFlatbuffer> {
            v.visit_table(pos)?
                .visit_field::<ForwardsUOffset<&str>>("name", Self::VT_NAME, false)?
                .visit_field::<ForwardsUOffset<Object>>("request", Self::VT_REQUEST, false)?
                .visit_field::<ForwardsUOffset<Object>>("response", Self::VT_RESPONSE, false)?
                .visit_field::<ForwardsUOffset<Vector<'_, ForwardsUOffset<KeyValue>>>>("attributes", Self::VT_ATTRIBUTES, false)?
                .visit_field::<ForwardsUOffset<Vector<'_, ForwardsUOffset<&str>>>>("documentation", Self::VT_DOCUMENTATION, false)?
                .finish();
            Ok(())
        }
    }

    impl<'a> SchemaFile<'a> {
        pub const VT_FILENAME: VOffsetT = 4;
        pub const VT_INCLUDED_FILENAMES: VOffsetT = 6;

        #[inline]
        pub fn filename(&self) -> Option<&'a str> {
            unsafe { self._tab.get::<ForwardsUOffset<&str>>(Self::VT_FILENAME, None) }
        }
        #[inline]
        pub fn included_filenames(&self) -> Option<StringList<'a>> {
            unsafe { self._tab.get::<ForwardsUOffset<StringList<'a>>>(Self::VT_INCLUDED_FILENAMES, None) }
        }
    }

    impl flatbuffers::Verifiable for SchemaFile<'_> {
        #[inline]
        fn run_verifier(v: &mut Verifier<'_, '_>, pos: usize) -> Result<(), InvalidFlatbuffer> {
            v.visit_table(pos)?
                .visit_field::<ForwardsUOffset<&str>>("filename", Self::VT_FILENAME, false)?
                .visit_field::<ForwardsUOffset<Vector<'_, ForwardsUOffset<&str>>>>("included_filenames", Self::VT_INCLUDED_FILENAMES, false)?
                .finish();
            Ok(())
        }
    }
}
