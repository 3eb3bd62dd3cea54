//! Attribute and documentation extraction.
//!
//! Both sections are optional in the binary format. An absent list becomes
//! an empty mapping or an empty [`Documentation`], never an error.

use crate::error::Result;
use crate::reader::reflection::{KeyValueList, StringList};
use crate::reader::required;
use indexmap::IndexMap;
use serde::Serialize;

/// Attribute mapping in declaration order. Keys are unique.
pub type Attributes = IndexMap<String, String>;

/// Documentation comment of a declaration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Documentation {
    /// Comment lines, unchanged
    pub lines: Vec<String>,
    /// Lines joined with `\n`, no trailing newline
    pub text: String,
}

impl Documentation {
    /// Builds documentation from its lines
    pub fn from_lines(lines: Vec<String>) -> Self {
        let text = lines.join("\n");
        Self { lines, text }
    }

    /// Returns true if there are no comment lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Reads an optional `[KeyValue]` list.
///
/// A repeated key keeps its first position and takes the last value. A
/// bare attribute without a value maps to an empty string.
pub fn extract_attributes(list: Option<KeyValueList<'_>>) -> Result<Attributes> {
    let mut attributes = Attributes::new();
    let Some(list) = list else {
        return Ok(attributes);
    };

    for entry in list {
        let key = required(entry.key(), "KeyValue", "key")?;
        let value = entry.value().unwrap_or_default();
        attributes.insert(key.to_string(), value.to_string());
    }
    Ok(attributes)
}

/// Reads an optional `[string]` documentation list
pub fn extract_documentation(list: Option<StringList<'_>>) -> Documentation {
    let lines = list
        .map(|list| list.iter().map(str::to_string).collect())
        .unwrap_or_default();
    Documentation::from_lines(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::reflection::Object;
    use crate::reader::SchemaReader;
    use crate::testing::{ObjectSpec, SchemaSpec};
    use pretty_assertions::assert_eq;

    fn with_object(object: ObjectSpec, check: impl FnOnce(Object<'_>)) {
        let data = SchemaSpec {
            objects: Some(vec![object]),
            ..Default::default()
        }
        .build();
        let reader = SchemaReader::new(&data).unwrap();
        check(reader.schema().objects().unwrap().get(0));
    }

    #[test]
    fn test_documentation_text() {
        let doc = Documentation::from_lines(vec!["a".into(), "b".into(), "c".into()]);
        assert_eq!(doc.text, "a\nb\nc");
        assert_eq!(doc.lines, vec!["a", "b", "c"]);

        let empty = Documentation::from_lines(Vec::new());
        assert_eq!(empty.text, "");
        assert!(empty.is_empty());
    }

    #[test]
    fn test_absent_sections() {
        with_object(ObjectSpec::table("T"), |object| {
            let attributes = extract_attributes(object.attributes()).unwrap();
            assert!(attributes.is_empty());

            let doc = extract_documentation(object.documentation());
            assert_eq!(doc, Documentation::default());
        });
    }

    #[test]
    fn test_extract_from_buffer() {
        let object = ObjectSpec {
            attributes: vec![
                ("priority", Some("1")),
                ("bare", None),
                ("priority", Some("2")),
            ],
            documentation: vec![" First line", " Second line"],
            ..ObjectSpec::table("T")
        };

        with_object(object, |object| {
            let attributes = extract_attributes(object.attributes()).unwrap();
            let pairs: Vec<_> = attributes
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            assert_eq!(pairs, vec![("priority", "2"), ("bare", "")]);

            let doc = extract_documentation(object.documentation());
            assert_eq!(doc.lines, vec![" First line", " Second line"]);
            assert_eq!(doc.text, " First line\n Second line");
        });
    }
}
