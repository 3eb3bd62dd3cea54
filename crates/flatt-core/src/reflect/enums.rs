//! Enum and union declarations.

use super::Context;
use crate::error::Result;
use crate::metadata::{extract_attributes, extract_documentation};
use crate::model::{EnumType, EnumValue};
use crate::naming::{split_qualified, stable_id};
use crate::reader::reflection::{Enum, EnumVal};
use crate::reader::required;
use flatbuffers::{ForwardsUOffset, Vector};
use tracing::trace;

/// Value statistics gathered in one pass over an enum's entries.
///
/// `count` is the number of entries and is unrelated to `range`: a bit-flag
/// enum `{A = 1, B = 256}` has a count of 2 and a range of 255.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnumStats {
    bounds: Option<(i64, i64)>,
    count: usize,
}

impl EnumStats {
    /// Folds one value into the statistics
    pub fn record(&mut self, value: i64) {
        self.bounds = Some(match self.bounds {
            Some((min, max)) => (min.min(value), max.max(value)),
            None => (value, value),
        });
        self.count += 1;
    }

    /// Smallest value seen
    pub fn min(&self) -> Option<i64> {
        self.bounds.map(|(min, _)| min)
    }

    /// Largest value seen
    pub fn max(&self) -> Option<i64> {
        self.bounds.map(|(_, max)| max)
    }

    /// `max - min`, without overflow for any pair of `i64`
    pub fn range(&self) -> Option<u64> {
        self.bounds.map(|(min, max)| max.abs_diff(min))
    }

    /// Number of values seen
    pub fn count(&self) -> usize {
        self.count
    }
}

impl FromIterator<i64> for EnumStats {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut stats = Self::default();
        for value in iter {
            stats.record(value);
        }
        stats
    }
}

pub(super) fn walk_enums(
    ctx: &Context<'_>,
    list: Vector<'_, ForwardsUOffset<Enum<'_>>>,
) -> Result<Vec<EnumType>> {
    list.iter().map(|view| walk_enum(ctx, view)).collect()
}

fn walk_enum(ctx: &Context<'_>, view: Enum<'_>) -> Result<EnumType> {
    let qualified = required(view.name(), "Enum", "name")?;
    let (namespace, name) = split_qualified(qualified);

    let values = match view.values() {
        Some(list) => list
            .iter()
            .map(|value| walk_value(ctx, value))
            .collect::<Result<Vec<_>>>()?,
        None => Vec::new(),
    };
    let stats: EnumStats = values.iter().map(|v| v.value).collect();
    trace!("Enum {} with {} values", qualified, stats.count());

    let underlying = required(view.underlying_type(), "Enum", "underlying_type")?;
    Ok(EnumType {
        id: stable_id(qualified),
        name: name.to_string(),
        namespace: namespace.to_string(),
        declaration_file: view.declaration_file().unwrap_or_default().to_string(),
        underlying_type: ctx.describe(underlying)?,
        attributes: extract_attributes(view.attributes())?,
        documentation: extract_documentation(view.documentation()),
        is_union: view.is_union(),
        values,
        min: stats.min(),
        max: stats.max(),
        range: stats.range(),
        count: stats.count(),
    })
}

fn walk_value(ctx: &Context<'_>, view: EnumVal<'_>) -> Result<EnumValue> {
    Ok(EnumValue {
        name: required(view.name(), "EnumVal", "name")?.to_string(),
        value: view.value(),
        union_type: view.union_type().map(|ty| ctx.describe(ty)).transpose()?,
        attributes: extract_attributes(view.attributes())?,
        documentation: extract_documentation(view.documentation()),
    })
}
