use crate::{
    error::RecordError,
    traits::Record,
    value::{Value, ValueMap},
};

/// In-place, null-skipping merge of `source` plus `overrides` into `record`.
///
/// Key policy is exact: `source` must name every schema field and nothing
/// else. Every assignment is checked before the first one is made, so a
/// failed merge leaves `record` as it was.
pub(crate) fn update<R: Record>(
    record: &mut R,
    source: &ValueMap,
    overrides: ValueMap,
) -> Result<(), RecordError> {
    check_key_set::<R>(source)?;

    let mut assignments: Vec<(&str, Value)> = Vec::with_capacity(R::SCHEMA.len());
    for name in R::SCHEMA.field_names() {
        match source.get(name) {
            Some(value) if !value.is_null() => assignments.push((name, value.clone())),
            _ => {}
        }
    }

    // overrides are applied last and may null a field
    for (key, value) in &overrides {
        if !R::SCHEMA.contains(key) {
            return Err(RecordError::unknown_field(R::SCHEMA, key.as_str()));
        }
        assignments.push((key.as_str(), value.clone()));
    }

    for (name, value) in &assignments {
        R::check_value(name, value)?;
    }

    tracing::trace!(
        record = R::SCHEMA.name(),
        assigned = assignments.len(),
        overrides = overrides.len(),
        "applying update"
    );
    for (name, value) in assignments {
        record.set_value(name, value)?;
    }

    Ok(())
}

/// Copy-with-changes: `source`'s dict form overlaid with `overrides`, built
/// through `from_dict`.
pub(crate) fn from_other<R: Record, S: Record>(
    source: &S,
    overrides: ValueMap,
) -> Result<R, RecordError> {
    let mut map = source.to_dict();

    for (key, value) in overrides {
        if !R::SCHEMA.contains(&key) {
            return Err(RecordError::unknown_field(R::SCHEMA, key));
        }
        map.insert(key, value);
    }

    R::from_dict(&map)
}

fn check_key_set<R: Record>(source: &ValueMap) -> Result<(), RecordError> {
    let missing: Vec<String> = R::SCHEMA
        .field_names()
        .filter(|name| !source.contains_key(name))
        .map(str::to_string)
        .collect();
    let unexpected: Vec<String> = source
        .keys()
        .filter(|key| !R::SCHEMA.contains(key))
        .map(str::to_string)
        .collect();

    if missing.is_empty() && unexpected.is_empty() {
        return Ok(());
    }

    tracing::debug!(
        record = R::SCHEMA.name(),
        ?missing,
        ?unexpected,
        "update source rejected by exact key policy"
    );

    Err(RecordError::Configuration {
        record: R::SCHEMA.name(),
        missing,
        unexpected,
    })
}
