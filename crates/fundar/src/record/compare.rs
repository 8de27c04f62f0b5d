use crate::traits::Record;
use std::any::Any;

/// Differing field names between `record` and `other`.
///
/// A value of any other type is a full mismatch: every schema field is
/// reported rather than raising.
pub(crate) fn diff<R: Record>(record: &R, other: &dyn Any) -> Vec<&'static str> {
    match other.downcast_ref::<R>() {
        Some(other) => record.diff_fields(other),
        None => R::fields(),
    }
}
