use std::fmt::Debug;

use uuid::Uuid;

/// A persisted aggregate with a UUID identity.
///
/// `NAME` is the display name used in service messages
/// (e.g. `"PlantDisease Not Found"`).
pub trait Entity: Clone + Debug + Send + Sync + 'static {
    const NAME: &'static str;

    fn id(&self) -> Uuid;

    /// Overwrites every mutable field with the values from `other`.
    /// The identity is left untouched.
    fn overwrite_from(&mut self, other: &Self);
}

pub(crate) fn current_timestamp() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
