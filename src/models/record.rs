use super::RecordKind;
use chrono::NaiveDate;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Common behaviour of the append-only record types.
///
/// Serde field names are the display schema; the store renames them to the
/// storage schema through [`RecordKind::fields`].
pub trait Record: Serialize + DeserializeOwned + Clone {
    const KIND: RecordKind;

    /// Name of the intern the record belongs to.
    fn subject(&self) -> &str;

    fn date(&self) -> NaiveDate;

    /// Display values in canonical column order.
    fn to_row(&self) -> Vec<String>;
}
