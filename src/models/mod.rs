pub mod activity;
pub mod attendance;
pub mod format;
pub mod kind;
pub mod record;

pub use activity::ActivityRecord;
pub use attendance::AttendanceRecord;
pub use kind::{FieldMap, RecordKind};
pub use record::Record;
