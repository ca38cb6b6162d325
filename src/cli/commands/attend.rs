use crate::cli::parser::Commands;
use crate::core::record::{AttendanceInput, RecordLogic};
use crate::errors::AppResult;
use crate::store::Store;

/// Record one attendance line.
pub fn handle(cmd: &Commands, store: &Store<'_>) -> AppResult<()> {
    if let Commands::Attend {
        name,
        date,
        time_in,
        time_out,
        hours,
        intern_signature,
        supervisor_signature,
    } = cmd
    {
        let input = AttendanceInput {
            name: name.clone(),
            date: date.clone(),
            time_in: time_in.clone(),
            time_out: time_out.clone(),
            hours: *hours,
            intern_signature: intern_signature.clone(),
            supervisor_signature: supervisor_signature.clone(),
        };

        let record = RecordLogic::build_attendance(&input)?;
        RecordLogic::save(store, &record)?;
    }

    Ok(())
}
