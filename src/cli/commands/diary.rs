use crate::cli::parser::Commands;
use crate::core::record::{ActivityInput, RecordLogic};
use crate::errors::AppResult;
use crate::store::Store;

/// Record one field diary entry.
pub fn handle(cmd: &Commands, store: &Store<'_>) -> AppResult<()> {
    if let Commands::Diary {
        name,
        date,
        activity,
        supervisor_signature,
    } = cmd
    {
        let input = ActivityInput {
            name: name.clone(),
            date: date.clone(),
            activity: activity.clone(),
            supervisor_signature: supervisor_signature.clone(),
        };

        let record = RecordLogic::build_activity(&input)?;
        RecordLogic::save(store, &record)?;
    }

    Ok(())
}
