use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::models::{ActivityRecord, AttendanceRecord, Record, RecordKind};
use crate::store::{RecordSet, Source, Store};
use crate::ui::messages::{header, info};
use crate::utils::table::Table;

/// Widest column in the terminal table; longer cells are ellipsized.
const MAX_COL_WIDTH: usize = 48;

pub fn handle(cmd: &Commands, store: &Store<'_>) -> AppResult<()> {
    if let Commands::List {
        kind,
        name,
        names,
        source,
    } = cmd
    {
        match kind {
            RecordKind::Attendance => {
                let set = store.load_from::<AttendanceRecord>(*source)?;
                print_set(&set, name.as_deref(), *names, *source);
            }
            RecordKind::Diary => {
                let set = store.load_from::<ActivityRecord>(*source)?;
                print_set(&set, name.as_deref(), *names, *source);
            }
        }
    }
    Ok(())
}

fn print_set<R: Record>(set: &RecordSet<R>, name: Option<&str>, names: bool, source: Source) {
    let kind = R::KIND;

    if names {
        let subjects = set.subjects();
        if subjects.is_empty() {
            info("No interns recorded yet.");
        }
        for s in subjects {
            println!("{s}");
        }
        return;
    }

    let rows: Vec<Vec<String>> = match name {
        Some(n) => set.for_subject(n.trim()).iter().map(Record::to_row).collect(),
        None => set.rows().iter().map(Record::to_row).collect(),
    };

    header(format!("{} ({} records, source: {:?})", kind.label(), rows.len(), source));

    if rows.is_empty() {
        info("No records found.");
        return;
    }

    let table = Table::fitted(set.columns(), rows, MAX_COL_WIDTH);
    print!("{}", table.render());
}
