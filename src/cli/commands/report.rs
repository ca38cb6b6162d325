use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{ReportLogic, ReportRequest};
use crate::errors::AppResult;
use crate::models::RecordKind;
use crate::store::Store;
use crate::ui::messages::warning;
use crate::utils::path::output_dir;

pub fn handle(cmd: &Commands, cfg: &Config, store: &Store<'_>) -> AppResult<()> {
    if let Commands::Report {
        kind,
        name,
        period,
        out_dir,
        force,
        source,
    } = cmd
    {
        if *kind == RecordKind::Diary && period.is_some() {
            warning("--period only applies to attendance reports; ignored.");
        }

        let req = ReportRequest {
            kind: *kind,
            subject: name.trim().to_string(),
            period: period.clone(),
            out_dir: output_dir(out_dir.as_deref()),
            force: *force,
            source: *source,
        };

        ReportLogic::generate(store, cfg, &req)?;
    }
    Ok(())
}
