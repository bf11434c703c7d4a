use crate::cli::commands::{AppContext, load_report};
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Export {
        file,
        format,
        kind,
        out,
        force,
        window,
    } = cmd
    {
        let report = load_report(file, window, ctx)?;
        ExportLogic::export(&report, *kind, *format, out, *force)?;
    }
    Ok(())
}
