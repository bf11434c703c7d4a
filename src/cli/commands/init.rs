use crate::cli::commands::AppContext;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Write the default configuration file.
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        let path = &ctx.config_path;

        if path.exists() && !*force {
            warning(format!(
                "Configuration file already exists: {} (use --force to overwrite)",
                path.display()
            ));
            return Ok(());
        }

        Config::default().save(path)?;
        success(format!("Config file: {}", path.display()));
    }
    Ok(())
}
