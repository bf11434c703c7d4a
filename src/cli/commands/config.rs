use crate::cli::commands::AppContext;
use crate::cli::parser::Commands;
use crate::core::config::ConfigLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", ctx.config_path.display());
            println!("{}", serde_yaml::to_string(&ctx.cfg)?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            let problems = ctx.cfg.check();
            if problems.is_empty() {
                success("Configuration is valid");
            } else {
                for p in &problems {
                    error(p);
                }
                return Err(AppError::Config(format!(
                    "{} problem(s) found",
                    problems.len()
                )));
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            if !ctx.config_path.exists() {
                ctx.cfg.save(&ctx.config_path)?;
            }
            ConfigLogic::edit(&ctx.config_path, editor)?;
        }

        if !*print_config && !*check && !*edit_config {
            if ctx.config_path.exists() {
                ConfigLogic::print(&ctx.config_path)?;
            } else {
                warning(format!(
                    "No configuration file at {}, showing defaults (run `init` to create it)",
                    ctx.config_path.display()
                ));
                println!("{}", serde_yaml::to_string(&ctx.cfg)?);
            }
        }
    }

    Ok(())
}
