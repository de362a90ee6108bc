use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = &cli.command
    {
        let path = Config::resolve_path(cli.config.as_deref());

        if !*print_config && !*check && !*edit_config {
            info("Nothing to do: use --print, --check or --edit.");
            return Ok(());
        }

        if *check {
            ConfigLogic::check(&path)?;
        }

        if *print_config {
            // dopo --check mostra la versione aggiornata
            let current = if *check { Config::load(&path)? } else { cfg.clone() };
            ConfigLogic::print(&current, &path)?;
        }

        if *edit_config {
            ConfigLogic::edit(&path, editor)?;
        }
    }

    Ok(())
}
