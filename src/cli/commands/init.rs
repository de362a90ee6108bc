use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// Creates the config directory and a configuration file with defaults
/// (an existing file is left untouched).
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Config::resolve_path(cli.config.as_deref());

    if !cli.test {
        println!("⚙️  Initializing rTimediff…");
        println!("📄 Config file : {}", path.display());
    }

    Config::init_all(&path, cli.test)?;

    if !cli.test {
        success("rTimediff initialization completed!");
    }
    Ok(())
}
