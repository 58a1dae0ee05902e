use clap::Parser;
use cobertura_review::cli::{
    Cli, Commands, execute_check_command, execute_table_command, execute_warn_command,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Warn { args, threshold } => {
            execute_warn_command(&args, &threshold)?;
        }
        Commands::Table { args, columns } => {
            execute_table_command(&args, &columns)?;
        }
        Commands::Check {
            args,
            threshold,
            columns,
        } => {
            execute_check_command(&args, threshold.as_deref(), &columns, true)?;
        }
    }

    Ok(())
}
