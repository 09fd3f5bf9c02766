use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "salary-survey")]
#[command(about = "Average programmer salaries per language from HeadHunter and SuperJob")]
pub struct CliConfig {
    #[arg(long, help = "Optional TOML file overriding the built-in search settings")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
