use clap::Parser;
use salary_survey::adapters::http_client;
use salary_survey::config::credentials::load_dotenv;
use salary_survey::utils::{logger, validation::Validate};
use salary_survey::{CliConfig, SearchConfig, SuperJobKey, SurveyEngine, SurveyError};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);
    load_dotenv();

    tracing::info!("Starting salary-survey");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(&cli).await {
        tracing::error!("❌ Survey failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: &CliConfig) -> Result<(), SurveyError> {
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("📋 Loading search settings from {}", path.display());
            SearchConfig::from_file(path)?
        }
        None => SearchConfig::default(),
    };
    config.validate()?;

    let engine = SurveyEngine::new(http_client()?, config);

    println!("{}", engine.headhunter_table().await?);

    // SuperJob 的金鑰在此階段才讀取，缺少時 HeadHunter 的表格已經輸出
    let api_key = SuperJobKey::from_env()?;
    println!("{}", engine.superjob_table(api_key).await?);

    tracing::info!("✅ Survey completed");
    Ok(())
}
