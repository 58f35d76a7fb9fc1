use clap::Parser;
use company_employee_api::core::ConfigProvider;
use company_employee_api::utils::error::ErrorSeverity;
use company_employee_api::utils::{logger, validation::Validate};
use company_employee_api::{api, AppState, CliConfig, Directory, DirectoryError, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();
    let verbose = cli.verbose;

    // 設定檔可選，命令列參數優先
    match cli.config.clone() {
        Some(path) => {
            let config = match TomlConfig::from_file(&path) {
                Ok(config) => config.with_overrides(cli.bind_override(), cli.json_logs),
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            };
            run(config, verbose).await
        }
        None => run(cli, verbose).await,
    }
}

async fn run<C>(config: C, verbose: bool) -> anyhow::Result<()>
where
    C: ConfigProvider + Validate + std::fmt::Debug,
{
    // 初始化日誌
    if config.json_logs() {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("Starting company-employee-api");
    if verbose {
        tracing::debug!("Effective config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let policy = config.severance_policy();
    tracing::info!(
        "Severance policy: {} per {} days served",
        policy.amount_per_year,
        policy.days_per_year
    );

    let state = AppState::new(Directory::with_policy(policy));

    if let Err(e) = api::serve(&config, state).await {
        exit_with(&e);
    }

    Ok(())
}

fn exit_with(e: &DirectoryError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
