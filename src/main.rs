use calgary_dogs::core::ConfigProvider;
use calgary_dogs::utils::error::ErrorSeverity;
use calgary_dogs::utils::{logger, validation::Validate};
use calgary_dogs::{AnalysisEngine, CliConfig, FileSource, Settings};
use clap::Parser;

fn main() {
    let cli = CliConfig::parse();

    // 設定檔讀取失敗時日誌尚未初始化，直接輸出到 stderr
    let settings = match Settings::from_cli(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ Failed to load config file: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if settings.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(settings.verbose, settings.log_level.as_deref());
    }

    tracing::info!("Starting calgary-dogs");
    tracing::debug!("Settings: {:?}", settings);

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let source = FileSource::new(settings.data_path(), settings.sheet_name().map(String::from));
    let engine = AnalysisEngine::new(source)
        .with_format(settings.output_format())
        .with_breed(settings.preselected_breed().map(String::from));

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();

    // JSON 模式下提示文字走 stderr，stdout 只有報告
    let result =
        engine.run_with_prompts(&mut stdin.lock(), &mut stdout.lock(), &mut stderr.lock());
    if let Err(e) = result {
        tracing::error!(
            "Analysis failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("   {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}
