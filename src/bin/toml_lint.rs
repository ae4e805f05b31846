use a11y_lint::config::toml_config::TomlConfig;
use a11y_lint::utils::{logger, validation::Validate};
use a11y_lint::{LintEngine, LintPipeline, LocalStorage};
use clap::Parser;

#[derive(Parser)]
#[command(name = "toml-lint")]
#[command(about = "Accessibility linter driven by a TOML audit profile")]
struct Args {
    /// Path to TOML profile file
    #[arg(short, long, default_value = "a11y-lint.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from profile
    #[arg(long)]
    monitor: Option<bool>,

    /// Override strict mode setting from profile
    #[arg(long)]
    strict: Option<bool>,

    /// Dry run - show what would be audited without executing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based accessibility linter");
    tracing::info!("📁 Loading profile from: {}", args.config);

    // 載入 TOML 設定檔
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load profile '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 應用命令列覆蓋設定
    if let Some(strict) = args.strict {
        config.report.strict = Some(strict);
        tracing::info!("🔧 Strict mode overridden to: {}", strict);
    }

    // 驗證設定檔
    if let Err(e) = config.validate() {
        tracing::error!("❌ Profile validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Profile loaded and validated successfully");

    // 顯示設定摘要
    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No audit will be performed");
        perform_dry_run(&config);
        return Ok(());
    }

    // 決定監控設定
    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());

    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 創建存儲和審查管道
    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = LintPipeline::new(storage, config);

    // 創建審查引擎並運行
    let engine = LintEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Accessibility audit completed successfully!");
            tracing::info!("📁 Report saved to: {}", output_path);
            println!("✅ Accessibility audit completed successfully!");
            println!("📁 Report saved to: {}", output_path);
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Accessibility audit failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                a11y_lint::utils::error::ErrorSeverity::Low => 0, // 警告，但成功
                a11y_lint::utils::error::ErrorSeverity::Medium => 2, // 重試錯誤
                a11y_lint::utils::error::ErrorSeverity::High => 1, // 處理錯誤
                a11y_lint::utils::error::ErrorSeverity::Critical => 3, // 系統錯誤
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Profile Summary:");
    println!(
        "  Profile: {} v{}",
        config.profile.name, config.profile.version
    );
    println!(
        "  Source: {} ({})",
        config.source.endpoint, config.source.r#type
    );
    println!("  Output: {}", config.output_path());
    println!("  Strict Mode: {}", config.is_strict());

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn perform_dry_run(config: &TomlConfig) {
    println!("🔍 Dry Run Analysis:");
    println!();

    // 配置來源分析
    println!("📡 Config Source Analysis:");
    println!("  Endpoint: {}", config.source.endpoint);
    println!("  Type: {}", config.source.r#type);

    if let Some(timeout) = config.source.timeout_seconds {
        println!("  Timeout: {}s", timeout);
    }

    // 檢查門檻分析
    let thresholds = config.thresholds();
    println!();
    println!("⚙️ Check Thresholds:");
    println!("  Text contrast (vs background): >= {}", thresholds.text_contrast);
    println!("  Graphic contrast (adjacent): >= {}", thresholds.graphic_contrast);
    println!("  Legend entries: <= {}", thresholds.max_legend_entries);
    println!("  Visual encodings: <= {}", thresholds.max_encodings);
    println!("  Touch targets: >= {}px", thresholds.min_touch_target);

    // 輸出分析
    println!();
    println!("💾 Report Configuration:");
    println!("  Path: {}", config.output_path());
    println!("  Bundle: a11y_report.zip (report.json, summary.csv, summary.tsv)");
    if config.is_strict() {
        println!("  ⚠️ Strict mode: run fails if any checkpoint fails");
    }

    println!();
    println!("✅ Dry run analysis complete. Use --verbose for more details during actual run.");
}
