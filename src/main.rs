use clap::Parser;
use persona_tagger::config::redact_secret;
use persona_tagger::utils::error::{ErrorSeverity, TaggerError};
use persona_tagger::utils::{logger, validation::Validate};
use persona_tagger::{app, AppState, CliConfig};
use tokio::net::TcpListener;

fn exit_with(e: &TaggerError) -> ! {
    tracing::error!(
        "❌ Startup failed: {} (code: {}, severity: {:?})",
        e,
        e.error_code(),
        e.severity()
    );
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2, // 外部服務暫時無法使用，可重試
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(cli.verbose, cli.json_logs);
    tracing::info!("Starting persona-tagger");

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };
    if cli.verbose {
        tracing::debug!(
            "Resolved config: bind={}, model={}, base_url={}, api_key={}, indexing={}",
            config.bind_address,
            config.model,
            config.openai_base_url,
            redact_secret(&config.openai_api_key),
            config.indexing_enabled
        );
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let gateway = match app::build_gateway(&config) {
        Ok(gateway) => gateway,
        Err(e) => exit_with(&e),
    };
    if let Err(e) = gateway.prepare().await {
        exit_with(&e);
    }

    let listener = TcpListener::bind(&config.bind_address).await?;
    tracing::info!("🚀 Listening on http://{}", listener.local_addr()?);

    app::serve(listener, AppState::new(gateway)).await?;

    tracing::info!("✅ Server stopped");
    Ok(())
}
