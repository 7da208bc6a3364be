use activity_roster::config::toml_config::TomlConfig;
use activity_roster::utils::error::{ErrorSeverity, RosterError};
use activity_roster::utils::{logger, validation::Validate};
use activity_roster::{CliConfig, ServiceConfig, SharedStore};
use clap::Parser;
use std::sync::Arc;

fn exit_code(e: &RosterError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(e: RosterError) -> ! {
    tracing::error!(
        "❌ Startup failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(exit_code(&e));
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("🛑 Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting activity-roster");
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = cli.validate() {
        fail(e);
    }

    // 載入 TOML 配置 (可選)
    let file = match cli.catalog.as_deref() {
        Some(path) => {
            tracing::info!("📁 Loading catalog from: {}", path);
            let file = TomlConfig::from_file(path).unwrap_or_else(|e| fail(e));
            if let Err(e) = file.validate() {
                fail(e);
            }
            Some(file)
        }
        None => None,
    };

    let config = ServiceConfig::resolve(&cli, file.as_ref());
    if let Err(e) = config.validate() {
        fail(e);
    }

    let store = config.build_store().unwrap_or_else(|e| fail(e));
    let addr = config.bind_addr().unwrap_or_else(|e| fail(e));
    tracing::info!(
        "📋 {} activities loaded (capacity {})",
        config.activities.len(),
        if config.enforce_capacity {
            "enforced"
        } else {
            "advisory"
        }
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let bound_addr = listener.local_addr()?;
    tracing::info!("✅ Listening on http://{}", bound_addr);
    println!("🚀 Server running at http://{}/activities", bound_addr);

    let store: SharedStore = Arc::new(store);
    activity_roster::serve(listener, store, shutdown_signal()).await?;

    tracing::info!("👋 Server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startup_failures_never_exit_zero() {
        let request_level = RosterError::InvalidInput {
            field: "email".to_string(),
            reason: "must not be empty".to_string(),
        };
        assert_eq!(request_level.severity(), ErrorSeverity::Low);
        assert_eq!(exit_code(&request_level), 1);

        let catalog = RosterError::InvalidCatalog {
            field: "Chess Club.max_participants".to_string(),
            reason: "must be at least 1".to_string(),
        };
        assert_eq!(exit_code(&catalog), 1);

        let io = RosterError::IoError(std::io::Error::other("disk"));
        assert_eq!(exit_code(&io), 3);
    }
}
