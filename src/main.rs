use counter_sync::{app::run_session, ClientConfig, CounterSyncController, HttpBackend, TerminalDisplay};
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(run());
    // A pending stdin read sits on the blocking pool and cannot be cancelled.
    runtime.shutdown_background();
    result
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ClientConfig::from_env();
    info!("using counter api at {}", config.api_base);

    let controller = CounterSyncController::new(
        HttpBackend::new(config.api_base),
        TerminalDisplay,
        config.default_value,
    );
    controller.refresh_display().await;
    controller.initialize().await;

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    tokio::select! {
        result = run_session(&controller, stdin, &mut stdout) => result?,
        _ = tokio::signal::ctrl_c() => info!("interrupted"),
    }

    Ok(())
}
