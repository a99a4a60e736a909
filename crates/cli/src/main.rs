#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fabric_cli::telemetry::init_tracing();
    fabric_cli::run().await
}
