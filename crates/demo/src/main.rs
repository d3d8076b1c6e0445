use shopfront_demo::{DemoConfig, run};

fn main() -> anyhow::Result<()> {
    shopfront_observability::init();

    let config = DemoConfig::from_env()?;
    tracing::info!(?config, "starting demo");

    let stdout = std::io::stdout();
    run(&config, &mut stdout.lock())
}
