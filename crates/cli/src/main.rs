use std::io::{BufWriter, Write};

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    bundlebench_observability::init();

    let config = bundlebench_cli::DemoConfig::from_env().context("failed to load demo configuration")?;
    tracing::info!(
        fixture_size = config.fixture_size,
        variant = %config.variant,
        heap_strategy = %config.heap_strategy,
        stack_strategy = %config.stack_strategy,
        "starting demo"
    );

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    bundlebench_cli::run(&config, &mut out).context("demo run failed")?;
    out.flush().context("failed to flush stdout")?;

    Ok(())
}
