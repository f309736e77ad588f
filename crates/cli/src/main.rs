use std::io;

use stockroom_cli::AppConfig;
use stockroom_observability::LogFormat;

fn main() -> anyhow::Result<()> {
    stockroom_observability::init(LogFormat::Text);

    let config = AppConfig::from_env();
    let mut stdout = io::stdout().lock();
    stockroom_cli::run(&config, &mut stdout)?;

    Ok(())
}
