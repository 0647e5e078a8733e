use chamber_app::cli::Invocation;
use chamber_app::logging::{apply_level, init_logging};
use chamber_app::run::run;
use chamber_core::config::load_config;

fn main() -> anyhow::Result<()> {
    let filter_handle = init_logging();

    let config = load_config()?;

    tracing::debug!(config = ?config, "Configuration loaded");

    apply_level(&filter_handle, &config.logging.level);

    let invocation = Invocation::build(std::env::args())?;
    let tz = config.calendar.tz()?;
    let now = chrono::Utc::now().with_timezone(&tz).naive_local();

    let stdout = std::io::stdout();
    run(&invocation, &config.calendar, now, &mut stdout.lock())?;

    Ok(())
}
