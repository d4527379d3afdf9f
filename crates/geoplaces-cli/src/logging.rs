use log::LevelFilter;
use std::io::Write;

/// Level used when neither `--log-level` nor `RUST_LOG` is given.
const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

/// Sets up `env_logger` from `RUST_LOG`; an explicit `--log-level` takes precedence.
pub fn init_logger(level: Option<LevelFilter>) -> anyhow::Result<()> {
    let rust_log = std::env::var("RUST_LOG").ok();
    logger_builder(level, rust_log.as_deref()).try_init()?;
    Ok(())
}

fn logger_builder(level: Option<LevelFilter>, rust_log: Option<&str>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();

    // Quiet the HTTP stack first so RUST_LOG can still turn it back up.
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.filter_module("hyper_util", LevelFilter::Info);
    builder.filter_module("rustls", LevelFilter::Warn);

    if let Some(spec) = rust_log {
        builder.parse_filters(spec);
    }
    match (level, rust_log) {
        (Some(level), _) => {
            builder.filter_level(level);
            builder.filter_module("geoplaces_core", level);
        }
        (None, Some(_)) => {}
        (None, None) => {
            builder.filter_level(DEFAULT_LEVEL);
        }
    }

    builder.format(|buf, record| {
        writeln!(buf, "[{:<5}] {}", record.level(), record.args())
    });
    builder
}
