use std::io;

use console::Style;
use log::{Level, LevelFilter};

use crate::types::config::{colors_enabled, config};

/// Install the global logger. Log records go to stderr so stdout only
/// ever carries the report.
pub fn init_logging() {
    let level = config()
        .log()
        .level()
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::Warn);
    let colored = colors_enabled();

    let dispatch = fern::Dispatch::new()
        .format(move |out, message, record| {
            if colored {
                let style = level_style(record.level());
                out.finish(format_args!(
                    "{} {}",
                    style.apply_to(format!("[{}]", record.level())),
                    message
                ))
            } else {
                out.finish(format_args!(
                    "{} [{}] {}",
                    chrono::Local::now().format("%H:%M:%S"),
                    record.level(),
                    message
                ))
            }
        })
        .level(level)
        .chain(io::stderr());

    // Only the first logger wins; a second init is a no-op.
    let _ = dispatch.apply();
}

fn level_style(level: Level) -> Style {
    let style = Style::new().force_styling(true);
    match level {
        Level::Error => style.red().bold(),
        Level::Warn => style.yellow(),
        Level::Info => style.green(),
        Level::Debug => style.cyan(),
        Level::Trace => style.dim(),
    }
}
