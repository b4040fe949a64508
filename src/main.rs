// SPDX-License-Identifier: MPL-2.0
use segment_slider::app::{self, parse_list, Flags};
use segment_slider::ui::theming::ThemeMode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const USAGE: &str = "\
Usage: segment-slider [OPTIONS]

Options:
  --config-dir <DIR>     Read and write settings.toml in DIR
  --values <LIST>        Comma separated stop values (e.g. 10,20,30)
  --labels <LIST>        Comma separated stop labels (e.g. Low,Mid,High)
  --no-labels            Draw the compact slider without labels
  --no-animation         Jump between stops instead of animating
  --theme <MODE>         light, dark or system
  -h, --help             Print this help
";

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, String> {
    let config_dir: Option<String> = args
        .opt_value_from_str("--config-dir")
        .map_err(|err| err.to_string())?;
    let values: Option<String> = args
        .opt_value_from_str("--values")
        .map_err(|err| err.to_string())?;
    let labels: Option<String> = args
        .opt_value_from_str("--labels")
        .map_err(|err| err.to_string())?;
    let theme: Option<String> = args
        .opt_value_from_str("--theme")
        .map_err(|err| err.to_string())?;

    let theme = match theme {
        Some(raw) => {
            Some(ThemeMode::parse(&raw).ok_or_else(|| format!("unknown theme '{raw}'"))?)
        }
        None => None,
    };

    let flags = Flags {
        config_dir,
        values: values.as_deref().map(parse_list),
        labels: labels.as_deref().map(parse_list),
        no_labels: args.contains("--no-labels"),
        no_animation: args.contains("--no-animation"),
        theme,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(format!("unexpected arguments: {remaining:?}"));
    }
    Ok(flags)
}

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer())
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{USAGE}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            tracing::error!(%err, "invalid command line");
            eprintln!("error: {err}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    tracing::info!(?flags, "starting segment slider demo");
    app::run(flags)
}
