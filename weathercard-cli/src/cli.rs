use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::fmt;
use tracing::debug;

use weathercard_core::{
    Config, ForecastRequest, IpApiLocator, LocationQuery, OpenMeteoGeocoder, OpenMeteoProvider,
    RenderOptions, Units, WeatherProvider, i18n, render::DEFAULT_DAYS, render_card,
    resolve_location,
};

use crate::configure;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "weathercard",
    version,
    about = "Current weather and forecast as a terminal card",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub show: ShowArgs,

    /// Log more to stderr (-v debug, -vv trace). RUST_LOG overrides this.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactively edit the saved defaults.
    Configure,
}

/// Options for showing the card, the default action.
#[derive(Debug, Default, Args)]
pub struct ShowArgs {
    /// City name for the weather lookup.
    #[arg(long)]
    pub city: Option<String>,

    /// Latitude for the weather lookup (needs --lon).
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude for the weather lookup (needs --lat).
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Use imperial units (°F, mph).
    #[arg(long, conflicts_with = "metric")]
    pub imperial: bool,

    /// Use metric units (°C, km/h). This is the default.
    #[arg(long)]
    pub metric: bool,

    /// Disable color codes in the output.
    #[arg(long)]
    pub no_color: bool,

    /// Number of forecast days.
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=7))]
    pub days: Option<u8>,

    /// Language code (en, de, es, fr, it, zh). Detected from the locale if absent.
    #[arg(long)]
    pub lang: Option<String>,
}

/// Flags merged over the config file over built-in defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub query: LocationQuery,
    pub units: Units,
    pub days: usize,
    pub color: bool,
    pub lang: Option<String>,
}

impl Settings {
    pub fn resolve(args: &ShowArgs, config: &Config, no_color_env: bool) -> Self {
        let units = if args.imperial {
            Units::Imperial
        } else if args.metric {
            Units::Metric
        } else {
            config.units.unwrap_or_default()
        };

        let days = args
            .days
            .or(config.days)
            .map_or(DEFAULT_DAYS, usize::from);

        let color = !args.no_color && !no_color_env && config.color.unwrap_or(true);

        Self {
            query: LocationQuery {
                city: args.city.clone().or_else(|| config.city.clone()),
                latitude: args.lat,
                longitude: args.lon,
            },
            units,
            days,
            color,
            lang: args.lang.clone().or_else(|| config.lang.clone()),
        }
    }
}

/// Error context carrying a hint printed under the error message.
#[derive(Debug)]
pub struct Tip(pub &'static str);

impl fmt::Display for Tip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Print `err` to stderr, with its tip on a separate line if it has one.
pub fn report(err: &anyhow::Error) {
    match err.downcast_ref::<Tip>() {
        Some(tip) => {
            let cause: Vec<String> = err.chain().skip(1).map(ToString::to_string).collect();
            eprintln!("Error: {}", cause.join(": "));
            eprintln!("{tip}");
        }
        None => eprintln!("Error: {err:#}"),
    }
}

/// `NO_COLOR` set to anything non-empty.
fn no_color_from_env() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Command::Configure) => configure::run(),
            None => show(&self.show).await,
        }
    }
}

async fn show(args: &ShowArgs) -> anyhow::Result<()> {
    let config = Config::load()?;
    let settings = Settings::resolve(args, &config, no_color_from_env());
    debug!(?settings, "effective settings");

    let lang = i18n::select(settings.lang.as_deref());

    let geocoder = OpenMeteoGeocoder::new()?;
    let ip_locator = IpApiLocator::new()?;
    let location = resolve_location(&settings.query, &geocoder, &ip_locator)
        .await
        .context(Tip(lang.tip_manual_location))?;

    let provider = OpenMeteoProvider::new()?;
    let request = ForecastRequest {
        latitude: location.latitude,
        longitude: location.longitude,
        days: settings.days,
        units: settings.units,
    };
    let data = provider
        .fetch_weather(&request)
        .await
        .context("Unable to fetch weather data")?;

    let options = RenderOptions {
        units: settings.units,
        days: settings.days,
        color_enabled: settings.color,
        lang,
    };
    print!("{}", render_card(&location.display_name(), &data, &options));

    Ok(())
}
