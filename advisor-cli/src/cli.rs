use std::process::ExitCode;

use advisor_core::{
    Config, Coordinates, FixedLocation, OpenWeatherFetcher, Phase, SessionController,
    WeatherFetcher, WeatherQuery, fetcher_from_config,
};
use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use inquire::{
    Confirm, CustomType, InquireError, Password, Text,
    validator::{ErrorMessage, Validation},
};

use crate::render::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "advisor", version, about = "Weather & clothing advisor")]
pub struct Cli {
    /// OpenWeather API key; overrides the configured one.
    #[arg(long, global = true, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Defaults to `interactive`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the API key and an optional home location.
    Configure,

    /// Show weather and clothing advice once, then exit.
    Show {
        /// City name. Without it the current location is used.
        city: Option<String>,

        #[command(flatten)]
        location: LocationArgs,
    },

    /// Search cities repeatedly, starting from the current location.
    Interactive {
        #[command(flatten)]
        location: LocationArgs,
    },
}

/// Where "current location" comes from.
#[derive(Debug, Clone, Default, Args)]
pub struct LocationArgs {
    /// Latitude of the current location.
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude of the current location.
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Behave as if location access were denied.
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    pub no_locate: bool,
}

impl LocationArgs {
    fn geolocator(&self, config: &Config) -> FixedLocation {
        if self.no_locate {
            return FixedLocation::unavailable();
        }
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => FixedLocation(Some(Coordinates::new(lat, lon))),
            _ => FixedLocation(config.home),
        }
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        let config = Config::load()?;
        let api_key = self.api_key.as_deref();

        match self.command {
            Some(Command::Configure) => configure(config),
            Some(Command::Show { city, location }) => {
                let session = new_session(&config, api_key)?;
                show(session, city, location.geolocator(&config)).await
            }
            Some(Command::Interactive { location }) => {
                let session = new_session(&config, api_key)?;
                interactive(session, location.geolocator(&config)).await
            }
            None => {
                let session = new_session(&config, api_key)?;
                interactive(session, LocationArgs::default().geolocator(&config)).await
            }
        }
    }
}

fn new_session(
    config: &Config,
    api_key: Option<&str>,
) -> anyhow::Result<SessionController<OpenWeatherFetcher>> {
    let fetcher = fetcher_from_config(config, api_key)?;
    Ok(SessionController::new(fetcher))
}

fn configure(mut config: Config) -> anyhow::Result<ExitCode> {
    let has_key = config.api_key().is_ok();
    let help = if has_key {
        "Leave empty to keep the current key"
    } else {
        "Get one at https://openweathermap.org/api"
    };

    let key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .with_help_message(help)
        .prompt()
        .context("Failed to read API key")?;

    let key = key.trim();
    if !key.is_empty() {
        config.set_api_key(key.to_string());
    } else if !has_key {
        bail!("API key must not be empty");
    }

    let set_home = Confirm::new("Set a home location to use when none is given?")
        .with_default(config.home.is_some())
        .prompt()
        .context("Failed to read answer")?;

    if set_home {
        let latitude = CustomType::<f64>::new("Latitude:")
            .with_error_message("Please enter a number")
            .with_validator(validate_latitude)
            .prompt()
            .context("Failed to read latitude")?;
        let longitude = CustomType::<f64>::new("Longitude:")
            .with_error_message("Please enter a number")
            .with_validator(validate_longitude)
            .prompt()
            .context("Failed to read longitude")?;
        config.set_home(Some(Coordinates::new(latitude, longitude)));
    } else {
        config.set_home(None);
    }

    let path = config.save()?;
    println!("Configuration saved to {}", path.display());

    Ok(ExitCode::SUCCESS)
}

fn validate_latitude(value: &f64) -> Result<Validation, inquire::CustomUserError> {
    Ok(check_range(*value, 90.0, "Latitude"))
}

fn validate_longitude(value: &f64) -> Result<Validation, inquire::CustomUserError> {
    Ok(check_range(*value, 180.0, "Longitude"))
}

fn check_range(value: f64, limit: f64, what: &str) -> Validation {
    if (-limit..=limit).contains(&value) {
        Validation::Valid
    } else {
        Validation::Invalid(ErrorMessage::Custom(format!(
            "{what} must be between -{limit} and {limit}"
        )))
    }
}

async fn show<F: WeatherFetcher>(
    mut session: SessionController<F>,
    city: Option<String>,
    geolocator: FixedLocation,
) -> anyhow::Result<ExitCode> {
    let phase = match city {
        Some(city) => {
            session.set_city_input(city);
            session.submit().await
        }
        None => session.initialize(&geolocator).await,
    };

    print!("{}", render(session.state()));

    Ok(match phase {
        Phase::Failure => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}

async fn interactive<F: WeatherFetcher>(
    mut session: SessionController<F>,
    geolocator: FixedLocation,
) -> anyhow::Result<ExitCode> {
    session.initialize(&geolocator).await;
    println!("🌤️ Weather & Clothing Advisor\n");
    print!("{}", render(session.state()));

    loop {
        let current = session.state().city_input.clone();
        let input = match Text::new("City:")
            .with_placeholder("Enter city name...")
            .with_initial_value(&current)
            .with_help_message("Esc to quit")
            .prompt()
        {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e).context("Failed to read city"),
        };

        session.set_city_input(input);

        let Some(query) = WeatherQuery::by_name(&session.state().city_input) else {
            continue;
        };
        let Some(pending) = session.begin(query) else {
            continue;
        };

        print!("{}", render(session.state()));
        let result = session.fetcher().fetch(pending.query()).await;
        session.complete(pending, result);

        println!();
        print!("{}", render(session.state()));
    }

    Ok(ExitCode::SUCCESS)
}
