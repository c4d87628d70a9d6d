//! wmata - lists WMATA Metrorail stations.

/// Application configuration (TOML).
mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
#[cfg(not(feature = "otel"))]
use tracing_subscriber::fmt;
#[cfg(feature = "otel")]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(feature = "otel")]
use tracing_subscriber::util::SubscriberInitExt;
use wmata_api::WmataClient;
use wmata_api::rail::{LocalRailStationInfoApi, RailStationInfo, Station};

use crate::config::{AppConfig, ClientConfig, resolve_config_path};

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// WMATA API subscription key.
    #[arg(long = "wmata_key")]
    wmata_key: String,

    /// Only list stations on this line (e.g. RD, BL, YL, OR, GR, SV).
    #[arg(long = "metro_line")]
    metro_line: Option<String>,

    /// Override config directory.
    #[arg(long)]
    dir: Option<PathBuf>,
}

/// Builds the WMATA client from the key and `[client]` settings.
///
/// # Errors
///
/// Returns an error if `base_url` is invalid or the client fails to build.
#[instrument(skip_all)]
fn build_client(api_key: &str, settings: &ClientConfig) -> Result<WmataClient> {
    let mut builder = WmataClient::builder()
        .api_key(api_key)
        .timeout(settings.timeout())
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
    if let Some(url) = settings.parsed_base_url()? {
        builder = builder.base_url(url);
    }
    builder.build().context("failed to build WMATA client")
}

/// Fetches stations, optionally only those on `line`.
///
/// # Errors
///
/// Returns an error if the API request fails.
async fn list_stations(
    api: &(impl LocalRailStationInfoApi + Sync),
    line: Option<&str>,
) -> Result<Vec<Station>> {
    api.stations(line)
        .await
        .context("failed to fetch stations")
}

/// Logs one line per station followed by the total.
fn print_stations(stations: &[Station]) {
    for station in stations {
        let lines: Vec<&str> = station.line_codes().collect();
        tracing::info!("{}\t{}\t{}", station.code, station.name, lines.join(","));
    }
    tracing::info!("Total: {} stations", stations.len());
}

/// Lists stations using the CLI arguments and config file.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded, the client fails to
/// build, or the API request fails.
#[instrument(skip_all)]
async fn run(cli: &Cli) -> Result<()> {
    let config_path = resolve_config_path(cli.dir.as_ref())?;
    let config = AppConfig::load(&config_path)?;
    let client = build_client(&cli.wmata_key, &config.client)?;
    let rail = RailStationInfo::new(client, config.client.format);

    let stations = list_stations(&rail, cli.metro_line.as_deref()).await?;
    print_stations(&stations);

    Ok(())
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if listing stations fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    #[cfg(not(feature = "otel"))]
    {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(false)
            .init();
    }

    #[cfg(feature = "otel")]
    {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

        let otel_layer = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .and_then(|_| {
                let exporter = opentelemetry_otlp::SpanExporter::builder()
                    .with_http()
                    .build()
                    .ok()?;

                let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
                    .with_simple_exporter(exporter)
                    .build();

                let tracer = opentelemetry::trace::TracerProvider::tracer(
                    &tracer_provider,
                    env!("CARGO_PKG_NAME"),
                );
                opentelemetry::global::set_tracer_provider(tracer_provider);

                Some(tracing_opentelemetry::layer().with_tracer(tracer))
            });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(otel_layer)
            .init();
    }

    let cli = Cli::parse();
    run(&cli).await
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::sync::Mutex;

    use tracing::subscriber::with_default;
    use tracing_mock::{expect, subscriber};
    use wmata_api::rail::{
        Line, PathItem, StationEntrance, StationParking, StationTime, StationToStationInfo,
    };
    use wmata_api::{Error, SearchArea};

    use super::*;

    /// Rail API stub that records the line filter it was called with.
    struct MockRailApi {
        stations: Vec<Station>,
        requested_line: Mutex<Option<Option<String>>>,
    }

    impl MockRailApi {
        fn new(stations: Vec<Station>) -> Self {
            Self {
                stations,
                requested_line: Mutex::new(None),
            }
        }
    }

    impl LocalRailStationInfoApi for MockRailApi {
        async fn lines(&self) -> wmata_api::Result<Vec<Line>> {
            Ok(Vec::new())
        }

        async fn stations(&self, line_code: Option<&str>) -> wmata_api::Result<Vec<Station>> {
            *self.requested_line.lock().unwrap() = Some(line_code.map(String::from));
            if line_code == Some("XX") {
                return Err(Error::Status {
                    status: 400,
                    message: String::from("Invalid line code"),
                });
            }
            Ok(self.stations.clone())
        }

        async fn station_info(&self, _station_code: &str) -> wmata_api::Result<Station> {
            Ok(Station::default())
        }

        async fn parking(&self, _station_code: &str) -> wmata_api::Result<Vec<StationParking>> {
            Ok(Vec::new())
        }

        async fn path_between(
            &self,
            _from_station: &str,
            _to_station: &str,
        ) -> wmata_api::Result<Vec<PathItem>> {
            Ok(Vec::new())
        }

        async fn station_timings(
            &self,
            _station_code: &str,
        ) -> wmata_api::Result<Vec<StationTime>> {
            Ok(Vec::new())
        }

        async fn station_to_station(
            &self,
            _from_station: Option<&str>,
            _to_station: Option<&str>,
        ) -> wmata_api::Result<Vec<StationToStationInfo>> {
            Ok(Vec::new())
        }

        async fn entrances(
            &self,
            _area: Option<SearchArea>,
        ) -> wmata_api::Result<Vec<StationEntrance>> {
            Ok(Vec::new())
        }
    }

    fn station(code: &str, name: &str, lines: &[&str]) -> Station {
        let mut codes = lines.iter().map(|l| Some(String::from(*l)));
        Station {
            code: String::from(code),
            name: String::from(name),
            line_code1: codes.next().flatten(),
            line_code2: codes.next().flatten(),
            line_code3: codes.next().flatten(),
            line_code4: codes.next().flatten(),
            ..Station::default()
        }
    }

    #[tokio::test]
    async fn test_list_stations_passes_line_filter() {
        // Arrange
        let mock = MockRailApi::new(vec![station("A01", "Metro Center", &["RD"])]);

        // Act
        let stations = list_stations(&mock, Some("RD")).await.unwrap();

        // Assert
        assert_eq!(stations.len(), 1);
        assert_eq!(
            *mock.requested_line.lock().unwrap(),
            Some(Some(String::from("RD")))
        );
    }

    #[tokio::test]
    async fn test_list_stations_without_filter() {
        // Arrange
        let mock = MockRailApi::new(Vec::new());

        // Act
        let stations = list_stations(&mock, None).await.unwrap();

        // Assert
        assert!(stations.is_empty());
        assert_eq!(*mock.requested_line.lock().unwrap(), Some(None));
    }

    #[tokio::test]
    async fn test_list_stations_adds_context_to_errors() {
        // Arrange
        let mock = MockRailApi::new(Vec::new());

        // Act
        let err = list_stations(&mock, Some("XX")).await.unwrap_err();

        // Assert
        assert_eq!(err.to_string(), "failed to fetch stations");
        assert!(format!("{err:#}").contains("Invalid line code"));
    }

    #[test]
    fn test_print_stations() {
        // Arrange
        let stations = vec![
            station("A01", "Metro Center", &["RD"]),
            station("C01", "Metro Center", &["BL", "OR", "SV"]),
        ];
        let (subscriber, handle) = subscriber::mock()
            .event(expect::event().with_fields(expect::msg("A01\tMetro Center\tRD")))
            .event(expect::event().with_fields(expect::msg("C01\tMetro Center\tBL,OR,SV")))
            .event(expect::event().with_fields(expect::msg("Total: 2 stations")))
            .only()
            .run_with_handle();

        // Act
        with_default(subscriber, || {
            print_stations(&stations);
        });

        // Assert
        handle.assert_finished();
    }

    #[test]
    fn test_build_client_uses_config_base_url() {
        // Arrange
        let settings = ClientConfig {
            base_url: Some(String::from("http://127.0.0.1:8080/")),
            ..ClientConfig::default()
        };

        // Act
        let client = build_client("key", &settings).unwrap();

        // Assert
        assert_eq!(client.base_url().as_str(), "http://127.0.0.1:8080/");
    }

    #[test]
    fn test_build_client_keeps_base_url_path_prefix() {
        // Arrange
        let settings = ClientConfig {
            base_url: Some(String::from("https://proxy.example/wmata")),
            ..ClientConfig::default()
        };

        // Act
        let client = build_client("key", &settings).unwrap();

        // Assert
        assert_eq!(
            client.endpoint("Rail.svc/json/jStations").unwrap().as_str(),
            "https://proxy.example/wmata/Rail.svc/json/jStations"
        );
    }

    #[test]
    fn test_build_client_rejects_empty_key() {
        // Arrange
        let settings = ClientConfig::default();

        // Act
        let result = build_client("", &settings);

        // Assert
        assert!(result.is_err());
    }
}
