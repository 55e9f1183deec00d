use std::cmp::Ordering;

use clap::{Parser, Subcommand};
use semverish::{Version, VersionError};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Library(#[from] VersionError),

    #[error("could not render json: {0}")]
    Render(#[source] serde_json::Error),
}

impl From<semverish::ParseError> for CliError {
    fn from(err: semverish::ParseError) -> Self {
        CliError::Library(err.into())
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parses a version string and prints it as JSON
    Parse {
        /// The version string, e.g. `1.2.3-alpha.1`
        version: String,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Reads a version from a JSON object and prints its text form
    Format {
        /// The JSON object, e.g. `{"major":1,"minor":2,"patch":3}`
        json: String,
    },

    /// Compares two versions and prints `<`, `=` or `>`
    ///
    /// Build identifiers never take part in the comparison.
    Compare {
        /// The left-hand version
        left: String,

        /// The right-hand version
        right: String,
    },

    /// Prints versions in ascending order, one per line
    Sort {
        /// The versions to sort
        #[arg(required = true)]
        versions: Vec<String>,

        /// Sort in descending order instead
        #[arg(short, long)]
        reverse: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn parse_version(version_str: &str) -> Result<Version, CliError> {
    let version = Version::parse(version_str)?;
    debug!(input = version_str, %version, "parsed version");
    Ok(version)
}

fn run(cli: Cli) -> Result<String, CliError> {
    match cli.command {
        Commands::Parse { version, pretty } => {
            let json = parse_version(&version)?.to_json();
            let rendered = if pretty {
                serde_json::to_string_pretty(&json)
            } else {
                serde_json::to_string(&json)
            };
            rendered.map_err(CliError::Render)
        }
        Commands::Format { json } => {
            let version = Version::from_json_str(&json)?;
            debug!(%version, "read version from json");
            Ok(version.to_string())
        }
        Commands::Compare { left, right } => {
            let ordering = parse_version(&left)?.cmp(&parse_version(&right)?);
            Ok(match ordering {
                Ordering::Less => "<",
                Ordering::Equal => "=",
                Ordering::Greater => ">",
            }
            .to_owned())
        }
        Commands::Sort { versions, reverse } => {
            let mut versions = versions
                .iter()
                .map(|version_str| parse_version(version_str))
                .collect::<Result<Vec<_>, _>>()?;
            versions.sort();
            if reverse {
                versions.reverse();
            }
            debug!(count = versions.len(), reverse, "sorted versions");
            Ok(versions
                .iter()
                .map(Version::to_string)
                .collect::<Vec<_>>()
                .join("\n"))
        }
    }
}
