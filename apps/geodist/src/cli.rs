use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::eyre;
use color_eyre::Result;

use crate::{haversine, matching, points};

#[derive(Debug, Parser)]
#[command(name = "geodist", version, about = "Haversine distances between named points")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Distance in meters between two (lon, lat) points
    Pair {
        #[arg(long, allow_hyphen_values = true)]
        xlon: f64,
        #[arg(long, allow_hyphen_values = true)]
        xlat: f64,
        #[arg(long, allow_hyphen_values = true)]
        ylon: f64,
        #[arg(long, allow_hyphen_values = true)]
        ylat: f64,
    },
    /// Many-to-many distance matrix between two point files
    Matrix {
        /// JSON array of {name, lon, lat} origin points
        #[arg(long, value_name = "PATH")]
        from: PathBuf,
        /// JSON array of {name, lon, lat} target points
        #[arg(long, value_name = "PATH")]
        to: PathBuf,
    },
    /// Nearest target point for each origin point
    Nearest {
        /// JSON array of {name, lon, lat} origin points
        #[arg(long, value_name = "PATH")]
        from: PathBuf,
        /// JSON array of {name, lon, lat} target points
        #[arg(long, value_name = "PATH")]
        to: PathBuf,
    },
}

pub fn run(command: &Command) -> Result<()> {
    match command {
        Command::Pair {
            xlon,
            xlat,
            ylon,
            ylat,
        } => {
            println!("{}", haversine::distance_m(*xlon, *xlat, *ylon, *ylat));
        }
        Command::Matrix { from, to } => {
            let from = points::load(from)?;
            let to = points::load(to)?;
            let rows = matching::distance_matrix(&from, &to);
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        Command::Nearest { from, to } => {
            let from = points::load(from)?;
            let to = points::load(to)?;
            let matches = matching::nearest_matches(&from, &to)
                .ok_or_else(|| eyre!("no target points to match against"))?;
            println!("{}", serde_json::to_string_pretty(&matches)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{CliArgs, Command};

    #[test]
    fn pair_parses_negative_coordinates() {
        let args = CliArgs::parse_from([
            "geodist", "pair", "--xlon", "-82.3379", "--xlat", "29.6472", "--ylon", "-82.3428",
            "--ylat", "29.6489",
        ]);

        match args.command {
            Command::Pair { xlon, ylat, .. } => {
                assert_eq!(xlon, -82.3379);
                assert_eq!(ylat, 29.6489);
            }
            _ => panic!("expected pair subcommand"),
        }
    }

    #[test]
    fn matrix_requires_both_files() {
        let result = CliArgs::try_parse_from(["geodist", "matrix", "--from", "a.json"]);

        assert!(result.is_err());
    }
}
