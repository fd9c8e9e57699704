use std::net::SocketAddr;

use clap::{Args, Parser, Subcommand};

use crate::client::{midpoint_client::DEFAULT_BACKEND_URL, place_category::PlaceCategory};

#[derive(Parser)]
#[command(name = "lets-meet", about = "Find places halfway between two addresses")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the midpoint API server.
    Serve(ServeConfig),
    /// Search once against a running server and print the results.
    Find(FindConfig),
}

#[derive(Args, Clone)]
pub struct ServeConfig {
    #[clap(env, long)]
    pub maps_api_key: Option<String>,

    #[clap(env, long, default_value = "https://maps.googleapis.com")]
    pub maps_host: String,

    #[clap(env, long, default_value = "127.0.0.1:5000")]
    pub bind_address: SocketAddr,
}

#[derive(Args, Clone)]
pub struct FindConfig {
    #[clap(env, long, default_value = DEFAULT_BACKEND_URL)]
    pub backend_url: String,

    #[clap(long)]
    pub address1: String,

    #[clap(long)]
    pub address2: String,

    #[clap(long, default_value = "restaurant")]
    pub place_type: PlaceCategory,

    /// Place id of an autocomplete pick for the first address.
    #[clap(long)]
    pub place_id1: Option<String>,

    #[clap(long)]
    pub place_id2: Option<String>,

    /// Show the detail panel for the result at this list position.
    #[clap(long)]
    pub open: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_find() {
        let cli = Cli::parse_from([
            "lets-meet",
            "find",
            "--address1",
            "123 Main St",
            "--address2",
            "456 Oak Ave",
            "--place-type",
            "cafe",
            "--open",
            "0",
        ]);

        match cli.command {
            Command::Find(config) => {
                assert_eq!(config.address1, "123 Main St");
                assert_eq!(config.place_type, PlaceCategory::Cafe);
                assert_eq!(config.place_id1, None);
                assert_eq!(config.open, Some(0));
            }
            Command::Serve(_) => panic!("Expected find"),
        }
    }

    #[test]
    fn unknown_place_type_is_rejected() {
        let result = Cli::try_parse_from([
            "lets-meet",
            "find",
            "--address1",
            "a",
            "--address2",
            "b",
            "--place-type",
            "bowling",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
