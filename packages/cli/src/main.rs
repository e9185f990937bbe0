#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line front end for the Hotspot API.
//!
//! Every API operation is exposed as a subcommand. Saved spots are kept in
//! JSON files under the configured data directory. Running without a
//! subcommand starts an interactive suburb lookup.

mod config;
mod interactive;
mod render;

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use hotspot_client::{
    API_URL_ENV, ApiClient, address, bikes, contact, feed, lga, parking, postcode, risk, search,
    stats,
};
use hotspot_favourites::{Favourites, FileStore, KeyValueStore};
use hotspot_metrics::{SafetyTier, create_slug, parse_slug, risk_to_safety_score};
use hotspot_models::{
    ContactSubmission, ModelQuery, ModelSort, ParkingId, ParkingSubmissionRequest, ParkingType,
    RiskScope, SortOrder, TopRiskParams,
};

use crate::config::{Config, FileConfig};

/// Environment variable overriding the saved-spots directory.
const DATA_DIR_ENV: &str = "HOTSPOT_DATA_DIR";

#[derive(Parser)]
#[command(name = "hotspot", about = "Motorbike parking safety lookups")]
struct Cli {
    /// TOML config file (default: `hotspot.toml` if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// API base URL including the version prefix
    #[arg(long, global = true, env = API_URL_ENV)]
    api_url: Option<String>,
    /// Directory for saved spots
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search suburbs and postcodes
    Search {
        /// Suburb name or postcode fragment
        query: String,
    },
    /// List validated addresses in a postcode
    Addresses {
        postcode: String,
        /// Address fragment to filter by
        #[arg(long)]
        query: Option<String>,
    },
    /// Show the safety summary, parking and safer neighbours of a postcode
    Feed { postcode: String },
    /// List suburbs near a postcode
    Nearest { postcode: String },
    /// Show yearly motorbike thefts for a postcode
    Thefts { postcode: String },
    /// Community parking submissions
    Parking {
        #[command(subcommand)]
        command: ParkingCommands,
    },
    /// Risk rankings and comparisons
    Risk {
        #[command(subcommand)]
        command: RiskCommands,
    },
    /// Convert a risk score (0 to 1) into a safety score and tier
    Safety { risk_score: f64 },
    /// Show platform-wide statistics
    Stats,
    /// Send a contact form submission
    Contact {
        #[arg(long)]
        email: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        details: String,
        /// Related postcode
        #[arg(long)]
        postcode: Option<String>,
        /// reCAPTCHA token issued to the caller
        #[arg(long)]
        recaptcha_token: String,
    },
    /// List local government areas with their average risk
    Lgas {
        /// Name fragment to filter by
        #[arg(long)]
        query: Option<String>,
        /// Sort key, e.g. `avg_desc` or `lga`
        #[arg(long)]
        sort: Option<String>,
    },
    /// List the postcodes of a local government area
    LgaPostcodes {
        lga: String,
        #[arg(long, value_parser = parse_strum::<SortOrder>)]
        order: Option<SortOrder>,
    },
    /// List motorcycle models by theft risk
    Models {
        #[arg(long)]
        brand: Option<String>,
        #[arg(long)]
        model: Option<String>,
        #[arg(long)]
        min_total: Option<u64>,
        /// `risk_desc`, `risk_asc`, `total_desc`, `total_asc`, `brand` or `model`
        #[arg(long, value_parser = parse_strum::<ModelSort>)]
        sort: Option<ModelSort>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        offset: Option<u32>,
    },
    /// Show theft statistics for one motorcycle model
    Model { brand: String, model: String },
    /// Manage saved parking spots
    Saved {
        #[command(subcommand)]
        command: SavedCommands,
    },
    /// Build or parse suburb slugs
    Slug {
        #[command(subcommand)]
        command: SlugCommands,
    },
}

#[derive(Subcommand)]
enum ParkingCommands {
    /// List submissions in a postcode
    List {
        postcode: String,
        /// Use `/parking/{postcode}` instead of the postcode feed
        #[arg(long)]
        dedicated: bool,
    },
    /// Submit a parking location
    Submit {
        /// Street address; must be a known address
        #[arg(long)]
        address: String,
        #[arg(long)]
        suburb: String,
        #[arg(long)]
        postcode: String,
        /// `on-street`, `off-street` or `secure`
        #[arg(long = "type", value_parser = parse_strum::<ParkingType>)]
        parking_type: ParkingType,
        /// 1 = poor through 4 = excellent
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=4))]
        lighting: Option<u8>,
        #[arg(long)]
        cctv: Option<bool>,
        /// Facility ID, repeatable
        #[arg(long = "facility")]
        facilities: Vec<i64>,
    },
}

#[derive(Subcommand)]
enum RiskCommands {
    /// Rank postcodes or LGAs by risk
    Top {
        /// `postcode` or `lga`
        #[arg(long, value_parser = parse_strum::<RiskScope>)]
        scope: Option<RiskScope>,
        /// `asc` or `desc`
        #[arg(long, value_parser = parse_strum::<SortOrder>)]
        order: Option<SortOrder>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Compare a postcode against reference areas
    Compare { postcode: String },
}

#[derive(Subcommand)]
enum SavedCommands {
    /// List saved spots with a cached snapshot
    List,
    /// Save a spot
    Add {
        parking_id: ParkingId,
        /// Postcode to fetch the spot's details from, so it can be listed
        /// offline
        #[arg(long)]
        postcode: Option<String>,
    },
    /// Forget a spot
    Remove { parking_id: ParkingId },
    /// Save a spot if unsaved, otherwise forget it
    Toggle { parking_id: ParkingId },
    /// Forget every saved spot and cached snapshot
    Clear,
}

#[derive(Subcommand)]
enum SlugCommands {
    /// Build the slug for a suburb and postcode
    Create { suburb: String, postcode: String },
    /// Split a slug into suburb and postcode
    Parse { slug: String },
}

fn parse_strum<T: FromStr>(value: &str) -> Result<T, String>
where
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e: T::Err| format!("{value:?}: {e}"))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let file = FileConfig::load(cli.config.as_deref())?;
    let config = Config::resolve(file, cli.api_url, cli.data_dir);
    log::debug!(
        "Using API {} and data dir {}",
        config.base_url,
        config.data_dir.display()
    );

    let api = ApiClient::new(config.base_url);
    let favourites = Favourites::new(FileStore::new(config.data_dir));

    let Some(command) = cli.command else {
        return interactive::run(&api, &favourites).await;
    };

    run_command(&api, &favourites, command).await
}

#[allow(clippy::too_many_lines)]
async fn run_command<S: KeyValueStore>(
    api: &ApiClient,
    favourites: &Favourites<S>,
    command: Commands,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Search { query } => {
            let results = search::search(api, &query).await?;
            if results.is_empty() {
                println!("No matches for {query:?}.");
            }
            for result in &results {
                println!("{}", render::search_result(result));
            }
        }
        Commands::Addresses { postcode, query } => {
            for row in address::get_addresses(api, &postcode, query.as_deref()).await? {
                println!("{}", render::address(&row));
            }
        }
        Commands::Feed { postcode } => {
            let response = feed::get_postcode_feed(api, &postcode).await?;
            print!("{}", render::feed(&response));
        }
        Commands::Nearest { postcode } => {
            for suburb in postcode::get_nearest_suburbs(api, &postcode).await? {
                println!("{}", render::nearest(&suburb));
            }
        }
        Commands::Thefts { postcode } => {
            for year in postcode::get_thefts(api, &postcode).await? {
                println!("{}", render::theft(&year));
            }
        }
        Commands::Parking { command } => match command {
            ParkingCommands::List {
                postcode,
                dedicated,
            } => {
                let submissions = if dedicated {
                    parking::list_parking(api, &postcode).await?
                } else {
                    parking::get_parking_by_postcode(api, &postcode).await?
                };
                if submissions.is_empty() {
                    println!("No parking submitted for {postcode} yet.");
                }
                for submission in &submissions {
                    println!("{}", render::parking(submission));
                }
            }
            ParkingCommands::Submit {
                address,
                suburb,
                postcode,
                parking_type,
                lighting,
                cctv,
                facilities,
            } => {
                let request = ParkingSubmissionRequest {
                    address,
                    suburb,
                    postcode,
                    parking_type,
                    lighting,
                    cctv,
                    facilities,
                };
                let response = parking::submit_parking(api, &request).await?;
                println!("#{}: {}", response.parking_id, response.message);
            }
        },
        Commands::Risk { command } => match command {
            RiskCommands::Top {
                scope,
                order,
                limit,
            } => {
                let params = TopRiskParams {
                    scope,
                    order,
                    limit,
                };
                for record in risk::get_top_risk(api, &params).await? {
                    println!("{}", render::risk_record(&record));
                }
            }
            RiskCommands::Compare { postcode } => {
                let data = risk::compare_risk(api, &postcode).await?;
                println!("{}", render::risk_data(&data));
            }
        },
        Commands::Safety { risk_score } => {
            let score = risk_to_safety_score(risk_score);
            let tier = SafetyTier::from_score(score);
            println!("{score}/100 {} ({})", tier.label(), tier.color());
        }
        Commands::Stats => {
            print!("{}", render::stats(&stats::get_summary(api).await?));
        }
        Commands::Contact {
            email,
            category,
            subject,
            details,
            postcode,
            recaptcha_token,
        } => {
            let submission = ContactSubmission {
                email,
                category,
                subject,
                postcode,
                details,
                recaptcha_token,
            };
            let response = contact::submit_contact(api, &submission).await?;
            if response.success {
                println!("Sent.");
            } else {
                println!("Not accepted.");
            }
            if let Some(message) = response.message {
                println!("{message}");
            }
            if let Some(url) = response.issue_url {
                println!("Tracking: {url}");
            }
        }
        Commands::Lgas { query, sort } => {
            for rollup in lga::list_lgas(api, query.as_deref(), sort.as_deref()).await? {
                println!("{}", render::lga(&rollup));
            }
        }
        Commands::LgaPostcodes { lga: name, order } => {
            for row in lga::get_lga_postcodes(api, &name, order).await? {
                println!("{}", render::lga_postcode(&row));
            }
        }
        Commands::Models {
            brand,
            model,
            min_total,
            sort,
            limit,
            offset,
        } => {
            let query = ModelQuery {
                brand,
                model,
                min_total,
                sort,
                limit,
                offset,
            };
            for row in bikes::list_models(api, &query).await? {
                println!("{}", render::bike_model(&row));
            }
        }
        Commands::Model { brand, model } => {
            let row = bikes::get_model(api, &brand, &model).await?;
            println!("{}", render::bike_model(&row));
        }
        Commands::Saved { command } => run_saved(api, favourites, command).await?,
        Commands::Slug { command } => match command {
            SlugCommands::Create { suburb, postcode } => {
                println!("{}", create_slug(&suburb, &postcode));
            }
            SlugCommands::Parse { slug } => {
                let parsed = parse_slug(&slug).ok_or_else(|| format!("Not a suburb slug: {slug}"))?;
                println!("suburb:   {}", parsed.suburb);
                println!("postcode: {}", parsed.postcode);
            }
        },
    }

    Ok(())
}

async fn run_saved<S: KeyValueStore>(
    api: &ApiClient,
    favourites: &Favourites<S>,
    command: SavedCommands,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        SavedCommands::List => {
            let spots = favourites.saved_spots();
            let missing = favourites.favourite_ids().len().saturating_sub(spots.len());
            if spots.is_empty() && missing == 0 {
                println!("No saved spots.");
            }
            for spot in &spots {
                println!("{}", render::parking(spot));
            }
            if missing > 0 {
                println!("({missing} saved spot(s) have no cached details)");
            }
        }
        SavedCommands::Add {
            parking_id,
            postcode,
        } => {
            if let Some(postcode) = postcode {
                let submissions = parking::get_parking_by_postcode(api, &postcode).await?;
                match submissions.iter().find(|s| s.parking_id == parking_id) {
                    Some(submission) => favourites.cache_submission(submission),
                    None => log::warn!("Spot #{parking_id} not found in {postcode}"),
                }
            }
            favourites.add(parking_id);
            println!("Saved #{parking_id}.");
        }
        SavedCommands::Remove { parking_id } => {
            favourites.remove(parking_id);
            println!("Removed #{parking_id}.");
        }
        SavedCommands::Toggle { parking_id } => {
            if favourites.toggle(parking_id) {
                println!("Saved #{parking_id}.");
            } else {
                println!("Removed #{parking_id}.");
            }
        }
        SavedCommands::Clear => {
            favourites.clear_all();
            println!("Cleared saved spots.");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_enum_arguments() {
        let cli = Cli::try_parse_from([
            "hotspot", "risk", "top", "--scope", "lga", "--order", "asc", "--limit", "3",
        ])
        .unwrap();
        let Some(Commands::Risk {
            command: RiskCommands::Top {
                scope,
                order,
                limit,
            },
        }) = cli.command
        else {
            panic!("expected risk top");
        };
        assert_eq!(scope, Some(RiskScope::Lga));
        assert_eq!(order, Some(SortOrder::Asc));
        assert_eq!(limit, Some(3));
    }

    #[test]
    fn rejects_unknown_parking_type() {
        let result = Cli::try_parse_from([
            "hotspot", "parking", "submit", "--address", "1 A St", "--suburb", "Carlton",
            "--postcode", "3053", "--type", "rooftop",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_out_of_range_lighting() {
        let result = Cli::try_parse_from([
            "hotspot", "parking", "submit", "--address", "1 A St", "--suburb", "Carlton",
            "--postcode", "3053", "--type", "secure", "--lighting", "5",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn no_subcommand_is_interactive() {
        let cli = Cli::try_parse_from(["hotspot"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[tokio::test]
    async fn saved_commands_work_offline() {
        let api = ApiClient::new("http://127.0.0.1:9");
        let favourites = Favourites::new(hotspot_favourites::MemoryStore::new());

        for command in [
            SavedCommands::Add {
                parking_id: 4,
                postcode: None,
            },
            SavedCommands::Toggle { parking_id: 7 },
            SavedCommands::Remove { parking_id: 4 },
        ] {
            run_saved(&api, &favourites, command).await.unwrap();
        }
        assert_eq!(favourites.favourite_ids(), vec![7]);

        run_saved(&api, &favourites, SavedCommands::Clear)
            .await
            .unwrap();
        assert!(favourites.favourite_ids().is_empty());
    }
}
