mod render;

use std::path::Path;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use roulette_api::compat::{self, CompatClient, DEFAULT_DATASET_URL};
use roulette_api::icons::IconClient;
use roulette_core::filter::Selection;
use roulette_core::models::{Entry, MediaType, Region, Status};
use roulette_core::picker::{Picker, SpinSchedule};
use roulette_core::prefs::ThemePrefs;

#[derive(Debug, Parser)]
#[command(
    name = "roulette",
    version,
    about = "Random game picker for the RPCS3 compatibility list"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Pick one random game from the filtered pool.
    Pick(PickArgs),
    /// Print how many entries match the filters.
    Count(FacetArgs),
    /// Show or toggle the persisted dark-mode preference.
    Theme {
        /// Flip the preference and save it.
        #[arg(long)]
        toggle: bool,
    },
}

#[derive(Debug, Args)]
struct PickArgs {
    #[command(flatten)]
    facets: FacetArgs,

    /// Skip the slot-machine reveal.
    #[arg(long)]
    no_spin: bool,

    /// Seed the random draws for a reproducible pick.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Debug, Args)]
struct FacetArgs {
    /// Dataset URL or local JSON file.
    #[arg(long, default_value = DEFAULT_DATASET_URL)]
    data: String,

    /// Statuses to include (default: all).
    #[arg(long = "status", value_name = "STATUS")]
    statuses: Vec<Status>,

    /// Regions to include (default: all).
    #[arg(long = "region", value_name = "REGION")]
    regions: Vec<Region>,

    /// Media types to include (default: both).
    #[arg(long = "media", value_name = "TYPE")]
    media: Vec<MediaType>,

    /// Include titles that require online services.
    #[arg(long)]
    online_only: bool,
}

impl FacetArgs {
    /// Build the selection state; omitted facet flags mean "everything
    /// selected", the startup default.
    fn selection(&self) -> Selection {
        let mut selection = Selection::default();
        if !self.statuses.is_empty() {
            selection.statuses = self.statuses.iter().copied().collect();
        }
        if !self.regions.is_empty() {
            selection.regions = self.regions.iter().copied().collect();
        }
        if !self.media.is_empty() {
            selection.disc = self.media.contains(&MediaType::Disc);
            selection.digital = self.media.contains(&MediaType::Digital);
        }
        selection.online_only = self.online_only;
        selection
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("roulette_cli=info,roulette_api=info,roulette_core=info")
        }))
        .init();

    match Cli::parse().command {
        Command::Pick(args) => run_pick(args).await,
        Command::Count(facets) => run_count(facets).await,
        Command::Theme { toggle } => run_theme(toggle),
    }
}

async fn run_pick(args: PickArgs) -> ExitCode {
    let entries = load_entries(&args.facets.data).await;
    let selection = args.facets.selection();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let schedule = if args.no_spin {
        SpinSchedule::none()
    } else {
        SpinSchedule::default()
    };
    let dark = ThemePrefs::effective();
    debug!(dark, "theme preference");

    let mut picker = Picker::new();
    let pick = picker
        .pick(&entries, &selection, &schedule, &mut rng, |interim| {
            render::spin_frame(interim.display_title());
        })
        .await;

    let chosen = match pick {
        Ok(entry) => entry,
        Err(e) => {
            render::end_spin();
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    render::end_spin();

    let icon_url = IconClient::new().resolve(&chosen.id, &mut rng).await;
    render::result(chosen, &icon_url, dark);
    picker.finish();
    ExitCode::SUCCESS
}

async fn run_count(facets: FacetArgs) -> ExitCode {
    let entries = load_entries(&facets.data).await;
    let selection = facets.selection();
    println!("Available entries: {}", selection.pool_len(&entries));
    ExitCode::SUCCESS
}

fn run_theme(toggle: bool) -> ExitCode {
    if toggle {
        let dark = ThemePrefs::toggle();
        println!("Dark mode {}", if dark { "enabled" } else { "disabled" });
    } else {
        let source = match ThemePrefs::load() {
            Some(_) => "saved preference",
            None => "system default",
        };
        let dark = ThemePrefs::effective();
        println!(
            "Dark mode {} ({source})",
            if dark { "enabled" } else { "disabled" }
        );
    }
    ExitCode::SUCCESS
}

/// Load the dataset from a local file when the argument names one,
/// otherwise fetch it. Failures degrade to an empty list.
async fn load_entries(data: &str) -> Vec<Entry> {
    let path = Path::new(data);
    if path.exists() {
        match compat::load_file(path) {
            Ok(entries) => entries,
            Err(e) => {
                error!("Error loading compatibility data from {data}: {e}");
                Vec::new()
            }
        }
    } else {
        CompatClient::new().fetch_or_empty(data).await
    }
}
