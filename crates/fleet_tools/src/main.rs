//! Fleet Planner - Development Tools

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use fleet_core::attack::{AirState, Engagement, Formation};
use fleet_core::equipment::EquipmentKey;
use fleet_core::factory::Factory;
use fleet_core::master::GearId;
use fleet_tools::data_loader::{load_catalog_from_file, load_ship_state_from_file};
use fleet_tools::report::BattleContext;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "fleet-tools")]
#[command(about = "Development tools for the fleet planner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate catalog files
    Validate {
        /// Path to data directory
        #[arg(default_value = "assets/data")]
        path: PathBuf,
    },
    /// Print a shelling breakdown for a saved ship as JSON
    Shelling {
        /// Ship state RON file
        ship: PathBuf,
        #[command(flatten)]
        battle: BattleArgs,
    },
    /// Rank candidate gears for one slot as JSON
    Compare {
        /// Ship state RON file
        ship: PathBuf,
        /// Slot to fill
        #[arg(long, value_enum, default_value_t = SlotArg::G1)]
        slot: SlotArg,
        /// Candidate gear ids; every catalog gear when omitted
        #[arg(long = "gear", value_delimiter = ',')]
        gears: Vec<u16>,
        /// Number of results to print
        #[arg(long, default_value_t = 10)]
        top: usize,
        #[command(flatten)]
        battle: BattleArgs,
    },
}

#[derive(clap::Args)]
struct BattleArgs {
    /// Reference catalog RON file
    #[arg(long, default_value = "assets/data/catalog.ron")]
    catalog: PathBuf,
    #[arg(long, value_enum, default_value_t = AirStateArg::Supremacy)]
    air_state: AirStateArg,
    #[arg(long, value_enum, default_value_t = FormationArg::LineAhead)]
    formation: FormationArg,
    #[arg(long, value_enum, default_value_t = EngagementArg::Parallel)]
    engagement: EngagementArg,
    /// Fleet LoS modifier
    #[arg(long, default_value_t = 0.0)]
    fleet_los: f64,
    /// Ship is the main fleet flagship
    #[arg(long)]
    flagship: bool,
    /// Target is armored
    #[arg(long)]
    armored: bool,
    /// Target is an installation
    #[arg(long)]
    installation: bool,
    /// Fit gun accuracy bonus for special attacks
    #[arg(long, default_value_t = 0.0)]
    fit_bonus: f64,
}

impl BattleArgs {
    fn context(&self) -> BattleContext {
        BattleContext {
            air_state: self.air_state.into(),
            formation: self.formation.into(),
            engagement: self.engagement.into(),
            fleet_los_modifier: self.fleet_los,
            is_main_flagship: self.flagship,
            target_is_armored: self.armored,
            target_is_installation: self.installation,
            fit_gun_bonus: self.fit_bonus,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum AirStateArg {
    Supremacy,
    Superiority,
    Parity,
    Denial,
    Incapability,
}

impl From<AirStateArg> for AirState {
    fn from(arg: AirStateArg) -> Self {
        match arg {
            AirStateArg::Supremacy => Self::AirSupremacy,
            AirStateArg::Superiority => Self::AirSuperiority,
            AirStateArg::Parity => Self::AirParity,
            AirStateArg::Denial => Self::AirDenial,
            AirStateArg::Incapability => Self::AirIncapability,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FormationArg {
    LineAhead,
    DoubleLine,
    Diamond,
    Echelon,
    LineAbreast,
}

impl From<FormationArg> for Formation {
    fn from(arg: FormationArg) -> Self {
        match arg {
            FormationArg::LineAhead => Self::LineAhead,
            FormationArg::DoubleLine => Self::DoubleLine,
            FormationArg::Diamond => Self::Diamond,
            FormationArg::Echelon => Self::Echelon,
            FormationArg::LineAbreast => Self::LineAbreast,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum EngagementArg {
    Parallel,
    HeadOn,
    GreenT,
    RedT,
}

impl From<EngagementArg> for Engagement {
    fn from(arg: EngagementArg) -> Self {
        match arg {
            EngagementArg::Parallel => Self::Parallel,
            EngagementArg::HeadOn => Self::HeadOn,
            EngagementArg::GreenT => Self::GreenT,
            EngagementArg::RedT => Self::RedT,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SlotArg {
    G1,
    G2,
    G3,
    G4,
    G5,
    Gx,
}

impl From<SlotArg> for EquipmentKey {
    fn from(arg: SlotArg) -> Self {
        match arg {
            SlotArg::G1 => Self::G1,
            SlotArg::G2 => Self::G2,
            SlotArg::G3 => Self::G3,
            SlotArg::G4 => Self::G4,
            SlotArg::G5 => Self::G5,
            SlotArg::Gx => Self::GX,
        }
    }
}

fn run(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Validate { path } => {
            tracing::info!("Validating data files in: {}", path.display());
            for summary in fleet_tools::validate::validate_data_directory(&path)? {
                tracing::info!(
                    "{}: {} gears, {} ships",
                    summary.path.display(),
                    summary.gears,
                    summary.ships
                );
            }
            tracing::info!("Validation passed");
        }
        Commands::Shelling { ship, battle } => {
            let catalog = load_catalog_from_file(&battle.catalog)?;
            let state = load_ship_state_from_file(&ship)?;
            let ship = Factory::new(&catalog)
                .create_ship(&state)
                .ok_or_else(|| format!("Ship {} is not in the catalog", state.ship_id))?;

            let report = fleet_tools::report::shelling_report(&ship, &battle.context());
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Compare {
            ship,
            slot,
            gears,
            top,
            battle,
        } => {
            let catalog = load_catalog_from_file(&battle.catalog)?;
            let state = load_ship_state_from_file(&ship)?;
            let candidates: Vec<GearId> = gears.into_iter().map(GearId::new).collect();

            let mut scores = fleet_tools::compare::rank_candidates(
                &catalog,
                &state,
                slot.into(),
                &candidates,
                &battle.context(),
            );
            scores.truncate(top);
            println!("{}", serde_json::to_string_pretty(&scores)?);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    // Logs go to stderr so JSON output stays clean on stdout
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
