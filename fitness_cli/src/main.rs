use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use fitness_core::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "fittrack")]
#[command(about = "Fitness metrics and workout rewards tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Use a specific config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate calories burned for a workout
    Calories {
        #[command(flatten)]
        workout: WorkoutArgs,
    },

    /// Calculate BMR and the daily calorie target
    Bmr {
        #[arg(long)]
        weight: Option<f64>,

        #[arg(long)]
        height: Option<f64>,

        #[arg(long)]
        age: Option<u32>,

        /// M, F or Other
        #[arg(long)]
        gender: Option<Gender>,
    },

    /// Scale per-100g nutrition values to a serving
    Macros {
        #[arg(long)]
        calories_per_100g: f64,

        #[arg(long)]
        grams: f64,

        #[arg(long)]
        protein: Option<f64>,

        #[arg(long)]
        fat: Option<f64>,

        #[arg(long)]
        carbs: Option<f64>,
    },

    /// Log a workout: award XP, update the streak and check badges
    Log {
        #[command(flatten)]
        workout: WorkoutArgs,

        /// Activity date (defaults to today, UTC)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Show the current gamification state
    Status,

    /// List activities with a known MET value
    Activities,
}

#[derive(clap::Args)]
struct WorkoutArgs {
    /// Activity name (see `fittrack activities`)
    #[arg(long)]
    activity: String,

    /// Duration in minutes
    #[arg(long)]
    minutes: f64,

    /// light, moderate or vigorous
    #[arg(long, default_value = "moderate")]
    intensity: Intensity,

    /// Body weight in kilograms
    #[arg(long)]
    weight: Option<f64>,
}

impl WorkoutArgs {
    fn record(&self) -> WorkoutRecord {
        WorkoutRecord::new(self.activity.clone(), self.minutes).with_intensity(self.intensity)
    }
}

fn main() -> ExitCode {
    // Initialize logging
    fitness_core::logging::init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Calories { workout } => cmd_calories(&workout, cli.json),
        Commands::Bmr {
            weight,
            height,
            age,
            gender,
        } => {
            let profile = PhysicalProfile {
                weight_kg: weight,
                height_cm: height,
                age,
                gender,
            };
            let config = load_config(cli.config.as_deref())?;
            cmd_bmr(&profile, &config, cli.json)
        }
        Commands::Macros {
            calories_per_100g,
            grams,
            protein,
            fat,
            carbs,
        } => {
            let portion = FoodPortion {
                calories_per_100g,
                protein_g: protein,
                fat_g: fat,
                carbs_g: carbs,
                quantity_grams: grams,
            };
            cmd_macros(&portion, cli.json)
        }
        Commands::Log { workout, date } => {
            let config = load_config(cli.config.as_deref())?;
            let data_dir = cli
                .data_dir
                .unwrap_or_else(|| config.data.data_dir.clone());
            let state_path = state_file(data_dir);
            let today = date.unwrap_or_else(|| chrono::Utc::now().date_naive());
            cmd_log(&state_path, &workout, today, &config, cli.json)
        }
        Commands::Status => {
            // The config is only needed to find the data dir
            let data_dir = match cli.data_dir {
                Some(dir) => dir,
                None => load_config(cli.config.as_deref())?.data.data_dir,
            };
            cmd_status(&state_file(data_dir), cli.json)
        }
        Commands::Activities => cmd_activities(cli.json),
    }
}

/// Load the config file; only commands that use it call this
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn state_file(data_dir: PathBuf) -> PathBuf {
    let path = data_dir.join("state.json");
    tracing::debug!("Using state file {:?}", path);
    path
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_calories(args: &WorkoutArgs, json: bool) -> Result<()> {
    let workout = args.record();
    let calories = calories_burned(&workout, args.weight)?;

    if json {
        return print_json(&serde_json::json!({
            "activity_name": workout.activity_name,
            "met": met::met_for(&workout.activity_name),
            "calories_burned": calories,
        }));
    }

    if met::lookup(&workout.activity_name).is_none() {
        println!(
            "  (no MET entry for '{}', using default {})",
            workout.activity_name,
            met::DEFAULT_MET
        );
    }
    println!("Calories burned: {:.2} kcal", calories);
    Ok(())
}

fn cmd_bmr(profile: &PhysicalProfile, config: &Config, json: bool) -> Result<()> {
    let bmr = calculate_bmr(profile)?;
    let target = daily_calorie_target(profile, &config.nutrition);

    if json {
        return print_json(&serde_json::json!({
            "bmr": bmr,
            "daily_calorie_target": target,
        }));
    }

    println!("BMR: {:.2} kcal/day", bmr);
    println!("Daily target: {} kcal", target);
    Ok(())
}

fn cmd_macros(portion: &FoodPortion, json: bool) -> Result<()> {
    let scaled = scale_macros(portion)?;

    if json {
        return print_json(&scaled);
    }

    println!("Calories: {:.2} kcal", scaled.calories);
    for (label, value) in [
        ("Protein", scaled.protein_g),
        ("Fat", scaled.fat_g),
        ("Carbs", scaled.carbs_g),
    ] {
        if let Some(grams) = value {
            println!("{}: {:.2} g", label, grams);
        }
    }
    Ok(())
}

fn cmd_log(
    state_path: &Path,
    args: &WorkoutArgs,
    today: NaiveDate,
    config: &Config,
    json: bool,
) -> Result<()> {
    let workout = args.record();
    let (state, outcome) = GamificationState::update(state_path, |state| {
        record_workout(state, &workout, args.weight, today, config)
    })?;

    if json {
        return print_json(&serde_json::json!({
            "outcome": outcome,
            "state": state,
        }));
    }

    println!(
        "✓ Workout logged: {} ({} min)",
        workout.activity_name, workout.duration_minutes
    );
    if let Some(kcal) = outcome.calories_burned {
        println!("  Calories burned: {:.2} kcal", kcal);
    }
    println!("  +{} XP", outcome.xp_awarded);
    if outcome.leveled_up() {
        println!("  ★ Level up! Now level {}", outcome.level_after);
    }
    println!("  Streak: {} day(s)", state.streak.current_streak);
    for badge in &outcome.new_badges {
        println!("  🏅 Badge earned: {}", badge.name);
    }
    Ok(())
}

fn cmd_status(state_path: &Path, json: bool) -> Result<()> {
    let state = GamificationState::load(state_path)?;

    if json {
        return print_json(&serde_json::json!({
            "state": state,
            "xp_for_next_level": state.progression.xp_for_next_level(),
        }));
    }

    let p = &state.progression;
    println!("Level {} ({} XP total)", p.current_level, p.total_xp);
    println!(
        "  {}/{} XP toward level {}",
        p.xp_in_current_level,
        p.xp_for_next_level(),
        p.current_level + 1
    );
    println!(
        "Streak: {} day(s) (longest {})",
        state.streak.current_streak, state.streak.longest_streak
    );
    if let Some(date) = state.streak.last_activity_date {
        println!("  Last activity: {}", date);
    }
    if state.earned_badges.is_empty() {
        println!("Badges: none yet");
    } else {
        println!("Badges:");
        for badge in fitness_core::badges::default_badges()
            .iter()
            .filter(|b| state.earned_badges.contains(&b.id))
        {
            println!("  🏅 {} - {}", badge.name, badge.description);
        }
    }
    Ok(())
}

fn cmd_activities(json: bool) -> Result<()> {
    let activities: Vec<_> = met::known_activities()
        .into_iter()
        .map(|name| (name, met::met_for(name)))
        .collect();

    if json {
        let map: std::collections::BTreeMap<_, _> = activities.into_iter().collect();
        return print_json(&map);
    }

    for (name, met) in activities {
        println!("{:<16} MET {:.1}", name, met);
    }
    println!("(other activities use MET {:.1})", met::DEFAULT_MET);
    Ok(())
}
