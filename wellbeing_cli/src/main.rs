use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use wellbeing_core::*;

#[derive(Parser)]
#[command(name = "wellp")]
#[command(about = "Wellbeing tracker and exercise program generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an exercise program (default)
    Generate {
        /// Rate of perceived exertion, 1-10
        #[arg(long, default_value_t = 5)]
        rpe: u8,

        /// Painful area to avoid (repeatable), e.g. --pain Legs
        #[arg(long = "pain")]
        pain: Vec<String>,

        /// Workout goal id (general, mobility, strength, posture, recovery, cardio)
        #[arg(long)]
        goal: Option<String>,

        /// Session length in minutes for goal-based programs (15, 20, 30, 45, 60)
        #[arg(long)]
        duration: Option<u32>,

        /// Do not consult the latest wellbeing log
        #[arg(long)]
        no_wellbeing: bool,

        /// Dry run - show the program without saving it to history
        #[arg(long)]
        dry_run: bool,

        /// Print the program as JSON
        #[arg(long)]
        json: bool,
    },

    /// Record today's wellbeing
    Log {
        /// Sleep quality, 1-5
        #[arg(long)]
        sleep: u8,

        /// Energy level, 1-5
        #[arg(long)]
        energy: u8,

        /// Mood, free text
        #[arg(long)]
        mood: String,

        /// Painful area (repeatable)
        #[arg(long = "pain")]
        pain: Vec<String>,

        /// Optional notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Show saved programs
    History {
        /// Print the history as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show wellbeing statistics and today's suggestion
    Stats,

    /// List workout goals
    Goals,
}

struct DataPaths {
    logs: PathBuf,
    history: PathBuf,
}

impl DataPaths {
    fn new(data_dir: &Path) -> Self {
        Self {
            logs: data_dir.join("logs").join("wellbeing.jsonl"),
            history: data_dir.join("program_history.json"),
        }
    }
}

fn main() -> Result<()> {
    wellbeing_core::logging::init();

    let cli = Cli::parse();

    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());
    let paths = DataPaths::new(&data_dir);
    tracing::debug!("Using data directory {:?}", data_dir);

    match cli.command {
        Some(Commands::Generate {
            rpe,
            pain,
            goal,
            duration,
            no_wellbeing,
            dry_run,
            json,
        }) => {
            let request = build_request(rpe, pain, goal, duration, !no_wellbeing)?;
            cmd_generate(&paths, &config, &request, dry_run, json)
        }
        Some(Commands::Log {
            sleep,
            energy,
            mood,
            pain,
            notes,
        }) => cmd_log(&paths, &config, sleep, energy, mood, pain, notes),
        Some(Commands::History { json }) => cmd_history(&paths, &config, json),
        Some(Commands::Stats) => cmd_stats(&paths, &config),
        Some(Commands::Goals) => cmd_goals(),
        None => {
            let request = build_request(5, Vec::new(), None, None, true)?;
            cmd_generate(&paths, &config, &request, false, false)
        }
    }
}

fn build_request(
    rpe: u8,
    pain: Vec<String>,
    goal: Option<String>,
    duration: Option<u32>,
    use_wellbeing_data: bool,
) -> Result<ProgramRequest> {
    let rpe = validate_rpe(rpe)?;
    validate_pain_areas(&pain, default_pain_map())?;
    let duration = duration.map(validate_duration).transpose()?;

    let goal = goal.as_ref().and_then(|id| match get_workout_goal(id) {
        Some(g) => Some(g.clone()),
        None => {
            eprintln!("Unknown goal: {}. Using RPE targets.", id);
            None
        }
    });

    Ok(ProgramRequest {
        rpe,
        pain_areas: pain,
        goal,
        duration,
        use_wellbeing_data,
    })
}

fn cmd_generate(
    paths: &DataPaths,
    config: &Config,
    request: &ProgramRequest,
    dry_run: bool,
    json: bool,
) -> Result<()> {
    let catalog = get_default_catalog().with_custom(&config.catalog.custom);
    let errors = catalog.validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation("Invalid catalog".into()));
    }

    let wellbeing = JsonlLogStore::new(&paths.logs);

    let program = if dry_run {
        generate_program(&catalog, config, request, &wellbeing)
    } else {
        let mut history = FileProgramHistory::new(&paths.history, config.program.max_history_size);
        generate_and_record(&catalog, config, request, &wellbeing, &mut history)
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&program)?);
    } else {
        display_program(&program);
    }

    if dry_run && !json {
        println!("\n[Dry run - not saved to history]");
    }

    Ok(())
}

fn cmd_log(
    paths: &DataPaths,
    config: &Config,
    sleep: u8,
    energy: u8,
    mood: String,
    pain: Vec<String>,
    notes: Option<String>,
) -> Result<()> {
    let log = WellbeingLog {
        id: uuid::Uuid::new_v4(),
        date: chrono::Utc::now(),
        sleep_quality: sleep,
        energy_level: energy,
        mood,
        muscle_pain: pain,
        notes,
    };

    let errors = log.validate(default_pain_map());
    if !errors.is_empty() {
        eprintln!("Invalid wellbeing entry:");
        for error in &errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::Validation(errors.join("; ")));
    }

    let mut store = JsonlLogStore::new(&paths.logs);
    store.append(&log)?;

    println!("✓ Wellbeing logged!");
    let rec = wellbeing_recommendations(Some(&log), &config.wellbeing);
    println!("  Suggested RPE: {}", rec.suggested_rpe);
    println!("  {}", rec.message);
    Ok(())
}

fn cmd_history(paths: &DataPaths, config: &Config, json: bool) -> Result<()> {
    let history = FileProgramHistory::new(&paths.history, config.program.max_history_size).load()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&history)?);
        return Ok(());
    }

    if history.is_empty() {
        println!("No programs saved yet.");
        return Ok(());
    }

    for program in &history.programs {
        println!(
            "{}  RPE {:>2}  {:>3} min  focus: {}{}",
            program.timestamp.format("%Y-%m-%d %H:%M"),
            program.rpe,
            program.total_minutes,
            program.focus_area,
            program
                .goal
                .as_ref()
                .map(|g| format!("  goal: {}", g))
                .unwrap_or_default()
        );
    }
    println!("\n{} program(s)", history.len());
    Ok(())
}

fn cmd_stats(paths: &DataPaths, config: &Config) -> Result<()> {
    let store = JsonlLogStore::new(&paths.logs);
    let logs = store.read_all()?;
    let stats = compute_statistics(&logs, chrono::Utc::now());

    println!("Total logs:      {}", stats.total_logs);
    println!("Average sleep:   {:.1}", stats.avg_sleep);
    println!("Average energy:  {:.1}", stats.avg_energy);
    println!("Logs this week:  {}", stats.logs_this_week);
    println!();

    let suggestion = workout_suggestion(logs.last(), &config.wellbeing);
    println!("{} ({:?} intensity)", suggestion.title, suggestion.intensity);
    println!("  {}", suggestion.description);
    for activity in &suggestion.activities {
        println!("  → {}", activity);
    }
    println!();
    println!("{}", motivation_message(stats.logs_this_week));
    Ok(())
}

fn cmd_goals() -> Result<()> {
    for goal in all_workout_goals() {
        let d = goal.distribution;
        println!(
            "{:<9} {:<16} stretch {:.0}% / lfc {:.0}% / meditation {:.0}%",
            goal.id,
            goal.name,
            d.stretch * 100.0,
            d.lfc * 100.0,
            d.meditation * 100.0
        );
        if !goal.focus_areas.is_empty() {
            println!("          focus: {}", goal.focus_areas.join(", "));
        }
    }
    Ok(())
}

fn display_program(program: &GeneratedProgram) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  PROGRAM  RPE {}  ·  {} min", program.rpe, program.total_minutes);
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Focus: {}", program.focus_area);
    if let Some(ref goal) = program.goal {
        println!("  Goal: {}", goal);
    }
    if !program.pain_areas.is_empty() {
        println!("  Avoiding: {}", program.pain_areas.join(", "));
    }

    for category in Category::ALL {
        let exercises = program.exercises(category);
        println!();
        println!(
            "  {} ({} min)",
            category.as_str().to_uppercase(),
            program.category_minutes(category)
        );
        if exercises.is_empty() {
            println!("    (none)");
        }
        for exercise in exercises {
            println!(
                "    → {} - {} min (level {})",
                exercise.name, exercise.duration, exercise.level
            );
        }
    }

    if let Some(ref rec) = program.recommendations {
        println!();
        println!("  ℹ Suggested RPE {}: {}", rec.suggested_rpe, rec.message);
    }

    println!();
}
