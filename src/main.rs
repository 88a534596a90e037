//! Katas - small programming exercises with their own test cases
//!
//! Main CLI entry point for listing, inspecting and running exercises.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use katas::config::CONFIG_FILE_NAME;
use katas::{
    logging, Category, Exercise, ExerciseRegistry, KatasConfig, OutputFormat, Runner, Selection,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "kata")]
#[command(version)]
#[command(about = "Small programming exercises with their own test cases", long_about = None)]
struct Cli {
    /// Config file (default: nearest katas.toml in this or a parent directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging for katas (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    // Commands sorted alphabetically for easier navigation
    /// Write a default katas.toml
    Init {
        /// Destination path
        #[arg(long, default_value = CONFIG_FILE_NAME)]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// List exercises
    List {
        /// Only this category
        #[arg(short, long)]
        category: Option<Category>,
    },

    /// Run exercises and report on every case
    Run {
        /// Exercise names (default: every exercise in an enabled category)
        #[arg(value_name = "NAME")]
        names: Vec<String>,

        /// Run every exercise in this category (repeatable)
        #[arg(short, long, conflicts_with = "names")]
        category: Vec<Category>,

        /// Worker threads (0 = one per CPU)
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Stop after the first failing exercise
        #[arg(long)]
        fail_fast: bool,

        /// Report format (text, json)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Show one exercise with its test cases
    Show {
        /// Exercise name
        name: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // init must work even when the existing file is broken
    let config = match cli.command {
        Commands::Init { .. } => KatasConfig::default(),
        _ => load_config(cli.config.as_deref())?,
    };
    logging::init_logging(cli.verbose, cli.log_json, &config.logging.level)
        .context("Failed to initialise logging")?;

    match cli.command {
        Commands::Init { path, force } => cmd_init(&path, force),
        Commands::List { category } => cmd_list(category),
        Commands::Run {
            names,
            category,
            jobs,
            fail_fast,
            format,
        } => {
            let passed = cmd_run(&config, names, category, jobs, fail_fast, format)?;
            if !passed {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Show { name } => cmd_show(&name),
    }
}

fn load_config(explicit: Option<&Path>) -> Result<KatasConfig> {
    match explicit {
        Some(path) => KatasConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => KatasConfig::load_from_cwd().context("Failed to load katas.toml"),
    }
}

fn builtin_registry() -> Result<ExerciseRegistry> {
    ExerciseRegistry::builtin().context("Failed to build the exercise catalog")
}

fn cmd_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }
    KatasConfig::default()
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn cmd_list(category: Option<Category>) -> Result<()> {
    let registry = builtin_registry()?;
    let exercises: Vec<&Exercise> = match category {
        Some(c) => registry.list_by_category(c),
        None => registry.list(),
    };

    println!("{:<4} {:<32} {:<12} DESCRIPTION", "ID", "NAME", "CATEGORY");
    println!("{:-<4} {:-<32} {:-<12} {:-<11}", "", "", "", "");
    for exercise in &exercises {
        println!(
            "{:<4} {:<32} {:<12} {}",
            exercise.id, exercise.name, exercise.category, exercise.description
        );
    }
    println!();
    println!("{} exercises", exercises.len());
    Ok(())
}

fn cmd_show(name: &str) -> Result<()> {
    let registry = builtin_registry()?;
    let exercise = registry
        .get_by_name(name)
        .with_context(|| format!("Unknown exercise '{}'", name))?;

    println!("{} (#{}, {})", exercise.name, exercise.id, exercise.category);
    println!("{}", exercise.description);
    println!();
    for (i, case) in exercise.cases.iter().enumerate() {
        println!("case {}:", i + 1);
        println!("  input:    {}", case.input);
        println!("  expected: {}", case.expected);
    }
    Ok(())
}

/// Returns whether every selected case passed.
fn cmd_run(
    config: &KatasConfig,
    names: Vec<String>,
    categories: Vec<Category>,
    jobs: Option<usize>,
    fail_fast: bool,
    format: Option<OutputFormat>,
) -> Result<bool> {
    let registry = builtin_registry()?;

    let mut runner_config = config.runner_config();
    if let Some(jobs) = jobs {
        runner_config.jobs = jobs;
    }
    runner_config.fail_fast |= fail_fast;
    let format = format.unwrap_or(config.runner.format);

    let selection = if !names.is_empty() {
        Selection::Names(names)
    } else if !categories.is_empty() {
        Selection::Categories(categories)
    } else {
        Selection::All
    };

    let report = Runner::new(runner_config).run(&registry, &selection)?;
    let rendered = report.render(format).context("Failed to render report")?;
    print!("{}", rendered);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(report.is_success())
}
