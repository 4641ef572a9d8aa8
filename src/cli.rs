//! Command-line interface for requirement extraction.

mod terminal;

use std::{
    io::Read,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::ArgAction;
use recap::{
    Config, Engine, RequirementSet, Store,
    classify::CommandClassifier,
    render::{document, stories, tracker},
    storage::ArtifactKind,
};
use terminal::Colorize;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The directory where generated artifacts are stored
    #[arg(short, long, default_value = ".", global = true)]
    root: PathBuf,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = match &self.config {
            Some(path) => Config::load(path).map_err(|e| anyhow::anyhow!(e))?,
            None => Config::default(),
        };

        self.command.run(&self.root, &config)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
enum Command {
    /// Extract requirements from text and print them
    Extract(Extract),

    /// Generate a versioned requirements document
    Document(Document),

    /// Generate versioned user-story rows for a backlog
    Stories(Stories),

    /// List stored artifact versions
    Versions,
}

impl Command {
    fn run(self, root: &Path, config: &Config) -> anyhow::Result<()> {
        match self {
            Self::Extract(extract) => extract.run(config),
            Self::Document(document) => document.run(root, config),
            Self::Stories(stories) => stories.run(root, config),
            Self::Versions => versions(root),
        }
    }
}

/// Command arguments for `recap extract`.
#[derive(Debug, clap::Parser)]
struct Extract {
    /// Input file; reads standard input when omitted
    file: Option<PathBuf>,

    /// Print the raw JSON record instead of a summary
    #[arg(long)]
    json: bool,
}

impl Extract {
    fn run(self, config: &Config) -> anyhow::Result<()> {
        let set = extract_from(self.file.as_deref(), config)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&set)?);
        } else {
            print_summary(&set);
        }
        Ok(())
    }
}

/// Command arguments for `recap document`.
#[derive(Debug, clap::Parser)]
struct Document {
    /// Input file; reads standard input when omitted
    file: Option<PathBuf>,
}

impl Document {
    fn run(self, root: &Path, config: &Config) -> anyhow::Result<()> {
        let set = extract_from(self.file.as_deref(), config)?;
        let rendered = document::render(&set);

        let store = Store::new(root);
        let artifact = store
            .save(ArtifactKind::Document, &rendered)
            .context("failed to save requirements document")?;

        println!(
            "{} {}",
            format!("Saved {} (version {})", artifact.filename, artifact.version).success(),
            store.root().display().to_string().dim()
        );
        Ok(())
    }
}

/// Command arguments for `recap stories`.
#[derive(Debug, clap::Parser)]
struct Stories {
    /// Input file; reads standard input when omitted
    file: Option<PathBuf>,

    /// Also print issue-tracker payloads as JSON
    #[arg(long)]
    issues: bool,
}

impl Stories {
    fn run(self, root: &Path, config: &Config) -> anyhow::Result<()> {
        let set = extract_from(self.file.as_deref(), config)?;
        let rows = stories::from_set(&set);

        let store = Store::new(root);
        let artifact = store
            .save(ArtifactKind::Stories, &stories::to_csv(&rows))
            .context("failed to save user stories")?;

        println!(
            "{}",
            format!(
                "Saved {} (version {}, {} stories)",
                artifact.filename,
                artifact.version,
                rows.len()
            )
            .success()
        );

        if self.issues {
            let payloads = tracker::issues(config.project_key(), &rows);
            println!("{}", serde_json::to_string_pretty(&payloads)?);
        }
        Ok(())
    }
}

fn versions(root: &Path) -> anyhow::Result<()> {
    let artifacts = Store::new(root).list()?;

    if artifacts.is_empty() {
        println!("{}", "No artifacts stored.".dim());
        return Ok(());
    }

    for artifact in artifacts {
        println!(
            "{}  {}",
            artifact.filename,
            format!(
                "version {} ({})",
                artifact.version,
                artifact.timestamp.format("%Y-%m-%d %H:%M:%S")
            )
            .dim()
        );
    }
    Ok(())
}

/// Reads the input text and runs the engine configured by `config`.
fn extract_from(file: Option<&Path>, config: &Config) -> anyhow::Result<RequirementSet> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read standard input")?;
            buffer
        }
    };

    let threshold = config.confidence_threshold();
    let set = match CommandClassifier::from_argv(config.classifier_command()) {
        Some(classifier) => Engine::new(classifier)
            .with_confidence_threshold(threshold)
            .extract(&text),
        None => Engine::keyword_only()
            .with_confidence_threshold(threshold)
            .extract(&text),
    }?;
    Ok(set)
}

fn print_summary(set: &RequirementSet) {
    println!("{}", "Functional requirements:".info());
    print_list(&set.functional);

    println!("{}", "Non-functional requirements:".info());
    print_list(&set.non_functional);

    println!("{}", "Priority (MoSCoW):".info());
    if set.priority.is_empty() {
        println!("  {}", "(none)".dim());
    }
    for (label, weight) in &set.priority {
        println!("  {label}: {weight}");
    }

    if !set.clarifications.is_empty() {
        println!("{}", "Clarifications needed:".warning());
        print_list(&set.clarifications);
    }
}

fn print_list(items: &[String]) {
    if items.is_empty() {
        println!("  {}", "(none)".dim());
    }
    for item in items {
        println!("  - {item}");
    }
}
