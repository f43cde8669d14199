//! Command-line interface for the builder.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::builder::{build_site, check_data};
use crate::config::TEXT_WRAP_WIDTH;
use crate::error::Result;
use crate::types::Part;

/// Constitution Builder - Generate the static page, search index, and
/// markdown export from the canonical JSON data file.
#[derive(Parser)]
#[command(name = "constitution-builder")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full build pipeline.
    Build {
        /// Canonical JSON data file
        #[arg(short, long, default_value = "data/constitution.json")]
        data: PathBuf,

        /// Page template carrying the splice markers
        #[arg(short, long, default_value = "site/template.html")]
        template: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = "site/dist")]
        out: PathBuf,

        /// Wrap width for the markdown export
        #[arg(long, default_value_t = TEXT_WRAP_WIDTH)]
        wrap: usize,
    },

    /// Validate the data file without writing anything.
    Check {
        /// Canonical JSON data file
        #[arg(short, long, default_value = "data/constitution.json")]
        data: PathBuf,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            data,
            template,
            out,
            wrap,
        } => build_command(&data, &template, &out, wrap),
        Commands::Check { data } => check_command(&data),
    }
}

/// Execute the build command.
fn build_command(
    data: &std::path::Path,
    template: &std::path::Path,
    out: &std::path::Path,
    wrap: usize,
) -> Result<()> {
    println!(
        "{} {} into {}",
        style("Building").bold(),
        style(data.display()).cyan(),
        style(out.display()).green()
    );
    println!();

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Generating artifacts...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let artifacts = match build_site(data, template, out, wrap) {
        Ok(artifacts) => artifacts,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    println!("  Entries: {}", artifacts.entry_count);
    println!("  Page: {}", style(artifacts.page.display()).green());
    println!("  Index: {}", style(artifacts.index.display()).green());
    println!("  Export: {}", style(artifacts.export.display()).green());

    print_warnings(&artifacts.warnings);

    println!();
    println!("{}", style("Build complete").green().bold());

    Ok(())
}

/// Execute the check command.
fn check_command(data: &std::path::Path) -> Result<()> {
    println!(
        "{} {}",
        style("Checking").bold(),
        style(data.display()).cyan()
    );
    println!();

    let corpus = check_data(data)?;

    println!("  Entries: {}", corpus.entries.len());
    for part in [Part::Preamble, Part::Article, Part::Amendment] {
        println!("    {}: {}", part.group_label(), corpus.count_part(part));
    }
    let repealed = corpus.entries.iter().filter(|e| e.is_repealed).count();
    println!("    Repealed: {repealed}");

    print_warnings(&corpus.warnings);

    println!();
    println!("{}", style("Data file is valid").green().bold());

    Ok(())
}

/// Print collected warnings, if any.
fn print_warnings(warnings: &[String]) {
    if warnings.is_empty() {
        return;
    }
    println!(
        "  Warnings: {}",
        style(warnings.len()).yellow().bold()
    );
    for warning in warnings {
        println!("    {} {}", style("!").yellow(), warning);
    }
}
