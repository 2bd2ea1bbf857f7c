use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use platesheet::indexes::{IndexKind, Workflow};
use platesheet::plateview::print_plateview;
use platesheet::sheet::build::build_rows;
use platesheet::sheet::spec::{parse_plate_lines, ReadConfig};
use platesheet::sheet::write::{write_sample_sheet, SheetMeta};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a Sample Sheet from plate/barcode assignments
    Generate {
        /// Indexed sequencing workflow (A: i5 forward, B: i5 reverse-complement)
        #[arg(short = 'w', long, value_enum)]
        workflow: Workflow,

        /// Output Sample Sheet path (must not exist yet)
        #[arg(short = 'o', long)]
        output: PathBuf,

        /// Investigator name for the [Header] section
        #[arg(long, default_value = "NA")]
        investigator: String,

        /// Project name for the [Header] section
        #[arg(long, default_value = "NA")]
        project: String,

        /// Run type and insert-read cycle counts, e.g. "PE, 151, 151" or "SE, 151"
        #[arg(short = 'r', long)]
        reads: String,

        /// File of plate lines ("plateName, i7Range[, i5Number]", one per line);
        /// reads stdin when omitted
        #[arg(short = 'p', long)]
        plates: Option<PathBuf>,
    },

    /// Print 96-well console views of the index sequences
    Plateview {
        /// Indexed sequencing workflow the sequences are resolved for
        #[arg(short = 'w', long, value_enum)]
        workflow: Workflow,

        /// Which index set to display
        #[arg(short = 'i', long, value_enum, default_value = "both")]
        index: IndexChoice,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum IndexChoice {
    I7,
    I5,
    Both,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("{} {e:#}", "Error:".red().bold());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Generate {
            workflow,
            output,
            investigator,
            project,
            reads,
            plates,
        } => generate(*workflow, output, investigator, project, reads, plates.as_deref()),

        Commands::Plateview { workflow, index } => {
            if matches!(index, IndexChoice::I7 | IndexChoice::Both) {
                print_plateview(IndexKind::I7, *workflow)?;
            }
            if matches!(index, IndexChoice::I5 | IndexChoice::Both) {
                print_plateview(IndexKind::I5, *workflow)?;
            }
            Ok(())
        }
    }
}

fn generate(
    workflow: Workflow,
    output: &std::path::Path,
    investigator: &str,
    project: &str,
    reads: &str,
    plates: Option<&std::path::Path>,
) -> Result<()> {
    let reads = ReadConfig::parse(reads)?;

    let plate_text = match plates {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read plate file '{}'", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let specs = parse_plate_lines(plate_text.lines())?;
    if specs.is_empty() {
        anyhow::bail!("no plate lines supplied");
    }

    println!("\n{}", "Generating Sample Sheet".bold().underline());
    println!("  • Workflow:     {:?}", workflow);
    println!("  • Run:          {}", reads_summary(&reads));
    println!("  • Investigator: {}", investigator.bold());
    println!("  • Project:      {}", project.bold());
    println!("  • Plates:");
    for spec in &specs {
        match spec.i5 {
            Some(i5) => println!(
                "      {} (i7 {}-{}, i5 {})",
                spec.name.bold(),
                spec.i7_start,
                spec.i7_end,
                i5
            ),
            None => println!("      {} (i7 {}-{})", spec.name.bold(), spec.i7_start, spec.i7_end),
        }
    }

    let rows = build_rows(&specs, workflow, reads.is_paired_end())?;
    let meta = SheetMeta {
        investigator: investigator.to_string(),
        project: project.to_string(),
    };
    write_sample_sheet(output, &meta, &reads, &rows)?;

    println!(
        "\n{} {} samples written to {}",
        "Done:".green().bold(),
        rows.len(),
        output.display().to_string().bold()
    );
    println!("Please verify that the sheet describes your intended barcode assignments.");
    Ok(())
}

fn reads_summary(reads: &ReadConfig) -> String {
    let cycles: Vec<String> = reads.cycles.iter().map(u32::to_string).collect();
    let kind = if reads.is_paired_end() { "paired-end" } else { "single-end" };
    format!("{kind}, {} cycles", cycles.join(" + "))
}
