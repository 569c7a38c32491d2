//! wiki2rst CLI - split a wiki export into reStructuredText documents

use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;

use wiki2rst::{convert_file, ConversionSummary, ConvertOptions};

#[derive(Parser)]
#[command(name = "wiki2rst")]
#[command(version)]
#[command(about = "Convert a pandoc wiki export into reStructuredText documents", long_about = None)]
struct Cli {
    /// Input file
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Output directory (must exist)
    #[arg(short, long, value_name = "DIR")]
    output: PathBuf,

    /// Trace every token match on stderr
    #[arg(long)]
    debug: bool,

    /// Title of the document receiving text before the first page break
    #[arg(long, value_name = "NAME")]
    first_title: Option<String>,

    /// Prefix for image paths
    #[arg(long, value_name = "PREFIX", default_value = "images/")]
    image_prefix: String,

    /// Renderer command written to the build script
    #[arg(long, value_name = "CMD", env = "WIKI2RST_RENDERER", default_value = "rst2html.py")]
    renderer: String,

    /// Keep literal \n escapes instead of expanding them
    #[arg(long)]
    no_expand_newlines: bool,

    /// Fail on characters that cannot be written as Latin-1
    #[arg(long)]
    strict_latin1: bool,

    /// Print the conversion summary as JSON
    #[arg(long)]
    report: bool,
}

impl Cli {
    fn options(&self) -> ConvertOptions {
        let mut options = ConvertOptions::new()
            .with_image_prefix(self.image_prefix.as_str())
            .with_render_command(self.renderer.as_str())
            .with_newline_expansion(!self.no_expand_newlines)
            .with_strict_latin1(self.strict_latin1)
            .with_trace(self.debug);
        if let Some(ref title) = self.first_title {
            options = options.with_first_title(title.as_str());
        }
        options
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    validate_paths(&cli.input, &cli.output)?;

    let summary = convert_file(&cli.input, &cli.output, &cli.options())?;

    if cli.report {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&cli.output, &summary);
    }
    Ok(())
}

fn validate_paths(input: &Path, output: &Path) -> Result<(), wiki2rst::Error> {
    if !input.is_file() {
        return Err(wiki2rst::Error::InputNotFound(input.to_path_buf()));
    }
    if !output.is_dir() {
        return Err(wiki2rst::Error::OutputDirNotFound(output.to_path_buf()));
    }
    Ok(())
}

fn print_summary(output: &Path, summary: &ConversionSummary) {
    println!("{} {}", "Output files in".green().bold(), output.display());

    let count = summary.documents.len();
    for (i, doc) in summary.documents.iter().enumerate() {
        let branch = if i + 1 == count { "└─" } else { "├─" };
        println!(
            "  {} {} {}",
            branch.dimmed(),
            doc.file_name,
            format!("({} lines)", doc.line_count).dimmed()
        );
    }
    println!("  {} {}", "build script:".dimmed(), summary.build_script);

    println!(
        "\n{} {} documents, {} tables, {} input lines",
        "Done!".green().bold(),
        count,
        summary.stats.table_count,
        summary.stats.input_lines
    );
}
