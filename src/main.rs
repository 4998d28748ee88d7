//! shotgrid - Screenshot comparison tables from HTML

use std::fs::File;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

use shotgrid::{Error, ImageRecord, TableConfig, classify_html, render, util};

#[derive(Parser)]
#[command(name = "shotgrid")]
#[command(version, about = "Build a before/after screenshot table from HTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    shotgrid pasted.html                 Print the table for pasted.html
    pbpaste | shotgrid | pbcopy          Convert HTML from the clipboard
    shotgrid --list pasted.html          Show how each image label was read")]
struct Cli {
    /// Input HTML file ("-" or omitted for stdin)
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Write the table here instead of stdout
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<String>,

    /// Display width for every image
    #[arg(short, long, default_value_t = 400)]
    width: u32,

    /// Text for the collapsible summary
    #[arg(short, long, default_value = "Screenshots")]
    summary: String,

    /// Print the classified images as JSON instead of HTML
    #[arg(long, conflicts_with = "list")]
    json: bool,

    /// Print one line per classified image instead of HTML
    #[arg(short, long)]
    list: bool,

    /// Suppress status messages
    #[arg(short, long)]
    quiet: bool,

    /// Log debug details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), String> {
    let bytes = read_input(cli.input.as_deref()).map_err(|e| e.to_string())?;
    let html = util::decode_text(&bytes);
    let records = classify_html(&html).map_err(|e| e.to_string())?;

    let rendered = if cli.json {
        let mut json = serde_json::to_string_pretty(&records).map_err(|e| e.to_string())?;
        json.push('\n');
        json
    } else if cli.list {
        list_records(&records)
    } else {
        let config = TableConfig::new()
            .with_image_width(cli.width)
            .with_summary(cli.summary.as_str());
        render(&records, &config)
    };

    write_output(cli.output.as_deref(), &rendered).map_err(|e| e.to_string())?;

    if !cli.quiet && !cli.json && !cli.list {
        let paired = records.iter().filter(|r| r.role.is_paired()).count();
        eprintln!(
            "Rendered {} images ({} standalone, {} paired)",
            records.len(),
            records.len() - paired,
            paired
        );
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<Vec<u8>, Error> {
    let mut bytes = Vec::new();
    match path {
        None | Some("-") => {
            io::Read::read_to_end(&mut io::stdin().lock(), &mut bytes)?;
        }
        Some(path) => {
            io::Read::read_to_end(&mut File::open(path)?, &mut bytes)?;
        }
    }
    Ok(bytes)
}

fn write_output(path: Option<&str>, content: &str) -> Result<(), Error> {
    match path {
        Some(path) => File::create(path)?.write_all(content.as_bytes())?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn list_records(records: &[ImageRecord]) -> String {
    let name_width = records
        .iter()
        .map(|r| r.display_name.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for record in records {
        out.push_str(&format!(
            "{:>5}  {:<10}  {:<name_width$}  {}\n",
            record.order,
            record.role.as_str(),
            record.display_name,
            record.src
        ));
    }
    out
}
