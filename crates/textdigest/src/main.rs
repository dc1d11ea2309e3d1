mod input;
mod output;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use input::InputSource;
use std::io::{BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use textdigest_common::{logger, AppConfig};
use textdigest_summarizer::{format_output, summarize};

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    if let Some(root) = find_project_root() {
        let env_path = root.join(".env");
        if env_path.exists() {
            dotenv::from_path(&env_path).ok();
        }
    } else {
        // Fallback to default dotenv behavior
        dotenv::dotenv().ok();
    }
}

#[derive(Parser)]
#[command(name = "textdigest")]
#[command(about = "textdigest - keyword-frequency text summarizer", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    args: SummarizeArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize text from a file, piped stdin or the interactive prompt
    Summarize(SummarizeArgs),
}

#[derive(Args, Debug, Clone, Default)]
struct SummarizeArgs {
    /// Read the text from this file instead of prompting
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Write the report here instead of the configured output path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the result as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

impl SummarizeArgs {
    fn input_source(&self) -> InputSource {
        match &self.file {
            Some(path) => InputSource::File(path.clone()),
            None if !std::io::stdin().is_terminal() => InputSource::Stdin,
            None => InputSource::Interactive,
        }
    }
}

/// Read text, summarize it, show the report and save it
///
/// `out` gets the menu, the report and user messages. With `json` the
/// "Saved to" notice goes to `status` so that `out` stays valid JSON.
fn run<R: BufRead, W: Write, E: Write>(
    source: &InputSource,
    json: bool,
    output_path: &Path,
    reader: &mut R,
    out: &mut W,
    status: &mut E,
) -> Result<()> {
    tracing::info!("Reading input: {:?}", source);

    let text = match input::read_text(source, reader, out) {
        Ok(text) => text,
        Err(e) if e.is_not_found() => {
            tracing::info!("Input not found: {}", e);
            writeln!(out, "File not found. Please check the path and try again.")?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if text.is_empty() {
        writeln!(out, "No text provided. Exiting.")?;
        return Ok(());
    }

    tracing::info!("Summarizing {} chars", text.len());
    let result = summarize(&text);
    let report = format_output(&result);

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
    } else {
        writeln!(out, "\n{}", report)?;
    }
    out.flush()?;

    output::write_atomic(output_path, &report)?;

    if json {
        writeln!(status, "\nSaved to {}", output_path.display())?;
    } else {
        writeln!(out, "\nSaved to {}", output_path.display())?;
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load environment variables from .env at project root
    // before CLI overrides are applied on top of them
    load_dotenv_from_project_root();

    let args = match cli.command {
        Some(Commands::Summarize(args)) => args,
        None => cli.args,
    };

    // Override with CLI arguments
    if let Some(output) = &args.output {
        std::env::set_var("OUTPUT_PATH", output);
    }

    // Load config with updated env vars
    let config = AppConfig::from_env()?;

    // Setup logging
    logger::setup_logging(&config.log_dir, &config.log_level)?;

    tracing::info!("textdigest starting, output: {}", config.output_path.display());

    let stdin = std::io::stdin();
    run(
        &args.input_source(),
        args.json,
        &config.output_path,
        &mut stdin.lock(),
        &mut std::io::stdout().lock(),
        &mut std::io::stderr(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_top_level_args() {
        let cli = Cli::try_parse_from(["textdigest", "--file", "notes.txt", "--json"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.args.file, Some(PathBuf::from("notes.txt")));
        assert!(cli.args.json);
        assert_eq!(cli.args.input_source(), InputSource::File(PathBuf::from("notes.txt")));
    }

    #[test]
    fn test_parse_summarize_subcommand() {
        let cli = Cli::try_parse_from(["textdigest", "summarize", "-o", "out/report.txt"]).unwrap();
        match cli.command {
            Some(Commands::Summarize(args)) => {
                assert_eq!(args.output, Some(PathBuf::from("out/report.txt")));
                assert!(args.file.is_none());
                assert!(!args.json);
            }
            None => panic!("expected summarize subcommand"),
        }
    }

    fn run_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("textdigest-run-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn run_piped(text: &str, json: bool, output_path: &Path) -> (String, String) {
        let mut reader = std::io::Cursor::new(text.to_string());
        let mut out = Vec::new();
        let mut status = Vec::new();
        run(&InputSource::Stdin, json, output_path, &mut reader, &mut out, &mut status).unwrap();
        (String::from_utf8(out).unwrap(), String::from_utf8(status).unwrap())
    }

    #[test]
    fn test_run_writes_report_verbatim() {
        let dir = run_dir("report");
        let output_path = dir.join("output.txt");
        let text = "Cats are great pets. Dogs are loyal companions. Birds can sing beautifully. Cats and dogs are popular.";

        let (out, status) = run_piped(text, false, &output_path);

        let report = format_output(&summarize(text));
        assert_eq!(std::fs::read_to_string(&output_path).unwrap(), report);
        assert_eq!(out, format!("\n{}\n\nSaved to {}\n", report, output_path.display()));
        assert!(status.is_empty());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_run_json_output_stays_parseable() {
        let dir = run_dir("json");
        let output_path = dir.join("output.txt");
        let text = "Cats are great pets. Dogs are loyal companions.";

        let (out, status) = run_piped(text, true, &output_path);

        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["summary"], text);
        assert!(status.contains("Saved to"));
        // The saved file is still the plain-text report
        assert!(std::fs::read_to_string(&output_path).unwrap().starts_with("SUMMARY:\n"));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_run_blank_text_exits_without_output() {
        let dir = run_dir("blank");
        let output_path = dir.join("output.txt");

        let (out, _) = run_piped("  \n\t\n", false, &output_path);

        assert_eq!(out, "No text provided. Exiting.\n");
        assert!(!output_path.exists());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_run_missing_file_exits_cleanly() {
        let dir = run_dir("missing");
        let output_path = dir.join("output.txt");
        let source = InputSource::File(dir.join("nope.txt"));
        let mut reader = std::io::Cursor::new(String::new());
        let mut out = Vec::new();
        let mut status = Vec::new();

        let result = run(&source, false, &output_path, &mut reader, &mut out, &mut status);

        assert!(result.is_ok());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "File not found. Please check the path and try again.\n"
        );
        assert!(!output_path.exists());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
