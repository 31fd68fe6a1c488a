//! CLI entry point for dtlister

use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use tracing_subscriber::EnvFilter;

use dtlister::output::ensure_directory;
use dtlister::{
    DivisorLadder, OutputFormat, Prompter, ReportIdentity, ReportOptions, ScanConfig, TextLayout,
    generate_report,
};

/// Report file format
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Plain text with fixed-width columns
    Text,
    /// Excel workbook
    Xlsx,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Xlsx => OutputFormat::Spreadsheet,
        }
    }
}

/// Size unit convention
#[derive(Debug, Clone, Copy, ValueEnum)]
enum UnitsArg {
    /// 1 KB = 1000 bytes
    Decimal,
    /// 1 KB = 1024 bytes
    Binary,
}

impl From<UnitsArg> for DivisorLadder {
    fn from(arg: UnitsArg) -> Self {
        match arg {
            UnitsArg::Decimal => DivisorLadder::Decimal,
            UnitsArg::Binary => DivisorLadder::Binary,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dtlister")]
#[command(about = "Save a recursive listing of a directory, with file sizes, as a text or Excel report")]
#[command(version)]
struct Args {
    /// Directory to scan (asked for interactively when omitted)
    path: Option<PathBuf>,

    /// Directory the report is saved in (asked for interactively when omitted)
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Report format (asked for interactively when omitted)
    #[arg(short, long, value_name = "FORMAT")]
    format: Option<FormatArg>,

    /// List hidden (dot-prefixed) files and directories
    #[arg(short, long)]
    all: bool,

    /// Skip entries matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Report only N directory levels below the root
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Size units: decimal (1000-based) or binary (1024-based)
    #[arg(long, value_name = "UNITS", default_value = "decimal")]
    units: UnitsArg,

    /// Width of the name column in text reports
    #[arg(long = "name-width", default_value = "120")]
    name_width: usize,

    /// Author shown in the report header
    #[arg(long)]
    author: Option<String>,

    /// Website shown in the report header
    #[arg(long)]
    website: Option<String>,

    /// Email shown in the report header
    #[arg(long)]
    email: Option<String>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr) // stdout is reserved for prompts
        .init();
}

/// Use a flag value after checking it, or ask for it.
fn resolve_directory<R: io::BufRead, W: Write>(
    given: Option<PathBuf>,
    prompter: &mut Prompter<R, W>,
    question: &str,
) -> PathBuf {
    match given {
        Some(path) => {
            if let Err(e) = ensure_directory(&path) {
                eprintln!("dtlister: {}", e);
                process::exit(1);
            }
            path
        }
        None => prompter.ask_directory(question).unwrap_or_else(|e| {
            eprintln!("dtlister: {}", e);
            process::exit(1);
        }),
    }
}

fn build_options(args: &Args) -> ReportOptions {
    let defaults = ReportIdentity::default();
    ReportOptions {
        scan: ScanConfig {
            show_hidden: args.all,
            ignore_patterns: args.ignore.clone(),
            max_depth: args.level,
        },
        ladder: args.units.into(),
        layout: TextLayout {
            name_width: args.name_width,
        },
        identity: ReportIdentity {
            author: args.author.clone().unwrap_or(defaults.author),
            website: args.website.clone().unwrap_or(defaults.website),
            email: args.email.clone().unwrap_or(defaults.email),
            ..defaults
        },
    }
}

/// Print the success message, colored when stdout is a terminal.
fn print_success(report: &Path, format: OutputFormat) -> io::Result<()> {
    let choice = if io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    let file_name = report
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let directory = report.parent().unwrap_or(Path::new("."));

    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
    write!(
        stdout,
        "Directory Tree created in {} file: ",
        format.description()
    )?;
    stdout.reset()?;
    writeln!(stdout, "{}", file_name)?;
    writeln!(stdout, "In Directory: {}", directory.display())?;
    Ok(())
}

fn main() {
    init_logging();
    let args = Args::parse();

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    let root = resolve_directory(
        args.path.clone(),
        &mut prompter,
        "Input a directory for scanning: ",
    );
    let output_dir = resolve_directory(
        args.output.clone(),
        &mut prompter,
        "Input a directory for output file: ",
    );
    let format = match args.format {
        Some(f) => f.into(),
        None => prompter.ask_format().unwrap_or_else(|e| {
            eprintln!("dtlister: {}", e);
            process::exit(1);
        }),
    };

    let options = build_options(&args);
    let report = match generate_report(&root, &output_dir, format, &options) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("dtlister: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = print_success(&report, format) {
        eprintln!("dtlister: error writing output: {}", e);
        process::exit(1);
    }
}
