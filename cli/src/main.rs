//! lessondoc CLI - lesson-plan to Word document tool

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use lessondoc::{JsonFormat, LessonDoc, LessonDocResult, LessonLabels, TextOptions};

const STDIN: &str = "-";

#[derive(Parser)]
#[command(name = "lessondoc")]
#[command(version)]
#[command(about = "Render lesson-plan Markdown into an A4 Word document", long_about = None)]
struct Cli {
    /// Input text file ("-" for stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output .docx file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    #[command(flatten)]
    lesson: LessonArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Options shared by every command that reads a lesson plan.
#[derive(Args, Clone)]
struct LessonArgs {
    /// Lesson name for the title line (defaults to the file name)
    #[arg(long, env = "LESSONDOC_LESSON")]
    lesson: Option<String>,

    /// Class label for the second title line
    #[arg(long = "class", env = "LESSONDOC_CLASS", default_value = "Lớp 4")]
    class_name: String,

    /// Pad or truncate table rows that disagree with the header
    #[arg(long)]
    lenient: bool,

    /// Segment the input exactly as given
    #[arg(long)]
    no_cleanup: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a lesson plan to DOCX
    Convert {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output .docx file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        lesson: LessonArgs,
    },

    /// Show the composed document as plain text
    Text {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Keep bold runs visible as **text**
        #[arg(long)]
        bold: bool,

        #[command(flatten)]
        lesson: LessonArgs,
    },

    /// Dump the composed document model as JSON
    Json {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        #[command(flatten)]
        lesson: LessonArgs,
    },

    /// Show document statistics
    Info {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        lesson: LessonArgs,
    },

    /// Show version information
    Version,
}

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            lesson,
        }) => cmd_convert(&input, output.as_deref(), &lesson),
        Some(Commands::Text {
            input,
            output,
            bold,
            lesson,
        }) => cmd_text(&input, output.as_deref(), bold, &lesson),
        Some(Commands::Json {
            input,
            output,
            compact,
            lesson,
        }) => cmd_json(&input, output.as_deref(), compact, &lesson),
        Some(Commands::Info {
            input,
            json,
            lesson,
        }) => cmd_info(&input, json, &lesson),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(&input, cli.output.as_deref(), &cli.lesson)
            } else {
                println!("{}", "Usage: lessondoc <FILE> [-o OUTPUT]".yellow());
                println!("       lessondoc --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn is_stdin(input: &Path) -> bool {
    input.as_os_str() == STDIN
}

fn read_input(input: &Path) -> io::Result<String> {
    if is_stdin(input) {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        fs::read_to_string(input)
    }
}

fn labels_for(input: &Path, args: &LessonArgs) -> LessonLabels {
    let lesson = args.lesson.clone().unwrap_or_else(|| {
        if is_stdin(input) {
            "Bài học".to_string()
        } else {
            input
                .file_stem()
                .unwrap_or_default()
                .to_string_lossy()
                .into_owned()
        }
    });
    LessonLabels::new(lesson, args.class_name.clone())
}

fn builder_for(args: &LessonArgs) -> LessonDoc {
    let mut builder = LessonDoc::new();
    if args.lenient {
        builder = builder.lenient();
    }
    if args.no_cleanup {
        builder = builder.without_cleanup();
    }
    builder
}

fn default_output(input: &Path, labels: &LessonLabels) -> PathBuf {
    if is_stdin(input) {
        PathBuf::from(format!("GiaoAn_{}.docx", labels.lesson_name))
    } else {
        input.with_extension("docx")
    }
}

fn compose(input: &Path, args: &LessonArgs) -> CliResult<(LessonDocResult, LessonLabels)> {
    let text = read_input(input)?;
    let labels = labels_for(input, args);
    let result = builder_for(args).compose(&text, &labels)?;
    Ok((result, labels))
}

fn write_or_print(output: Option<&Path>, content: &str) -> CliResult<()> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_convert(input: &Path, output: Option<&Path>, args: &LessonArgs) -> CliResult<()> {
    let text = read_input(input)?;
    let labels = labels_for(input, args);
    let bytes = builder_for(args).render(&text, &labels)?;

    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output(input, &labels));
    fs::write(&path, &bytes)?;
    log::info!("Wrote {} bytes to {}", bytes.len(), path.display());

    println!("{} {}", "Saved to".green(), path.display());
    Ok(())
}

fn cmd_text(input: &Path, output: Option<&Path>, bold: bool, args: &LessonArgs) -> CliResult<()> {
    let (result, _) = compose(input, args)?;
    let options = TextOptions::new().with_bold_markers(bold);
    let text = result.to_text(&options)?;
    write_or_print(output, &text)
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    args: &LessonArgs,
) -> CliResult<()> {
    let (result, _) = compose(input, args)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = result.to_json(format)?;
    write_or_print(output, &json)
}

fn cmd_info(input: &Path, as_json: bool, args: &LessonArgs) -> CliResult<()> {
    let (result, labels) = compose(input, args)?;
    let stats = result.stats();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}", "Lesson Plan".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Input".bold(), input.display());
    println!("{}: {}", "Lesson".bold(), labels.lesson_name);
    println!("{}: {}", "Class".bold(), labels.class_name);

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "Section markers".bold(), stats.section_marker_count);
    println!("{}: {}", "Bullet items".bold(), stats.bullet_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!(
        "{}: {} ({} rows)",
        "Tables".bold(),
        stats.table_count,
        stats.table_row_count
    );
    println!("{}: {}", "Bold runs".bold(), stats.bold_run_count);
    println!("{}: {}", "Words".bold(), stats.word_count);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "lessondoc".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Lesson-plan Markdown to Word document tool");
    println!();
    println!("License: MIT");
}
