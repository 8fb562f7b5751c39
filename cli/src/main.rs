//! FileWorker - Command-line interface for the file operations library.
//!
//! Exposes each library operation as a subcommand for scripting and manual
//! use. Results go to stdout, diagnostics and logs to stderr.

use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;
use fileworker::{
    get_file_name, get_full_path, get_path, mkdir, read_all, read_lines, try_copy_with,
    try_write_with, Delay, FileWorkerError, NoDelay, RetryPolicy, ThreadDelay, DEFAULT_RETRY_DELAY,
    DEFAULT_TRIES,
};

/// FileWorker - read, write and copy files with bounded retry
#[derive(Parser, Debug)]
#[command(name = "fileworker")]
#[command(version = "0.1.0")]
#[command(about = "Read, write and copy files with bounded retry")]
struct Args {
    /// Log each attempt to stderr
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the contents of a file
    Read {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },

    /// Print a file line by line
    Lines {
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Prefix each line with its 1-based line number
        #[arg(long)]
        number: bool,
    },

    /// Write text to a file, replacing its contents
    Write {
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Text to write; read from stdin when omitted
        #[arg(long, value_name = "TEXT")]
        text: Option<String>,

        #[command(flatten)]
        retry: RetryArgs,
    },

    /// Copy a file
    Copy {
        #[arg(value_name = "FROM")]
        from: PathBuf,

        #[arg(value_name = "TO")]
        to: PathBuf,

        /// Replace the destination if it already exists
        #[arg(long)]
        overwrite: bool,

        #[command(flatten)]
        retry: RetryArgs,
    },

    /// Print the absolute path of a file
    FullPath {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },

    /// Print the file name of a file
    Name {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },

    /// Print the directory containing a file
    Dir {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },

    /// Create a directory (and parents) and print its absolute path
    Mkdir {
        #[arg(value_name = "NAME")]
        name: PathBuf,
    },
}

#[derive(clap::Args, Debug, Clone, Copy)]
struct RetryArgs {
    /// Maximum number of attempts (0 never attempts)
    #[arg(long, value_name = "N", default_value_t = DEFAULT_TRIES)]
    tries: u32,

    /// Wait between attempts, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_RETRY_DELAY.as_millis() as u64)]
    delay_ms: u64,
}

impl RetryArgs {
    fn policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.tries).with_delay(Duration::from_millis(self.delay_ms))
    }

    /// `--delay-ms 0` retries back to back without going through the sleeper.
    fn delay(&self) -> &'static dyn Delay {
        if self.delay_ms == 0 {
            &NoDelay
        } else {
            &ThreadDelay
        }
    }
}

/// Result of a command that did not fault.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    /// The operation succeeded and its output was written
    Done,
    /// The operation reported not-found or failure
    Failed(String),
}

fn main() {
    let args = Args::parse();

    if let Err(msg) = init_logging(args.verbose) {
        eprintln!("Warning: {}", msg);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let exit_code = match run_cli(&args, &mut out) {
        Ok(Outcome::Done) => 0,
        Ok(Outcome::Failed(msg)) => {
            eprintln!("{}", msg);
            1
        }
        Err(msg) => {
            eprintln!("Error: {}", msg);
            2
        }
    };

    std::process::exit(exit_code);
}

/// Install a stderr fmt subscriber: WARN by default, DEBUG when verbose.
fn init_logging(verbose: bool) -> Result<(), String> {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| format!("Failed to install logger: {}", e))
}

/// Main CLI logic - separated for testability
fn run_cli(args: &Args, out: &mut dyn Write) -> Result<Outcome, String> {
    match &args.command {
        Command::Read { path } => match read_all(path).map_err(|e| describe(&e))? {
            Some(text) => {
                write!(out, "{}", text).map_err(output_error)?;
                Ok(Outcome::Done)
            }
            None => Ok(not_found(path)),
        },

        Command::Lines { path, number } => match read_lines(path).map_err(|e| describe(&e))? {
            Some(lines) => {
                for (index, line) in lines.iter().enumerate() {
                    if *number {
                        writeln!(out, "{:>6}  {}", index + 1, line).map_err(output_error)?;
                    } else {
                        writeln!(out, "{}", line).map_err(output_error)?;
                    }
                }
                Ok(Outcome::Done)
            }
            None => Ok(not_found(path)),
        },

        Command::Write { path, text, retry } => {
            let text = match text {
                Some(text) => text.clone(),
                None => io::read_to_string(io::stdin())
                    .map_err(|e| format!("Failed to read stdin: {}", e))?,
            };

            if try_write_with(&text, path, &retry.policy(), retry.delay()) {
                Ok(Outcome::Done)
            } else {
                Ok(Outcome::Failed(format!(
                    "Write failed after {} attempt(s): {}",
                    retry.tries,
                    path.display()
                )))
            }
        }

        Command::Copy {
            from,
            to,
            overwrite,
            retry,
        } => {
            let copied = try_copy_with(from, to, *overwrite, &retry.policy(), retry.delay())
                .map_err(|e| describe(&e))?;

            if copied {
                Ok(Outcome::Done)
            } else {
                Ok(Outcome::Failed(format!(
                    "Copy failed after {} attempt(s): {} -> {}",
                    retry.tries,
                    from.display(),
                    to.display()
                )))
            }
        }

        Command::FullPath { path } => match get_full_path(path) {
            Some(full) => print_line(out, &full.display().to_string()),
            None => Ok(not_found(path)),
        },

        Command::Name { path } => match get_file_name(path) {
            Some(name) => print_line(out, &name),
            None => Ok(not_found(path)),
        },

        Command::Dir { path } => match get_path(path) {
            Some(dir) => print_line(out, &dir.display().to_string()),
            None => Ok(not_found(path)),
        },

        Command::Mkdir { name } => {
            let created = mkdir(name).map_err(|e| describe(&e))?;
            print_line(out, &created.display().to_string())
        }
    }
}

fn print_line(out: &mut dyn Write, line: &str) -> Result<Outcome, String> {
    writeln!(out, "{}", line).map_err(output_error)?;
    Ok(Outcome::Done)
}

fn not_found(path: &std::path::Path) -> Outcome {
    Outcome::Failed(format!("File not found: {}", path.display()))
}

fn describe(err: &FileWorkerError) -> String {
    match err.raw_os_error() {
        Some(code) => format!("{} (os error {})", err, code),
        None => err.to_string(),
    }
}

fn output_error(err: io::Error) -> String {
    format!("Failed to write output: {}", err)
}
