mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{classes, compile, init, ClassesArgs, CompileArgs, InitArgs};

/// Styleforge CLI - compile JSON style sheets to CSS
#[derive(Parser, Debug)]
#[command(name = "styleforge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new Styleforge project
    Init(InitArgs),

    /// Compile style files to CSS
    Compile(CompileArgs),

    /// Print the generated class names of a style file as JSON
    Classes(ClassesArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let cwd = std::env::current_dir()
        .expect("Cannot get current directory")
        .display()
        .to_string();

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Compile(args) => compile(args, &cwd),
        Command::Classes(args) => classes(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
