use crate::config::{Config, STYLE_FILE_EXTENSION};
use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use styleforge_core::{Pipeline, StyleSheet};
use tracing::{debug, info};
use walkdir::WalkDir;

#[derive(Debug, Args)]
pub struct CompileArgs {
    /// Style files to compile (defaults to every file in the source directory)
    pub files: Vec<PathBuf>,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Class name prefix (overrides config)
    #[arg(short, long)]
    pub prefix: Option<String>,
}

pub fn compile(args: CompileArgs, cwd: &str) -> Result<()> {
    let mut config = Config::load(cwd)?;
    if let Some(prefix) = &args.prefix {
        config.class_name_prefix = prefix.clone();
    }
    if let Some(out_dir) = &args.out_dir {
        config.out_dir = Some(out_dir.clone());
    }

    let src_dir = config.get_src_dir(cwd);
    let files = if args.files.is_empty() {
        if !src_dir.exists() {
            return Err(anyhow!("Source directory does not exist: {:?}", src_dir));
        }
        find_style_files(&src_dir)
    } else {
        args.files.iter().map(|f| PathBuf::from(cwd).join(f)).collect()
    };

    if files.is_empty() {
        println!("{}", "⚠️  No style files found".yellow());
        return Ok(());
    }

    if !args.stdout {
        println!("{}", "🔨 Compiling style files...".bright_blue().bold());
        println!("Found {} files", files.len());
    }

    let mut success_count = 0;
    let mut error_count = 0;

    for file in &files {
        let relative_path = file
            .strip_prefix(&src_dir)
            .ok()
            .or_else(|| file.file_name().map(Path::new))
            .unwrap_or(file.as_path());

        match compile_file(file, relative_path, &config, &args, cwd) {
            Ok(output_path) => {
                success_count += 1;
                if !args.stdout {
                    println!(
                        "  {} {} → {}",
                        "✓".green(),
                        relative_path.display(),
                        output_path
                    );
                }
            }
            Err(e) => {
                error_count += 1;
                eprintln!(
                    "  {} {} - {}",
                    "✗".red(),
                    relative_path.display(),
                    format!("{:#}", e).red()
                );
            }
        }
    }

    if args.stdout {
        return if error_count == 0 {
            Ok(())
        } else {
            Err(anyhow!("{} files failed to compile", error_count))
        };
    }

    println!();
    if error_count == 0 {
        println!(
            "{} Compiled {} files successfully",
            "✅".green(),
            success_count
        );
        Ok(())
    } else {
        println!(
            "{} Compiled {} files, {} errors",
            "⚠️".yellow(),
            success_count,
            error_count
        );
        Err(anyhow!("{} files failed to compile", error_count))
    }
}

pub(crate) fn find_style_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some(STYLE_FILE_EXTENSION))
        .collect();

    files.sort();
    files
}

/// Compile the JSON source of one style sheet to CSS
pub(crate) fn compile_source(source: &str, pipeline: &Pipeline) -> Result<String> {
    let sheet = StyleSheet::from_json(source, pipeline)?;
    Ok(sheet.to_css())
}

fn compile_file(
    file_path: &Path,
    relative_path: &Path,
    config: &Config,
    args: &CompileArgs,
    cwd: &str,
) -> Result<String> {
    let source = fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read {}", file_path.display()))?;

    // class-name counters restart for every file
    let pipeline = config.pipeline()?;
    debug!(file = %file_path.display(), plugins = ?pipeline.plugin_names(), "Compiling style file");
    let output = compile_source(&source, &pipeline)?;

    if args.stdout {
        println!("{}", output);
        return Ok("stdout".to_string());
    }

    let output_file = config
        .get_out_dir(cwd)
        .join(relative_path)
        .with_extension("css");

    if let Some(parent) = output_file.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(&output_file, output)
        .with_context(|| format!("Failed to write {}", output_file.display()))?;
    info!(output = %output_file.display(), "Wrote CSS");

    Ok(output_file.display().to_string())
}
