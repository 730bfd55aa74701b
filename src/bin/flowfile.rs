//! FlowFile Stream v3 pack/unpack command line tool.
//!
//! `unpack` expands a stream file into a directory tree, one content file
//! plus one JSON attribute sidecar per record. `pack` is the inverse:
//! each named file becomes one record carrying `path` and `filename`
//! attributes.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use flowstream::attributes::{core, default_attributes};
use flowstream::{open_reader, open_writer, FlowFile, OpenMode};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "flowfile", about = "FlowFile Stream v3 pack/unpack", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Pack files into a FlowFile stream.
    Pack {
        /// Output stream file.
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
        /// Append to an existing stream instead of truncating.
        #[arg(short, long)]
        append: bool,
        /// Files to pack, one record each.
        #[arg(required = true, value_name = "PATH")]
        files: Vec<PathBuf>,
    },
    /// Unpack a FlowFile stream into a directory tree.
    Unpack {
        /// Change to directory DIR before writing output.
        #[arg(short = 'C', long = "directory", value_name = "DIR", default_value = ".")]
        directory: PathBuf,
        #[arg(short, long, action = clap::ArgAction::Count)]
        verbose: u8,
        /// Path to the FlowFile Stream v3 file.
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match Cli::parse().command {
        Command::Pack {
            output,
            append,
            files,
        } => pack(&output, append, &files),
        Command::Unpack {
            directory,
            verbose,
            file,
        } => unpack(&directory, verbose > 0, &file),
    }
}

fn pack(output: &Path, append: bool, files: &[PathBuf]) -> anyhow::Result<()> {
    let mode = if append {
        OpenMode::Append
    } else {
        OpenMode::Write
    };
    let mut writer = open_writer(output, mode)
        .with_context(|| format!("cannot open {} for writing", output.display()))?;
    for path in files {
        let content = fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;
        let Some(filename) = path.file_name().and_then(|n| n.to_str()) else {
            bail!("{} has no usable file name", path.display());
        };
        let parent = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| "./".to_string());
        let mut attributes = default_attributes();
        attributes.insert(core::PATH, parent);
        attributes.insert(core::FILENAME, filename);
        writer.write(&FlowFile::new(attributes, content))?;
    }
    writer.close()?;
    Ok(())
}

fn unpack(directory: &Path, verbose: bool, file: &Path) -> anyhow::Result<()> {
    let reader =
        open_reader(file).with_context(|| format!("cannot open {}", file.display()))?;
    for result in reader {
        let flowfile = result?;
        let path = directory.join(flowfile.attribute(core::PATH).unwrap_or("./"));
        fs::create_dir_all(&path)
            .with_context(|| format!("cannot create {}", path.display()))?;

        let Some(filename) = flowfile.attribute(core::FILENAME) else {
            bail!("record is missing the filename attribute");
        };
        let content_path = path.join(filename);
        fs::write(&content_path, flowfile.content())
            .with_context(|| format!("cannot write {}", content_path.display()))?;
        if verbose {
            println!("{}", content_path.display());
        }

        let sidecar_path = path.join(format!("{}.attrs.json", filename));
        let sidecar = serde_json::to_string_pretty(flowfile.attributes())?;
        fs::write(&sidecar_path, sidecar)
            .with_context(|| format!("cannot write {}", sidecar_path.display()))?;
        if verbose {
            println!("{}", sidecar_path.display());
        }
    }
    Ok(())
}
