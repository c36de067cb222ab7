//! Supervisor-call wrapper generator.
//!
//! Writes the declarations and definitions documents for the built-in
//! catalog, or for a catalog file given with `--catalog`.

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use svcgen::{Catalog, Generator, RegisterWidth};

#[derive(Parser, Debug)]
#[command(name = "svcgen", about = "Generate supervisor-call marshalling wrappers")]
struct Args {
    /// Catalog file (`<id> <signature>` per line); defaults to the built-in catalog.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Directory the generated files are written to.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    #[arg(long, default_value = "svc.h")]
    header_name: String,

    #[arg(long, default_value = "svc.cpp")]
    source_name: String,

    /// Print the register layout of one call for both widths and exit.
    #[arg(long, value_name = "NAME")]
    dump_layout: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = match &args.catalog {
        Some(path) => Catalog::parse(&fs::read_to_string(path)?)?,
        None => Catalog::horizon(),
    };
    let generator = Generator::default();

    if let Some(name) = &args.dump_layout {
        let entry = catalog
            .entries()
            .iter()
            .find(|e| e.name() == name.as_str())
            .ok_or_else(|| format!("no catalog entry named '{}'", name))?;
        println!("{:#x} {}", entry.id, entry.signature);
        for width in RegisterWidth::ALL {
            let (_, layout) = generator.plan(entry, width)?;
            print!("{}", layout);
        }
        return Ok(());
    }

    let sources = generator.generate(&catalog)?;
    fs::create_dir_all(&args.out_dir)?;
    fs::write(args.out_dir.join(&args.header_name), &sources.header)?;
    fs::write(args.out_dir.join(&args.source_name), &sources.source)?;

    log::debug!("{}", sources.stats);
    println!("Done (emitted {} definitions)", sources.stats.definitions);
    Ok(())
}
