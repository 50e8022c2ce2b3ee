use clap::{Parser, Subcommand};
use metro_osm::{
    config::OsmImportConfiguration,
    model::{
        osm::{graph::MetroWriter, import_ops, PbfSource},
        OsmCliError,
    },
};
use std::path::Path;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct OsmAppArguments {
    #[command(subcommand)]
    app: App,
}

#[derive(Subcommand)]
pub enum App {
    Pbf {
        #[arg(long, help = "path to .pbf file for import")]
        pbf_file: String,
        #[arg(long, help = "path to .toml or .json file with metro-osm import parameters")]
        configuration_file: Option<String>,
        #[arg(long, help = "output path for the links and intersections tables")]
        output_directory: String,
    },
}

pub fn run(app: &App) -> Result<(), OsmCliError> {
    env_logger::init();
    match app {
        App::Pbf {
            pbf_file,
            configuration_file,
            output_directory,
        } => {
            let conf = match configuration_file {
                None => Ok(OsmImportConfiguration::default()),
                Some(f) => {
                    log::info!("reading metro-osm configuration from {f}");
                    OsmImportConfiguration::try_from(f)
                }
            }?;
            let out_path = Path::new(output_directory);
            let source = PbfSource::new(pbf_file);
            let graph = import_ops::run_import(&source, &conf)?;
            match graph.write_metro(out_path, conf.overwrite) {
                Ok(_) => {
                    eprintln!("finished.");
                    Ok(())
                }
                Err(e) => {
                    log::error!("metro-osm failed: {e}");
                    Err(e)?
                }
            }
        }
    }
}

fn main() {
    let args = OsmAppArguments::parse();
    if let Err(e) = run(&args.app) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
