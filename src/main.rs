use anyhow::Result;
use clap::Parser;
use log::{debug, info};
use std::io::{self, BufWriter};
mod config;
mod driver;
mod emit;
mod ident;
mod table;
mod transcode;
mod types;
mod util;
mod walk;
use crate::config::load_config;
use crate::driver::{run, Args};
use crate::util::{configure_logging, level_filter};

fn main() -> Result<()> {
    let args = Args::parse();

    let cfg = load_config(args.config.clone())?;
    configure_logging(level_filter(cfg.loglevel), cfg.logfile.clone())?;
    debug!("Loaded config: {:?}", &cfg);

    info!("==========================================================");
    info!("= html2flash converting {:?}", &args.webroot);
    info!("==========================================================");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut err = io::stderr();
    run(&args, &mut out, &mut err)?;
    Ok(())
}
