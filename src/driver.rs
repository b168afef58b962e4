use crate::table::make_include_code;
use crate::types::*;
use crate::walk::process_dir;
use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::{debug, info};
use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;

/// Header the hint tells people to include.
pub const HEADER_NAME: &str = "html.h";

/// Convert a website to be put into flash memory for use with an embedded
/// web server. Generated code goes to stdout, redirect it into html.h.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to website root directory
    #[arg(value_name = "WEBROOT")]
    pub webroot: PathBuf,

    /// Do not strip CR/LF/TABs
    #[arg(short, long)]
    pub nostrip: bool,

    /// Config file to use instead of ~/.html2flash/config.ron
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Fail if two assets ended up with the same C name; the header wouldn't
/// compile anyway.
pub fn check_unique(descriptors: &[Descriptor]) -> Result<()> {
    let mut seen: HashMap<&Identifier, &str> = HashMap::new();
    for d in descriptors {
        if let Some(first) = seen.insert(&d.ident, d.page_name.as_str()) {
            return Err(anyhow!(
                "Identifier '{}' would be used for both '{}' and '{}'; rename one of them",
                d.ident,
                first,
                d.page_name
            ));
        }
    }
    Ok(())
}

/// Walk the web root and write the generated header to `out` and the
/// human-oriented summary to `err`. Nothing reaches `out` unless the whole
/// walk succeeded.
pub fn run<O: Write, E: Write>(args: &Args, out: &mut O, err: &mut E) -> Result<RunResult> {
    let root = args.webroot.as_path();
    debug!("Web root is {:?}, nostrip is {}", root, args.nostrip);

    let mut declarations: Vec<u8> = Vec::new();
    let descriptors = process_dir(&mut declarations, root, root, args.nostrip)?;
    check_unique(&descriptors)?;
    let result = RunResult { descriptors };
    let code = make_include_code(&result.identifiers());

    out.write_all(&declarations)
        .context("Failed to write generated code")?;
    writeln!(out, "/*** CODE TO INCLUDE IN SKETCH ***\n")?;
    writeln!(out, "{}", code)?;
    writeln!(out, "\n***/")?;
    out.flush()?;

    let flash_bytes: usize = result.descriptors.iter().map(|d| d.length).sum();
    info!("Total files processed: {}, {} bytes of content", result.count(), flash_bytes);
    writeln!(err, "Total files processed: {}", result.count())?;

    if result.count() > 0 {
        // Help with code to be put in sketch
        writeln!(err)?;
        writeln!(err, "Put the following in your sketch:")?;
        writeln!(err)?;
        writeln!(err, "#include \"{}\"", HEADER_NAME)?;
        writeln!(err)?;
        writeln!(err, "{}", code)?;
    }

    Ok(result)
}
