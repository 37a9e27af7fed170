use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use micrometry_core::provider::FileImageProvider;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let provider = FileImageProvider::new(&args.file);
    let picked = provider.probe()?;

    println!("File:        {}", picked.uri);
    println!(
        "Dimensions:  {}x{}",
        picked.size.width, picked.size.height
    );
    println!(
        "Aspect:      {:.3}",
        picked.size.width as f64 / picked.size.height as f64
    );

    Ok(())
}
