use aether_release::inspect_archive;
use anyhow::Context;

use super::super::args::{InspectArgs, OutputFormat};
use crate::exit_codes;

pub fn run(args: InspectArgs) -> anyhow::Result<i32> {
    let entries = inspect_archive(&args.archive)
        .with_context(|| format!("failed to read archive {}", args.archive.display()))?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Text => {
            println!("{:>10}  {:>10}  {:<9}  Name", "Size", "Packed", "Method");
            for e in &entries {
                println!(
                    "{:>10}  {:>10}  {:<9}  {}",
                    e.size, e.compressed_size, e.compression, e.name
                );
            }
            let total: u64 = entries.iter().map(|e| e.size).sum();
            println!("{} entries, {} bytes", entries.len(), total);
        }
    }
    Ok(exit_codes::SUCCESS)
}
