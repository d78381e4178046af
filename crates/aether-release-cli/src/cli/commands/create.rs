use super::super::args::{CreateArgs, OutputFormat};
use super::super::helpers::build_packager;
use crate::exit_codes;

pub fn run(args: CreateArgs) -> anyhow::Result<i32> {
    let packager = build_packager(&args.package)?;
    let report = packager.run()?;

    match args.format {
        OutputFormat::Text => {
            for line in report.summary_lines() {
                println!("{line}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(exit_codes::SUCCESS)
}
