use aether_release::{EntryOrigin, PackagePlan};

use super::super::args::{OutputFormat, PlanArgs};
use super::super::helpers::build_packager;
use crate::exit_codes;

pub fn run(args: PlanArgs) -> anyhow::Result<i32> {
    let plan = build_packager(&args.package)?.plan()?;
    match args.format {
        OutputFormat::Text => print!("{}", render(&plan)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
    }
    Ok(exit_codes::SUCCESS)
}

fn render(plan: &PackagePlan) -> String {
    let width = plan
        .entries
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("Release dir: {}\n", plan.release_dir.display()));
    out.push_str(&format!("README:      {}\n", plan.readme_path.display()));
    out.push_str(&format!("Archive:     {}\n", plan.archive_path.display()));
    out.push_str(&format!("Entries ({}):\n", plan.entries.len()));
    for entry in &plan.entries {
        let origin = match &entry.origin {
            EntryOrigin::Readme => "readme".to_string(),
            EntryOrigin::Placeholder { description } => format!("placeholder ({description})"),
            EntryOrigin::Source { path } => format!("source {}", path.display()),
        };
        out.push_str(&format!("  {:<width$}  {}\n", entry.name, origin));
    }
    out
}
