use super::super::args::*;
use crate::exit_codes::SUCCESS;

pub fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        None => super::create::run(cli.create),
        Some(Command::Create(args)) => super::create::run(args),
        Some(Command::Plan(args)) => super::plan::run(args),
        Some(Command::Inspect(args)) => super::inspect::run(args),
        Some(Command::Version) => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(SUCCESS)
        }
    }
}
