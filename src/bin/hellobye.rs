use hellobye::cli::{self, Kind};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    cli::main(Kind::Versioned)
}
