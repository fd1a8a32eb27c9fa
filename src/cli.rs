use clap::Parser;
use std::{
    ffi::{OsStr, OsString},
    io::{self, BufWriter, Write},
    process::ExitCode,
};

use crate::{Console, Entry, Identity, Variant};

/// Command line of both executables
///
/// Every argument is taken as-is, `-x` or `--help` included,
/// so no flags are recognized.
#[derive(Debug, Parser)]
#[clap(
    disable_help_flag = true,
    disable_version_flag = true,
    allow_hyphen_values = true,
    trailing_var_arg = true
)]
pub struct Args {
    /// Name to greet
    #[clap(allow_hyphen_values = true, value_parser)]
    pub name: Option<OsString>,

    /// Ignored
    #[clap(allow_hyphen_values = true, multiple_values = true, hide = true, value_parser)]
    pub rest: Vec<OsString>,
}

impl Args {
    /// Parse an argument list starting with the binary name
    ///
    /// An escape `--` is inserted after the binary name, so clap stops
    /// looking for options and a user-given `--` stays a plain value.
    pub fn from_args_os<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::<OsString>::into);
        let bin = args.next().unwrap_or_else(|| OsString::from(crate::PROGRAM));
        Args::parse_from(
            std::iter::once(bin)
                .chain(std::iter::once(OsString::from("--")))
                .chain(args),
        )
    }

    pub fn name(&self) -> Option<&OsStr> {
        self.name.as_deref()
    }
}

/// Which executable is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// `hellobye`: print identity and fail when no name is given
    Versioned,
    /// `hellobye-anon`: greet anyway when no name is given
    Anonymous,
}

impl Kind {
    pub fn variant(self) -> crate::Result<Variant> {
        Ok(match self {
            Kind::Versioned => Variant::Versioned(Identity::from_build()?),
            Kind::Anonymous => Variant::Anonymous,
        })
    }
}

/// Logs go to stderr, and are silent by default so stdout is all a user sees
pub fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}

pub fn main(kind: Kind) -> anyhow::Result<ExitCode> {
    init_logger();
    log::debug!(
        "{} {} built at {}",
        crate::PROGRAM,
        crate::VERSION,
        option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown time")
    );

    let args = Args::from_args_os(std::env::args_os());
    if !args.rest.is_empty() {
        log::debug!("Ignore extra arguments: {:?}", args.rest);
    }
    let entry = Entry::new(kind.variant()?, Console);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let status = entry.run(args.name(), &mut out)?;
    out.flush()?;
    Ok(status.into())
}
