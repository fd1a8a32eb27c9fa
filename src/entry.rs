use log::debug;
use std::{ffi::OsStr, io::Write, process::ExitCode};

use crate::{error::*, Greeter, Identity};

/// Line written between greeting and farewell
pub const TRANSITION: &str = "...";

/// What to do when no name is given
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Variant {
    /// Print the identity line and stop with [Status::Unnamed]
    Versioned(Identity),
    /// Greet without a name, then continue as usual
    Anonymous,
}

/// Outcome of a run, mapped to the process exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Greeting, transition and farewell were all written
    Greeted,
    /// No name was given and only the identity line was written
    Unnamed,
}

impl Status {
    pub fn code(self) -> u8 {
        match self {
            Status::Greeted => 0,
            Status::Unnamed => 1,
        }
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        ExitCode::from(status.code())
    }
}

/// Entry point of the greeting program
///
/// Holds no state between runs, so the same input always yields the same
/// output and [Status].
#[derive(Debug, Clone)]
pub struct Entry<G> {
    variant: Variant,
    greeter: G,
}

impl<G: Greeter> Entry<G> {
    pub fn new(variant: Variant, greeter: G) -> Self {
        Entry { variant, greeter }
    }

    pub fn run<W: Write>(&self, name: Option<&OsStr>, out: &mut W) -> Result<Status> {
        match (name, &self.variant) {
            (None, Variant::Versioned(identity)) => {
                debug!("No name given, print identity");
                writeln!(out, "{}", identity)?;
                return Ok(Status::Unnamed);
            }
            (Some(name), _) => {
                debug!("Greet {:?}", name);
                self.greeter.say_hello(out, Some(name))?;
            }
            (None, Variant::Anonymous) => {
                debug!("No name given, greet anonymously");
                self.greeter.say_hello(out, None)?;
            }
        }
        writeln!(out, "{}", TRANSITION)?;
        self.greeter.say_goodbye(out)?;
        Ok(Status::Greeted)
    }
}
