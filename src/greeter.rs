use std::{ffi::OsStr, io::Write};

/// Greeting and farewell routines called by [crate::Entry]
pub trait Greeter {
    /// Greet `name`, or greet without a name when `None`
    fn say_hello(&self, out: &mut dyn Write, name: Option<&OsStr>) -> std::io::Result<()>;
    fn say_goodbye(&self, out: &mut dyn Write) -> std::io::Result<()>;
}

/// Plain one-line messages
///
/// Non UTF-8 names are written lossily.
#[derive(Debug, Clone, Copy, Default)]
pub struct Console;

impl Greeter for Console {
    fn say_hello(&self, out: &mut dyn Write, name: Option<&OsStr>) -> std::io::Result<()> {
        match name {
            Some(name) => writeln!(out, "Hello, {}!", name.to_string_lossy()),
            None => writeln!(out, "Hello!"),
        }
    }

    fn say_goodbye(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out, "Goodbye!")
    }
}
