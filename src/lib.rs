//! hellobye
//! ========
//!
//! Greets by name, then says goodbye.
//!
//! Two executables share this library and differ only when no name is given:
//! `hellobye` prints its [Identity] and exits with `1`,
//! `hellobye-anon` greets without a name and exits with `0`.

pub mod cli;
pub mod entry;
pub mod error;
pub mod greeter;
pub mod identity;

pub use entry::{Entry, Status, Variant};
pub use error::{Error, Result};
pub use greeter::{Console, Greeter};
pub use identity::{Identity, Version, PROGRAM, VERSION};
