use std::env;
use vergen::{vergen, Config};

/// Identity constants, overridable by whoever drives the build
const IDENTITY: &[(&str, &str)] = &[
    ("HELLOBYE_PROGRAM", "CARGO_PKG_NAME"),
    ("HELLOBYE_VERSION", "CARGO_PKG_VERSION"),
];

fn main() {
    for (key, fallback) in IDENTITY {
        println!("cargo:rerun-if-env-changed={}", key);
        let value = env::var(key)
            .or_else(|_| env::var(fallback))
            .expect("Cargo does not provide package metadata");
        println!("cargo:rustc-env={}={}", key, value);
    }
    println!("cargo:rerun-if-changed=build.rs");

    vergen(Config::default()).expect("Fail to generate version info");
}
