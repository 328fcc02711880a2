//! Feature-matrix type checking.
//!
//! The crate's feature graph forms a chain (`engine` at the bottom,
//! `coll`/`nested`/`capability` above it), so checking each feature alone
//! plus a few representative combinations covers the `cfg` surface.

use std::process::Command;

const COMBINATIONS: &[&str] = &[
    "engine",
    "xform",
    "join",
    "coll",
    "nested",
    "capability",
    "compose",
    "engine,join",
    "coll,serde",
    "full",
];

pub fn run() -> anyhow::Result<()> {
    for features in COMBINATIONS {
        println!("checking --no-default-features --features {features}");
        let status = Command::new("cargo")
            .args([
                "check",
                "--all-targets",
                "--no-default-features",
                "--features",
                features,
            ])
            .status()?;
        anyhow::ensure!(status.success(), "feature set `{features}` failed to check");
    }

    println!("checking --no-default-features (no features)");
    let status = Command::new("cargo")
        .args(["check", "--no-default-features"])
        .status()?;
    anyhow::ensure!(status.success(), "empty feature set failed to check");
    Ok(())
}
