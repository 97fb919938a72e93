//! Version command implementation

use serde::Serialize;

use crate::cli::VersionArgs;
use crate::error::{Result, StagehandError};

#[derive(Serialize)]
struct VersionInfo {
    name: &'static str,
    version: &'static str,
    rust_version: &'static str,
    profile: &'static str,
}

/// Run version command
pub fn run(args: VersionArgs) -> Result<()> {
    let info = VersionInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        rust_version: rustc_version(),
        profile: build_profile(),
    };

    if args.json {
        let json =
            serde_json::to_string_pretty(&info).map_err(|e| StagehandError::IoError {
                message: e.to_string(),
            })?;
        println!("{}", json);
        return Ok(());
    }

    println!("{} {}", info.name, info.version);
    println!();
    println!("Build info:");
    println!("  Rust version: {}", info.rust_version);
    println!("  Profile: {}", info.profile);

    Ok(())
}

fn rustc_version() -> &'static str {
    // This will be the minimum rustc version the crate declares
    env!("CARGO_PKG_RUST_VERSION")
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
