//! Version command - Print build metadata.

use anyhow::Result;

/// Build metadata baked in at compile time.
pub struct BuildInfo {
    pub version: &'static str,
    pub git_commit: &'static str,
    pub build_date: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            git_commit: option_env!("SOLOOPS_GIT_COMMIT").unwrap_or("unknown"),
            build_date: option_env!("SOLOOPS_BUILD_DATE").unwrap_or("unknown"),
        }
    }
}

pub fn execute() -> Result<()> {
    let info = BuildInfo::current();
    println!("soloops version {}", info.version);
    println!("  commit: {}", info.git_commit);
    println!("  built:  {}", info.build_date);
    Ok(())
}
