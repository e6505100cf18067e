//! Build metadata accessors.
//! Includes the version.rs generated by the build script so there is a single
//! source of truth for build time and git revision.

include!(concat!(env!("OUT_DIR"), "/version.rs"));

/// Crate version from Cargo.toml
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Build time string from the build script (UTC)
pub fn build_time() -> &'static str {
    BUILD_TIME
}

/// Short git hash captured by the build script
pub fn git_hash() -> &'static str {
    GIT_HASH
}

/// One-line description used in start-up diagnostics
pub fn build_banner() -> String {
    format!(
        "releasedex {} (git {}, built {})",
        version(),
        git_hash(),
        build_time()
    )
}
