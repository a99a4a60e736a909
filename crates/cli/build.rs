use std::{env, fs, path::PathBuf, process::Command};

fn main() -> anyhow::Result<()> {
    write_version()?;

    println!("cargo:rerun-if-env-changed=GIT_SHA");
    println!("cargo:rerun-if-env-changed=GIT_DIRTY");
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/refs");
    Ok(())
}

fn write_version() -> anyhow::Result<()> {
    let pkg_version = env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "0.0.0".to_string());
    let git_sha = env::var("GIT_SHA")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(git_short_sha)
        .unwrap_or_else(|| "unknown".to_string());
    let git_dirty = env::var("GIT_DIRTY")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or_else(|| git_dirty().unwrap_or(false));
    let built_at = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    let git_label = match git_sha.as_str() {
        "unknown" => "unknown".to_string(),
        sha if git_dirty => format!("{sha}-dirty"),
        sha => sha.to_string(),
    };
    let full_version = format!("{pkg_version} (git {git_label}, dirty={git_dirty}, built {built_at})");

    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    let contents = format!(
        "pub const VERSION: &str = \"{pkg_version}\";\n\
         pub const GIT_SHA: &str = \"{git_sha}\";\n\
         pub const GIT_DIRTY: bool = {git_dirty};\n\
         pub const BUILD_TIMESTAMP: &str = \"{built_at}\";\n\
         pub const FULL_VERSION: &str = \"{full_version}\";\n"
    );
    fs::write(out_dir.join("version.rs"), contents)?;
    Ok(())
}

fn git_short_sha() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn git_dirty() -> Option<bool> {
    Command::new("git")
        .args(["status", "--porcelain"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| !output.stdout.is_empty())
}
