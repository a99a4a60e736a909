use semver::Version;
use std::process::Command;

fn fabricctl(flag: &str) -> String {
    let output = Command::new(assert_cmd::cargo::cargo_bin!("fabricctl"))
        .arg(flag)
        .output()
        .expect("run fabricctl");
    assert!(output.status.success(), "{flag} should succeed");
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn short_version_is_the_package_release() {
    let line = fabricctl("-V");
    assert_eq!(line, format!("fabricctl {}", env!("CARGO_PKG_VERSION")));

    let release = Version::parse(env!("CARGO_PKG_VERSION")).expect("package semver");
    assert_eq!((release.major, release.minor), (0, 4));
    assert!(release.pre.is_empty(), "release builds carry no pre-release tag");
}

#[test]
fn long_version_adds_build_metadata() {
    let line = fabricctl("--version");
    let (name_and_version, build) = line
        .split_once(" (git ")
        .unwrap_or_else(|| panic!("missing git section: {line}"));
    assert_eq!(
        name_and_version,
        format!("fabricctl {}", env!("CARGO_PKG_VERSION"))
    );

    let (sha, flags) = build
        .split_once(", dirty=")
        .unwrap_or_else(|| panic!("missing dirty flag: {line}"));
    let (dirty, built) = flags
        .split_once(", built ")
        .unwrap_or_else(|| panic!("missing build timestamp: {line}"));
    assert!(
        matches!(dirty, "true" | "false"),
        "dirty flag should be a bool: {dirty}"
    );
    assert!(built.ends_with("Z)"), "timestamp should be UTC: {built}");

    let sha = sha.trim_end_matches("-dirty");
    let looks_hex = sha.len() >= 7 && sha.chars().all(|c| c.is_ascii_hexdigit());
    assert!(
        looks_hex || sha == "unknown",
        "git sha should be short hex or unknown: {sha}"
    );
}
