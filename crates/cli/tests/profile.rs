use std::process::Command;

fn fabricctl(config_home: &std::path::Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fabricctl"));
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env_remove("FABRICCTL_PROFILE");
    cmd
}

#[test]
fn profile_set_then_list_and_show() {
    let config_home = tempfile::tempdir().expect("tempdir");

    let output = fabricctl(config_home.path())
        .args([
            "profile",
            "set",
            "--name",
            "prod",
            "--cluster-endpoint",
            "https://prod.example:19080",
            "--bearer-token",
            "secret-token",
        ])
        .output()
        .expect("run profile set");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let output = fabricctl(config_home.path())
        .args(["profile", "list"])
        .output()
        .expect("run profile list");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("default_profile: prod"), "{stdout}");
    assert!(stdout.contains("- prod (https://prod.example:19080)"), "{stdout}");

    let output = fabricctl(config_home.path())
        .args(["profile", "show"])
        .output()
        .expect("run profile show");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("endpoint: https://prod.example:19080"), "{stdout}");
    assert!(stdout.contains("token: <set>"), "{stdout}");
    assert!(!stdout.contains("secret-token"), "token must not be printed");
}

#[test]
fn unknown_profile_is_rejected_before_connecting() {
    let config_home = tempfile::tempdir().expect("tempdir");

    let output = fabricctl(config_home.path())
        .args(["--profile", "staging", "node", "list"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("profile 'staging' not found"), "{stderr}");
}
