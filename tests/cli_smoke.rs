// tests/cli_smoke.rs
use assert_cmd::Command;

fn omni_bridge() -> Command {
    let mut cmd = Command::cargo_bin("omni-bridge").unwrap();
    cmd.env_remove("OMNI_BRIDGE_CONFIG").env("RUST_LOG", "warn");
    cmd
}

#[test]
fn chains_lists_every_chain() {
    let output = omni_bridge().arg("chains").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in ["Solana", "Ethereum", "Avalanche", "Polygon", "BNB Chain"] {
        assert!(stdout.contains(name), "missing {} in:\n{}", name, stdout);
    }
}

#[test]
fn history_json_filters_by_status() {
    let output = omni_bridge()
        .args(["history", "--status", "completed", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row["status"] == "completed"));
}

#[test]
fn demo_completes_with_scaled_delays() {
    let config = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(
        config.path(),
        "seed_sample_history = false\n[simulation]\nrng_seed = 11\n\n[[preconnected]]\nchain = \"solana\"\nbalance = \"10.00\"\n",
    )
    .unwrap();

    let output = omni_bridge()
        .arg("--config")
        .arg(config.path())
        .args(["demo", "--from", "solana", "--to", "polygon", "--amount", "4", "--time-scale", "0.001"])
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Transfer"));
    assert!(stdout.contains("completed"));
}

#[test]
fn missing_explicit_config_fails() {
    omni_bridge()
        .args(["--config", "/nonexistent/omni-bridge.toml", "chains"])
        .assert()
        .failure();
}

#[test]
fn demo_rejects_time_scale_past_delay_limit() {
    let output = omni_bridge()
        .args(["demo", "--from", "solana", "--to", "polygon", "--time-scale", "1e30"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("panicked"), "stderr: {}", stderr);
}
