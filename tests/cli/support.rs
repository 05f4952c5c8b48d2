use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::Path;

/// Get a Command for rapport with config lookups isolated to `dir`
pub fn rapport(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rapport");
    cmd.current_dir(dir)
        .env("RAPPORT_CONFIG_DIR", dir.join("config"))
        .env_remove("RAPPORT_DB")
        .env_remove("RAPPORT_LOG");
    cmd
}

/// Initialize a database in `dir`
pub fn init(dir: &Path) {
    rapport(dir).arg("init").assert().success();
}

/// Record a message at a fixed time
pub fn send(dir: &Path, from: &str, to: &str, at: &str, text: &str) {
    rapport(dir)
        .args(["send", "--from", from, "--to", to, "--at", at, text])
        .assert()
        .success();
}

/// A short alternating chat between alice and bob, 30 seconds apart
pub fn seed_chat(dir: &Path) {
    init(dir);
    send(dir, "alice", "bob", "2024-03-10 20:00:00", "元気?");
    send(dir, "bob", "alice", "2024-03-10 20:00:30", "元気だよ");
    send(dir, "alice", "bob", "2024-03-10 20:01:00", "今日は楽しい一日だった");
    send(dir, "bob", "alice", "2024-03-10 20:01:30", "よかったね");
}
