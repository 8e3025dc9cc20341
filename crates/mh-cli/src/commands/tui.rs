//! Launch the monty-tui standalone binary.

use mh_core::Strategy;

/// Launch the monty-tui standalone binary.
pub fn run(seed: Option<u64>, strategy: Option<Strategy>) -> Result<(), String> {
    let mut command = std::process::Command::new("monty-tui");
    if let Some(seed) = seed {
        command.arg("--seed").arg(seed.to_string());
    }
    if let Some(strategy) = strategy {
        command.arg("--strategy").arg(strategy.to_string());
    }

    match command.status() {
        Ok(s) if s.success() => Ok(()),
        Ok(s) => Err(format!("monty-tui exited with {s}")),
        Err(_) => Err(
            "monty-tui binary not found. Install with: cargo install --path crates/mh-tui".into(),
        ),
    }
}
