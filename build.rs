use std::process::Command;

/// Run `git` with `args` and return its trimmed stdout, or "unknown" when git
/// is missing or the crate is built outside a checkout (e.g. from crates.io).
fn git_output(args: &[&str]) -> String {
    match Command::new("git").args(args).output() {
        Ok(output) if output.status.success() => String::from_utf8(output.stdout)
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|_| "unknown".to_string()),
        _ => "unknown".to_string(),
    }
}

fn main() {
    // short hash shows up in `crossgrid --version`
    println!("cargo:rustc-env=GIT_HASH={}", git_output(&["rev-parse", "--short", "HEAD"]));
    println!("cargo:rustc-env=GIT_HASH_FULL={}", git_output(&["rev-parse", "HEAD"]));

    println!("cargo:rerun-if-changed=.git/HEAD");
}
