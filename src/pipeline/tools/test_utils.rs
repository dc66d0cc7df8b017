// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Log capture for dry-run and pipeline tests.

use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

use crate::config::Config;

#[derive(Clone)]
struct BufferWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer
            .lock()
            .map_err(|_| std::io::Error::other("buffer poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[derive(Clone)]
struct BufferMakeWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl<'a> MakeWriter<'a> for BufferMakeWriter {
    type Writer = BufferWriter;

    fn make_writer(&'a self) -> Self::Writer {
        BufferWriter {
            buffer: self.buffer.clone(),
        }
    }
}

/// Runs an async closure while capturing tracing output at INFO and above.
///
/// Returns the captured log output together with the closure's result, so
/// failing operations can still be inspected.
pub(crate) async fn run_with_logs<F, Fut, T>(f: F) -> Result<(String, Result<T>)>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = Result<T>>,
{
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_writer(BufferMakeWriter {
            buffer: buffer.clone(),
        })
        .with_max_level(Level::INFO)
        .with_ansi(false)
        .with_target(false)
        .with_level(false)
        .without_time()
        .finish();

    let _guard = tracing::subscriber::set_default(subscriber);
    let outcome = f().await;

    let guard = buffer
        .lock()
        .map_err(|_| anyhow::anyhow!("log buffer poisoned"))?;
    Ok((String::from_utf8_lossy(&guard).to_string(), outcome))
}

/// Keeps only the `[dry-run]` lines, starting at the marker.
pub(crate) fn dry_run_lines(logs: &str) -> Vec<&str> {
    logs.lines()
        .filter_map(|line| line.find("[dry-run]").map(|idx| &line[idx..]))
        .collect()
}

/// Strips the structured fields from a log line, keeping the message.
pub(crate) fn message_of(line: &str) -> &str {
    line.find('=')
        .and_then(|eq| line[..eq].rfind(' '))
        .map_or(line, |space| &line[..space])
}

/// Loads a config rooted at `root` with the given TOML on top of defaults.
pub(crate) fn config_at(root: &Path, toml: &str) -> Config {
    Config::builder()
        .add_toml_str(toml)
        .set("paths.root", root.display().to_string())
        .unwrap()
        .build()
        .unwrap()
}

/// Writes an executable shell script standing in for an external tool.
#[cfg(unix)]
pub(crate) fn write_script(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Lays out a project under `root` with stand-ins for `go` and `zip`.
///
/// Every `go` call is appended to `<root>/go-calls` as
/// `<args> GOOS=<value>`. `go build` writes `bin` to its `-o` path. `zip`
/// writes the sorted staging listing to the archive path.
#[cfg(unix)]
pub(crate) fn fake_project(root: &Path, go_extra: &str) -> Config {
    std::fs::create_dir_all(root.join("src/cmd/client")).unwrap();
    std::fs::create_dir_all(root.join("src/cmd/server")).unwrap();
    std::fs::create_dir_all(root.join("resources/sprites")).unwrap();
    std::fs::write(root.join("resources/sprites/player.png"), "png").unwrap();
    std::fs::write(root.join(".env.example"), "TCP_PORT=8080\n").unwrap();

    let go = write_script(
        root,
        "fake-go",
        &format!(
            "echo \"$* GOOS=${{GOOS:-unset}}\" >> '{calls}'\n\
             {go_extra}\n\
             if [ \"$1\" = build ]; then printf bin > \"$5\"; fi",
            calls = root.join("go-calls").display(),
        ),
    );
    let zip = write_script(root, "fake-zip", "find . -mindepth 1 | LC_ALL=C sort > \"$3\"");
    config_at(
        root,
        &format!(
            "[tools]\ngo = \"{}\"\nzip = \"{}\"\n",
            go.display(),
            zip.display()
        ),
    )
}

/// Lines recorded by the fake `go`.
#[cfg(unix)]
pub(crate) fn go_calls(root: &Path) -> Vec<String> {
    std::fs::read_to_string(root.join("go-calls"))
        .map(|s| s.lines().map(str::to_string).collect())
        .unwrap_or_default()
}
