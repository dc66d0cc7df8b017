// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Output streaming for piped child streams.
//!
//! ```text
//! drain(stream)
//!   BufReader.lines()
//!   FORWARD_TO_LOG  stdout -> debug!, stderr -> warn!
//! ```

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tracing::{debug, warn};

use super::builder::StreamFlags;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
        }
    }
}

/// Reads a child stream to the end, forwarding lines to the log.
pub(super) async fn drain<R>(
    reader: Option<R>,
    flags: StreamFlags,
    process_name: &str,
    stream: Stream,
)
where
    R: AsyncRead + Unpin,
{
    let Some(reader) = reader else {
        return;
    };

    let forward = flags.contains(StreamFlags::FORWARD_TO_LOG);
    let mut lines = BufReader::new(reader).lines();

    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                if forward {
                    match stream {
                        Stream::Stdout => debug!(process = %process_name, "{line}"),
                        Stream::Stderr => warn!(process = %process_name, "{line}"),
                    }
                }
            }
            Ok(None) => break,
            Err(e) => {
                warn!(
                    process = %process_name,
                    stream = stream.as_str(),
                    error = %e,
                    "error reading stream"
                );
                break;
            }
        }
    }
}
