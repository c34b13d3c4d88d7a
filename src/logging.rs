//! Structured log sink for the search loop.
//!
//! `configure_logfile` installs a process-wide [`tracing`] subscriber backed
//! by a non-blocking file writer; [`SearchLog`] formats the row table the
//! driver emits one line per event on target `"bbsolve::search"`. Embedding
//! applications that already run their own subscriber can ignore this module
//! entirely and simply listen on that target.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;

use crate::error::SearchError;

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();
static ONLY_MESSAGES: AtomicBool = AtomicBool::new(false);

/// Opens `filename` in the given `mode` (`"a"` append, `"w"` truncate) and
/// installs it as the global tracing subscriber. Safe to call more than
/// once; later calls replace the sink (the first `WorkerGuard` is kept alive
/// for the lifetime of the process since tracing has no notion of
/// "un-subscribing").
pub fn configure_logfile(
    filename: impl AsRef<Path>,
    mode: &str,
    only_messages: bool,
) -> Result<(), SearchError> {
    let file = match mode {
        "a" => OpenOptions::new().create(true).append(true).open(filename)?,
        "w" => OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(filename)?,
        other => {
            return Err(SearchError::InvalidConfig(format!(
                "unknown log file mode {other:?}, expected \"a\" or \"w\""
            )))
        }
    };

    let (writer, guard) = tracing_appender::non_blocking(file);
    let _ = LOG_GUARD.set(guard);

    let subscriber = fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .with_level(false)
        .without_time()
        .finish();
    // A caller that already installed a subscriber keeps theirs; `solve`
    // still works, it just logs nowhere this module can see.
    let _ = tracing::subscriber::set_global_default(subscriber);

    ONLY_MESSAGES.store(only_messages, Ordering::Relaxed);
    Ok(())
}

/// Formats and emits the search log table.
///
/// Header: `Node | Best Sol | LB | Gap | Message`, widths `7|10|10|7|14`,
/// delimiter `" | "`. When `only_messages` was set by `configure_logfile`,
/// the numeric columns are dropped and only the `Message` text is logged —
/// matching the original `SearchLogger`'s quiet mode.
pub struct SearchLog;

impl SearchLog {
    const HEADERS: [&'static str; 5] = ["Node", "Best Sol", "LB", "Gap", "Message"];
    const WIDTHS: [usize; 5] = [7, 10, 10, 7, 14];
    const DELIM: &'static str = " | ";

    pub fn header() {
        let row = Self::join(&Self::HEADERS.map(str::to_string));
        tracing::info!(target: "bbsolve::search", "{row}");
        tracing::info!(target: "bbsolve::search", "{}", "-".repeat(row.len()));
    }

    pub fn row(explored: u64, best: f64, lb: f64, gap: f64, message: &str) {
        if ONLY_MESSAGES.load(Ordering::Relaxed) {
            tracing::info!(target: "bbsolve::search", "{message}");
            return;
        }
        let cells = [
            explored.to_string(),
            format_bound(best),
            format_bound(lb),
            format_bound(gap),
            message.to_string(),
        ];
        tracing::info!(target: "bbsolve::search", "{}", Self::join(&cells));
    }

    fn join(cells: &[String; 5]) -> String {
        cells
            .iter()
            .zip(Self::WIDTHS)
            .map(|(s, w)| format!("{s:^w$}"))
            .collect::<Vec<_>>()
            .join(Self::DELIM)
    }
}

fn format_bound(x: f64) -> String {
    if x.is_infinite() {
        if x > 0.0 { "inf".to_string() } else { "-inf".to_string() }
    } else {
        format!("{x:.4}")
    }
}
