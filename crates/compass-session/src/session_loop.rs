//! Line-oriented driver around a `HybridPipeline`.
//!
//! `exit` / `quit` (any case), an empty line, end of input, or a raised
//! interrupt flag stop the loop. Provider failures never do. The flag is only
//! checked between turns; a turn in flight always completes.

use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use tracing::info;
use uuid::Uuid;

use crate::pipeline::{HybridPipeline, TurnOutcome};
use crate::query_log::{QueryLog, QueryLogEntry};

pub const BANNER: &str = "Hybrid travel assistant. Type 'exit' or 'quit' to stop.";
pub const PROMPT: &str = "Enter your travel question: ";
pub const NO_MATCHES: &str = "No semantic matches found. Please try a different query.";
pub const ANSWER_HEADER: &str = "=== Assistant Answer ===";
pub const ANSWER_FOOTER: &str = "=== End ===";
pub const GOODBYE: &str = "Goodbye!";
pub const INTERRUPTED: &str = "Interrupted! Exiting.";

pub struct SessionLoop<R, W> {
    pipeline: HybridPipeline,
    input: R,
    output: W,
    log: QueryLog,
    interrupt: Arc<AtomicBool>,
}

impl<R: BufRead, W: Write> SessionLoop<R, W> {
    pub fn new(pipeline: HybridPipeline, input: R, output: W, log_capacity: usize) -> Self {
        Self {
            pipeline,
            input,
            output,
            log: QueryLog::with_capacity(log_capacity),
            interrupt: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Stop before the next turn once `flag` is raised.
    pub fn with_interrupt(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupt = flag;
        self
    }

    fn interrupted(&self) -> bool {
        self.interrupt.load(Ordering::SeqCst)
    }

    /// Read and answer queries until the user stops.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "{BANNER}")?;
        while !self.interrupted() {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 || self.interrupted() {
                break;
            }
            let query = line.trim();
            if is_exit(query) {
                break;
            }
            self.respond(query)?;
        }
        if self.interrupted() {
            writeln!(self.output, "\n{INTERRUPTED}")?;
        }
        writeln!(self.output, "{GOODBYE}")?;
        self.log_summary();
        Ok(())
    }

    /// Run one turn and print its result.
    pub fn respond(&mut self, query: &str) -> io::Result<TurnOutcome> {
        let query_id = Uuid::new_v4();
        let cache_hit = self.pipeline.is_cached(query);
        let started = Instant::now();
        let outcome = crate::turn_span!(query_id, query).in_scope(|| self.pipeline.run(query));
        self.log.record(QueryLogEntry::from_outcome(
            query_id,
            query,
            &outcome,
            started.elapsed(),
            cache_hit,
        ));

        match &outcome {
            TurnOutcome::NoMatches { .. } => writeln!(self.output, "{NO_MATCHES}")?,
            TurnOutcome::Answered(answer) => {
                writeln!(self.output, "\n{ANSWER_HEADER}\n{}\n{ANSWER_FOOTER}\n", answer.text)?
            }
        }
        self.output.flush()?;
        Ok(outcome)
    }

    pub fn query_log(&self) -> &QueryLog {
        &self.log
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    fn log_summary(&self) {
        let stats = self.pipeline.cache_stats();
        info!(
            turns = self.log.count(),
            degraded = self.log.failure_count(),
            avg_latency_ms = self.log.avg_latency().as_millis() as u64,
            p95_latency_ms = self.log.latency_percentile(0.95).as_millis() as u64,
            cache_hits = stats.hits,
            cache_misses = stats.misses,
            interrupted = self.interrupted(),
            "session ended"
        );
    }
}

fn is_exit(query: &str) -> bool {
    query.is_empty() || query.eq_ignore_ascii_case("exit") || query.eq_ignore_ascii_case("quit")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_words_are_case_insensitive() {
        for word in ["exit", "EXIT", "Quit", "qUiT", ""] {
            assert!(is_exit(word), "{word:?}");
        }
        assert!(!is_exit("exit strategy for Sapa"));
        assert!(!is_exit("pho"));
    }
}
