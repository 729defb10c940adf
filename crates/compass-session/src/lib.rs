//! # compass-session
//!
//! Wires the four providers into a `HybridPipeline`
//! (retrieve → expand → fuse → generate) and drives it turn by turn from a
//! line-oriented `SessionLoop`.

pub mod context;
pub mod pipeline;
pub mod query_log;
pub mod session_loop;
pub mod spans;

pub use context::ProviderContext;
pub use pipeline::{Answer, HybridPipeline, NoMatchReason, TurnOutcome};
pub use query_log::{QueryLog, QueryLogEntry, TurnStatus};
pub use session_loop::SessionLoop;
