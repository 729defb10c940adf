use crate::errors::CompassResult;
use crate::models::NeighborRecord;

/// Labeled property graph answering neighborhood queries.
pub trait IGraphStore: Send + Sync {
    /// Open a session scoped to one batch of lookups.
    /// The session is released when the returned box is dropped.
    fn open_session(&self) -> CompassResult<Box<dyn GraphSession + '_>>;

    /// Round-trip a trivial statement and return the server's message.
    fn ping(&self) -> CompassResult<String>;
}

/// A live graph session.
pub trait GraphSession {
    /// Directly connected neighbors of `node_id`, any direction and relation type,
    /// at most `limit` rows, in store order. A missing node yields no rows.
    fn neighbors(&mut self, node_id: &str, limit: usize) -> CompassResult<Vec<NeighborRecord>>;
}
