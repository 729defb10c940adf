/// Graph store errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    #[error("graph session could not be opened: {reason}")]
    SessionFailed { reason: String },

    #[error("neighborhood query for node {node_id} failed: {reason}")]
    QueryFailed { node_id: String, reason: String },

    #[error("graph statement failed: {reason}")]
    StatementFailed { reason: String },
}
