//! Span definitions per pipeline stage: turn, retrieval, expansion, generation.

/// Create a span covering one full query turn.
#[macro_export]
macro_rules! turn_span {
    ($query_id:expr, $query:expr) => {
        tracing::info_span!("compass.turn", query_id = %$query_id, query = %$query)
    };
}

/// Create a vector retrieval span.
#[macro_export]
macro_rules! retrieval_span {
    ($top_k:expr) => {
        tracing::info_span!("compass.retrieval", top_k = $top_k)
    };
}

/// Create a graph expansion span.
#[macro_export]
macro_rules! expansion_span {
    ($node_count:expr, $depth:expr) => {
        tracing::info_span!("compass.expansion", nodes = $node_count, depth = $depth)
    };
}

/// Create an answer generation span.
#[macro_export]
macro_rules! generation_span {
    ($model:expr) => {
        tracing::info_span!("compass.generation", model = %$model)
    };
}
