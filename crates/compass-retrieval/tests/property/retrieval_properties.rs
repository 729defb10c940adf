//! Property tests for vector retrieval ordering and bounds.

use std::sync::Arc;

use compass_core::models::VectorMatch;
use compass_embeddings::EmbeddingCache;
use compass_retrieval::VectorRetriever;
use proptest::prelude::*;
use test_fixtures::fakes::{StaticEmbedder, StaticVectorIndex};

fn match_strategy() -> impl Strategy<Value = Vec<VectorMatch>> {
    prop::collection::vec(0.0f64..1.0, 0..40).prop_map(|scores| {
        scores
            .into_iter()
            .enumerate()
            .map(|(i, s)| VectorMatch::new(format!("m{i}"), s))
            .collect()
    })
}

proptest! {
    #[test]
    fn at_most_top_k_in_non_increasing_order(matches in match_strategy(), top_k in 1usize..25) {
        let cache = Arc::new(EmbeddingCache::with_capacity(Arc::new(StaticEmbedder::new(4)), 4, 10));
        let retriever = VectorRetriever::new(cache, Arc::new(StaticVectorIndex::new(matches)));

        let got = retriever.query("any question", top_k);

        prop_assert!(got.len() <= top_k);
        for pair in got.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn empty_embedding_never_reaches_index(text in ".{0,32}", top_k in 1usize..10) {
        let index = Arc::new(StaticVectorIndex::new(vec![VectorMatch::new("a", 1.0)]));
        let cache = Arc::new(EmbeddingCache::with_capacity(
            Arc::new(StaticEmbedder::new(4).always_failing()),
            4,
            10,
        ));
        let retriever = VectorRetriever::new(cache, index.clone());

        prop_assert!(retriever.query(&text, top_k).is_empty());
        prop_assert_eq!(index.query_count(), 0);
    }
}
