//! Property tests for the embedding cache.

use std::sync::Arc;

use compass_embeddings::EmbeddingCache;
use proptest::prelude::*;
use test_fixtures::fakes::StaticEmbedder;

proptest! {
    #[test]
    fn repeated_embed_is_a_hit(text in ".{0,64}") {
        let embedder = Arc::new(StaticEmbedder::new(8));
        let cache = EmbeddingCache::with_capacity(embedder.clone(), 8, 1_000);

        let first = cache.embed(&text);
        let second = cache.embed(&text);

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), 8);
        prop_assert_eq!(embedder.calls(), 1);
    }

    #[test]
    fn distinct_texts_each_cost_one_call(texts in prop::collection::hash_set("[a-zA-Z ]{1,16}", 1..20)) {
        let embedder = Arc::new(StaticEmbedder::new(8));
        let cache = EmbeddingCache::with_capacity(embedder.clone(), 8, 1_000);

        for t in &texts {
            cache.embed(t);
        }
        for t in &texts {
            cache.embed(t);
        }

        prop_assert_eq!(embedder.calls(), texts.len());
    }

    #[test]
    fn cached_vectors_always_have_configured_dimension(text in "[a-z]{1,32}", dims in 1usize..64) {
        let embedder = Arc::new(StaticEmbedder::new(dims));
        let cache = EmbeddingCache::with_capacity(embedder, dims, 100);
        prop_assert_eq!(cache.embed(&text).len(), dims);
    }
}
