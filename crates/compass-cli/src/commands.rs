//! Subcommand implementations.

use std::io;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use compass_core::config::CompassConfig;
use compass_core::models::IndexStatus;
use compass_core::traits::{IGraphStore, IVectorIndex};
use compass_embeddings::OpenAiEmbeddingProvider;
use compass_generation::OpenAiChatProvider;
use compass_graph::Neo4jHttpStore;
use compass_retrieval::PineconeIndex;
use compass_session::{HybridPipeline, ProviderContext, SessionLoop, TurnOutcome};
use tracing::info;

use crate::input;

fn vector_index(config: &CompassConfig) -> Result<PineconeIndex> {
    let index = PineconeIndex::new(&config.vector, config.vector_api_key()?)?;
    Ok(index)
}

fn graph_store(config: &CompassConfig) -> Result<Neo4jHttpStore> {
    let store = Neo4jHttpStore::new(&config.graph, config.graph_password()?)?;
    Ok(store)
}

fn providers(config: &CompassConfig) -> Result<ProviderContext> {
    let embedder = OpenAiEmbeddingProvider::new(&config.embedding, config.embedding_api_key()?)
        .context("embedding provider setup failed")?;
    let chat = OpenAiChatProvider::new(&config.generation, config.generation_api_key()?)
        .context("chat provider setup failed")?;
    let index = vector_index(config).context("vector index setup failed")?;
    let graph = graph_store(config).context("graph store setup failed")?;

    Ok(ProviderContext::new(
        Arc::new(embedder),
        Arc::new(index),
        Arc::new(graph),
        Arc::new(chat),
    ))
}

fn pipeline(config: &CompassConfig) -> Result<HybridPipeline> {
    let pipeline = HybridPipeline::new(providers(config)?, config).context("pipeline setup failed")?;
    if config.vector.create_if_missing {
        pipeline
            .ensure_index()
            .with_context(|| format!("could not bootstrap index '{}'", config.vector.index_name))?;
    }
    Ok(pipeline)
}

pub fn chat(config: &CompassConfig) -> Result<()> {
    let pipeline = pipeline(config)?;
    let interrupt = Arc::new(AtomicBool::new(false));
    let stdin = input::interruptible_stdin(interrupt.clone())?;
    let mut session = SessionLoop::new(
        pipeline,
        stdin,
        io::stdout(),
        config.observability.query_log_capacity,
    )
    .with_interrupt(interrupt);
    session.run().context("session I/O failed")
}

pub fn ask(config: &CompassConfig, question: &str) -> Result<()> {
    let question = question.trim();
    if question.is_empty() {
        bail!("question must not be empty");
    }
    let mut session = SessionLoop::new(
        pipeline(config)?,
        io::empty(),
        io::stdout(),
        config.observability.query_log_capacity,
    );
    let outcome = session.respond(question).context("failed to write answer")?;
    if let TurnOutcome::NoMatches { reason } = outcome {
        info!(?reason, "no evidence for question");
    }
    Ok(())
}

pub fn check_graph(config: &CompassConfig) -> Result<()> {
    let store = graph_store(config)?;
    let message = store
        .ping()
        .with_context(|| format!("graph store at {} is not reachable", config.graph.uri))?;
    println!("{message}");
    Ok(())
}

pub fn check_index(config: &CompassConfig) -> Result<()> {
    let names = vector_index(config)?
        .list_indexes()
        .context("could not list vector indexes")?;
    println!("Available indexes: {}", names.join(", "));
    if !names.iter().any(|n| n == &config.vector.index_name) {
        println!("Configured index '{}' does not exist yet.", config.vector.index_name);
    }
    Ok(())
}

pub fn ensure_index(config: &CompassConfig) -> Result<()> {
    let spec = config.vector.index_spec(config.embedding.dimensions);
    let status = vector_index(config)?
        .ensure_index(&spec)
        .with_context(|| format!("could not create index '{}'", spec.name))?;
    match status {
        IndexStatus::Created => println!("Created index: {}", spec.name),
        IndexStatus::AlreadyExists => println!("Index {} already exists.", spec.name),
    }
    Ok(())
}
