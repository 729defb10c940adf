// Single source of truth for all default values.

// --- Config file ---
pub const DEFAULT_CONFIG_FILENAME: &str = "compass.toml";

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 1536;
pub const DEFAULT_EMBEDDING_CACHE_CAPACITY: u64 = 10_000;
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

// --- Vector index ---
pub const DEFAULT_INDEX_NAME: &str = "vietnam-travels";
pub const DEFAULT_METRIC: &str = "cosine";
pub const DEFAULT_CLOUD: &str = "gcp";
pub const DEFAULT_REGION: &str = "us-east1-gcp";
pub const DEFAULT_TOP_K: usize = 5;
pub const DEFAULT_CREATE_IF_MISSING: bool = true;
pub const DEFAULT_PINECONE_CONTROL_URL: &str = "https://api.pinecone.io";

// --- Graph ---
pub const DEFAULT_GRAPH_URI: &str = "http://localhost:7474";
pub const DEFAULT_GRAPH_DATABASE: &str = "neo4j";
pub const DEFAULT_GRAPH_USER: &str = "neo4j";
pub const DEFAULT_NODE_LABEL: &str = "Entity";
pub const DEFAULT_MAX_NEIGHBORS_PER_NODE: usize = 10;
pub const DEFAULT_MAX_DESCRIPTION_CHARS: usize = 400;
pub const DEFAULT_GRAPH_DEPTH: usize = 1;
pub const DEFAULT_MAX_GRAPH_DEPTH: usize = 3;
pub const DEFAULT_MAX_NODES_PER_SOURCE: usize = 50;
pub const DEFAULT_GRAPH_MAX_CONCURRENCY: usize = 1;

// --- Fusion ---
pub const DEFAULT_MAX_SUMMARY_MATCHES: usize = 3;
pub const DEFAULT_MAX_VECTOR_LINES: usize = 10;
pub const DEFAULT_MAX_GRAPH_LINES: usize = 20;
pub const DEFAULT_DEDUPE_FACTS: bool = false;
pub const DEFAULT_SYSTEM_INSTRUCTION: &str = "You are a helpful travel assistant. Use the provided semantic search results \
and graph facts to answer the user's query briefly and concisely. \
If needed, think step-by-step and cite node ids when referencing specific places or attractions. \
Suggest 2-3 actionable itinerary steps or tips.";

// --- Generation ---
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_MAX_TOKENS: u32 = 600;
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
pub const DEFAULT_QUERY_LOG_CAPACITY: usize = 1_000;
