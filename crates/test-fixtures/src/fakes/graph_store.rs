//! petgraph-backed graph store.
//!
//! Edges are directed and typed; neighborhood lookups ignore direction and
//! return rows in edge insertion order.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use compass_core::errors::{CompassResult, GraphError};
use compass_core::models::NeighborRecord;
use compass_core::traits::{GraphSession, IGraphStore};
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use crate::GraphFixture;

#[derive(Debug, Clone)]
struct NodeData {
    id: String,
    name: Option<String>,
    node_type: Option<String>,
    description: Option<String>,
    labels: Vec<String>,
}

pub struct InMemoryGraphStore {
    graph: StableDiGraph<NodeData, String>,
    index: HashMap<String, NodeIndex>,
    failing_nodes: HashSet<String>,
    fail_sessions: bool,
    sessions_opened: AtomicUsize,
    sessions_released: AtomicUsize,
    lookups: Mutex<Vec<String>>,
}

impl Default for InMemoryGraphStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryGraphStore {
    pub fn new() -> Self {
        Self {
            graph: StableDiGraph::new(),
            index: HashMap::new(),
            failing_nodes: HashSet::new(),
            fail_sessions: false,
            sessions_opened: AtomicUsize::new(0),
            sessions_released: AtomicUsize::new(0),
            lookups: Mutex::new(Vec::new()),
        }
    }

    /// Build a store from a JSON graph fixture.
    pub fn from_fixture(fixture: &GraphFixture) -> Self {
        let mut store = Self::new();
        for node in &fixture.nodes {
            let idx = store.graph.add_node(NodeData {
                id: node.id.clone(),
                name: node.name.clone(),
                node_type: node.node_type.clone(),
                description: node.description.clone(),
                labels: node.labels.clone(),
            });
            store.index.insert(node.id.clone(), idx);
        }
        for edge in &fixture.edges {
            store.add_edge(&edge.source, &edge.relation, &edge.target);
        }
        store
    }

    /// Add (or replace) an `Entity` node.
    pub fn add_node(&mut self, id: &str, name: &str, description: &str) -> &mut Self {
        let data = NodeData {
            id: id.to_string(),
            name: Some(name.to_string()),
            node_type: None,
            description: Some(description.to_string()),
            labels: vec!["Entity".to_string()],
        };
        match self.index.get(id) {
            Some(&idx) => self.graph[idx] = data,
            None => {
                let idx = self.graph.add_node(data);
                self.index.insert(id.to_string(), idx);
            }
        }
        self
    }

    /// Add a typed edge, creating bare endpoint nodes as needed.
    pub fn add_edge(&mut self, source: &str, relation: &str, target: &str) -> &mut Self {
        let s = self.ensure_node(source);
        let t = self.ensure_node(target);
        self.graph.add_edge(s, t, relation.to_string());
        self
    }

    fn ensure_node(&mut self, id: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(id) {
            return idx;
        }
        let idx = self.graph.add_node(NodeData {
            id: id.to_string(),
            name: Some(id.to_string()),
            node_type: None,
            description: None,
            labels: vec!["Entity".to_string()],
        });
        self.index.insert(id.to_string(), idx);
        idx
    }

    /// Neighborhood lookups for `id` fail with a query error.
    pub fn failing_on(mut self, id: &str) -> Self {
        self.failing_nodes.insert(id.to_string());
        self
    }

    /// Opening a session fails.
    pub fn refusing_sessions(mut self) -> Self {
        self.fail_sessions = true;
        self
    }

    pub fn sessions_opened(&self) -> usize {
        self.sessions_opened.load(Ordering::SeqCst)
    }

    pub fn sessions_released(&self) -> usize {
        self.sessions_released.load(Ordering::SeqCst)
    }

    /// Node ids looked up so far, in call order.
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }

    fn neighbor_rows(&self, node_id: &str, limit: usize) -> CompassResult<Vec<NeighborRecord>> {
        self.lookups.lock().unwrap().push(node_id.to_string());

        if self.failing_nodes.contains(node_id) {
            return Err(GraphError::QueryFailed {
                node_id: node_id.to_string(),
                reason: "scripted graph failure".to_string(),
            }
            .into());
        }

        let Some(&idx) = self.index.get(node_id) else {
            return Ok(Vec::new());
        };

        let mut edges: Vec<(usize, NodeIndex, &String)> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| (e.id().index(), e.target(), e.weight()))
            .chain(
                self.graph
                    .edges_directed(idx, Direction::Incoming)
                    .map(|e| (e.id().index(), e.source(), e.weight())),
            )
            .collect();
        edges.sort_by_key(|(edge, _, _)| *edge);
        edges.dedup_by_key(|(edge, _, _)| *edge);

        Ok(edges
            .into_iter()
            .take(limit)
            .map(|(_, neighbor, relation)| {
                let node = &self.graph[neighbor];
                NeighborRecord {
                    relation: relation.clone(),
                    labels: node.labels.clone(),
                    id: Some(node.id.clone()),
                    name: node.name.clone(),
                    node_type: node.node_type.clone(),
                    description: node.description.clone(),
                }
            })
            .collect())
    }
}

struct InMemorySession<'a> {
    store: &'a InMemoryGraphStore,
}

impl GraphSession for InMemorySession<'_> {
    fn neighbors(&mut self, node_id: &str, limit: usize) -> CompassResult<Vec<NeighborRecord>> {
        self.store.neighbor_rows(node_id, limit)
    }
}

impl Drop for InMemorySession<'_> {
    fn drop(&mut self) {
        self.store.sessions_released.fetch_add(1, Ordering::SeqCst);
    }
}

impl IGraphStore for InMemoryGraphStore {
    fn open_session(&self) -> CompassResult<Box<dyn GraphSession + '_>> {
        if self.fail_sessions {
            return Err(GraphError::SessionFailed {
                reason: "scripted session failure".to_string(),
            }
            .into());
        }
        self.sessions_opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(InMemorySession { store: self }))
    }

    fn ping(&self) -> CompassResult<String> {
        if self.fail_sessions {
            return Err(GraphError::StatementFailed {
                reason: "scripted session failure".to_string(),
            }
            .into());
        }
        Ok("Connected to Neo4j!".to_string())
    }
}
