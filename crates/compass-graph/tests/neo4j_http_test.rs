//! Neo4j HTTP store against a local responder speaking the transactional API.
//!
//! The responder answers from the `nid` parameter of each statement and
//! records every request line, so tests can check where statements went.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

use compass_core::config::GraphConfig;
use compass_core::errors::{CompassError, GraphError};
use compass_core::traits::IGraphStore;
use compass_graph::{GraphExpander, Neo4jHttpStore};
use serde_json::{json, Value};

const FAILING_NODE: &str = "n2";

struct Responder {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl Responder {
    fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = requests.clone();

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { break };
                let (request_line, body) = read_request(&stream);
                log.lock().unwrap().push(request_line);
                let reply = answer(&body).to_string();
                let mut stream = stream;
                let _ = write!(
                    stream,
                    "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\n\
                     Content-Length: {}\r\nConnection: close\r\n\r\n{reply}",
                    reply.len()
                );
            }
        });

        Self { base_url, requests }
    }

    fn store(&self) -> Neo4jHttpStore {
        Neo4jHttpStore::new(&self.config(), "pw").unwrap()
    }

    fn config(&self) -> GraphConfig {
        GraphConfig {
            uri: self.base_url.clone(),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    fn request_lines(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn read_request(stream: &TcpStream) -> (String, Value) {
    let mut reader = BufReader::new(stream);
    let mut request_line = String::new();
    reader.read_line(&mut request_line).unwrap();

    let mut content_length = 0;
    loop {
        let mut header = String::new();
        reader.read_line(&mut header).unwrap();
        let header = header.trim_end();
        if header.is_empty() {
            break;
        }
        if let Some((name, value)) = header.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap();
            }
        }
    }

    let mut body = vec![0; content_length];
    reader.read_exact(&mut body).unwrap();
    let body = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (request_line.trim_end().to_string(), body)
}

/// Neighbor rows for every node except `FAILING_NODE`, which gets a body error.
fn answer(body: &Value) -> Value {
    let statement = &body["statements"][0];
    if statement["statement"].as_str().is_some_and(|s| s.starts_with("RETURN")) {
        return json!({
            "results": [{"columns": ["message"], "data": [{"row": ["Connected to Neo4j!"]}]}],
            "errors": []
        });
    }

    let nid = statement["parameters"]["nid"].as_str().unwrap_or_default();
    if nid == FAILING_NODE {
        return json!({
            "results": [],
            "errors": [{"code": "Neo.DatabaseError.Statement.ExecutionFailed", "message": "boom"}]
        });
    }
    json!({
        "results": [{
            "columns": ["rel", "labels", "id", "name", "type", "description"],
            "data": [{"row": ["NEAR", ["Entity"], format!("{nid}-near"), "Hoan Kiem Lake", "Lake", "Old quarter lake"]}]
        }],
        "errors": []
    })
}

#[test]
fn lookup_after_a_failed_statement_still_returns_rows() {
    let responder = Responder::start();
    let store = responder.store();
    let mut session = store.open_session().unwrap();

    assert_eq!(session.neighbors("n1", 10).unwrap().len(), 1);
    assert!(matches!(
        session.neighbors(FAILING_NODE, 10),
        Err(CompassError::GraphError(GraphError::QueryFailed { ref node_id, .. })) if node_id == FAILING_NODE
    ));
    let rows = session.neighbors("n3", 10).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id.as_deref(), Some("n3-near"));
    drop(session);

    let lines = responder.request_lines();
    assert_eq!(lines.len(), 3);
    assert!(lines
        .iter()
        .all(|l| l.starts_with("POST /db/neo4j/tx/commit ")), "{lines:?}");
}

#[test]
fn expander_keeps_facts_around_a_failing_node() {
    let responder = Responder::start();
    let expander = GraphExpander::new(Arc::new(responder.store()), &responder.config()).unwrap();

    let node_ids: Vec<String> = ["n1", FAILING_NODE, "n3"].iter().map(|s| s.to_string()).collect();
    let expansion = expander.expand_detailed(&node_ids, 1);

    let sources: Vec<&str> = expansion.facts.iter().map(|f| f.source_id.as_str()).collect();
    assert_eq!(sources, vec!["n1", "n3"]);
    assert_eq!(expansion.failures.len(), 1);
    assert_eq!(expansion.failures[0].node_id, FAILING_NODE);
}

#[test]
fn ping_returns_server_message() {
    let responder = Responder::start();
    assert_eq!(responder.store().ping().unwrap(), "Connected to Neo4j!");
    assert_eq!(responder.request_lines().len(), 1);
}
