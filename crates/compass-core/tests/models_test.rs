use compass_core::models::*;

#[test]
fn prompt_has_system_then_user() {
    let prompt = Prompt::new("be brief", "where to eat pho?");
    assert_eq!(prompt.messages.len(), 2);
    assert_eq!(prompt.messages[0].role, ChatRole::System);
    assert_eq!(prompt.messages[1].role, ChatRole::User);
    assert_eq!(prompt.content_of(ChatRole::User), Some("where to eat pho?"));
    assert_eq!(prompt.content_of(ChatRole::Assistant), None);
}

#[test]
fn chat_role_serializes_lowercase() {
    let json = serde_json::to_string(&ChatMessage::system("x")).unwrap();
    assert_eq!(json, r#"{"role":"system","content":"x"}"#);
}

#[test]
fn vector_query_never_requests_values() {
    let q = VectorQuery::new(vec![0.1, 0.2], 5);
    assert!(q.include_metadata);
    assert!(!q.include_values);
    assert_eq!(q.top_k, 5);
}

#[test]
fn fused_context_exposes_read_only_views() {
    let ctx = FusedContext::new(
        "q",
        "summary",
        vec!["- id: A, name: n, score: 0.9".into()],
        vec![],
    );
    assert_eq!(ctx.query(), "q");
    assert_eq!(ctx.match_summary(), "summary");
    assert_eq!(ctx.vector_lines().len(), 1);
    assert!(ctx.graph_lines().is_empty());
    assert!(!ctx.is_empty());
}

#[test]
fn graph_fact_defaults_hop_to_one() {
    let fact: GraphFact = serde_json::from_str(
        r#"{"source_id":"A","relation":"NEAR","target_id":"B","target_name":"West Lake",
            "target_description":"","target_labels":["Entity"]}"#,
    )
    .unwrap();
    assert_eq!(fact.hop, 1);
    assert!(fact.target_labels.contains("Entity"));
}
