use tomlnode_core::{filter_keys, parse, Node, NodeType, RedactPreset};

// ============================================================================
// Helper: realistic service configuration fixtures
// ============================================================================

fn service_config() -> Node {
    parse(
        r#"
name = "billing"
password = "top-level-secret"

[database]
host = "db.internal"
port = 5432
password = "db-secret"

[database.replica]
host = "replica.internal"
password = "replica-secret"

[[servers]]
host = "a.example.com"
token = "tok-a"

[[servers]]
host = "b.example.com"
token = "tok-b"
"#,
    )
    .into_result()
    .expect("fixture is valid TOML")
}

fn keys(node: &Node) -> Vec<&str> {
    node.entries().map(|(k, _)| k).collect()
}

// ============================================================================
// 1. Path lookup
// ============================================================================

#[test]
fn get_path_walks_nested_tables() {
    let config = service_config();
    let host = config.get_path("database.replica.host").unwrap();
    assert_eq!(host.get_string(), "replica.internal");
    assert_eq!(config.get_path("database.port").unwrap().get_integer(), 5432);
}

#[test]
fn get_path_single_segment() {
    let config = service_config();
    assert_eq!(config.get_path("name").unwrap().get_string(), "billing");
}

#[test]
fn get_path_missing_segment_is_none() {
    let config = service_config();
    assert!(config.get_path("database.user").is_none());
    assert!(config.get_path("cache.host").is_none());
}

#[test]
fn get_path_through_non_table_is_none() {
    let config = service_config();
    assert!(config.get_path("name.length").is_none());
    assert!(config.get_path("servers.host").is_none());
}

// ============================================================================
// 2. Top-level and nested removal
// ============================================================================

#[test]
fn filter_removes_top_level_key() {
    let filtered = filter_keys(&service_config(), &["password"]);
    assert_eq!(keys(&filtered), vec!["name", "database", "servers"]);
    // Nested passwords untouched by a single-segment pattern.
    assert!(filtered.get_path("database.password").is_some());
}

#[test]
fn filter_removes_nested_key_with_dot_path() {
    let filtered = filter_keys(&service_config(), &["database.password"]);
    let database = filtered.get_table_value("database").unwrap();
    assert_eq!(keys(database), vec!["host", "port", "replica"]);
    assert!(filtered.get_table_value("password").is_some());
    assert!(filtered.get_path("database.replica.password").is_some());
}

#[test]
fn filter_preserves_order_of_remaining_keys() {
    let filtered = filter_keys(&service_config(), &["database.port"]);
    let database = filtered.get_table_value("database").unwrap();
    assert_eq!(keys(database), vec!["host", "password", "replica"]);
}

// ============================================================================
// 3. Wildcards
// ============================================================================

#[test]
fn wildcard_removes_key_at_any_depth() {
    let filtered = filter_keys(&service_config(), &["*.password"]);
    assert!(filtered.get_table_value("password").is_none());
    assert!(filtered.get_path("database.password").is_none());
    assert!(filtered.get_path("database.replica.password").is_none());
    assert_eq!(
        filtered.get_path("database.replica.host").unwrap().get_string(),
        "replica.internal"
    );
}

#[test]
fn bare_wildcard_removes_everything() {
    let filtered = filter_keys(&service_config(), &["*"]);
    assert_eq!(filtered.get_type(), NodeType::Table);
    assert_eq!(filtered.get_table_size(), 0);
}

// ============================================================================
// 4. Arrays are transparent
// ============================================================================

#[test]
fn path_pattern_reaches_into_array_of_tables() {
    let filtered = filter_keys(&service_config(), &["servers.token"]);
    let servers = filtered.get_table_value("servers").unwrap();
    assert_eq!(servers.get_array_size(), 2);
    for server in servers.elements() {
        assert_eq!(keys(server), vec!["host"]);
    }
}

#[test]
fn wildcard_segment_inside_path() {
    let config = parse("[envs.dev]\ntoken = \"d\"\nurl = \"x\"\n[envs.prod]\ntoken = \"p\"\nurl = \"y\"")
        .into_root();
    let filtered = filter_keys(&config, &["envs.*.token"]);
    assert_eq!(keys(filtered.get_path("envs.dev").unwrap()), vec!["url"]);
    assert_eq!(keys(filtered.get_path("envs.prod").unwrap()), vec!["url"]);
}

#[test]
fn inner_wildcard_spans_exactly_one_level() {
    let config = parse(
        "[servers]\ntoken = \"outer\"\n[servers.a]\ntoken = \"inner\"\nhost = \"h\"\n[servers.a.deep]\ntoken = \"deepest\"",
    )
    .into_root();
    let filtered = filter_keys(&config, &["servers.*.token"]);

    // `servers.token` sits zero levels below `servers`: kept.
    assert_eq!(
        filtered.get_path("servers.token").unwrap().get_string(),
        "outer"
    );
    assert!(filtered.get_path("servers.a.token").is_none());
    assert_eq!(filtered.get_path("servers.a.host").unwrap().get_string(), "h");
    // Two levels below `servers`: kept.
    assert_eq!(
        filtered.get_path("servers.a.deep.token").unwrap().get_string(),
        "deepest"
    );
}

#[test]
fn inner_wildcard_spans_array_elements() {
    let filtered = filter_keys(&service_config(), &["servers.*.token"]);
    let servers = filtered.get_table_value("servers").unwrap();
    assert_eq!(servers.get_array_size(), 2);
    for server in servers.elements() {
        assert_eq!(keys(server), vec!["host"]);
    }
}

// ============================================================================
// 5. No-op cases
// ============================================================================

#[test]
fn empty_pattern_list_returns_identical_tree() {
    let config = service_config();
    assert_eq!(filter_keys(&config, &[]), config);
}

#[test]
fn unmatched_pattern_returns_equal_tree() {
    let config = service_config();
    assert_eq!(filter_keys(&config, &["nope", "database.nope"]), config);
}

#[test]
fn filtering_a_scalar_returns_it_unchanged() {
    let node = Node::make_integer(5);
    assert_eq!(filter_keys(&node, &["*.x"]), node);
}

// ============================================================================
// 6. Presets
// ============================================================================

#[test]
fn secrets_preset_redacts_credentials_everywhere() {
    let filtered = filter_keys(&service_config(), &RedactPreset::secrets());
    let rendered = serde_json::to_string(&filtered).unwrap();
    assert!(!rendered.contains("secret"), "{rendered}");
    assert!(!rendered.contains("tok-"), "{rendered}");
    assert!(rendered.contains("db.internal"));
}
