/// Property-based tests for parse + convert.
///
/// Generated documents are rendered to TOML text by hand, parsed, and the
/// resulting `Node` tree is checked against the generator's input:
///
/// - Flat tables keep key order and integer/string/bool payloads
/// - Arrays keep element order
/// - Arbitrary text never panics, and failures always carry a 1-based location
use proptest::prelude::*;
use std::collections::HashSet;
use tomlnode_core::{parse, Node, NodeType};

// ============================================================================
// Strategies
// ============================================================================

/// A bare TOML key.
fn arb_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,10}").unwrap()
}

#[derive(Debug, Clone)]
enum Scalar {
    Int(i64),
    Str(String),
    Bool(bool),
}

impl Scalar {
    fn render(&self) -> String {
        match self {
            Scalar::Int(i) => i.to_string(),
            Scalar::Str(s) => format!("\"{s}\""),
            Scalar::Bool(b) => b.to_string(),
        }
    }

    fn check(&self, node: &Node) {
        match self {
            Scalar::Int(i) => {
                assert_eq!(node.get_type(), NodeType::Integer);
                assert_eq!(node.get_integer(), *i);
            }
            Scalar::Str(s) => {
                assert_eq!(node.get_type(), NodeType::String);
                assert_eq!(node.get_string(), s);
            }
            Scalar::Bool(b) => {
                assert_eq!(node.get_type(), NodeType::Boolean);
                assert_eq!(node.get_boolean(), *b);
            }
        }
    }
}

fn arb_scalar() -> impl Strategy<Value = Scalar> {
    prop_oneof![
        (i64::MIN + 1..=i64::MAX).prop_map(Scalar::Int),
        "[a-zA-Z0-9 _.,:-]{0,24}".prop_map(Scalar::Str),
        any::<bool>().prop_map(Scalar::Bool),
    ]
}

/// Key/value pairs with unique keys, in generation order.
fn arb_entries() -> impl Strategy<Value = Vec<(String, Scalar)>> {
    prop::collection::vec((arb_key(), arb_scalar()), 0..20).prop_map(|pairs| {
        let mut seen = HashSet::new();
        pairs
            .into_iter()
            .filter(|(k, _)| seen.insert(k.clone()))
            .collect()
    })
}

fn render_entries(entries: &[(String, Scalar)]) -> String {
    entries
        .iter()
        .map(|(k, v)| format!("{k} = {}\n", v.render()))
        .collect()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn flat_table_keeps_order_and_values(entries in arb_entries()) {
        let text = render_entries(&entries);
        let result = parse(&text);
        prop_assert!(result.success(), "{text}\n{:?}", result.error());

        let root = result.root();
        prop_assert_eq!(root.get_type(), NodeType::Table);
        prop_assert_eq!(root.get_table_size(), entries.len());
        for (i, (key, scalar)) in entries.iter().enumerate() {
            prop_assert_eq!(root.get_table_key(i), key.as_str());
            scalar.check(root.get_table_value(key).unwrap());
        }
    }

    #[test]
    fn nested_table_keeps_order(entries in arb_entries(), name in arb_key()) {
        let text = format!("[{name}]\n{}", render_entries(&entries));
        let root = parse(&text).into_result().unwrap();
        let table = root.get_table_value(&name).unwrap();
        let keys: Vec<&str> = table.entries().map(|(k, _)| k).collect();
        let expected: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
        prop_assert_eq!(keys, expected);
    }

    #[test]
    fn integer_array_keeps_order(values in prop::collection::vec(i64::MIN + 1..=i64::MAX, 0..32)) {
        let rendered: Vec<String> = values.iter().map(i64::to_string).collect();
        let text = format!("arr = [{}]", rendered.join(", "));
        let root = parse(&text).into_result().unwrap();
        let arr = root.get_table_value("arr").unwrap();
        prop_assert_eq!(arr.get_array_size(), values.len());
        for (i, v) in values.iter().enumerate() {
            prop_assert_eq!(arr.get_array_element(i).get_integer(), *v);
        }
        prop_assert!(arr.get_array_element(values.len()).is_none());
    }

    #[test]
    fn arbitrary_text_never_panics(text in "\\PC{0,64}") {
        let result = parse(&text);
        if result.success() {
            prop_assert_eq!(result.root().get_type(), NodeType::Table);
            prop_assert!(result.error().is_none());
        } else {
            let err = result.error().unwrap();
            prop_assert!(err.line >= 1);
            prop_assert!(err.column >= 1);
            prop_assert!(result.root().is_none());
        }
    }

    #[test]
    fn line_of_error_matches_broken_line(
        entries in arb_entries(),
    ) {
        let text = format!("{}broken = \n", render_entries(&entries));
        let err = parse(&text).into_result().unwrap_err();
        prop_assert_eq!(err.line, entries.len() + 1);
    }
}
