use super::*;
use crate::error::BindingError;
use proptest::prelude::*;

fn params_of(route: &RouterPath) -> Vec<(String, bool)> {
    route
        .params()
        .iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

#[test]
fn test_empty_template_is_rejected() {
    assert_eq!(compile(""), Err(BindingError::EmptyTemplate));
}

#[test]
fn test_simple_captures() {
    let route = compile("/shelves/{shelf}/books/{book}").unwrap();
    assert_eq!(route.as_str(), "/shelves/:shelf/books/:book");
    assert_eq!(
        params_of(&route),
        vec![("book".to_string(), false), ("shelf".to_string(), false)]
    );
}

#[test]
fn test_prefixed_single_capture() {
    let route = compile("/v1/{name=shelves/*}").unwrap();
    assert_eq!(route.as_str(), "/v1/shelves/:name");
    assert_eq!(route.params().wildcard("name"), Some(false));
}

#[test]
fn test_prefixed_double_capture() {
    let route = compile("/v1/{name=shelves/**}").unwrap();
    assert_eq!(route.as_str(), "/v1/shelves/*name");
    assert_eq!(route.params().wildcard("name"), Some(true));
}

#[test]
fn test_prefixed_capture_with_nested_literal() {
    let route = compile("/v1/{name=projects/shelves/*}").unwrap();
    assert_eq!(route.as_str(), "/v1/projects/shelves/:name");
}

#[test]
fn test_prefixed_capture_triple_star_is_single() {
    let route = compile("/{path=assets/***}").unwrap();
    assert_eq!(route.as_str(), "/assets/:path");
    assert_eq!(route.params().wildcard("path"), Some(false));
}

#[test]
fn test_fixed_literal_drops_param() {
    let route = compile("/v1/{kind=books}/{id}").unwrap();
    assert_eq!(route.as_str(), "/v1/books/:id");
    assert!(!route.params().contains("kind"));
    assert_eq!(route.params().len(), 1);
}

#[test]
fn test_wildcard_capture() {
    let route = compile("/files/{path=**}").unwrap();
    assert_eq!(route.as_str(), "/files/*path");
    assert_eq!(route.params().wildcard("path"), Some(true));
}

#[test]
fn test_explicit_single_capture() {
    let route = compile("/users/{id=*}").unwrap();
    assert_eq!(route.as_str(), "/users/:id");
    assert_eq!(route.params().wildcard("id"), Some(false));
}

#[test]
fn test_template_without_leading_separator() {
    let route = compile("{name=shelves/*}/books/{id}").unwrap();
    assert_eq!(route.as_str(), "/shelves/:name/books/:id");
}

#[test]
fn test_separator_normalization() {
    assert_eq!(compile("/a//b/").unwrap().as_str(), "/a/b");
    assert_eq!(compile("a").unwrap().as_str(), "/a");
    assert_eq!(compile("/").unwrap().as_str(), "/");
    assert_eq!(compile("///").unwrap().as_str(), "/");
}

#[test]
fn test_nested_field_names_are_sanitized() {
    let route = compile("/books/{book.id}/{a-b}").unwrap();
    assert_eq!(route.as_str(), "/books/:book_id/:a_b");
    assert!(route.params().contains("book_id"));
    assert!(route.params().contains("a_b"));
}

#[test]
fn test_unrecognized_fragments_are_kept_verbatim() {
    let route = compile("/v1/{name=shelves/*/books/*}").unwrap();
    assert_eq!(route.as_str(), "/v1/{name=shelves/*/books/*}");
    assert!(route.params().is_empty());
    assert_eq!(
        route.unrecognized().collect::<Vec<_>>(),
        vec!["{name=shelves/*/books/*}"]
    );
}

#[test]
fn test_unrecognized_forms() {
    for template in ["/{}", "/{=x}", "/{name=}", "/{name=a/b}", "/{name=*/x}"] {
        let route = compile(template).unwrap();
        assert_eq!(route.as_str(), template, "template {template}");
        assert!(route.params().is_empty(), "template {template}");
    }
}

#[test]
fn test_unclosed_brace_is_unrecognized() {
    let route = compile("/v1/{name").unwrap();
    assert_eq!(route.as_str(), "/v1/{name");
    assert_eq!(route.unrecognized().count(), 1);
}

#[test]
fn test_unrecognized_fragment_does_not_hide_later_captures() {
    let route = compile("/{a=x/y}/{b}").unwrap();
    assert_eq!(route.as_str(), "/{a=x/y}/:b");
    assert_eq!(params_of(&route), vec![("b".to_string(), false)]);
}

#[test]
fn test_tokenize_segments() {
    let segments = tokenize("/v1/{name=shelves/**}:list");
    assert_eq!(
        segments,
        vec![
            Segment::Literal {
                text: "/v1/".to_string()
            },
            Segment::PrefixedCapture {
                name: "name".to_string(),
                prefix: "shelves".to_string(),
                depth: Wildcard::Double,
            },
            Segment::Literal {
                text: ":list".to_string()
            },
        ]
    );
}

#[test]
fn test_reverse_lookup_matches_compile_time_table() {
    let route = compile("/v1/{parent=projects/*}/files/{path=**}").unwrap();
    let recovered = ParamTable::from_router_path(route.as_str());
    assert_eq!(&recovered, route.params());
}

#[test]
fn test_reverse_lookup_wildcard_wins_on_clash() {
    let table = ParamTable::from_router_path("/:id/*id");
    assert_eq!(table.wildcard("id"), Some(true));
}

#[test]
fn test_reverse_lookup_ignores_digit_leading_names() {
    let table = ParamTable::from_router_path("/items/:1st");
    assert!(table.is_empty());
}

#[test]
fn test_sanitize_param_name() {
    assert_eq!(sanitize_param_name("a.b.c"), "a_b_c");
    assert_eq!(sanitize_param_name("user-id"), "user_id");
    assert_eq!(sanitize_param_name("plain_name9"), "plain_name9");
}

#[test]
fn test_normalize_path() {
    assert_eq!(normalize_path(""), "/");
    assert_eq!(normalize_path("a//b///c/"), "/a/b/c");
    assert_eq!(normalize_path("/a/b"), "/a/b");
}

fn supported_fragment() -> impl Strategy<Value = String> {
    let name = "[a-z][a-z0-9_.]{0,6}";
    let literal = "[a-z][a-z0-9]{0,6}";
    prop_oneof![
        name.prop_map(|n| format!("{{{n}}}")),
        name.prop_map(|n| format!("{{{n}=*}}")),
        name.prop_map(|n| format!("{{{n}=**}}")),
        (name, literal).prop_map(|(n, l)| format!("{{{n}={l}}}")),
        (name, literal).prop_map(|(n, l)| format!("{{{n}={l}/*}}")),
        (name, literal).prop_map(|(n, l)| format!("{{{n}={l}/**}}")),
        literal.prop_map(|l| format!("/{l}")),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every parameter produced from the supported forms is a plain identifier.
    #[test]
    fn prop_param_names_are_identifiers(
        fragments in prop::collection::vec(supported_fragment(), 1..6),
    ) {
        let template = fragments.join("/");
        let route = compile(&template).unwrap();
        for (name, _) in route.params().iter() {
            prop_assert!(!name.is_empty());
            prop_assert!(name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
        }
        prop_assert!(!route.as_str().contains('{'), "unrewritten brace in {}", route);
    }

    /// Compiling an already compiled router path changes nothing.
    #[test]
    fn prop_compile_is_idempotent(
        fragments in prop::collection::vec(supported_fragment(), 1..6),
    ) {
        let template = fragments.join("/");
        let first = compile(&template).unwrap();
        let second = compile(first.as_str()).unwrap();
        prop_assert_eq!(first.as_str(), second.as_str());
    }

    /// Normalized paths start with one separator and never contain runs.
    #[test]
    fn prop_normalized_path_shape(path in "[a-z/]{0,20}") {
        let normalized = normalize_path(&path);
        prop_assert!(normalized.starts_with('/'));
        prop_assert!(!normalized.contains("//"));
        prop_assert!(normalized == "/" || !normalized.ends_with('/'));
    }
}
