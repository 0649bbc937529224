//! Planning loaded descriptor sets end to end.

mod common;

use common::fixture_path;
use common::temp_files::create_temp_yaml;
use http::Method;
use protoroute::plan::{FilePlan, RoutePlan, UriField};
use protoroute::{load_descriptor, BindingError, GeneratorConfig, PlanError, Planner};

fn library_plans(planner: &Planner) -> Vec<Result<FilePlan, PlanError>> {
    let set = load_descriptor(&fixture_path("library.yaml")).unwrap();
    planner.plan_set(&set).into_iter().map(|o| o.result).collect()
}

fn route<'a>(plan: &'a FilePlan, method: &str) -> &'a RoutePlan {
    plan.routes
        .iter()
        .find(|r| r.method == method)
        .unwrap_or_else(|| panic!("no route for {method}"))
}

#[test]
fn test_library_plans_with_default_config() {
    let plans = library_plans(&Planner::default());
    assert_eq!(plans.len(), 2);

    let library = plans[0].as_ref().unwrap();
    assert_eq!(library.path.to_string_lossy(), "library/v1/library.proto");
    // Reindex has no http rule; GetBook has an additional binding
    assert_eq!(library.routes.len(), 8);

    let list = route(library, "ListBooks");
    assert_eq!(list.http_method, Method::GET);
    assert_eq!(list.router_path, "/v1/shelves/:parent/books");
    assert_eq!(list.bindings.header_fields[0].name, "authorization");
    assert_eq!(
        list.bindings
            .query_fields
            .iter()
            .map(|f| f.name.as_str())
            .collect::<Vec<_>>(),
        vec!["page_size", "filter"]
    );
    assert!(list.bindings.is_bodyless());

    let create = route(library, "CreateBook");
    assert_eq!(create.http_method, Method::POST);
    assert_eq!(create.bindings.body_fields, vec!["book"]);

    let download = route(library, "DownloadFile");
    assert_eq!(download.router_path, "/v1/files/*path");
    assert_eq!(
        download.bindings.uri_fields,
        vec![UriField {
            name: "path".into(),
            field: "path".into(),
            wildcard: true,
        }]
    );

    let get_paths: Vec<_> = library
        .routes
        .iter()
        .filter(|r| r.method == "GetBook")
        .map(|r| r.router_path.as_str())
        .collect();
    assert_eq!(get_paths, vec!["/v1/books/:book", "/v1/books/:book/latest"]);

    let admin = plans[1].as_ref().unwrap();
    let purge = &admin.routes[0];
    assert_eq!(purge.http_method.as_str(), "PURGE");
    assert_eq!(purge.router_path, "/v1/cache/*key");
    assert_eq!(purge.bindings.body_fields, vec!["reason"]);
}

#[test]
fn test_config_file_changes_no_body_methods() {
    let config = GeneratorConfig::from_file(&fixture_path("protoroute.toml")).unwrap();
    let planner = Planner::new(config.no_body_methods().unwrap());
    let plans = library_plans(&planner);

    assert!(plans[0].is_ok());
    match &plans[1] {
        Err(PlanError::Binding(BindingError::UnboundField { field, method, .. })) => {
            assert_eq!(field, "reason");
            assert_eq!(method, "PurgeCache");
        }
        other => panic!("expected UnboundField, got {other:?}"),
    }
}

#[test]
fn test_failing_files_do_not_hide_others() {
    let set = load_descriptor(&fixture_path("broken.yaml")).unwrap();
    let outcomes = Planner::default().plan_set(&set);
    let kinds: Vec<_> = outcomes
        .iter()
        .map(|o| match &o.result {
            Ok(_) => "ok",
            Err(e) => e.kind(),
        })
        .collect();
    assert_eq!(
        kinds,
        vec!["binding_mismatch", "unbound_field", "ok", "empty_template"]
    );
}

#[test]
fn test_mismatch_message_names_the_route_and_file() {
    let set = load_descriptor(&fixture_path("broken.yaml")).unwrap();
    let outcomes = Planner::default().plan_set(&set);
    let message = outcomes[0].result.as_ref().unwrap_err().to_string();
    assert!(message.contains("BookService.GetBook"));
    assert!(message.contains("`id`"));
    assert!(message.contains("/v1/books/:id"));
    assert!(message.contains("mismatch.proto"));
}

#[test]
fn test_json_and_yaml_descriptors_agree() {
    let yaml = load_descriptor(&fixture_path("library.yaml")).unwrap();
    let json = load_descriptor(&fixture_path("library.json")).unwrap();
    let from_json = Planner::default().plan_file(&json.files[0]).unwrap();
    let from_yaml = Planner::default().plan_file(&yaml.files[0]).unwrap();
    assert_eq!(
        from_json.routes[0],
        *route(&from_yaml, "GetShelf")
    );
}

#[test]
fn test_message_default_location_applies_to_unannotated_fields() {
    let file = create_temp_yaml(
        r#"
files:
  - path: search.proto
    services:
      - name: SearchService
        methods:
          - name: Search
            http:
              get: /v1/{index}/search
            input:
              name: SearchRequest
              default_location: query
              fields:
                - name: index
                  location: uri
                - name: q
                - name: limit
"#,
    );
    let set = load_descriptor(file.path()).unwrap();
    let plan = Planner::default().plan_file(&set.files[0]).unwrap();
    let bindings = &plan.routes[0].bindings;
    assert_eq!(bindings.uri_fields.len(), 1);
    assert_eq!(bindings.query_fields.len(), 2);
}

#[test]
fn test_message_default_uri_makes_route_param_valid() {
    let file = create_temp_yaml(
        r#"
files:
  - path: a.proto
    services:
      - name: S
        methods:
          - name: Get
            http:
              get: /v1/{a}/{b}
            input:
              name: Req
              default_location: uri
              fields:
                - name: a
                - name: b
"#,
    );
    let set = load_descriptor(file.path()).unwrap();
    let plan = Planner::default().plan_file(&set.files[0]).unwrap();
    assert_eq!(plan.routes[0].bindings.uri_fields.len(), 2);
}
