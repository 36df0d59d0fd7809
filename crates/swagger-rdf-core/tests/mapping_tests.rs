use serde_json::{json, Value};
use std::collections::HashSet;
use swagger_rdf_core::{ConvertError, Converter, Graph, Node, SourceFormat, Triple};

const EX: &str = "http://example.org/";

fn convert(doc: Value) -> Result<Graph, ConvertError> {
    Converter::default().convert_value(&doc)
}

fn ex(local: &str) -> String {
    format!("{}{}", EX, local)
}

fn has_uri(graph: &Graph, s: &str, p: &str, o: &str) -> bool {
    graph.iter().any(|t| {
        t.subject.as_str() == s && t.predicate.as_str() == p && t.object.as_uri().map(|u| u.as_str()) == Some(o)
    })
}

fn has_literal(graph: &Graph, s: &str, p: &str, o: &str) -> bool {
    graph.iter().any(|t| {
        t.subject.as_str() == s
            && t.predicate.as_str() == p
            && t.object.as_literal().map(|l| l.value()) == Some(o)
    })
}

fn petstore() -> Value {
    json!({
        "swagger": "2.0",
        "tags": [
            { "name": "pet", "description": "Everything about your Pets" },
            { "name": "store", "description": "Access to Petstore orders" }
        ],
        "schemes": ["https", "http"],
        "paths": {
            "/pet": {
                "post": {
                    "tags": ["pet"],
                    "summary": "Add a new pet to the store",
                    "operationId": "addPet",
                    "consumes": ["application/json", "application/xml"],
                    "produces": ["application/xml", "application/json"],
                    "security": [{ "petstore_auth": ["write:pets", "read:pets"] }]
                },
                "put": {
                    "tags": ["pet"],
                    "summary": "Update an existing pet",
                    "operationId": "updatePet"
                }
            },
            "/pet/{petId}": {
                "get": {
                    "tags": ["pet"],
                    "summary": "Find pet by ID",
                    "description": "Returns a single pet",
                    "operationId": "getPetById",
                    "security": [{ "api_key": [] }]
                },
                "delete": { "tags": ["pet"], "operationId": "deletePet" }
            },
            "/store/inventory": {
                "get": { "tags": ["store"], "operationId": "getInventory" }
            }
        },
        "securityDefinitions": {
            "petstore_auth": {
                "type": "oauth2",
                "authorizationUrl": "https://petstore.example.com/oauth/authorize",
                "flow": "implicit",
                "scopes": { "write:pets": "modify pets in your account", "read:pets": "read your pets" }
            },
            "api_key": { "type": "apiKey", "name": "api_key", "in": "header" }
        },
        "definitions": {
            "Pet": {
                "type": "object",
                "required": ["name"],
                "properties": {
                    "id": { "type": "integer", "format": "int64" },
                    "name": { "type": "string", "example": "doggie" },
                    "status": { "type": "string", "enum": ["available", "pending", "sold"] }
                }
            }
        }
    })
}

#[test]
fn test_empty_paths_yields_only_context() {
    let graph = convert(json!({ "paths": {} })).unwrap();

    assert_eq!(graph.len(), 2);
    let context = ex("context");
    assert!(graph.iter().all(|t| t.subject.as_str() == context));
    assert!(has_uri(
        &graph,
        &context,
        "http://www.w3.org/1999/02/22-rdf-syntax-ns#type",
        "http://www.w3.org/ns/json-ld#Context"
    ));
}

#[test]
fn test_context_literal_maps_keys() {
    let graph = convert(json!({ "paths": {} })).unwrap();
    let literal = graph
        .iter()
        .find(|t| t.predicate.as_str() == "http://www.w3.org/1999/02/22-rdf-syntax-ns#value")
        .and_then(|t| t.object.as_literal())
        .unwrap();

    let mapping: Value = serde_json::from_str(literal.value()).unwrap();
    assert_eq!(mapping["summary"], ex("HasSummary"));
    assert_eq!(mapping["securityDefinitions"], ex("IsSecurityDefinition"));
}

#[test]
fn test_scenario_path_operation() {
    let graph = convert(json!({
        "paths": {
            "/pets/{id}": {
                "get": { "tags": ["pet"], "summary": "Find pet", "operationId": "getPet" }
            }
        }
    }))
    .unwrap();

    let path = ex("/pets/_id_");
    let op = format!("{}#get", path);
    assert!(has_uri(&graph, &path, &ex("IsPathTag"), &ex("pet")));
    assert!(has_literal(&graph, &op, &ex("HasSummary"), "Find pet"));
    assert!(has_literal(&graph, &op, &ex("HasOperationId"), "getPet"));
    assert!(has_uri(&graph, &op, &ex("IsMethodType"), &ex("get")));
    assert_eq!(graph.len(), 4 + 2);
}

#[test]
fn test_scenario_security_definition_properties() {
    let graph = convert(json!({
        "paths": {},
        "securityDefinitions": {
            "apiKey": { "type": "apiKey", "name": "X-Key", "in": "header" }
        }
    }))
    .unwrap();

    let def = ex("securityDefinition/apiKey");
    assert!(has_literal(&graph, &def, &format!("{}#type", def), "apiKey"));
    assert!(has_literal(&graph, &def, &format!("{}#name", def), "X-Key"));
    assert!(has_literal(&graph, &def, &format!("{}#in", def), "header"));
    for prop in ["type", "name", "in"] {
        assert!(has_uri(
            &graph,
            &format!("{}#{}", def, prop),
            &ex("HasType"),
            &ex("SecurityDefinitionProperty")
        ));
    }
}

#[test]
fn test_scenario_missing_paths() {
    let err = convert(json!({ "tags": [{ "name": "pet" }], "schemes": ["https"] })).unwrap_err();
    assert!(matches!(err, ConvertError::MissingRequiredSection("paths")));
    assert_eq!(err.kind(), "MissingRequiredSection");
}

#[test]
fn test_method_type_exactly_once_per_operation() {
    let graph = convert(petstore()).unwrap();

    let method_triples: Vec<&Triple> = graph
        .iter()
        .filter(|t| t.predicate.as_str() == ex("IsMethodType"))
        .collect();
    assert_eq!(method_triples.len(), 5);

    let subjects: HashSet<&str> = method_triples.iter().map(|t| t.subject.as_str()).collect();
    let expected: HashSet<String> = [
        "/pet#post",
        "/pet#put",
        "/pet/_petId_#get",
        "/pet/_petId_#delete",
        "/store/inventory#get",
    ]
    .iter()
    .map(|s| ex(s))
    .collect();
    assert_eq!(subjects, expected.iter().map(String::as_str).collect());
}

#[test]
fn test_shared_path_tag_asserted_once() {
    let graph = convert(petstore()).unwrap();
    let count = graph
        .iter()
        .filter(|t| t.subject.as_str() == ex("/pet") && t.predicate.as_str() == ex("IsPathTag"))
        .count();
    assert_eq!(count, 1);
}

#[test]
fn test_conversion_is_deterministic() {
    let first: HashSet<Triple> = convert(petstore()).unwrap().iter().cloned().collect();
    let second: HashSet<Triple> = convert(petstore()).unwrap().iter().cloned().collect();
    assert_eq!(first, second);
}

#[test]
fn test_section_order_does_not_change_triple_set() {
    let original = petstore();
    let mut reordered = serde_json::Map::new();
    for key in ["definitions", "securityDefinitions", "paths", "schemes", "tags"] {
        reordered.insert(key.to_string(), original[key].clone());
    }

    let a: HashSet<Triple> = convert(original).unwrap().iter().cloned().collect();
    let b: HashSet<Triple> = convert(Value::Object(reordered)).unwrap().iter().cloned().collect();
    assert_eq!(a, b);
}

#[test]
fn test_unicode_description_stored_verbatim() {
    let description = "Tiere & Zubehör: «chats», 犬, emoji 🐶 \"quoted\"\n\ttabbed";
    let graph = convert(json!({
        "tags": [{ "name": "pet", "description": description }],
        "paths": {}
    }))
    .unwrap();

    assert!(has_literal(&graph, &ex("tag/pet"), &ex("HasDescription"), description));
}

#[test]
fn test_wrong_shape_aborts_whole_run() {
    let mut doc = petstore();
    doc["paths"]["/store/inventory"]["get"]["produces"] = json!("application/json");

    let err = convert(doc).unwrap_err();
    match err {
        ConvertError::UnexpectedShape { location, .. } => {
            assert_eq!(location, "paths./store/inventory.get");
        }
        other => panic!("expected UnexpectedShape, got {:?}", other),
    }
}

#[test]
fn test_security_requirement_must_be_object_of_arrays() {
    let err = convert(json!({
        "paths": { "/a": { "get": { "security": [{ "api_key": "read" }] } } }
    }))
    .unwrap_err();
    assert_eq!(err.kind(), "UnexpectedShape");
}

#[test]
fn test_nested_security_array_value_rejected() {
    let err = convert(json!({
        "paths": {},
        "securityDefinitions": { "oauth": { "scopes": { "read": ["a"] } } }
    }))
    .unwrap_err();
    assert_eq!(err.kind(), "UnexpectedShape");
}

#[test]
fn test_malformed_path_identifier() {
    let err = convert(json!({ "paths": { "/pets with space": { "get": {} } } })).unwrap_err();
    assert_eq!(err.kind(), "MalformedIdentifier");
}

#[test]
fn test_all_object_kinds_are_well_formed() {
    let graph = convert(petstore()).unwrap();
    for triple in graph.iter() {
        assert!(!triple.subject.as_str().is_empty());
        assert!(!triple.predicate.as_str().is_empty());
        if let Node::Uri(u) = &triple.object {
            assert!(u.as_str().starts_with("http"));
        }
    }
}

#[test]
fn test_convert_str_reports_malformed_json() {
    let err = Converter::default()
        .convert_str("{\"paths\": {", SourceFormat::Json)
        .unwrap_err();
    assert_eq!(err.kind(), "MalformedJson");
}

#[test]
fn test_context_predicates_independent_of_prefixes() {
    let config = swagger_rdf_core::NamespaceConfig {
        prefix: "rdf".to_string(),
        ..Default::default()
    };
    let graph = Converter::new(&config).convert_value(&json!({ "paths": {} })).unwrap();

    let predicates: Vec<&str> = graph.iter().map(|t| t.predicate.as_str()).collect();
    assert_eq!(
        predicates,
        vec![
            "http://www.w3.org/1999/02/22-rdf-syntax-ns#value",
            "http://www.w3.org/1999/02/22-rdf-syntax-ns#type",
        ]
    );
}
