use std::io::Write;

use joined_model_core::{
    AnalysisError, DecompositionCatalog, MismatchReason, Operator, OperatorKind, PortRef, PortRole,
    PropertyMapping, PropertyName, TypeRef, get_property_mappings, is_composite, is_supported,
};

const SCHEMA: &str = "\
terms[4]{model,source}:
  J,X
  J,Y
  W,X
  W,Y
mappings[6]{model,term,source,destination}:
  J,X,x1,a
  J,Y,y1,b
  J,Y,y2,b
  W,X,id,key
  W,Y,id,key
  W,Y,amount,total
";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn mk_join(id: &str, master: &str, transaction: &str, joined: &str) -> Operator {
    Operator::new(id, OperatorKind::user("MasterJoin"))
        .with_input("master", master)
        .with_input("transaction", transaction)
        .with_output("joined", joined)
        .with_output("missed", transaction)
}

fn mk_split(id: &str, joined: &str, left: &str, right: &str) -> Operator {
    Operator::new(id, OperatorKind::user("Split"))
        .with_input("joined", joined)
        .with_output("left", left)
        .with_output("right", right)
}

fn mapping(from: PortRef, src: &str, to: PortRef, dst: &str) -> PropertyMapping {
    PropertyMapping::new(from, PropertyName::from(src), to, PropertyName::from(dst))
}

#[test]
fn master_join_scenario_from_schema_file() {
    init_tracing();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SCHEMA.as_bytes()).unwrap();
    let catalog = DecompositionCatalog::from_toon_file(file.path()).unwrap();

    let op = mk_join("join", "X", "Y", "J");
    assert!(is_supported(&op));

    let mappings = get_property_mappings(&op, &catalog).unwrap();
    let joined = PortRef::output(0, PortRole::Joined);
    assert_eq!(
        mappings,
        vec![
            mapping(PortRef::input(0, PortRole::Master), "x1", joined, "a"),
            mapping(PortRef::input(1, PortRole::Transaction), "y1", joined, "b"),
        ]
    );
}

#[test]
fn split_scenario_keeps_all_pairs() {
    init_tracing();
    let catalog = DecompositionCatalog::from_toon(SCHEMA).unwrap();
    let mappings = get_property_mappings(&mk_split("split", "J", "X", "Y"), &catalog).unwrap();

    let rendered: Vec<String> = mappings.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec!["joined.a -> left.x1", "joined.b -> right.y1", "joined.b -> right.y2"]
    );
}

#[test]
fn shared_key_is_taken_from_master() {
    let catalog = DecompositionCatalog::from_toon(SCHEMA).unwrap();

    let mappings = get_property_mappings(&mk_join("j", "Y", "X", "W"), &catalog).unwrap();
    //one mapping per distinct joined property
    assert_eq!(mappings.len(), 2);
    assert_eq!(mappings[0].source_port.role, PortRole::Master);
    assert_eq!(mappings[0].destination_property, PropertyName::from("key"));
    assert_eq!(mappings[1].destination_property, PropertyName::from("total"));

    let split = get_property_mappings(&mk_split("s", "W", "X", "Y"), &catalog).unwrap();
    assert_eq!(split.len(), 3);
}

#[test]
fn failures_are_reported_per_kind() {
    let catalog = DecompositionCatalog::from_toon(SCHEMA).unwrap();

    assert!(is_composite(&catalog, &TypeRef::from("J")));
    assert!(!is_composite(&catalog, &TypeRef::from("X")));

    let err = get_property_mappings(&mk_join("j", "X", "Z", "J"), &catalog).unwrap_err();
    assert!(matches!(
        err,
        AnalysisError::StructureMismatch { reason: MismatchReason::MissingTerm(_), .. }
    ));

    let err = get_property_mappings(&mk_join("j", "X", "Y", "X"), &catalog).unwrap_err();
    assert!(matches!(err, AnalysisError::NotComposite { .. }));

    let marker = Operator::new("m", OperatorKind::Marker).with_input("in", "J");
    assert!(!is_supported(&marker));
    let err = get_property_mappings(&marker, &catalog).unwrap_err();
    assert!(matches!(err, AnalysisError::UnsupportedOperator { .. }));
}
