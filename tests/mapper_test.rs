//! Mapper contract tests.

use serde::{Deserialize, Serialize};

use docrepo::{DataMapper, Document, MappingError, SerdeMapper, User, UserMapper};

#[test]
fn user_round_trip() {
    let ann = User::new("u1", "Ann");
    let doc = UserMapper.to_document(&ann).unwrap();
    assert_eq!(UserMapper.to_domain(&doc).unwrap(), ann);
}

#[test]
fn round_trip_ignores_store_metadata() {
    let ann = User::new("u1", "Ann");
    let mut doc = UserMapper.to_document(&ann).unwrap();

    // Fields a store would inject on persistence.
    doc.set("_oid", "4d3f2a");
    doc.set("_created_at", "2024-05-01T12:00:00Z");

    assert_eq!(UserMapper.to_domain(&doc).unwrap(), ann);
}

#[test]
fn to_document_preserves_identifier_verbatim() {
    let user = User::new("weird:id/with spaces", "Ann");
    let doc = UserMapper.to_document(&user).unwrap();
    assert_eq!(doc.id().unwrap(), "weird:id/with spaces");
}

#[test]
fn missing_fields_fail_mapping() {
    let unnamed = Document::with_id("u1");
    assert_eq!(
        UserMapper.to_domain(&unnamed),
        Err(MappingError::missing("name"))
    );

    let mut anonymous = Document::new();
    anonymous.set("name", "Ann");
    assert_eq!(
        UserMapper.to_domain(&anonymous),
        Err(MappingError::missing("id"))
    );
}

#[test]
fn malformed_fields_fail_mapping() {
    let mut doc = Document::with_id("u1");
    doc.set("name", 42);
    assert!(matches!(
        UserMapper.to_domain(&doc),
        Err(MappingError::Malformed { field, .. }) if field == "name"
    ));
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct Widget {
    id: String,
    label: String,
    stock: u32,
}

#[test]
fn serde_mapper_round_trip() {
    let mapper = SerdeMapper::<Widget>::new();
    let widget = Widget {
        id: "w1".into(),
        label: "gear".into(),
        stock: 7,
    };

    let mut doc = mapper.to_document(&widget).unwrap();
    assert_eq!(doc.id().unwrap(), "w1");

    // Metadata is stripped before decoding, so even deny_unknown_fields
    // entities survive what the store injects.
    doc.set("_oid", "9a1b");
    assert_eq!(mapper.to_domain(&doc).unwrap(), widget);
}

#[test]
fn serde_mapper_requires_identifier() {
    #[derive(Debug, Serialize, Deserialize)]
    struct Unkeyed {
        label: String,
    }

    let mapper = SerdeMapper::<Unkeyed>::new();
    let err = mapper
        .to_document(&Unkeyed {
            label: "gear".into(),
        })
        .unwrap_err();
    assert_eq!(err, MappingError::missing("id"));
}

#[test]
fn serde_mapper_rejects_non_object_entities() {
    let mapper = SerdeMapper::<String>::new();
    let err = mapper.to_document(&"just a string".to_owned()).unwrap_err();
    assert!(matches!(err, MappingError::Codec(_)));
}

#[test]
fn serde_mapper_reports_codec_failures_on_decode() {
    let mapper = SerdeMapper::<Widget>::new();
    let mut doc = Document::with_id("w1");
    doc.set("label", "gear");
    doc.set("stock", "seven");

    assert!(matches!(
        mapper.to_domain(&doc),
        Err(MappingError::Codec(_))
    ));
}
