//! Property-based tests for the wire format contract

use proptest::prelude::*;
use serde::{Deserialize, Serialize};

use quarry_client::{Formatting, NodeDescriptor, Serializer, VerifyRepositoryResponse};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct IndexSettings {
    name: String,
    shards: u32,
    #[serde(default)]
    alias: Option<String>,
}

fn node_id() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_-]{1,16}"
}

fn node_name() -> impl Strategy<Value = String> {
    "[a-z0-9 .:-]{0,24}"
}

proptest! {
    #[test]
    fn roundtrip_verify_repository_response(
        nodes in proptest::collection::btree_map(node_id(), node_name(), 0..8)
    ) {
        let response = VerifyRepositoryResponse {
            nodes: nodes
                .into_iter()
                .map(|(id, name)| (id, NodeDescriptor::named(name)))
                .collect(),
        };
        let serializer = Serializer::with_defaults();

        for formatting in [Formatting::Compact, Formatting::Indented] {
            let mut body = Vec::new();
            serializer.serialize(&response, &mut body, formatting).unwrap();
            let parsed: VerifyRepositoryResponse =
                serializer.deserialize(Some(body.as_slice())).unwrap();
            prop_assert_eq!(&parsed, &response);
        }
    }

    #[test]
    fn roundtrip_preserves_set_fields_and_drops_nulls(
        name in "[a-z]{0,12}",
        shards in any::<u32>(),
        alias in proptest::option::of("[a-z]{1,12}")
    ) {
        let settings = IndexSettings { name, shards, alias };
        let serializer = Serializer::with_defaults();

        for formatting in [Formatting::Compact, Formatting::Indented] {
            let mut body = Vec::new();
            serializer.serialize(&settings, &mut body, formatting).unwrap();
            let text = core::str::from_utf8(&body).unwrap();

            // Set fields always present, null fields never present. Match on
            // the member key (with colon) so a value string that happens to
            // equal a field name cannot confuse the check.
            prop_assert!(text.contains("\"name\":"));
            prop_assert!(text.contains("\"shards\":"));
            prop_assert_eq!(settings.alias.is_some(), text.contains("\"alias\":"));

            let parsed: IndexSettings = serializer.deserialize(Some(body.as_slice())).unwrap();
            prop_assert_eq!(&parsed, &settings);
        }
    }
}
