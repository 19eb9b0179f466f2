use std::collections::BTreeSet;

use reaction_intermediates::engine::ReactionEngine;
use reaction_intermediates::ontology::entities::ChemicalEntity;
use reaction_intermediates::ontology::test_support::{curie, fixture_service};
use reaction_intermediates::ontology::value_objects::Curie;
use rstest::rstest;

fn engine() -> ReactionEngine {
    ReactionEngine::new(&fixture_service())
}

fn set(ids: &[&str]) -> BTreeSet<Curie> {
    ids.iter().map(|id| curie(id)).collect()
}

#[rstest]
#[case(&["GO:0033699"], &["RHEA:52128", "RHEA:52132"])]
#[case(&["GO:0008446"], &["RHEA:23820"])]
#[case(&[], &[])]
#[tokio::test]
async fn functions_map_to_reactions(#[case] functions: &[&str], #[case] expected: &[&str]) {
    let reactions = engine()
        .mfs_to_reactions(&set(functions))
        .await
        .expect("reactions");
    assert_eq!(reactions, set(expected));
}

#[rstest]
#[case(&["RHEA:23820"], &["CHEBI:15377", "CHEBI:57527", "CHEBI:57964"])]
#[case(&["RHEA:18961"], &["CHEBI:57527", "CHEBI:57544"])]
#[case(&[], &[])]
#[tokio::test]
async fn reactions_resolve_to_participants(#[case] reactions: &[&str], #[case] expected: &[&str]) {
    let participants = engine()
        .reactions_to_participants(&set(reactions))
        .await
        .expect("participants");
    assert_eq!(participants, set(expected));
}

#[tokio::test]
async fn functions_resolve_to_chemicals() {
    let chemicals = engine()
        .functions_to_chemicals(&set(&["GO:0008446"]))
        .await
        .expect("chemicals");
    assert_eq!(chemicals, set(&["CHEBI:15377", "CHEBI:57527", "CHEBI:57964"]));
}

#[tokio::test]
async fn shared_intermediates_are_resolved_to_labelled_entities() {
    let intermediates = engine()
        .compute_intermediates(&curie("GO:0047918"), &curie("GO:0008446"))
        .await
        .expect("intermediates");
    assert_eq!(
        intermediates,
        vec![ChemicalEntity {
            id: curie("CHEBI:57527"),
            label: "GDP-alpha-D-mannose(2-)".to_string(),
        }]
    );
}

#[tokio::test]
async fn functions_without_shared_chemicals_yield_nothing() {
    let intermediates = engine()
        .compute_intermediates(&curie("GO:0033699"), &curie("GO:0008446"))
        .await
        .expect("intermediates");
    assert!(intermediates.is_empty());
}

#[tokio::test]
async fn unknown_functions_yield_nothing() {
    let intermediates = engine()
        .compute_intermediates(&curie("GO:9999999"), &curie("GO:0008446"))
        .await
        .expect("unknown identifiers are not an error");
    assert!(intermediates.is_empty());
}
