use super::*;

#[test]
fn new_intent_is_unspecified() {
    let intent = Intent::new(7u32);
    assert!(!intent.is_specified());
    assert_eq!(intent.target(), 7);
}

#[test]
fn pending_intent_does_not_materialize() {
    let intent = Intent::new(0u32);
    let err = intent.to_spec().err();
    assert!(matches!(err, Some(TetherError::Constraint(_))));
}

#[test]
fn dimension_fills_spec_without_related_item() {
    let mut intent = Intent::new(0u32);
    intent
        .set_dimension(Attribute::Height, Relation::Equal, 50.0)
        .unwrap();
    assert!(intent.is_specified());

    let spec = intent.to_spec().unwrap();
    assert_eq!(spec.attribute, Attribute::Height);
    assert_eq!(spec.relation, Relation::Equal);
    assert_eq!(spec.related, None);
    assert_eq!(spec.multiplier, 1.0);
    assert_eq!(spec.constant, 50.0);
}

#[test]
fn relation_fills_spec_with_related_item() {
    let mut intent = Intent::new(0u32);
    intent
        .set_relation(
            Attribute::Trailing,
            Related {
                view: 1u32,
                attribute: Attribute::Leading,
            },
            Relation::Equal,
            8.0,
        )
        .unwrap();

    let spec = intent.to_spec().unwrap();
    assert_eq!(spec.attribute, Attribute::Trailing);
    assert_eq!(
        spec.related,
        Some(Related {
            view: 1,
            attribute: Attribute::Leading,
        })
    );
    assert_eq!(spec.constant, 8.0);
}

#[test]
fn specified_intent_rejects_reconfiguration() {
    let mut intent = Intent::new(0u32);
    intent
        .set_dimension(Attribute::Width, Relation::Equal, 10.0)
        .unwrap();

    let err = intent
        .set_dimension(Attribute::Width, Relation::Equal, 20.0)
        .err();
    assert!(matches!(err, Some(TetherError::Chain(_))));

    let err = intent
        .set_relation(
            Attribute::Width,
            Related {
                view: 1u32,
                attribute: Attribute::Width,
            },
            Relation::Equal,
            0.0,
        )
        .err();
    assert!(matches!(err, Some(TetherError::Chain(_))));
}
