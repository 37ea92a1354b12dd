use tyseq::{
    metafunc,
    pred::{IsFloatingPoint, IsIntegral, SameAs, Unwrap, Wrap},
    tyseq, Predicate, Transform, TypeRepr,
};

#[test]
fn negate_complements_a_predicate() {
    let not_integral = metafunc(IsIntegral).negate();

    assert!(not_integral.test(&TypeRepr::of::<f32>()));
    assert!(!not_integral.test(&TypeRepr::of::<i32>()));
}

#[test]
fn double_negation_restores_the_predicate() {
    let integral = metafunc(IsIntegral).negate().negate();

    assert!(integral.test(&TypeRepr::of::<i32>()));
    assert!(!integral.test(&TypeRepr::of::<f32>()));
}

#[test]
fn logic_or_accepts_either_side() {
    let numeric = metafunc(IsIntegral).binary_op(IsFloatingPoint).logic_or();

    assert!(numeric.test(&TypeRepr::of::<i32>()));
    assert!(numeric.test(&TypeRepr::of::<f32>()));
    assert!(!numeric.test(&TypeRepr::of::<String>()));
}

#[test]
fn logic_and_requires_both_sides() {
    let the_answer = metafunc(IsIntegral).binary_op(SameAs::of::<i32>()).logic_and();

    assert!(the_answer.test(&TypeRepr::of::<i32>()));
    assert!(!the_answer.test(&TypeRepr::of::<i64>()));
    assert!(!the_answer.test(&TypeRepr::of::<f32>()));
}

#[test]
fn then_composes_transforms_left_to_right() {
    // The descriptor-level cousin of remove_reference followed by add_pointer.
    let ref_to_ptr = metafunc(Unwrap("Ref")).binary_op(Wrap("Ptr")).then();

    let int_ref = TypeRepr::applied("Ref", TypeRepr::of::<i32>());
    assert_eq!(
        ref_to_ptr.apply(&int_ref),
        TypeRepr::applied("Ptr", TypeRepr::of::<i32>()),
    );

    // Unwrap passes non-references through, so a bare type is just wrapped.
    assert_eq!(
        ref_to_ptr.apply(&TypeRepr::of::<i32>()),
        TypeRepr::applied("Ptr", TypeRepr::of::<i32>()),
    );
}

#[test]
fn closures_are_predicates_and_transforms() {
    let seq = tyseq![i32, f32, i64];

    assert_eq!(seq.filter(|r: &TypeRepr| r.is::<i32>()), tyseq![i32]);
    assert_eq!(
        seq.map(|r: &TypeRepr| TypeRepr::applied("Box", r.clone())),
        vec![
            TypeRepr::applied("Box", TypeRepr::of::<i32>()),
            TypeRepr::applied("Box", TypeRepr::of::<f32>()),
            TypeRepr::applied("Box", TypeRepr::of::<i64>()),
        ],
    );
}

#[test]
fn combined_predicates_feed_into_sequence_operations() {
    let seq = tyseq![i32, f32, f64, i64];

    assert_eq!(seq.filter(metafunc(IsIntegral).negate()), tyseq![f32, f64]);
    assert_eq!(
        seq.remove_if(metafunc(IsIntegral).binary_op(IsFloatingPoint).logic_or()),
        tyseq![],
    );
}
