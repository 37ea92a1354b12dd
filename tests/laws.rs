//! Property tests for the sequence laws, run with `--features quickcheck`.

use quickcheck::{QuickCheck, TestResult};
use tyseq::{
    metafunc,
    pred::{Always, IsIntegral, Never, Wrap},
    Predicate, TypeRepr, TypeSeq,
};

/// A small palette of descriptors, so generated sequences contain duplicates often.
fn repr_of(tag: u8) -> TypeRepr {
    match tag % 6 {
        0 => TypeRepr::of::<i32>(),
        1 => TypeRepr::of::<u8>(),
        2 => TypeRepr::of::<f32>(),
        3 => TypeRepr::of::<f64>(),
        4 => TypeRepr::of::<bool>(),
        _ => TypeRepr::of::<String>(),
    }
}

fn seq_of(tags: &[u8]) -> TypeSeq {
    tags.iter().map(|tag| repr_of(*tag)).collect()
}

fn filter_identity_and_annihilation(tags: Vec<u8>) -> bool {
    let seq = seq_of(&tags);
    seq.filter(Always) == seq && seq.filter(Never).is_empty()
}

#[test]
fn filter_laws() {
    QuickCheck::new().quickcheck(filter_identity_and_annihilation as fn(Vec<u8>) -> bool)
}

fn remove_if_is_negated_filter(tags: Vec<u8>) -> bool {
    let seq = seq_of(&tags);
    seq.remove_if(IsIntegral) == seq.filter(metafunc(IsIntegral).negate())
}

#[test]
fn remove_if_law() {
    QuickCheck::new().quickcheck(remove_if_is_negated_filter as fn(Vec<u8>) -> bool)
}

fn remove_at_shift_law(tags: Vec<u8>, index: usize) -> TestResult {
    let seq = seq_of(&tags);
    if index >= seq.len() {
        return TestResult::discard();
    }
    let removed = match seq.remove_at(index) {
        Ok(removed) => removed,
        Err(error) => return TestResult::error(error.to_string()),
    };
    if removed.len() != seq.len() - 1 {
        return TestResult::failed();
    }
    for j in 0..removed.len() {
        let expected = if j < index { seq.get(j) } else { seq.get(j + 1) };
        if removed.get(j) != expected {
            return TestResult::failed();
        }
    }
    TestResult::passed()
}

#[test]
fn shift_law() {
    QuickCheck::new().quickcheck(remove_at_shift_law as fn(Vec<u8>, usize) -> TestResult)
}

fn replace_at_frame_law(tags: Vec<u8>, index: usize, tag: u8) -> TestResult {
    let seq = seq_of(&tags);
    if index >= seq.len() {
        return TestResult::discard();
    }
    let with = repr_of(tag);
    let replaced = match seq.replace_at(index, with.clone()) {
        Ok(replaced) => replaced,
        Err(error) => return TestResult::error(error.to_string()),
    };
    if replaced.len() != seq.len() || replaced.get(index) != Ok(&with) {
        return TestResult::failed();
    }
    let framed = (0..seq.len())
        .filter(|j| *j != index)
        .all(|j| replaced.get(j) == seq.get(j));
    TestResult::from_bool(framed)
}

#[test]
fn frame_law() {
    QuickCheck::new().quickcheck(replace_at_frame_law as fn(Vec<u8>, usize, u8) -> TestResult)
}

fn range_indexing_law(tags: Vec<u8>, start: usize, end: usize) -> TestResult {
    let seq = seq_of(&tags);
    if start > end || end >= seq.len() {
        return TestResult::discard();
    }
    let sub = match seq.range(start, end) {
        Ok(sub) => sub,
        Err(error) => return TestResult::error(error.to_string()),
    };
    if sub.len() != end - start + 1 {
        return TestResult::failed();
    }
    TestResult::from_bool((0..sub.len()).all(|k| sub.get(k) == seq.get(start + k)))
}

#[test]
fn range_law() {
    QuickCheck::new().quickcheck(range_indexing_law as fn(Vec<u8>, usize, usize) -> TestResult)
}

fn find_lowest_index_law(tags: Vec<u8>, tag: u8) -> bool {
    let seq = seq_of(&tags);
    let target = repr_of(tag);
    match seq.find(&target) {
        Some(found) => {
            seq.get(found) == Ok(&target) && (0..found).all(|j| seq.get(j) != Ok(&target))
        }
        None => seq.iter().all(|elem| *elem != target),
    }
}

#[test]
fn find_law() {
    QuickCheck::new().quickcheck(find_lowest_index_law as fn(Vec<u8>, u8) -> bool)
}

fn conditional_map_length_laws(tags: Vec<u8>) -> bool {
    let seq = seq_of(&tags);
    let matching = seq.iter().filter(|elem| IsIntegral.test(elem)).count();
    seq.map_if(IsIntegral, Wrap("Vec")).len() == matching
        && seq.apply_if(IsIntegral, Wrap("Vec")).len() == seq.len()
}

#[test]
fn conditional_map_laws() {
    QuickCheck::new().quickcheck(conditional_map_length_laws as fn(Vec<u8>) -> bool)
}

fn concat_length_and_order(xs: Vec<u8>, ys: Vec<u8>) -> bool {
    let left = seq_of(&xs);
    let right = seq_of(&ys);
    let joined = left.concat(&right);
    joined.len() == left.len() + right.len()
        && joined.iter().eq(left.iter().chain(right.iter()))
}

#[test]
fn concat_law() {
    QuickCheck::new().quickcheck(concat_length_and_order as fn(Vec<u8>, Vec<u8>) -> bool)
}
