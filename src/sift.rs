//! The shared walk behind every element-wise rewriting operation on a sequence.
//!
//! `filter`, `remove_if`, `remove_if_same`, `replace_if`, `replace_if_same`, and
//! `apply_if` differ only in the per-element decision they make; the recursion itself
//! is identical: decide about the head, process the tail, splice the two results. The
//! decision vocabulary is [`Verdict`], and [`sift`] is the walk.

use crate::{
    repr::TypeRepr,
    seq::{cons_link, Link},
};

/// What to do with one element of a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Verdict {
    /// Carry the element through unchanged.
    Keep,
    /// Omit the element; later elements shift left.
    Drop,
    /// Substitute the element with the given descriptor.
    Put(TypeRepr),
}

/// Rebuild a list by applying `decide` to every element, head to tail.
///
/// The empty list maps to itself under every decision procedure, which is what makes
/// it the identity for filtering and the result of filters that reject everything.
pub(crate) fn sift<F>(link: &Link, decide: &mut F) -> Link
where
    F: FnMut(&TypeRepr) -> Verdict,
{
    match link.as_deref() {
        None => None,
        Some(node) => {
            // Decide about the head before walking the tail so that stateful decision
            // procedures observe elements in sequence order.
            let verdict = decide(&node.elem);
            let rest = sift(&node.rest, decide);
            match verdict {
                Verdict::Keep => cons_link(node.elem.clone(), rest),
                Verdict::Drop => rest,
                Verdict::Put(elem) => cons_link(elem, rest),
            }
        }
    }
}
