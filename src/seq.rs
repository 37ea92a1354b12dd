//! Immutable, persistent sequences of [`TypeRepr`] descriptors.

use std::{
    fmt,
    hash::{Hash, Hasher},
    iter::FromIterator,
    sync::Arc,
};

use crate::{
    error::Error,
    meta::{Predicate, Transform},
    repr::TypeRepr,
    sift::{sift, Verdict},
};

/// One cell of a sequence. `len` counts the cell itself plus everything after it, so
/// that sequence length is a field read rather than a walk.
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) elem: TypeRepr,
    pub(crate) rest: Link,
    pub(crate) len: usize,
}

/// A possibly-empty chain of shared cells. `None` is the empty sequence.
pub(crate) type Link = Option<Arc<Node>>;

/// Prepend `elem` to `rest`.
pub(crate) fn cons_link(elem: TypeRepr, rest: Link) -> Link {
    let len = rest.as_deref().map_or(0, |node| node.len) + 1;
    Some(Arc::new(Node { elem, rest, len }))
}

/// An ordered, immutable sequence of type descriptors.
///
/// Sequences are persistent: every operation leaves its receiver untouched and returns
/// a new sequence, sharing unchanged cells with the old one where it can. Cloning is
/// O(1). Duplicate descriptors are permitted and distinguished by position; equality
/// between sequences is structural (same length, equal descriptor at every position).
///
/// The empty sequence is [`TypeSeq::new`], and is the required result of any filter
/// that rejects every element.
///
/// # Examples
///
/// ```
/// use tyseq::{tyseq, pred::IsIntegral, TypeRepr};
///
/// let seq = tyseq![i32, f32, f64, i64];
///
/// assert_eq!(seq.len(), 4);
/// assert_eq!(seq.get(1), Ok(&TypeRepr::of::<f32>()));
/// assert_eq!(seq.filter(IsIntegral), tyseq![i32, i64]);
/// assert_eq!(seq.find(&TypeRepr::of::<f64>()), Some(2));
/// assert_eq!(seq.find(&TypeRepr::of::<u32>()), None);
/// ```
#[derive(Clone, Default)]
pub struct TypeSeq {
    head: Link,
}

impl TypeSeq {
    /// The empty sequence.
    pub fn new() -> Self {
        TypeSeq { head: None }
    }

    /// The number of descriptors in the sequence.
    pub fn len(&self) -> usize {
        self.head.as_deref().map_or(0, |node| node.len)
    }

    /// `true` if the sequence contains no descriptors.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// A new sequence with `elem` prepended. The receiver's cells are shared, not
    /// copied.
    pub fn cons(&self, elem: TypeRepr) -> TypeSeq {
        TypeSeq {
            head: cons_link(elem, self.head.clone()),
        }
    }

    /// The first descriptor, if any.
    pub fn first(&self) -> Option<&TypeRepr> {
        self.head.as_deref().map(|node| &node.elem)
    }

    /// The last descriptor, if any.
    pub fn last(&self) -> Option<&TypeRepr> {
        self.iter().last()
    }

    /// The descriptor at `index` (0-based).
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= self.len()`.
    pub fn get(&self, index: usize) -> Result<&TypeRepr, Error> {
        nth(&self.head, index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    /// Apply `transform` to every descriptor in order, collecting the results.
    ///
    /// The result is a plain `Vec`, not a sequence: mapping is a projection out of the
    /// container. An empty sequence maps to an empty `Vec`.
    pub fn map<T: Transform>(&self, transform: T) -> Vec<TypeRepr> {
        self.iter().map(|elem| transform.apply(elem)).collect()
    }

    /// Keep only the descriptors satisfying `predicate`, preserving relative order.
    pub fn filter<P: Predicate>(&self, predicate: P) -> TypeSeq {
        TypeSeq {
            head: sift(&self.head, &mut |elem| {
                if predicate.test(elem) {
                    Verdict::Keep
                } else {
                    Verdict::Drop
                }
            }),
        }
    }

    /// Remove exactly the descriptor at `index`; later descriptors shift left by one.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= self.len()`.
    pub fn remove_at(&self, index: usize) -> Result<TypeSeq, Error> {
        self.check_index(index)?;
        Ok(TypeSeq {
            head: edit_at(&self.head, index, Verdict::Drop),
        })
    }

    /// Remove every descriptor satisfying `predicate`.
    ///
    /// Equivalent to filtering by the negated predicate.
    pub fn remove_if<P: Predicate>(&self, predicate: P) -> TypeSeq {
        TypeSeq {
            head: sift(&self.head, &mut |elem| {
                if predicate.test(elem) {
                    Verdict::Drop
                } else {
                    Verdict::Keep
                }
            }),
        }
    }

    /// Remove every descriptor structurally equal to `target`.
    ///
    /// This is plain equality on descriptors; no predicate is involved.
    pub fn remove_if_same(&self, target: &TypeRepr) -> TypeSeq {
        TypeSeq {
            head: sift(&self.head, &mut |elem| {
                if elem == target {
                    Verdict::Drop
                } else {
                    Verdict::Keep
                }
            }),
        }
    }

    /// A sequence identical to this one except that the descriptor at `index` is
    /// `with`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= self.len()`.
    pub fn replace_at(&self, index: usize, with: TypeRepr) -> Result<TypeSeq, Error> {
        self.check_index(index)?;
        Ok(TypeSeq {
            head: edit_at(&self.head, index, Verdict::Put(with)),
        })
    }

    /// Replace every descriptor satisfying `predicate` with `with`. Length and the
    /// positions of non-matching descriptors are unchanged.
    pub fn replace_if<P: Predicate>(&self, predicate: P, with: TypeRepr) -> TypeSeq {
        TypeSeq {
            head: sift(&self.head, &mut |elem| {
                if predicate.test(elem) {
                    Verdict::Put(with.clone())
                } else {
                    Verdict::Keep
                }
            }),
        }
    }

    /// Replace every descriptor structurally equal to `target` with `with`.
    pub fn replace_if_same(&self, target: &TypeRepr, with: TypeRepr) -> TypeSeq {
        TypeSeq {
            head: sift(&self.head, &mut |elem| {
                if elem == target {
                    Verdict::Put(with.clone())
                } else {
                    Verdict::Keep
                }
            }),
        }
    }

    /// Apply `transform` to every descriptor satisfying `predicate`, leaving the rest
    /// untouched. Unlike [`map`](TypeSeq::map) the result is still a sequence, and its
    /// length always equals the receiver's.
    pub fn apply_if<P: Predicate, T: Transform>(&self, predicate: P, transform: T) -> TypeSeq {
        TypeSeq {
            head: sift(&self.head, &mut |elem| {
                if predicate.test(elem) {
                    Verdict::Put(transform.apply(elem))
                } else {
                    Verdict::Keep
                }
            }),
        }
    }

    /// Apply `transform` to the descriptors satisfying `predicate` and collect only
    /// those results; non-matching descriptors are dropped, not carried through.
    pub fn map_if<P: Predicate, T: Transform>(&self, predicate: P, transform: T) -> Vec<TypeRepr> {
        self.iter()
            .filter(|elem| predicate.test(elem))
            .map(|elem| transform.apply(elem))
            .collect()
    }

    /// The sub-sequence covering positions `start..=end` (both inclusive).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRange`] if `start > end` or `end >= self.len()`.
    pub fn range(&self, start: usize, end: usize) -> Result<TypeSeq, Error> {
        if start > end || end >= self.len() {
            return Err(Error::InvalidRange {
                start,
                end,
                len: self.len(),
            });
        }
        Ok(TypeSeq {
            head: take(tail_at(&self.head, start), end - start + 1),
        })
    }

    /// A sequence holding this sequence's descriptors followed by `other`'s. `other`'s
    /// cells are shared, not copied.
    pub fn concat(&self, other: &TypeSeq) -> TypeSeq {
        TypeSeq {
            head: append(&self.head, other.head.clone()),
        }
    }

    /// The position of the first descriptor structurally equal to `target`, scanning
    /// from position 0, or `None` if there is none. When duplicates of `target` exist,
    /// the lowest index wins.
    ///
    /// Absence is a normal result, not an error, so presence can be tested without
    /// handling a failure path.
    pub fn find(&self, target: &TypeRepr) -> Option<usize> {
        self.iter().position(|elem| elem == target)
    }

    /// `true` if some descriptor is structurally equal to `target`.
    pub fn contains(&self, target: &TypeRepr) -> bool {
        self.find(target).is_some()
    }

    /// Iterate over the descriptors in order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub(crate) fn link(&self) -> &Link {
        &self.head
    }

    fn check_index(&self, index: usize) -> Result<(), Error> {
        if index < self.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                len: self.len(),
            })
        }
    }
}

/// The positional primitive: peel one cell and decrement until the index reaches zero.
/// Every index-directed operation bottoms out in this shape.
fn nth<'a>(link: &'a Link, index: usize) -> Option<&'a TypeRepr> {
    let node = link.as_deref()?;
    if index == 0 {
        Some(&node.elem)
    } else {
        nth(&node.rest, index - 1)
    }
}

/// Rebuild the cells before `index` and apply a single [`Verdict`] to the cell at it.
/// Callers validate the index; past the end this is the identity.
fn edit_at(link: &Link, index: usize, verdict: Verdict) -> Link {
    match link.as_deref() {
        None => None,
        Some(node) if index == 0 => match verdict {
            Verdict::Keep => link.clone(),
            Verdict::Drop => node.rest.clone(),
            Verdict::Put(elem) => cons_link(elem, node.rest.clone()),
        },
        Some(node) => cons_link(node.elem.clone(), edit_at(&node.rest, index - 1, verdict)),
    }
}

/// The suffix starting at position `start`, or the empty link when `start` is past the
/// end.
fn tail_at<'a>(link: &'a Link, start: usize) -> &'a Link {
    match link.as_deref() {
        Some(node) if start > 0 => tail_at(&node.rest, start - 1),
        _ => link,
    }
}

/// The first `count` cells. When `count` covers the whole remainder the cells are
/// shared rather than rebuilt.
fn take(link: &Link, count: usize) -> Link {
    if count == 0 {
        return None;
    }
    match link.as_deref() {
        None => None,
        Some(node) if count >= node.len => link.clone(),
        Some(node) => cons_link(node.elem.clone(), take(&node.rest, count - 1)),
    }
}

/// Rebuild `link`'s cells in front of `rest`.
fn append(link: &Link, rest: Link) -> Link {
    if rest.is_none() {
        return link.clone();
    }
    match link.as_deref() {
        None => rest,
        Some(node) => cons_link(node.elem.clone(), append(&node.rest, rest)),
    }
}

impl PartialEq for TypeSeq {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for TypeSeq {}

impl Hash for TypeSeq {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elem in self.iter() {
            elem.hash(state);
        }
    }
}

impl fmt::Debug for TypeSeq {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for TypeSeq {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, elem) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", elem)?;
        }
        write!(f, "]")
    }
}

impl FromIterator<TypeRepr> for TypeSeq {
    fn from_iter<I: IntoIterator<Item = TypeRepr>>(iter: I) -> Self {
        let elems: Vec<TypeRepr> = iter.into_iter().collect();
        let mut head = None;
        for elem in elems.into_iter().rev() {
            head = cons_link(elem, head);
        }
        TypeSeq { head }
    }
}

impl From<Vec<TypeRepr>> for TypeSeq {
    fn from(elems: Vec<TypeRepr>) -> Self {
        elems.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a TypeSeq {
    type Item = &'a TypeRepr;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// A borrowed iterator over the descriptors of a [`TypeSeq`], in sequence order.
#[derive(Debug, Clone, Copy)]
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a TypeRepr;

    fn next(&mut self) -> Option<&'a TypeRepr> {
        let node = self.next?;
        self.next = node.rest.as_deref();
        Some(&node.elem)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.next.map_or(0, |node| node.len);
        (len, Some(len))
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

/// Build a [`TypeSeq`] from a comma-separated list of Rust types.
///
/// # Examples
///
/// ```
/// use tyseq::{tyseq, TypeRepr, TypeSeq};
///
/// let seq = tyseq![i32, f32, f64];
/// assert_eq!(seq.len(), 3);
/// assert_eq!(seq.first(), Some(&TypeRepr::of::<i32>()));
///
/// let empty = tyseq![];
/// assert_eq!(empty, TypeSeq::new());
/// ```
#[macro_export]
macro_rules! tyseq {
    () => {
        $crate::TypeSeq::new()
    };
    ($($ty:ty),+ $(,)?) => {
        $crate::TypeSeq::from(vec![$($crate::TypeRepr::of::<$ty>()),+])
    };
}
