//! Predicates, transforms, and the metafunction wrapper that combines them.
//!
//! A [`Predicate`] decides a yes/no question about one descriptor; a [`Transform`]
//! produces a new descriptor from one. Both are implemented by ordinary closures as
//! well as by the named combinators here and in [`pred`](crate::pred). The
//! [`Metafunc`] wrapper derives new operations from a wrapped one: complement
//! ([`negate`](Metafunc::negate)), boolean combination
//! ([`binary_op`](Metafunc::binary_op) then [`logic_or`](BinaryOp::logic_or) /
//! [`logic_and`](BinaryOp::logic_and)), and transform composition
//! ([`then`](BinaryOp::then)).

use crate::repr::TypeRepr;

/// A yes/no question about a single descriptor.
///
/// Implemented for every `Fn(&TypeRepr) -> bool`, so closures can be passed wherever a
/// predicate is expected.
pub trait Predicate {
    /// Evaluate the predicate against one descriptor.
    fn test(&self, repr: &TypeRepr) -> bool;
}

impl<F> Predicate for F
where
    F: Fn(&TypeRepr) -> bool,
{
    fn test(&self, repr: &TypeRepr) -> bool {
        self(repr)
    }
}

/// A descriptor-to-descriptor function.
///
/// Implemented for every `Fn(&TypeRepr) -> TypeRepr`, so closures can be passed
/// wherever a transform is expected.
pub trait Transform {
    /// Produce the transformed descriptor.
    fn apply(&self, repr: &TypeRepr) -> TypeRepr;
}

impl<F> Transform for F
where
    F: Fn(&TypeRepr) -> TypeRepr,
{
    fn apply(&self, repr: &TypeRepr) -> TypeRepr {
        self(repr)
    }
}

/// Wrap a predicate or transform, giving it derived operations.
///
/// A `Metafunc` is itself a [`Predicate`] or [`Transform`] whenever its wrapped
/// operation is one, so wrapped and combined operations feed directly into
/// [`filter`](crate::TypeSeq::filter), [`apply_if`](crate::TypeSeq::apply_if), and the
/// rest.
///
/// # Examples
///
/// ```
/// use tyseq::{metafunc, pred::{IsFloatingPoint, IsIntegral}, Predicate, TypeRepr};
///
/// let not_integral = metafunc(IsIntegral).negate();
/// assert!(not_integral.test(&TypeRepr::of::<f32>()));
/// assert!(!not_integral.test(&TypeRepr::of::<i32>()));
///
/// let numeric = metafunc(IsIntegral).binary_op(IsFloatingPoint).logic_or();
/// assert!(numeric.test(&TypeRepr::of::<i32>()));
/// assert!(numeric.test(&TypeRepr::of::<f32>()));
/// assert!(!numeric.test(&TypeRepr::of::<String>()));
/// ```
#[derive(Derivative, Clone, Copy)]
#[derivative(Debug(bound = ""))]
pub struct Metafunc<F>(#[derivative(Debug = "ignore")] F);

/// Wrap an operation in a [`Metafunc`].
pub fn metafunc<F>(f: F) -> Metafunc<F> {
    Metafunc(f)
}

impl<F> Metafunc<F> {
    /// Wrap an operation; equivalent to the free function [`metafunc`].
    pub fn new(f: F) -> Self {
        Metafunc(f)
    }

    /// The predicate true exactly where the wrapped predicate is false.
    pub fn negate(self) -> Metafunc<Negate<F>> {
        metafunc(Negate(self.0))
    }

    /// Pair the wrapped operation with a second one, ready to be combined with
    /// [`logic_or`](BinaryOp::logic_or), [`logic_and`](BinaryOp::logic_and), or
    /// [`then`](BinaryOp::then).
    pub fn binary_op<G>(self, other: G) -> BinaryOp<F, G> {
        BinaryOp {
            lhs: self.0,
            rhs: other,
        }
    }

    /// Unwrap the inner operation.
    pub fn into_inner(self) -> F {
        self.0
    }
}

impl<F: Predicate> Predicate for Metafunc<F> {
    fn test(&self, repr: &TypeRepr) -> bool {
        self.0.test(repr)
    }
}

impl<F: Transform> Transform for Metafunc<F> {
    fn apply(&self, repr: &TypeRepr) -> TypeRepr {
        self.0.apply(repr)
    }
}

/// The complement of a predicate. Built by [`Metafunc::negate`].
#[derive(Derivative, Clone, Copy)]
#[derivative(Debug(bound = ""))]
pub struct Negate<F>(#[derivative(Debug = "ignore")] F);

impl<F: Predicate> Predicate for Negate<F> {
    fn test(&self, repr: &TypeRepr) -> bool {
        !self.0.test(repr)
    }
}

/// Two paired operations awaiting a combining operator. Built by
/// [`Metafunc::binary_op`].
#[derive(Derivative, Clone, Copy)]
#[derivative(Debug(bound = ""))]
pub struct BinaryOp<F, G> {
    #[derivative(Debug = "ignore")]
    lhs: F,
    #[derivative(Debug = "ignore")]
    rhs: G,
}

impl<F, G> BinaryOp<F, G> {
    /// The predicate true where either paired predicate is true.
    ///
    /// Both sides are pure, so evaluation order carries no meaning; short-circuiting
    /// is an implementation detail.
    pub fn logic_or(self) -> Metafunc<LogicOr<F, G>> {
        metafunc(LogicOr {
            lhs: self.lhs,
            rhs: self.rhs,
        })
    }

    /// The predicate true where both paired predicates are true.
    pub fn logic_and(self) -> Metafunc<LogicAnd<F, G>> {
        metafunc(LogicAnd {
            lhs: self.lhs,
            rhs: self.rhs,
        })
    }

    /// The composition of the paired transforms: the first is applied, and its result
    /// fed to the second.
    pub fn then(self) -> Metafunc<Then<F, G>> {
        metafunc(Then {
            first: self.lhs,
            second: self.rhs,
        })
    }
}

/// Boolean disjunction of two predicates. Built by [`BinaryOp::logic_or`].
#[derive(Derivative, Clone, Copy)]
#[derivative(Debug(bound = ""))]
pub struct LogicOr<F, G> {
    #[derivative(Debug = "ignore")]
    lhs: F,
    #[derivative(Debug = "ignore")]
    rhs: G,
}

impl<F: Predicate, G: Predicate> Predicate for LogicOr<F, G> {
    fn test(&self, repr: &TypeRepr) -> bool {
        self.lhs.test(repr) || self.rhs.test(repr)
    }
}

/// Boolean conjunction of two predicates. Built by [`BinaryOp::logic_and`].
#[derive(Derivative, Clone, Copy)]
#[derivative(Debug(bound = ""))]
pub struct LogicAnd<F, G> {
    #[derivative(Debug = "ignore")]
    lhs: F,
    #[derivative(Debug = "ignore")]
    rhs: G,
}

impl<F: Predicate, G: Predicate> Predicate for LogicAnd<F, G> {
    fn test(&self, repr: &TypeRepr) -> bool {
        self.lhs.test(repr) && self.rhs.test(repr)
    }
}

/// Composition of two transforms, first then second. Built by [`BinaryOp::then`].
#[derive(Derivative, Clone, Copy)]
#[derivative(Debug(bound = ""))]
pub struct Then<F, G> {
    #[derivative(Debug = "ignore")]
    first: F,
    #[derivative(Debug = "ignore")]
    second: G,
}

impl<F: Transform, G: Transform> Transform for Then<F, G> {
    fn apply(&self, repr: &TypeRepr) -> TypeRepr {
        self.second.apply(&self.first.apply(repr))
    }
}
