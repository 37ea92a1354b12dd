//! Stock predicates and transforms over type descriptors.
//!
//! These play the role the standard type traits (`is_integral`, `is_floating_point`,
//! …) and type constructors (`vector<_>`, `add_pointer<_>`) play for compile-time type
//! lists: ready-made [`Predicate`]s classifying the primitive types, and ready-made
//! [`Transform`]s wrapping and unwrapping constructor applications.

use std::{any::TypeId, collections::HashSet};

use lazy_static::lazy_static;

use crate::{
    meta::{Predicate, Transform},
    repr::TypeRepr,
};

lazy_static! {
    static ref INTEGRAL: HashSet<TypeId> = [
        TypeId::of::<i8>(),
        TypeId::of::<i16>(),
        TypeId::of::<i32>(),
        TypeId::of::<i64>(),
        TypeId::of::<i128>(),
        TypeId::of::<isize>(),
        TypeId::of::<u8>(),
        TypeId::of::<u16>(),
        TypeId::of::<u32>(),
        TypeId::of::<u64>(),
        TypeId::of::<u128>(),
        TypeId::of::<usize>(),
    ]
    .iter()
    .cloned()
    .collect();
    static ref FLOATING: HashSet<TypeId> = [TypeId::of::<f32>(), TypeId::of::<f64>()]
        .iter()
        .cloned()
        .collect();
    static ref OTHER_PRIMITIVE: HashSet<TypeId> = [
        TypeId::of::<bool>(),
        TypeId::of::<char>(),
        TypeId::of::<()>(),
    ]
    .iter()
    .cloned()
    .collect();
}

/// True for descriptors of the primitive integer types (`i8` through `i128`, `u8`
/// through `u128`, `isize`, `usize`).
#[derive(Debug, Clone, Copy, Default)]
pub struct IsIntegral;

impl Predicate for IsIntegral {
    fn test(&self, repr: &TypeRepr) -> bool {
        matches!(repr, TypeRepr::Named { id, .. } if INTEGRAL.contains(id))
    }
}

/// True for descriptors of `f32` and `f64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsFloatingPoint;

impl Predicate for IsFloatingPoint {
    fn test(&self, repr: &TypeRepr) -> bool {
        matches!(repr, TypeRepr::Named { id, .. } if FLOATING.contains(id))
    }
}

/// True for descriptors of any primitive type: the integrals, the floats, `bool`,
/// `char`, and `()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsPrimitive;

impl Predicate for IsPrimitive {
    fn test(&self, repr: &TypeRepr) -> bool {
        matches!(
            repr,
            TypeRepr::Named { id, .. }
                if INTEGRAL.contains(id) || FLOATING.contains(id) || OTHER_PRIMITIVE.contains(id)
        )
    }
}

/// True for descriptors whose name has the shape of a bare `fn` pointer type.
///
/// The set of `fn` pointer types is open, so this classifies by the name reported at
/// descriptor creation rather than by identity.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsFunction;

impl Predicate for IsFunction {
    fn test(&self, repr: &TypeRepr) -> bool {
        matches!(
            repr,
            TypeRepr::Named { name, .. }
                if name.starts_with("fn(")
                    || name.starts_with("unsafe fn(")
                    || name.starts_with("extern ")
        )
    }
}

/// True for every descriptor.
#[derive(Debug, Clone, Copy, Default)]
pub struct Always;

impl Predicate for Always {
    fn test(&self, _: &TypeRepr) -> bool {
        true
    }
}

/// True for no descriptor.
#[derive(Debug, Clone, Copy, Default)]
pub struct Never;

impl Predicate for Never {
    fn test(&self, _: &TypeRepr) -> bool {
        false
    }
}

/// True exactly for descriptors structurally equal to the held one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SameAs(pub TypeRepr);

impl SameAs {
    /// The predicate matching descriptors of the concrete type `T`.
    pub fn of<T: 'static>() -> Self {
        SameAs(TypeRepr::of::<T>())
    }
}

impl Predicate for SameAs {
    fn test(&self, repr: &TypeRepr) -> bool {
        *repr == self.0
    }
}

/// Apply a constructor to a descriptor: `Wrap("Vec")` turns `i32` into `Vec<i32>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wrap(pub &'static str);

impl Transform for Wrap {
    fn apply(&self, repr: &TypeRepr) -> TypeRepr {
        TypeRepr::applied(self.0, repr.clone())
    }
}

/// Peel a matching constructor off a descriptor: `Unwrap("Vec")` turns `Vec<i32>` back
/// into `i32`. Descriptors without that outermost constructor pass through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unwrap(pub &'static str);

impl Transform for Unwrap {
    fn apply(&self, repr: &TypeRepr) -> TypeRepr {
        match repr {
            TypeRepr::Applied { ctor, arg } if *ctor == self.0 => (**arg).clone(),
            other => other.clone(),
        }
    }
}

/// The transform returning its input unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Transform for Identity {
    fn apply(&self, repr: &TypeRepr) -> TypeRepr {
        repr.clone()
    }
}
