//! Type descriptors: the element values manipulated by [`TypeSeq`](crate::TypeSeq).

use std::{
    any::{type_name, TypeId},
    fmt,
};

/// A structural description of a Rust type, comparable and hashable by value.
///
/// A descriptor is either *named* — built from a concrete type with [`TypeRepr::of`],
/// and identified by its [`TypeId`] — or *applied* — a constructor name applied to an
/// inner descriptor, built with [`TypeRepr::applied`]. Applied descriptors are what
/// make transforms such as "vector-of" expressible even though the concrete Rust type
/// of an element was erased when its descriptor was created.
///
/// Equality is structural. Note that `TypeRepr::of::<Vec<i32>>()` and
/// `TypeRepr::applied("Vec", TypeRepr::of::<i32>())` are *different* descriptors: the
/// first is a single named type, the second records the application. Pick one spelling
/// for a given universe of descriptors and stay with it.
///
/// # Examples
///
/// ```
/// use tyseq::TypeRepr;
///
/// let int = TypeRepr::of::<i32>();
/// let vec_of_int = TypeRepr::applied("Vec", int.clone());
///
/// assert_eq!(int, TypeRepr::of::<i32>());
/// assert_ne!(int, TypeRepr::of::<u32>());
/// assert_eq!(vec_of_int.to_string(), "Vec<i32>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRepr {
    /// A concrete named type, identified by its [`TypeId`]. The name is carried for
    /// diagnostics only and takes no part in equality.
    Named {
        /// The identity of the described type.
        id: TypeId,
        /// The name reported by [`type_name`] when the descriptor was built.
        name: &'static str,
    },
    /// A type constructor applied to an inner descriptor, e.g. `Vec<_>` applied to
    /// `i32`.
    Applied {
        /// The constructor name, e.g. `"Vec"`.
        ctor: &'static str,
        /// The descriptor the constructor is applied to.
        arg: Box<TypeRepr>,
    },
}

impl TypeRepr {
    /// Describe the concrete type `T`.
    pub fn of<T: 'static>() -> Self {
        TypeRepr::Named {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// Apply the constructor `ctor` to an existing descriptor.
    pub fn applied(ctor: &'static str, arg: TypeRepr) -> Self {
        TypeRepr::Applied {
            ctor,
            arg: Box::new(arg),
        }
    }

    /// `true` if this descriptor describes the concrete type `T`.
    ///
    /// Applied descriptors never describe a concrete type, even when a corresponding
    /// concrete type exists.
    pub fn is<T: 'static>(&self) -> bool {
        matches!(self, TypeRepr::Named { id, .. } if *id == TypeId::of::<T>())
    }

    /// The constructor name of an applied descriptor, or `None` for a named one.
    pub fn ctor(&self) -> Option<&'static str> {
        match self {
            TypeRepr::Named { .. } => None,
            TypeRepr::Applied { ctor, .. } => Some(ctor),
        }
    }

    /// The inner descriptor of an applied descriptor, or `None` for a named one.
    pub fn arg(&self) -> Option<&TypeRepr> {
        match self {
            TypeRepr::Named { .. } => None,
            TypeRepr::Applied { arg, .. } => Some(arg),
        }
    }
}

impl fmt::Display for TypeRepr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TypeRepr::Named { name, .. } => write!(f, "{}", name),
            TypeRepr::Applied { ctor, arg } => write!(f, "{}<{}>", ctor, arg),
        }
    }
}
