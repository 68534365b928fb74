//! Reference registries: closed sets of codes the RGS API accepts.
//!
//! Every registry is a plain enum with a compile-time table of its codes.
//! Lookups by raw code return `None` for unknown values so callers can turn
//! them into validation errors.

use std::fmt;

/// A closed set of reference values addressed by a raw code.
pub trait ReferenceEnum: Sized + Copy + 'static {
    /// Raw code type as it appears on the wire.
    type Code: Copy + PartialEq + fmt::Display + 'static;

    /// Every value of the registry, in declaration order.
    const ALL: &'static [Self];

    /// The raw code of this value.
    fn code(self) -> Self::Code;

    /// Find the value with the given raw code.
    fn lookup<C>(code: C) -> Option<Self>
    where
        Self::Code: PartialEq<C>,
    {
        Self::ALL.iter().copied().find(|value| value.code() == code)
    }

    /// Check whether a raw code belongs to the registry.
    fn contains<C>(code: C) -> bool
    where
        Self::Code: PartialEq<C>,
    {
        Self::lookup(code).is_some()
    }
}

/// Declares a registry enum together with its code table.
macro_rules! reference_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: $code_ty:ty {
            $( $(#[$variant_meta:meta])* $variant:ident = $code:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$variant_meta])* $variant ),+
        }

        impl $crate::enums::ReferenceEnum for $name {
            type Code = $code_ty;

            const ALL: &'static [Self] = &[$( Self::$variant ),+];

            fn code(self) -> $code_ty {
                match self {
                    $( Self::$variant => $code ),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", $crate::enums::ReferenceEnum::code(*self))
            }
        }
    };
}

mod category;
mod initiator_type;
mod metric_type;
mod utc_offset;

pub use category::*;
pub use initiator_type::*;
pub use metric_type::*;
pub use utc_offset::*;
