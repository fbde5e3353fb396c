//! Monoid policies for [`RangeTree`](crate::RangeTree).

use std::fmt;
use std::marker::PhantomData;

/// An associative operation with a neutral element.
///
/// Implementations must ensure that `combine` is associative and that `identity()`
/// is neutral on both sides. Neither law is checked; a tree built over an
/// unlawful operator returns unspecified aggregates.
pub trait Monoid {
    type Value: Clone;

    fn identity(&self) -> Self::Value;

    /// Combine `left` followed by `right`. The operation need not be commutative.
    fn combine(&self, left: &Self::Value, right: &Self::Value) -> Self::Value;
}

macro_rules! zero_sized_policy {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        pub struct $name<T>(PhantomData<fn() -> T>);

        impl<T> $name<T> {
            pub const fn new() -> Self {
                Self(PhantomData)
            }
        }

        impl<T> Default for $name<T> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T> Clone for $name<T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T> Copy for $name<T> {}

        impl<T> fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(stringify!($name))
            }
        }
    };
}

zero_sized_policy!(
    /// Addition with identity `0`. Overflow wraps, which keeps the operation associative.
    Sum
);
zero_sized_policy!(
    /// Minimum with identity `T::MAX`.
    Min
);
zero_sized_policy!(
    /// Maximum with identity `T::MIN`.
    Max
);

macro_rules! impl_integer_policies {
    ($($ty:ty),* $(,)?) => {$(
        impl Monoid for Sum<$ty> {
            type Value = $ty;

            #[inline(always)]
            fn identity(&self) -> $ty {
                0
            }

            #[inline(always)]
            fn combine(&self, left: &$ty, right: &$ty) -> $ty {
                left.wrapping_add(*right)
            }
        }

        impl Monoid for Min<$ty> {
            type Value = $ty;

            #[inline(always)]
            fn identity(&self) -> $ty {
                <$ty>::MAX
            }

            #[inline(always)]
            fn combine(&self, left: &$ty, right: &$ty) -> $ty {
                *left.min(right)
            }
        }

        impl Monoid for Max<$ty> {
            type Value = $ty;

            #[inline(always)]
            fn identity(&self) -> $ty {
                <$ty>::MIN
            }

            #[inline(always)]
            fn combine(&self, left: &$ty, right: &$ty) -> $ty {
                *left.max(right)
            }
        }
    )*};
}

impl_integer_policies!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// A monoid assembled at runtime from an operator closure and its identity element.
#[derive(Clone)]
pub struct FnMonoid<T, F> {
    operator: F,
    identity: T,
}

impl<T, F> FnMonoid<T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    pub fn new(operator: F, identity: T) -> Self {
        Self { operator, identity }
    }
}

impl<T, F> Monoid for FnMonoid<T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    type Value = T;

    #[inline(always)]
    fn identity(&self) -> T {
        self.identity.clone()
    }

    #[inline(always)]
    fn combine(&self, left: &T, right: &T) -> T {
        (self.operator)(left, right)
    }
}

impl<T: fmt::Debug, F> fmt::Debug for FnMonoid<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnMonoid")
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_neutral<M: Monoid>(monoid: &M, samples: &[M::Value])
    where
        M::Value: PartialEq + fmt::Debug,
    {
        let e = monoid.identity();
        for x in samples {
            assert_eq!(&monoid.combine(&e, x), x);
            assert_eq!(&monoid.combine(x, &e), x);
        }
    }

    #[test]
    fn integer_policies_have_neutral_identity() {
        let samples = [i32::MIN, -7, 0, 1, 42, i32::MAX];
        assert_neutral(&Sum::<i32>::new(), &samples);
        assert_neutral(&Min::<i32>::new(), &samples);
        assert_neutral(&Max::<i32>::new(), &samples);

        let samples = [0_u8, 1, 200, u8::MAX];
        assert_neutral(&Sum::<u8>::new(), &samples);
        assert_neutral(&Min::<u8>::new(), &samples);
        assert_neutral(&Max::<u8>::new(), &samples);
    }

    #[test]
    fn sum_wraps_instead_of_overflowing() {
        let sum = Sum::<u8>::new();
        assert_eq!(sum.combine(&250, &10), 4);
    }

    #[test]
    fn fn_monoid_preserves_operand_order() {
        let concat = FnMonoid::new(|a: &String, b: &String| format!("{a}{b}"), String::new());
        assert_eq!(concat.combine(&"ab".to_owned(), &"cd".to_owned()), "abcd");
        assert_eq!(concat.identity(), "");
    }

    #[test]
    fn fn_monoid_debug_shows_identity() {
        let max = FnMonoid::new(|a: &u64, b: &u64| *a.max(b), 0_u64);
        assert_eq!(format!("{max:?}"), "FnMonoid { identity: 0, .. }");
    }
}
