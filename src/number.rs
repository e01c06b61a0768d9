//! Minimal arithmetic surface shared by `pairs` and `prefix`.
//!
//! Integers get checked and wrapping arithmetic from the inherent methods of the primitive
//! types. Floats never report overflow.

pub trait Number: Copy + PartialEq + std::fmt::Debug {
    fn zero() -> Self;
    fn checked_add(self, rhs: Self) -> Option<Self>;
    fn checked_sub(self, rhs: Self) -> Option<Self>;
    fn wrapping_add(self, rhs: Self) -> Self;
}

macro_rules! impl_number_int {
    ($($t:ty),*) => {
        $(
            impl Number for $t {
                fn zero() -> Self {
                    0
                }

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }

                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_sub(self, rhs)
                }

                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }
            }
        )*
    };
}

macro_rules! impl_number_float {
    ($($t:ty),*) => {
        $(
            impl Number for $t {
                fn zero() -> Self {
                    0.0
                }

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }

                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    Some(self - rhs)
                }

                fn wrapping_add(self, rhs: Self) -> Self {
                    self + rhs
                }
            }
        )*
    };
}

impl_number_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_number_float!(f32, f64);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_checked_ops() {
        assert_eq!(Number::checked_add(i8::MAX, 1), None);
        assert_eq!(Number::checked_sub(0u32, 1), None);
        assert_eq!(Number::checked_add(2i64, 3), Some(5));
        assert_eq!(Number::wrapping_add(u8::MAX, 1), 0);
    }

    #[test]
    fn test_float_never_overflows() {
        assert_eq!(Number::checked_add(f64::MAX, f64::MAX), Some(f64::INFINITY));
        assert_eq!(<f32 as Number>::zero(), 0.0);
    }
}
