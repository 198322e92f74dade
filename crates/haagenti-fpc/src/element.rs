//! Unsigned integer view of floating-point elements.
//!
//! The codec never does float arithmetic: each `f32`/`f64` is reinterpreted
//! as a `u32`/`u64` of the same bits. [`Element`] captures what the
//! predictors and the record format need from that integer, together with
//! the width-specific hash constants.

use core::fmt::Debug;
use core::ops::BitXor;

use crate::config::ByteOrder;

/// Fixed-width unsigned integer holding one float's bit pattern.
pub trait Element: Copy + Default + Eq + Debug + BitXor<Output = Self> + 'static {
    /// Size in bytes.
    const WIDTH: usize;

    /// Hash shift applied to the previous FCM context.
    const FCM_SHIFT: u32;
    /// Right shift selecting the high bits of an FCM entry mixed into the hash.
    const FCM_SOURCE: u32;
    /// Hash shift applied to the previous DFCM context.
    const DFCM_SHIFT: u32;
    /// Right shift selecting the high bits of a DFCM delta mixed into the hash.
    const DFCM_SOURCE: u32;

    /// Memory representation.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default + Copy;

    /// Read from its memory representation.
    fn from_bytes(bytes: Self::Bytes, order: ByteOrder) -> Self;

    /// Memory representation in the given order.
    fn to_bytes(self, order: ByteOrder) -> Self::Bytes;

    /// Wrapping addition.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Wrapping subtraction.
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// `self >> shift`, truncated to a table index.
    fn high_bits(self, shift: u32) -> usize;

    /// Number of leading zero bytes (0 to `WIDTH`).
    fn leading_zero_bytes(self) -> usize;
}

macro_rules! impl_element {
    ($ty:ty, $width:expr, fcm: ($fs:expr, $fv:expr), dfcm: ($ds:expr, $dv:expr)) => {
        impl Element for $ty {
            const WIDTH: usize = $width;
            const FCM_SHIFT: u32 = $fs;
            const FCM_SOURCE: u32 = $fv;
            const DFCM_SHIFT: u32 = $ds;
            const DFCM_SOURCE: u32 = $dv;

            type Bytes = [u8; $width];

            #[inline(always)]
            fn from_bytes(bytes: Self::Bytes, order: ByteOrder) -> Self {
                match order {
                    ByteOrder::Little => <$ty>::from_le_bytes(bytes),
                    ByteOrder::Big => <$ty>::from_be_bytes(bytes),
                }
            }

            #[inline(always)]
            fn to_bytes(self, order: ByteOrder) -> Self::Bytes {
                match order {
                    ByteOrder::Little => self.to_le_bytes(),
                    ByteOrder::Big => self.to_be_bytes(),
                }
            }

            #[inline(always)]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$ty>::wrapping_add(self, rhs)
            }

            #[inline(always)]
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$ty>::wrapping_sub(self, rhs)
            }

            #[inline(always)]
            fn high_bits(self, shift: u32) -> usize {
                (self >> shift) as usize
            }

            #[inline(always)]
            fn leading_zero_bytes(self) -> usize {
                (self.leading_zeros() / 8) as usize
            }
        }
    };
}

impl_element!(u32, 4, fcm: (1, 22), dfcm: (4, 23));
impl_element!(u64, 8, fcm: (6, 48), dfcm: (2, 40));
