//! Context-hashed value predictors.
//!
//! Two predictors run side by side over every element:
//!
//! - [`FcmPredictor`]: finite context method. Predicts the value last seen
//!   in the current hash context.
//! - [`DfcmPredictor`]: differential FCM. Predicts the previous value plus
//!   the delta last seen in the current hash context.
//!
//! Each table holds `2^level` entries, zeroed at creation. After an element
//! is stored the hash is recomputed from the stored entry, never from the
//! raw input, so encoder and decoder stay in lockstep as long as both call
//! [`add`](FcmPredictor::add) with the same sequence of values.

use haagenti_core::{Error, Result};

use crate::element::Element;

/// Allocate a zeroed table of `len` entries.
fn allocate_table<T: Element>(len: usize) -> Result<Vec<T>> {
    let mut table = Vec::new();
    table
        .try_reserve_exact(len)
        .map_err(|_| Error::AllocationFailed {
            requested_bytes: len.saturating_mul(T::WIDTH),
        })?;
    table.resize(len, T::default());
    Ok(table)
}

/// Finite context method predictor.
#[derive(Debug, Clone)]
pub struct FcmPredictor<T> {
    table: Vec<T>,
    hash: usize,
}

impl<T: Element> FcmPredictor<T> {
    /// Create a predictor with `table_len` entries (a power of two).
    pub fn new(table_len: usize) -> Result<Self> {
        debug_assert!(table_len.is_power_of_two());
        Ok(Self {
            table: allocate_table(table_len)?,
            hash: 0,
        })
    }

    /// Predicted next value.
    #[inline(always)]
    pub fn predict(&self) -> T {
        self.table[self.hash]
    }

    /// Record the actual value and advance the context.
    #[inline(always)]
    pub fn add(&mut self, value: T) {
        self.table[self.hash] = value;
        let stored = self.table[self.hash];
        self.hash = ((self.hash << T::FCM_SHIFT) ^ stored.high_bits(T::FCM_SOURCE))
            & (self.table.len() - 1);
    }
}

/// Differential finite context method predictor.
#[derive(Debug, Clone)]
pub struct DfcmPredictor<T> {
    table: Vec<T>,
    hash: usize,
    prev: T,
}

impl<T: Element> DfcmPredictor<T> {
    /// Create a predictor with `table_len` entries (a power of two).
    pub fn new(table_len: usize) -> Result<Self> {
        debug_assert!(table_len.is_power_of_two());
        Ok(Self {
            table: allocate_table(table_len)?,
            hash: 0,
            prev: T::default(),
        })
    }

    /// Predicted next value.
    #[inline(always)]
    pub fn predict(&self) -> T {
        self.table[self.hash].wrapping_add(self.prev)
    }

    /// Record the actual value and advance the context.
    #[inline(always)]
    pub fn add(&mut self, value: T) {
        self.table[self.hash] = value.wrapping_sub(self.prev);
        let delta = self.table[self.hash];
        self.hash = ((self.hash << T::DFCM_SHIFT) ^ delta.high_bits(T::DFCM_SOURCE))
            & (self.table.len() - 1);
        self.prev = value;
    }
}
