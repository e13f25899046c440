use crate::error::{Error, Result};

// monoid, not necesserily commutative
pub trait Monoid {
    type X;
    fn id(&self) -> Self::X;
    fn op(&self, a: &Self::X, b: &Self::X) -> Self::X;
}

/// Multiplication on `i64`, optionally reduced modulo `modulus`.
///
/// Without a modulus the product wraps on overflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Product {
    modulus: Option<u64>,
}

impl Product {
    pub fn new() -> Self {
        Self { modulus: None }
    }

    // residues must fit in i64
    pub const MAX_MODULUS: u64 = i64::MAX as u64;

    pub fn with_modulus(modulus: u64) -> Result<Self> {
        if modulus == 0 || modulus > Self::MAX_MODULUS {
            return Err(Error::InvalidModulus { modulus });
        }
        Ok(Self {
            modulus: Some(modulus),
        })
    }

    pub fn modulus(&self) -> Option<u64> {
        self.modulus
    }

    // maps a raw input value into [0, modulus)
    pub fn reduce(&self, x: i64) -> i64 {
        match self.modulus {
            Some(m) => (x as i128).rem_euclid(m as i128) as i64,
            None => x,
        }
    }
}

impl Monoid for Product {
    type X = i64;

    fn id(&self) -> i64 {
        self.reduce(1)
    }

    fn op(&self, a: &i64, b: &i64) -> i64 {
        match self.modulus {
            Some(m) => ((*a as i128) * (*b as i128)).rem_euclid(m as i128) as i64,
            None => a.wrapping_mul(*b),
        }
    }
}
