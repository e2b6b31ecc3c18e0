use thiserror::Error;

use crate::model::matrix::Matrix;

pub const MAX_BITS: u32 = 63;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuantizeError {
    #[error("invalid quantization bit width {0}: expected 1..={max}", max = MAX_BITS)]
    InvalidBits(i64),
}

/// Signed fixed-point layout of `bits` width covering the real range [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPoint {
    bits: u32,
}

impl FixedPoint {
    pub fn new(bits: i64) -> Result<Self, QuantizeError> {
        if !(1..=MAX_BITS as i64).contains(&bits) {
            return Err(QuantizeError::InvalidBits(bits));
        }
        Ok(Self { bits: bits as u32 })
    }

    pub fn bits(self) -> u32 {
        self.bits
    }

    /// 2^(B-1)
    pub fn half(self) -> i64 {
        1i64 << (self.bits - 1)
    }

    /// 2^B - 1, the number of steps between -1 and 1.
    pub fn levels(self) -> u64 {
        u64::MAX >> (64 - self.bits)
    }

    pub fn min_level(self) -> i64 {
        -self.half()
    }

    pub fn max_level(self) -> i64 {
        self.half() - 1
    }

    pub fn mask(self) -> u64 {
        self.levels()
    }

    /// Clips `x` to [-1, 1], maps it onto the 2^B grid and clips the level
    /// into the signed B-bit range. Ties round to even.
    ///
    /// NaN maps to `min_level`: an x86 float-to-int conversion yields
    /// `i64::MIN`, which the level clip then raises to the minimum.
    pub fn quantize(self, x: f64) -> i64 {
        if x.is_nan() {
            return self.min_level();
        }
        let x = x.clamp(-1.0, 1.0);
        let scaled = (x + 1.0) / 2.0 * self.levels() as f64 - self.half() as f64;
        let level = scaled.round_ties_even() as i64;
        level.clamp(self.min_level(), self.max_level())
    }

    /// Real value at the centre of `level`'s step.
    pub fn dequantize(self, level: i64) -> f64 {
        (level as f64 + self.half() as f64) / self.levels() as f64 * 2.0 - 1.0
    }

    /// Width of one quantization step in the real domain.
    pub fn step(self) -> f64 {
        2.0 / self.levels() as f64
    }

    /// Two's-complement bit pattern of `level` in a B-bit register.
    pub fn encode(self, level: i64) -> u64 {
        (level as u64) & self.mask()
    }

    /// Sign-extends a B-bit pattern back to a signed level.
    pub fn decode(self, pattern: u64) -> i64 {
        let shift = 64 - self.bits;
        (((pattern & self.mask()) << shift) as i64) >> shift
    }
}

pub fn quantize_matrix(m: &Matrix<f64>, fp: FixedPoint) -> Matrix<i64> {
    m.map(|x| fp.quantize(*x))
}

pub fn encode_matrix(m: &Matrix<i64>, fp: FixedPoint) -> Matrix<u64> {
    m.map(|v| fp.encode(*v))
}

#[cfg(test)]
#[path = "../../tests/src_inline/transform/quantize.rs"]
mod tests;
