//! HEALPix level table.
//!
//! Each level `k` splits the sphere into `12 · 4^k` equal-area cells
//! (`nside = 2^k`). The table below gives the characteristic cell size per
//! level, stored in the unit it is conventionally quoted in. Comparisons go
//! through [`AngularQuantity`], which converts to degrees.

use celestial_core::angle::{arcmin, arcsec, deg, mas, uas};
use celestial_core::{AngularQuantity, AstroError, AstroResult};
use std::fmt;

/// Finest level supported by the table (and by the 64-bit nested scheme).
pub const MAX_LEVEL: u8 = 29;

static CELL_SIZES: [AngularQuantity; MAX_LEVEL as usize + 1] = [
    deg(58.63),
    deg(29.32),
    deg(14.66),
    deg(7.329),
    deg(3.665),
    deg(1.832),
    arcmin(54.97),
    arcmin(27.48),
    arcmin(13.74),
    arcmin(6.871),
    arcmin(3.435),
    arcmin(1.718),
    arcsec(51.53),
    arcsec(25.77),
    arcsec(12.88),
    arcsec(6.442),
    arcsec(3.221),
    arcsec(1.61),
    mas(805.2),
    mas(402.6),
    mas(201.3),
    mas(100.6),
    mas(50.32),
    mas(25.16),
    mas(12.58),
    mas(6.291),
    mas(3.145),
    mas(1.573),
    uas(786.3),
    uas(393.2),
];

/// A HEALPix resolution in `[0, MAX_LEVEL]`. Higher is finer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Level(u8);

impl Level {
    pub const MIN: Level = Level(0);
    pub const MAX: Level = Level(MAX_LEVEL);

    pub fn new(level: u8) -> AstroResult<Self> {
        if level > MAX_LEVEL {
            return Err(AstroError::invalid_argument(
                "Level::new",
                &format!("level {} exceeds maximum {}", level, MAX_LEVEL),
            ));
        }
        Ok(Self(level))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Cells per base-face side, `2^level`.
    #[inline]
    pub const fn nside(self) -> u64 {
        1u64 << self.0
    }

    /// Total number of cells on the sphere, `12 · nside²`.
    #[inline]
    pub const fn n_cells(self) -> u64 {
        12u64 << (2 * self.0 as u32)
    }

    #[inline]
    pub fn cell_size(self) -> AngularQuantity {
        CELL_SIZES[self.0 as usize]
    }

    /// One level coarser, saturating at 0.
    #[inline]
    pub const fn coarser(self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Level {
    type Error = AstroError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> u8 {
        level.0
    }
}

/// Read-only view of the process-wide level table.
#[derive(Copy, Clone, Debug)]
pub struct LevelTable {
    sizes: &'static [AngularQuantity],
}

static TABLE: LevelTable = LevelTable {
    sizes: &CELL_SIZES,
};

impl LevelTable {
    pub fn get() -> &'static LevelTable {
        &TABLE
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn cell_size(&self, level: Level) -> AngularQuantity {
        self.sizes[level.get() as usize]
    }

    /// `(level, cell size)` pairs from coarsest to finest.
    pub fn iter(&self) -> impl Iterator<Item = (Level, AngularQuantity)> + 'static {
        self.sizes
            .iter()
            .enumerate()
            .map(|(i, size)| (Level(i as u8), *size))
    }
}
