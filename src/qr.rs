//! Symbol encoding.
//!
//! Wraps the `qrcodegen` encoder behind a plain boolean module grid so the
//! renderer never touches the encoder's types.

use qrcodegen::{QrCode, QrCodeEcc};

use crate::error::Result;

/// Immutable square matrix of dark/light modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGrid {
    size: usize,
    modules: Vec<bool>,
}

impl ModuleGrid {
    /// Builds a grid from raw rows. Every row must have length `rows.len()`.
    ///
    /// Mostly useful in tests; production grids come from [`encode`].
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Self {
        let size = rows.len();
        debug_assert!(rows.iter().all(|r| r.len() == size));
        let modules = rows.into_iter().flatten().collect();
        Self { size, modules }
    }

    /// Side length in modules.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Module at (x, y); out-of-range coordinates are light.
    pub fn get(&self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 || x >= self.size as i64 || y >= self.size as i64 {
            return false;
        }
        self.modules[y as usize * self.size + x as usize]
    }
}

impl From<&QrCode> for ModuleGrid {
    fn from(qr: &QrCode) -> Self {
        let size = qr.size() as usize;
        let mut modules = Vec::with_capacity(size * size);
        for y in 0..qr.size() {
            for x in 0..qr.size() {
                modules.push(qr.get_module(x, y));
            }
        }
        Self { size, modules }
    }
}

/// Encodes `text` into a module grid at the low error-correction tier.
pub fn encode(text: &str) -> Result<ModuleGrid> {
    let qr = QrCode::encode_text(text, QrCodeEcc::Low)?;
    Ok(ModuleGrid::from(&qr))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_produces_square_grid() {
        let grid = encode("hello").unwrap();
        // Smallest symbol is version 1, 21 modules per side.
        assert!(grid.size() >= 21);
    }

    #[test]
    fn out_of_range_reads_are_light() {
        let grid = ModuleGrid::from_rows(vec![vec![true]]);
        assert!(grid.get(0, 0));
        assert!(!grid.get(-1, 0));
        assert!(!grid.get(0, 1));
    }

    #[test]
    fn encode_is_deterministic() {
        assert_eq!(encode("hello").unwrap(), encode("hello").unwrap());
    }
}
