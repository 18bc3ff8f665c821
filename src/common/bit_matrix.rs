use std::fmt;

use bitvec::{order::Lsb0, slice::IterOnes, vec::BitVec};

/// Square matrix of bits packed into machine words.
///
/// Row `r` occupies the linear bit range `r * size..(r + 1) * size`. The bits
/// can be addressed either by the linear index or by the `(row, col)`
/// coordinates.
#[derive(Clone, PartialEq, Eq)]
pub struct BitMatrix {
    bits: BitVec<usize, Lsb0>,
    size: usize,
}

impl BitMatrix {
    pub fn new(size: usize) -> Self {
        Self {
            bits: BitVec::repeat(false, size * size),
            size,
        }
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of bits.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.size && col < self.size);
        row * self.size + col
    }

    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index / self.size, index % self.size)
    }

    pub fn get(&self, index: usize) -> bool {
        self.bits[index]
    }

    /// Sets the bit, returning its previous value.
    pub fn set(&mut self, index: usize) -> bool {
        self.bits.replace(index, true)
    }

    /// Clears the bit, returning its previous value.
    pub fn clear(&mut self, index: usize) -> bool {
        self.bits.replace(index, false)
    }

    pub fn clear_all(&mut self) {
        self.bits.fill(false);
    }

    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    /// Columns with a set bit in the row, in ascending order.
    pub fn row_ones(&self, row: usize) -> IterOnes<'_, usize, Lsb0> {
        let start = row * self.size;
        self.bits[start..start + self.size].iter_ones()
    }

    /// Rows with a set bit in the column, in ascending order.
    pub fn column_ones(&self, col: usize) -> ColumnOnes<'_> {
        ColumnOnes {
            matrix: self,
            col,
            row: 0,
        }
    }
}

impl fmt::Debug for BitMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "BitMatrix {{")?;
            for row in 0..self.size {
                write!(f, "    ")?;
                for col in 0..self.size {
                    if col > 0 {
                        write!(f, " ")?;
                    }

                    write!(f, "{}", self.get(self.index(row, col)) as usize)?;
                }
                writeln!(f)?;
            }
            writeln!(f, "}}")
        } else {
            f.debug_struct("BitMatrix")
                .field("size", &self.size)
                .field("ones", &self.count_ones())
                .finish()
        }
    }
}

pub struct ColumnOnes<'a> {
    matrix: &'a BitMatrix,
    col: usize,
    row: usize,
}

impl Iterator for ColumnOnes<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.row < self.matrix.size {
            let row = self.row;
            self.row += 1;

            if self.matrix.get(self.matrix.index(row, self.col)) {
                return Some(row);
            }
        }

        None
    }
}
