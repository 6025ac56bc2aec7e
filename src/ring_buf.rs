use crate::{Error, KmerHash, Result, WindowMinTracker};
use std::cmp::Reverse;

/// A fixed size ring buffer holding the last `w` kmers.
/// The minimum is found by scanning all of them, in O(w) per query.
#[derive(Debug, Clone)]
pub struct NaiveRingBuf {
    w: usize,
    /// The next index to be written.
    idx: usize,
    len: usize,
    data: Vec<KmerHash>,
}

impl NaiveRingBuf {
    /// The kmers currently held, oldest first.
    pub fn forward_slices(&self) -> [&[KmerHash]; 2] {
        if self.len < self.w {
            [&self.data[..self.len], &[]]
        } else {
            let (a, b) = self.data.split_at(self.idx);
            [b, a]
        }
    }
}

impl WindowMinTracker for NaiveRingBuf {
    fn new(w: usize) -> Self {
        assert!(w > 0);
        NaiveRingBuf {
            w,
            idx: 0,
            len: 0,
            data: vec![KmerHash::default(); w],
        }
    }

    #[inline(always)]
    fn admit(&mut self, x: KmerHash) {
        debug_assert!(
            self.len == 0 || self.data[(self.idx + self.w - 1) % self.w].pos < x.pos,
            "Positions must be strictly increasing."
        );
        self.data[self.idx] = x;
        self.idx += 1;
        if self.idx == self.w {
            self.idx = 0;
        }
        self.len = (self.len + 1).min(self.w);
    }

    fn current_minimum(&self) -> Result<KmerHash> {
        // Ties are broken towards the largest position.
        self.data[..self.len]
            .iter()
            .min_by_key(|x| (x.hash, Reverse(x.pos)))
            .copied()
            .ok_or(Error::EmptyWindow)
    }

    fn size(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        self.w
    }
}
