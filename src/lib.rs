//! Window minimizers over a stream of kmer hashes.
//!
//! For every window of `w` consecutive kmers, the kmer with the smallest hash is
//! selected, with ties broken towards the rightmost kmer. A position is reported
//! only when it differs from the previously reported one.
//!
//! ```
//! use window_minimizers::{window_minimizers, Params};
//!
//! let positions = window_minimizers(b"ACGTAGCTAGCTAGCATCGA", &Params::new(4, 5)).unwrap();
//! assert!(positions.windows(2).all(|p| p[0] < p[1]));
//! ```

mod batch;
mod error;
mod monotone_queue;
pub mod nthash;
mod params;
mod ring_buf;
mod window_minimizer;

pub use batch::*;
pub use error::*;
pub use monotone_queue::MonotoneQueue;
pub use nthash::NtHashSource;
pub use params::*;
pub use ring_buf::NaiveRingBuf;
pub use window_minimizer::*;

use rand_chacha::{
    rand_core::{RngCore, SeedableRng},
    ChaChaRng,
};
use serde::{Deserialize, Serialize};

/// Position of a kmer in its sequence.
pub type Pos = u32;
/// Hash of a kmer.
pub type Hash = u32;

/// A kmer, given by its position and hash.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KmerHash {
    pub pos: Pos,
    pub hash: Hash,
}

impl KmerHash {
    #[inline(always)]
    pub fn new(pos: Pos, hash: Hash) -> Self {
        Self { pos, hash }
    }
}

impl From<(Pos, Hash)> for KmerHash {
    fn from((pos, hash): (Pos, Hash)) -> Self {
        Self { pos, hash }
    }
}

/// Supplies the kmers of a sequence one at a time, with strictly increasing positions.
/// `None` means the sequence is exhausted.
pub trait HashSource {
    fn next_kmer(&mut self) -> Option<KmerHash>;
}

/// Every iterator over kmers is a source.
impl<I: Iterator<Item = KmerHash>> HashSource for I {
    #[inline(always)]
    fn next_kmer(&mut self) -> Option<KmerHash> {
        self.next()
    }
}

/// Holds the last `w` admitted kmers and answers which of them has the
/// smallest hash, the rightmost one on ties.
pub trait WindowMinTracker {
    /// Initialize a new datastructure with window size `w > 0`.
    fn new(w: usize) -> Self
    where
        Self: Sized;

    /// Add `x` as the newest kmer, evicting the oldest one when `w` are held.
    /// Positions must be strictly increasing.
    fn admit(&mut self, x: KmerHash);

    /// Fails with `Error::EmptyWindow` when nothing has been admitted.
    fn current_minimum(&self) -> Result<KmerHash>;

    /// Number of kmers held, at most `w`.
    fn size(&self) -> usize;

    /// The window size `w`.
    fn capacity(&self) -> usize;
}

/// Generate a random `ACGT` sequence.
pub fn generate_random_dna(n: usize, seed: u64) -> Vec<u8> {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    (0..n).map(|_| b"ACGT"[(rng.next_u64() % 4) as usize]).collect()
}
