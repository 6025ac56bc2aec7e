//! A rolling ntHash over ASCII DNA, producing one `KmerHash` per kmer.
//!
//! The 64-bit forward and reverse-complement hashes are rolled along the
//! sequence; the reported hash is the low 32 bits of the one selected by the
//! `HashType`. Characters other than `ACGT` (either case) are handled
//! according to the `BadCharPolicy`.

use crate::{BadCharPolicy, HashType, KmerHash, Params, Pos, Result};

/// Seeds of `A`, `C`, `G`, `T`. The complement of code `c` is `3 - c`.
const SEEDS: [u64; 4] = [
    0x3c8b_fbb3_95c6_0474,
    0x3193_c185_62a0_2b4c,
    0x2032_3ed0_8257_2324,
    0x2955_49f5_4be2_4456,
];

/// 2-bit code of a character, or `None` for anything but `ACGT`.
#[inline(always)]
fn code(c: u8) -> Option<u8> {
    match c {
        b'A' | b'a' => Some(0),
        b'C' | b'c' => Some(1),
        b'G' | b'g' => Some(2),
        b'T' | b't' => Some(3),
        _ => None,
    }
}

#[inline(always)]
fn fw(c: u8) -> u64 {
    SEEDS[c as usize]
}

#[inline(always)]
fn rc(c: u8) -> u64 {
    SEEDS[3 - c as usize]
}

/// Forward and reverse-complement hash of a kmer, computed from scratch.
/// All characters must already be codes.
fn kmer_hashes(codes: impl Iterator<Item = u8>, k: usize) -> (u64, u64) {
    let mut fh = 0;
    let mut rh = 0;
    for (i, c) in codes.enumerate() {
        fh ^= fw(c).rotate_left((k - i - 1) as u32);
        rh ^= rc(c).rotate_left(i as u32);
    }
    (fh, rh)
}

#[derive(Debug, Clone)]
pub struct NtHashSource<'s> {
    seq: &'s [u8],
    k: usize,
    hash_type: HashType,
    policy: BadCharPolicy,
    /// Index of the next character to roll in.
    end: usize,
    /// Whether `seq[end-k..end]` is the kmer last produced.
    rolling: bool,
    fh: u64,
    rh: u64,
}

impl<'s> NtHashSource<'s> {
    /// Hash the kmers of `seq` starting at `params.start`.
    /// `params.w` is not used, but must still be valid.
    pub fn new(seq: &'s [u8], params: &Params) -> Result<Self> {
        params.validate_for(seq.len())?;
        Ok(Self {
            seq,
            k: params.k,
            hash_type: params.hash_type,
            policy: params.policy,
            end: params.start,
            rolling: false,
            fh: 0,
            rh: 0,
        })
    }

    /// Index of the next character to be read.
    pub fn end(&self) -> usize {
        self.end
    }

    #[inline(always)]
    fn code_at(&self, i: usize) -> Option<u8> {
        match self.policy {
            BadCharPolicy::SkipOver => code(self.seq[i]),
            BadCharPolicy::WriteOver => Some(code(self.seq[i]).unwrap_or(0)),
        }
    }

    #[inline(always)]
    fn current(&self) -> KmerHash {
        let h = match self.hash_type {
            HashType::Canonical => self.fh.min(self.rh),
            HashType::Forward => self.fh,
            HashType::Reverse => self.rh,
        };
        KmerHash {
            pos: (self.end - self.k) as Pos,
            hash: h as u32,
        }
    }
}

impl<'s> Iterator for NtHashSource<'s> {
    type Item = KmerHash;

    fn next(&mut self) -> Option<KmerHash> {
        let k = self.k;
        if self.rolling {
            if self.end >= self.seq.len() {
                return None;
            }
            match self.code_at(self.end) {
                Some(a) => {
                    // The character leaving the window was valid when it was read.
                    let r = self.code_at(self.end - k).unwrap_or(0);
                    self.fh = self.fh.rotate_left(1) ^ fw(r).rotate_left(k as u32) ^ fw(a);
                    self.rh = self.rh.rotate_right(1)
                        ^ rc(r).rotate_right(1)
                        ^ rc(a).rotate_left((k - 1) as u32);
                    self.end += 1;
                    return Some(self.current());
                }
                None => {
                    self.end += 1;
                    self.rolling = false;
                }
            }
        }

        // Find the next run of k valid characters.
        let mut run = 0;
        while run < k {
            if self.end >= self.seq.len() {
                return None;
            }
            match self.code_at(self.end) {
                Some(_) => run += 1,
                None => run = 0,
            }
            self.end += 1;
        }
        let start = self.end - k;
        (self.fh, self.rh) = kmer_hashes(
            (start..self.end).map(|i| self.code_at(i).unwrap_or(0)),
            k,
        );
        self.rolling = true;
        Some(self.current())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Without knowing the bad characters, only an upper bound is known.
        let remaining = if self.rolling {
            self.seq.len() - self.end
        } else {
            (self.seq.len() - self.end + 1).saturating_sub(self.k)
        };
        (0, Some(remaining))
    }
}
