use crate::{KmerHash, Result, WindowMinTracker};
use std::collections::VecDeque;

/// A queue of (time, kmer) candidates for the minimum of the last `w` kmers.
/// Both time and hash values are increasing from front to back, so that the
/// smallest hash is always at the front.
/// When a kmer is pushed, preceding kmers with a larger or equal hash are
/// removed, so that the rightmost kmer wins ties.
#[derive(Debug, Clone)]
pub struct MonotoneQueue {
    w: usize,
    /// Number of kmers admitted so far.
    t: usize,
    q: VecDeque<(usize, KmerHash)>,
}

impl MonotoneQueue {
    /// Push kmer `x` with timestamp `t`.
    /// Larger or equal preceding hashes are removed, so that the queue is strictly increasing.
    #[inline(always)]
    fn push_strict(&mut self, t: usize, x: KmerHash) {
        while let Some(&(_, back)) = self.q.back() {
            if back.hash >= x.hash {
                self.q.pop_back();
            } else {
                break;
            }
        }
        self.q.push_back((t, x));
    }

    /// Drop elements with timestamp <t.
    #[inline(always)]
    fn pop(&mut self, t: usize) {
        while let Some(&(front, _)) = self.q.front() {
            if front < t {
                self.q.pop_front();
            } else {
                break;
            }
        }
    }
}

impl WindowMinTracker for MonotoneQueue {
    fn new(w: usize) -> Self {
        assert!(w > 0);
        Self {
            w,
            t: 0,
            q: VecDeque::with_capacity(w),
        }
    }

    #[inline(always)]
    fn admit(&mut self, x: KmerHash) {
        debug_assert!(
            self.q.back().map_or(true, |&(_, back)| back.pos < x.pos),
            "Positions must be strictly increasing."
        );
        self.push_strict(self.t, x);
        self.t += 1;
        // The window holds timestamps t-w..t.
        self.pop(self.t.saturating_sub(self.w));
    }

    #[inline(always)]
    fn current_minimum(&self) -> Result<KmerHash> {
        self.q.front().map(|&(_, x)| x).ok_or(crate::Error::EmptyWindow)
    }

    fn size(&self) -> usize {
        self.t.min(self.w)
    }

    fn capacity(&self) -> usize {
        self.w
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Error, Hash, Pos};
    use rand::random;
    use std::cmp::Reverse;

    fn kmers(hashes: &[Hash]) -> Vec<KmerHash> {
        hashes
            .iter()
            .enumerate()
            .map(|(i, &h)| KmerHash::new(i as Pos, h))
            .collect()
    }

    #[test]
    fn empty() {
        let q = MonotoneQueue::new(3);
        assert_eq!(q.size(), 0);
        assert!(matches!(q.current_minimum(), Err(Error::EmptyWindow)));
    }

    #[test]
    fn rightmost_tie() {
        let mut q = MonotoneQueue::new(3);
        let mut mins = vec![];
        for x in kmers(&[5, 3, 3, 7, 3]) {
            q.admit(x);
            mins.push(q.current_minimum().unwrap().pos);
        }
        assert_eq!(mins, [0, 1, 2, 2, 4]);
    }

    #[test]
    fn size_is_bounded() {
        for w in [1, 2, 5, 16] {
            let mut q = MonotoneQueue::new(w);
            for (i, x) in kmers(&[1; 40]).into_iter().enumerate() {
                q.admit(x);
                assert_eq!(q.size(), (i + 1).min(w));
                // All hashes equal: the newest kmer is the minimum.
                assert_eq!(q.current_minimum().unwrap(), x);
                assert!(q.q.len() <= w);
            }
        }
    }

    #[test]
    fn random_against_scan() {
        for w in [1, 2, 3, 4, 5, 8, 31, 32, 33] {
            // Small hash range to force many ties.
            let hashes = (0..1000).map(|_| random::<Hash>() % 16).collect::<Vec<_>>();
            let xs = kmers(&hashes);
            let mut q = MonotoneQueue::new(w);
            for (i, &x) in xs.iter().enumerate() {
                q.admit(x);
                let window = &xs[(i + 1).saturating_sub(w)..=i];
                let expected = *window
                    .iter()
                    .min_by_key(|x| (x.hash, Reverse(x.pos)))
                    .unwrap();
                assert_eq!(q.current_minimum().unwrap(), expected, "w={w} i={i}");
            }
        }
    }
}
