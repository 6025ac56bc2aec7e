use crate::{
    ConfigError, Hash, HashSource, KmerHash, MonotoneQueue, NtHashSource, Params, Pos, Result,
    WindowMinTracker,
};
use log::{debug, trace};

/// Rolls over the kmers of a `HashSource` and reports the minimizer of each
/// window of `w` kmers, skipping minimizers equal to the previous one.
///
/// The tracker `T` that finds the window minimum can be swapped out.
pub struct WindowMinimizer<S: HashSource, T: WindowMinTracker = MonotoneQueue> {
    source: S,
    tracker: T,
    w: usize,
    /// Whether a minimizer was reported yet.
    is_minimized: bool,
    /// Position of the last reported minimizer.
    prev_mini: Pos,
    exhausted: bool,
}

impl<'s> WindowMinimizer<NtHashSource<'s>> {
    /// Minimizers of the ntHash values of the kmers of `seq`.
    pub fn new(seq: &'s [u8], params: &Params) -> Result<Self> {
        let source = NtHashSource::new(seq, params)?;
        debug!(
            "Window minimizer over {} bp: k={} w={} start={} {:?} {:?}",
            seq.len(),
            params.k,
            params.w,
            params.start,
            params.hash_type,
            params.policy
        );
        Self::from_source(source, params.w)
    }
}

impl<S: HashSource, T: WindowMinTracker> WindowMinimizer<S, T> {
    /// Minimizers of the kmers supplied by `source`, with windows of `w` kmers.
    pub fn from_source(source: S, w: usize) -> Result<Self> {
        if w == 0 {
            return Err(ConfigError::ZeroWindow.into());
        }
        Ok(Self {
            source,
            tracker: T::new(w),
            w,
            is_minimized: false,
            prev_mini: 0,
            exhausted: false,
        })
    }

    /// Admit up to `amount` more kmers, and push the position of each new
    /// minimizer onto `vec`.
    /// Returns early when the source runs out.
    pub fn roll_minimizer(&mut self, amount: usize, vec: &mut Vec<Pos>) {
        self.roll(amount, |x| vec.push(x.pos));
    }

    /// Like `roll_minimizer`, but pushes (position, hash) pairs.
    pub fn roll_minimizer_with_hashes(&mut self, amount: usize, vec: &mut Vec<(Pos, Hash)>) {
        self.roll(amount, |x| vec.push((x.pos, x.hash)));
    }

    fn roll(&mut self, amount: usize, mut emit: impl FnMut(KmerHash)) {
        if self.exhausted {
            return;
        }
        for _ in 0..amount {
            let Some(x) = self.source.next_kmer() else {
                debug!("Source exhausted (minimized: {})", self.is_minimized);
                self.exhausted = true;
                return;
            };
            self.tracker.admit(x);
            // The first w-1 kmers do not complete a window.
            if self.tracker.size() < self.w {
                continue;
            }
            let min = self
                .tracker
                .current_minimum()
                .expect("a full window is not empty");
            if !self.is_minimized || min.pos != self.prev_mini {
                trace!("minimizer {} hash {:#010x}", min.pos, min.hash);
                self.is_minimized = true;
                self.prev_mini = min.pos;
                emit(min);
            }
        }
    }

    /// The number of kmers in a window.
    pub fn window_size(&self) -> usize {
        self.w
    }

    /// The number of kmers currently in the window, at most `w`.
    pub fn occupancy(&self) -> usize {
        self.tracker.size()
    }

    /// Whether at least one minimizer has been reported.
    pub fn is_minimized(&self) -> bool {
        self.is_minimized
    }

    /// Whether the source has run out of kmers.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

/// All minimizer positions of `seq`.
pub fn window_minimizers(seq: &[u8], params: &Params) -> Result<Vec<Pos>> {
    let mut minimizer = WindowMinimizer::new(seq, params)?;
    let mut vec = vec![];
    minimizer.roll_minimizer(usize::MAX, &mut vec);
    Ok(vec)
}

/// All minimizers of `seq`, as (position, hash) pairs.
pub fn window_minimizers_with_hashes(seq: &[u8], params: &Params) -> Result<Vec<(Pos, Hash)>> {
    let mut minimizer = WindowMinimizer::new(seq, params)?;
    let mut vec = vec![];
    minimizer.roll_minimizer_with_hashes(usize::MAX, &mut vec);
    Ok(vec)
}
