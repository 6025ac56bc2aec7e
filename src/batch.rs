use crate::{window_minimizers, Params, Pos, Result};
use log::debug;
use rayon::prelude::*;

/// Minimizer positions of many independent sequences, computed in parallel.
/// Each sequence gets its own `WindowMinimizer`; results are in input order.
pub fn window_minimizers_batch<S: AsRef<[u8]> + Sync>(
    seqs: &[S],
    params: &Params,
) -> Result<Vec<Vec<Pos>>> {
    params.validate()?;
    debug!("Minimizing {} sequences on {} threads", seqs.len(), rayon::current_num_threads());
    seqs.par_iter()
        .map(|seq| window_minimizers(seq.as_ref(), params))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{generate_random_dna, ConfigError, Error};

    #[test]
    fn matches_sequential() {
        let seqs = (0..50)
            .map(|i| generate_random_dna(i * 37, i as u64))
            .collect::<Vec<_>>();
        let params = Params::new(7, 10);
        let batch = window_minimizers_batch(&seqs, &params).unwrap();
        assert_eq!(batch.len(), seqs.len());
        for (seq, mins) in seqs.iter().zip(&batch) {
            assert_eq!(*mins, window_minimizers(seq, &params).unwrap());
        }
    }

    #[test]
    fn bad_params() {
        let seqs = [b"ACGT".to_vec()];
        assert!(matches!(
            window_minimizers_batch(&seqs, &Params::new(3, 0)),
            Err(Error::InvalidConfiguration(ConfigError::ZeroWindow))
        ));
        // The start offset is checked per sequence.
        assert!(matches!(
            window_minimizers_batch(&seqs, &Params::new(3, 2).with_start(5)),
            Err(Error::InvalidConfiguration(ConfigError::StartOutOfBounds { .. }))
        ));
        let empty: [&[u8]; 0] = [];
        assert!(window_minimizers_batch(&empty, &Params::new(3, 2))
            .unwrap()
            .is_empty());
    }
}
