use crate::{ConfigError, Result};
use serde::{Deserialize, Serialize};

/// Which strand(s) a kmer hash is computed on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HashType {
    /// Minimum of the forward and reverse-complement hash; strand independent.
    #[default]
    Canonical,
    Forward,
    Reverse,
}

/// What to do with characters other than `ACGT` (in either case).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BadCharPolicy {
    /// Kmers overlapping a bad character are not produced.
    #[default]
    SkipOver,
    /// Bad characters are hashed as if they were an `A`.
    WriteOver,
}

/// Parameters of a window minimizer scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    /// Kmer length.
    pub k: usize,
    /// Number of kmers in a window.
    pub w: usize,
    /// Offset in the sequence of the first kmer.
    #[serde(default)]
    pub start: usize,
    #[serde(default)]
    pub hash_type: HashType,
    #[serde(default)]
    pub policy: BadCharPolicy,
}

impl Params {
    pub fn new(k: usize, w: usize) -> Self {
        Self {
            k,
            w,
            start: 0,
            hash_type: HashType::default(),
            policy: BadCharPolicy::default(),
        }
    }

    pub fn with_start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    pub fn with_hash_type(mut self, hash_type: HashType) -> Self {
        self.hash_type = hash_type;
        self
    }

    pub fn with_policy(mut self, policy: BadCharPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Check the parameters that do not depend on the sequence.
    /// A zero window is reported before anything else.
    pub fn validate(&self) -> Result<()> {
        if self.w == 0 {
            return Err(ConfigError::ZeroWindow.into());
        }
        if self.k == 0 {
            return Err(ConfigError::ZeroK.into());
        }
        Ok(())
    }

    /// Check the parameters against a sequence of length `len`.
    pub fn validate_for(&self, len: usize) -> Result<()> {
        self.validate()?;
        if len > u32::MAX as usize {
            return Err(ConfigError::SequenceTooLong(len).into());
        }
        if self.start > len {
            return Err(ConfigError::StartOutOfBounds {
                start: self.start,
                len,
            }
            .into());
        }
        Ok(())
    }

    /// Parse parameters from json, e.g. `{"k": 21, "w": 11}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Error;

    #[test]
    fn zero_window_always_fails() {
        for k in [0, 1, 3, 31] {
            for start in [0, 5, 1000] {
                for hash_type in [HashType::Canonical, HashType::Forward, HashType::Reverse] {
                    let params = Params::new(k, 0)
                        .with_start(start)
                        .with_hash_type(hash_type);
                    assert!(matches!(
                        params.validate_for(10),
                        Err(Error::InvalidConfiguration(ConfigError::ZeroWindow))
                    ));
                }
            }
        }
    }

    #[test]
    fn bad_k_and_start() {
        assert!(matches!(
            Params::new(0, 4).validate(),
            Err(Error::InvalidConfiguration(ConfigError::ZeroK))
        ));
        assert!(matches!(
            Params::new(3, 4).with_start(11).validate_for(10),
            Err(Error::InvalidConfiguration(ConfigError::StartOutOfBounds {
                start: 11,
                len: 10
            }))
        ));
        assert!(Params::new(3, 4).with_start(10).validate_for(10).is_ok());
    }

    #[test]
    fn json_defaults() {
        let params = Params::from_json(r#"{"k": 21, "w": 11}"#).unwrap();
        assert_eq!(params, Params::new(21, 11));

        let params =
            Params::from_json(r#"{"k": 5, "w": 3, "start": 2, "hash_type": "Forward", "policy": "WriteOver"}"#)
                .unwrap();
        assert_eq!(params.start, 2);
        assert_eq!(params.hash_type, HashType::Forward);
        assert_eq!(params.policy, BadCharPolicy::WriteOver);

        assert!(matches!(
            Params::from_json(r#"{"k": 5, "w": 0}"#),
            Err(Error::InvalidConfiguration(ConfigError::ZeroWindow))
        ));
        assert!(matches!(Params::from_json("{"), Err(Error::Json(_))));
    }
}
