use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const MAX_METHODS: usize = 4;

/// A method used by the host to rank rotamers for a substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CriteriaMethod {
    Density,     // d
    HBonds,      // h
    Clashes,     // c
    Probability, // p
}

impl CriteriaMethod {
    pub fn code(&self) -> char {
        match self {
            CriteriaMethod::Density => 'd',
            CriteriaMethod::HBonds => 'h',
            CriteriaMethod::Clashes => 'c',
            CriteriaMethod::Probability => 'p',
        }
    }

    fn from_code(code: char) -> Option<Self> {
        match code {
            'd' => Some(CriteriaMethod::Density),
            'h' => Some(CriteriaMethod::HBonds),
            'c' => Some(CriteriaMethod::Clashes),
            'p' => Some(CriteriaMethod::Probability),
            _ => None,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CriteriaError {
    #[error("Criteria string is empty")]
    Empty,
    #[error("Criteria string '{0}' has more than four methods")]
    TooLong(String),
    #[error("Unknown criteria method '{0}' (expected one of d, h, c, p)")]
    UnknownMethod(char),
}

/// Ordered rotamer-ranking methods handed unchanged to the host placement routine.
///
/// Valid strings contain one to four letters from `d` (density), `h` (H-bond
/// maximization), `c` (clash minimization) and `p` (probability), e.g. `dhcp`, `cp`, `p`.
/// How the letters combine is up to the host, so the sequence is kept exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Criteria {
    methods: Vec<CriteriaMethod>,
}

impl Criteria {
    /// `chp`, used when a single mutation is applied interactively.
    pub fn interactive() -> Self {
        Self {
            methods: vec![
                CriteriaMethod::Clashes,
                CriteriaMethod::HBonds,
                CriteriaMethod::Probability,
            ],
        }
    }

    pub fn methods(&self) -> &[CriteriaMethod] {
        &self.methods
    }

    pub fn as_code(&self) -> String {
        self.methods.iter().map(CriteriaMethod::code).collect()
    }
}

impl Default for Criteria {
    /// `cp`, used when suggested mutations are applied in bulk.
    fn default() -> Self {
        Self {
            methods: vec![CriteriaMethod::Clashes, CriteriaMethod::Probability],
        }
    }
}

impl FromStr for Criteria {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(CriteriaError::Empty);
        }
        if s.chars().count() > MAX_METHODS {
            return Err(CriteriaError::TooLong(s.to_string()));
        }

        let mut methods = Vec::with_capacity(MAX_METHODS);
        for code in s.chars() {
            methods.push(CriteriaMethod::from_code(code).ok_or(CriteriaError::UnknownMethod(code))?);
        }
        Ok(Self { methods })
    }
}

impl fmt::Display for Criteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_code())
    }
}
