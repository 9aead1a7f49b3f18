//! Password strength checker - applies the rules in order.

use std::fmt;
use std::path::Path;

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::dictionary::DictionaryIndex;
use crate::sections::{digit_suffix_section, dictionary_section, length_section, SectionResult};
use crate::wordlist::{load_index_from_path, IndexConfig, WordlistError};

type Section = fn(&str, &DictionaryIndex) -> SectionResult;

/// Rules in evaluation order; the first failing one decides the verdict.
const SECTIONS: [(&str, Section); 3] = [
    ("length", length_section),
    ("dictionary", dictionary_section),
    ("digit_suffix", digit_suffix_section),
];

/// Why a password was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeakReason {
    TooShort { min_length: usize },
    InDictionary,
    InDictionaryWithDigit { digit: u8 },
}

impl fmt::Display for WeakReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeakReason::TooShort { min_length } => {
                write!(f, "Password must be at least {} characters", min_length)
            }
            WeakReason::InDictionary => write!(f, "Password is a dictionary word"),
            WeakReason::InDictionaryWithDigit { digit } => {
                write!(f, "Password is one trailing digit ({}) away from a dictionary word", digit)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Strong,
    Weak(WeakReason),
}

impl Verdict {
    pub fn is_strong(&self) -> bool {
        matches!(self, Verdict::Strong)
    }

    pub fn reason(&self) -> Option<WeakReason> {
        match self {
            Verdict::Strong => None,
            Verdict::Weak(reason) => Some(*reason),
        }
    }
}

/// Checks passwords against a fully loaded [`DictionaryIndex`].
///
/// Holds no state between checks; the index is read-only once built.
#[derive(Debug, Clone)]
pub struct PasswordStrengthChecker {
    index: DictionaryIndex,
}

impl PasswordStrengthChecker {
    pub fn new(index: DictionaryIndex) -> Self {
        Self { index }
    }

    /// Loads the wordlist at `path` and builds a checker over it.
    pub fn from_wordlist<P: AsRef<Path>>(
        path: P,
        config: &IndexConfig,
    ) -> Result<Self, WordlistError> {
        Ok(Self::new(load_index_from_path(path, config)?))
    }

    pub fn index(&self) -> &DictionaryIndex {
        &self.index
    }

    /// Evaluates the password and returns the verdict with the first failed rule.
    pub fn check_password(&self, password: &SecretString) -> Verdict {
        self.check(password.expose_secret())
    }

    /// Shorthand for `check_password(..).is_strong()` on a plain string.
    pub fn is_strong(&self, password: &str) -> bool {
        self.check(password).is_strong()
    }

    fn check(&self, password: &str) -> Verdict {
        match SECTIONS
            .iter()
            .find_map(|(name, section)| Some((*name, section(password, &self.index)?)))
        {
            Some((_section_name, reason)) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("Password rejected by section: {}", _section_name);
                Verdict::Weak(reason)
            }
            None => Verdict::Strong,
        }
    }

    /// Like [`check_password`](Self::check_password), checking `token`
    /// before each rule. Returns `None` if cancelled.
    #[cfg(feature = "async")]
    pub fn check_password_cancellable(
        &self,
        password: &SecretString,
        token: &CancellationToken,
    ) -> Option<Verdict> {
        let pwd = password.expose_secret();

        for (_section_name, section) in SECTIONS {
            if token.is_cancelled() {
                #[cfg(feature = "tracing")]
                tracing::debug!("Password check cancelled before section: {}", _section_name);
                return None;
            }
            if let Some(reason) = section(pwd, &self.index) {
                return Some(Verdict::Weak(reason));
            }
        }
        Some(Verdict::Strong)
    }

    /// Async version that sends the verdict via channel.
    ///
    /// Nothing is sent if `token` is cancelled before the check completes.
    #[cfg(feature = "async")]
    pub async fn check_password_tx(
        &self,
        password: &SecretString,
        token: CancellationToken,
        tx: mpsc::Sender<Verdict>,
    ) {
        let Some(verdict) = self.check_password_cancellable(password, &token) else {
            return;
        };

        if let Err(_e) = tx.send(verdict).await {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send password verdict: {}", _e);
        }
    }
}
