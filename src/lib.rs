//! Strong password checking library
//!
//! Rejects passwords that are too short, that appear in a wordlist, or that
//! are one trailing digit away from a wordlist entry. The wordlist is held
//! twice: in a separate chaining table and in a linear probing table, each
//! with its own hash function. A hit in either table disqualifies.
//!
//! # Features
//!
//! - `async` (default): Enables async loading and cancellable checks
//! - `tracing`: Enables logging via tracing crate
//! - `cli`: Builds the `strong-password` console binary
//!
//! # Environment Variables
//!
//! - `PWD_WORDLIST_PATH`: Custom path to wordlist file
//!   (default: `./lib/wordlist.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use strong_password::{load_index, PasswordStrengthChecker};
//! use secrecy::SecretString;
//!
//! // Build the dictionary tables (call once at startup)
//! let index = load_index().expect("Failed to load wordlist");
//! let checker = PasswordStrengthChecker::new(index);
//!
//! // Check a password
//! let password = SecretString::new("Xk92plmQ".to_string().into());
//! let verdict = checker.check_password(&password);
//!
//! println!("Strong: {}", verdict.is_strong());
//! ```

// Internal modules
mod checker;
mod dictionary;
mod hashing;
mod sections;
mod wordlist;

// Public API
pub use checker::{PasswordStrengthChecker, Verdict, WeakReason};
pub use dictionary::{
    ChainedDictionary, Dictionary, DictionaryError, DictionaryIndex, ProbedDictionary,
    M_CHAINING, M_PROBING,
};
pub use hashing::{hash_new, hash_old, table_index};
pub use sections::MIN_PASSWORD_LENGTH;
pub use wordlist::{
    get_wordlist_path, load_index, load_index_from_path, load_index_from_reader, BlankLines,
    IndexConfig, WordlistError,
};
