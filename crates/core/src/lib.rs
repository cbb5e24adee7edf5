//! Bakeoff Core - semester selection and passcode-scoped backend access
//!
//! This crate provides:
//! - Domain types (seasons, term codes, term options)
//! - Semester calendar arithmetic
//! - Persisted semester override with calendar fallback
//! - Lazily built backend clients scoped to an access passcode
//! - Error types

pub mod calendar;
pub mod client;
pub mod error;
pub mod preference;
pub mod types;

// Re-export common types
pub use calendar::{current_term_code, current_term_code_now, enumerate_term_options, season_for};
pub use client::{BackendClient, ScopeCache, ScopedClientProvider, ScopedRequest, PASSCODE_HEADER};
pub use error::{CoreError, Result};
pub use preference::{FileStorage, MemoryStorage, PreferenceStorage, SemesterPreferenceStore};
pub use types::{Season, TermCode, TermOption};
