//! The humanizer pipeline.
//!
//! A [`Humanizer`] segments text into sentences, optionally swaps content
//! words for close synonyms, and randomly prefixes sentences with academic
//! transition phrases. Collaborators are injected through
//! [`HumanizerBuilder`]; randomness is always supplied by the caller.
//!
//! # Examples
//!
//! ```
//! use humaniseur::humanizer::Humanizer;
//!
//! let humanizer = Humanizer::builder()
//!     .p_academic_transition(0.0)
//!     .build()
//!     .unwrap();
//!
//! let text = humanizer.humanize("Le chat dort. Il fait beau.", false, Some(7)).unwrap();
//! assert_eq!(text, "Le chat dort. Il fait beau.");
//! ```

pub mod builder;
pub mod config;
pub mod pipeline;

pub use builder::HumanizerBuilder;
pub use config::HumanizerConfig;
pub use pipeline::{HumanizedText, Humanizer, SentenceOutcome, Substitution};
