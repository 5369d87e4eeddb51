//! PPTX export for Pitchforge.
//!
//! Renders a generated [`Deck`](pitchforge_core::Deck) into an OOXML
//! presentation: a title slide built from the submitted startup context,
//! then one content slide per generated section in canonical order. The
//! package is written from scratch rather than patched into a template,
//! so the same deck rendered at the same instant is byte-identical.
//!
//! ```
//! use pitchforge_core::{Deck, Section, StartupContext};
//!
//! let mut context = StartupContext::default();
//! context.startup_name = "NovaHealth".to_string();
//!
//! let mut deck = Deck::new();
//! deck.insert(Section::Problem, "- Slow triage\n- Rising costs".to_string());
//!
//! let bytes = pitchforge_pptx::deck_bytes(&context, &deck)?;
//! assert!(!bytes.is_empty());
//! # Ok::<(), pitchforge_pptx::PptxError>(())
//! ```

mod assembler;
mod error;
mod opc;
mod parts;
mod slide;

pub use assembler::{deck_bytes, export_deck, export_filename, DEFAULT_OUTPUT_DIR};
pub use error::{PptxError, Result};
pub use slide::split_bullets;
