//! Shlexkit - word-break classification for shell-style lexers
//!
//! Part of the Everruns ecosystem.
//!
//! Shlexkit maps the raw text of lexed operator tokens onto a closed set of
//! semantic kinds ([`WordbreakKind`]) and answers the two questions a
//! completion engine asks about an operator: does it start a new command
//! ([`WordbreakKind::is_pipeline_delimiter`]) or does it attach a
//! redirection ([`WordbreakKind::is_redirect`])? It also exports the
//! word-break character set ([`BASH_WORDBREAKS`]) a lexer consults to
//! delimit bare words in the first place.
//!
//! Classification is pure and total: arbitrary text is legal input, and
//! anything not in the fixed operator table comes back as
//! [`WordbreakKind::Unknown`].
//!
//! # Example
//!
//! ```
//! use shlexkit::{Token, WordbreakKind};
//!
//! fn main() -> anyhow::Result<()> {
//!     let token = Token::operator("&&", 10);
//!
//!     let kind = token.wordbreak_kind();
//!     assert_eq!(kind, WordbreakKind::ListAnd);
//!     assert!(kind.is_pipeline_delimiter());
//!     assert!(!kind.is_redirect());
//!
//!     // Kinds serialize as their stable names.
//!     assert_eq!(serde_json::to_string(&kind)?, "\"WORDBREAK_LIST_AND\"");
//!     Ok(())
//! }
//! ```

mod error;
mod token;
mod wordbreak;

pub use error::{Error, Result};
pub use token::Token;
pub use wordbreak::{BASH_WORDBREAKS, WordbreakKind, is_wordbreak};
