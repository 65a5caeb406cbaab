//! Word-break classification for shell operator tokens.
//!
//! Maps the raw text of an already-lexed operator token (>>, &&, |, ...)
//! onto a closed set of semantic kinds, and answers whether an operator
//! delimits pipeline stages or attaches a redirection instead.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::error::Error;

/// Characters that terminate a bare word during lexing.
///
/// This is the break set an interactive shell consults while completing a
/// command line (the COMP_WORDBREAKS-adjacent default), in canonical order.
/// The tokenizer consults it to delimit words; the classifier itself only
/// ever sees finished tokens.
pub const BASH_WORDBREAKS: &str = " \t\r\n\"'><=;|&(";

/// Whether `ch` terminates a bare word.
pub fn is_wordbreak(ch: char) -> bool {
    BASH_WORDBREAKS.contains(ch)
}

/// Semantic kind of a word-break operator token.
///
/// Produced by [`WordbreakKind::classify`] from a token's raw text. The set
/// is closed: every kind carries a fixed WORDBREAK_* name used for external
/// representation, and the two predicates partition the operators into
/// command delimiters and redirections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WordbreakKind {
    /// Not a recognized shell operator; consumed as an ordinary word
    #[default]
    Unknown,

    /// Redirect input (<)
    RedirectInput,

    /// Redirect output (>)
    RedirectOutput,

    /// Redirect output append (>>)
    RedirectOutputAppend,

    /// Redirect both stdout and stderr (&> or >&)
    RedirectOutputBoth,

    /// Append both stdout and stderr (&>>)
    RedirectOutputBothAppend,

    /// Here-string (<<<)
    RedirectInputString,

    /// Duplicate an input file descriptor (<&)
    RedirectInputDuplicate,

    /// Open a file for reading and writing (<>)
    RedirectInputOutput,

    /// Pipe (|)
    Pipe,

    /// Pipe including stderr (|&)
    PipeWithStderr,

    /// Asynchronous list (&)
    ListAsync,

    /// Sequential list (;)
    ListSequential,

    /// And list (&&)
    ListAnd,

    /// Or list (||)
    ListOr,

    /// Reserved for caller-defined break characters; never produced by
    /// [`WordbreakKind::classify`]
    Custom,
}

impl WordbreakKind {
    /// Every kind, in declaration order.
    pub const ALL: [WordbreakKind; 16] = [
        WordbreakKind::Unknown,
        WordbreakKind::RedirectInput,
        WordbreakKind::RedirectOutput,
        WordbreakKind::RedirectOutputAppend,
        WordbreakKind::RedirectOutputBoth,
        WordbreakKind::RedirectOutputBothAppend,
        WordbreakKind::RedirectInputString,
        WordbreakKind::RedirectInputDuplicate,
        WordbreakKind::RedirectInputOutput,
        WordbreakKind::Pipe,
        WordbreakKind::PipeWithStderr,
        WordbreakKind::ListAsync,
        WordbreakKind::ListSequential,
        WordbreakKind::ListAnd,
        WordbreakKind::ListOr,
        WordbreakKind::Custom,
    ];

    /// Classify the raw text of an operator token.
    ///
    /// Exact, case-sensitive match against the fixed operator table; there
    /// is no prefix matching, so near-miss spellings like "&&&" or "<<"
    /// fall through to [`WordbreakKind::Unknown`]. Empty or arbitrary text
    /// is legal input, not an error.
    pub fn classify(raw: &str) -> Self {
        let kind = match raw {
            "<" => Self::RedirectInput,
            ">" => Self::RedirectOutput,
            ">>" => Self::RedirectOutputAppend,
            "&>" | ">&" => Self::RedirectOutputBoth,
            "&>>" => Self::RedirectOutputBothAppend,
            "<<<" => Self::RedirectInputString,
            "<&" => Self::RedirectInputDuplicate,
            "<>" => Self::RedirectInputOutput,
            "|" => Self::Pipe,
            "|&" => Self::PipeWithStderr,
            "&" => Self::ListAsync,
            ";" => Self::ListSequential,
            "&&" => Self::ListAnd,
            "||" => Self::ListOr,
            _ => Self::Unknown,
        };

        #[cfg(feature = "logging")]
        tracing::trace!(raw, kind = kind.as_str(), "classified operator token");

        kind
    }

    /// Whether this operator marks the boundary between two pipeline stages
    /// or commands.
    ///
    /// True for the pipe and list operators: the parser starts a new command
    /// context after any of them, and only the stdin/stdout wiring and
    /// conditional execution differ. False for everything else, including
    /// [`WordbreakKind::Unknown`] and [`WordbreakKind::Custom`].
    pub fn is_pipeline_delimiter(self) -> bool {
        matches!(
            self,
            Self::Pipe
                | Self::PipeWithStderr
                | Self::ListAsync
                | Self::ListSequential
                | Self::ListAnd
                | Self::ListOr
        )
    }

    /// Whether this operator attaches a file-descriptor redirection to the
    /// current command.
    ///
    /// A redirect does not end the command; the token after it is the
    /// redirection target (filename, descriptor number, or here-string
    /// payload) and is not interpreted here.
    pub fn is_redirect(self) -> bool {
        matches!(
            self,
            Self::RedirectInput
                | Self::RedirectOutput
                | Self::RedirectOutputAppend
                | Self::RedirectOutputBoth
                | Self::RedirectOutputBothAppend
                | Self::RedirectInputString
                | Self::RedirectInputDuplicate
                | Self::RedirectInputOutput
        )
    }

    /// Stable external name, e.g. WORDBREAK_LIST_AND.
    ///
    /// The mapping is total and fixed at compile time; serialization and
    /// [`FromStr`] both go through it, so persisted names survive any
    /// reordering of the enum.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "WORDBREAK_UNKNOWN",
            Self::RedirectInput => "WORDBREAK_REDIRECT_INPUT",
            Self::RedirectOutput => "WORDBREAK_REDIRECT_OUTPUT",
            Self::RedirectOutputAppend => "WORDBREAK_REDIRECT_OUTPUT_APPEND",
            Self::RedirectOutputBoth => "WORDBREAK_REDIRECT_OUTPUT_BOTH",
            Self::RedirectOutputBothAppend => "WORDBREAK_REDIRECT_OUTPUT_BOTH_APPEND",
            Self::RedirectInputString => "WORDBREAK_REDIRECT_INPUT_STRING",
            Self::RedirectInputDuplicate => "WORDBREAK_REDIRECT_INPUT_DUPLICATE",
            Self::RedirectInputOutput => "WORDBREAK_REDIRECT_INPUT_OUTPUT",
            Self::Pipe => "WORDBREAK_PIPE",
            Self::PipeWithStderr => "WORDBREAK_PIPE_WITH_STDERR",
            Self::ListAsync => "WORDBREAK_LIST_ASYNC",
            Self::ListSequential => "WORDBREAK_LIST_SEQUENTIAL",
            Self::ListAnd => "WORDBREAK_LIST_AND",
            Self::ListOr => "WORDBREAK_LIST_OR",
            Self::Custom => "WORDBREAK_CUSTOM",
        }
    }
}

impl fmt::Display for WordbreakKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WordbreakKind {
    type Err = Error;

    /// Reverse lookup through the fixed name table.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| Error::UnknownKindName(name.to_string()))
    }
}

impl Serialize for WordbreakKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for WordbreakKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}

impl JsonSchema for WordbreakKind {
    fn schema_name() -> Cow<'static, str> {
        "WordbreakKind".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        let names: Vec<&str> = Self::ALL.iter().map(|kind| kind.as_str()).collect();
        json_schema!({
            "type": "string",
            "enum": names,
        })
    }
}
