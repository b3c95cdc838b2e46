use crate::diag::Pos;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // Lexer / parser
    #[error("invalid character `{0}`")]
    InvalidChar(char),

    #[error("unterminated string")]
    UnterminatedString,

    #[error("invalid syntax: unexpected `{0}`")]
    UnexpectedToken(String),

    #[error("invalid syntax: unexpected end of line")]
    UnexpectedEol,

    #[error("cannot parse `{0}` as integer")]
    ParseInt(String),

    // Evaluation
    #[error("name `{0}` is not defined")]
    Undefined(String),

    #[error("`{0}` is not callable")]
    NotCallable(String),

    #[error("{0}() takes {1} arguments ({2} given)")]
    ArgumentCount(String, usize, usize),

    #[error("expected register, found `{0}`")]
    ExpectedRegister(String),

    #[error("expected integer, found `{0}`")]
    ExpectedInteger(String),

    #[error("label name must be a string, found `{0}`")]
    ExpectedLabelName(String),

    #[error("cannot redefine builtin `{0}`")]
    Builtin(String),

    // Files
    #[error("can't find {0}")]
    MissingInput(String),

    #[error("failed to read {0}: {1}")]
    FileRead(String, #[source] std::io::Error),

    #[error("failed to write {0}: {1}")]
    FileWrite(String, #[source] std::io::Error),
}

/// An ingestion failure, attributed to the source line that caused it.
#[derive(Error, Debug)]
#[error("{pos}: {error}")]
pub struct Located {
    pub pos: Pos,
    pub error: Error,
}

impl Located {
    pub fn new(pos: &Pos, error: Error) -> Self {
        Located {
            pos: pos.clone(),
            error,
        }
    }
}
