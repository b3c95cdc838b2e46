use color_print::cformat;
use std::fmt;
use std::io::{IsTerminal, Write};

/// Position of a statement in the source program.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pos {
    pub file: String,
    pub line: usize,
}

impl Pos {
    pub fn new(file: &str, line: usize) -> Self {
        Pos {
            file: file.to_string(),
            line,
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Error,
    Warning,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Error => f.write_str("error"),
            Kind::Warning => f.write_str("warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diag {
    pub kind: Kind,
    pub pos: Pos,
    pub msg: String,
}

impl fmt::Display for Diag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.pos, self.kind, self.msg)
    }
}

impl Diag {
    pub fn cformat(&self) -> String {
        match self.kind {
            Kind::Error => cformat!("<bold>{}:</> <red,bold>error</>: {}", self.pos, self.msg),
            Kind::Warning => {
                cformat!("<bold>{}:</> <yellow,bold>warning</>: {}", self.pos, self.msg)
            }
        }
    }
}

/// Sink for every error and warning of one assembly.
///
/// Each diagnostic is written to stderr as `file:line: kind: message`
/// the moment it is emitted, and kept for later inspection.
#[derive(Debug, Default)]
pub struct Diagnostics {
    emitted: Vec<Diag>,
    quiet: bool,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics::default()
    }

    /// Records without printing.
    pub fn quiet() -> Self {
        Diagnostics {
            emitted: vec![],
            quiet: true,
        }
    }

    pub fn emit(&mut self, kind: Kind, pos: &Pos, msg: impl Into<String>) {
        let diag = Diag {
            kind,
            pos: pos.clone(),
            msg: msg.into(),
        };
        if !self.quiet {
            let stderr = std::io::stderr();
            let text = if stderr.is_terminal() {
                diag.cformat()
            } else {
                diag.to_string()
            };
            let _ = writeln!(stderr.lock(), "{}", text);
        }
        self.emitted.push(diag);
    }

    pub fn error(&mut self, pos: &Pos, msg: impl Into<String>) {
        self.emit(Kind::Error, pos, msg)
    }

    pub fn warn(&mut self, pos: &Pos, msg: impl Into<String>) {
        self.emit(Kind::Warning, pos, msg)
    }

    pub fn all(&self) -> &[Diag] {
        &self.emitted
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diag> {
        self.emitted.iter().filter(|d| d.kind == Kind::Warning)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diag> {
        self.emitted.iter().filter(|d| d.kind == Kind::Error)
    }

    pub fn has_error(&self) -> bool {
        self.errors().next().is_some()
    }
}
