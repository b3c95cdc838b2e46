pub mod config;
pub mod diag;
pub mod emit;
pub mod error;
pub mod grammar;
pub mod ident;
pub mod program;
pub mod session;
pub mod util;

pub use config::Config;
pub use diag::{Diag, Diagnostics, Kind, Pos};
pub use error::{Error, Located};
pub use session::Session;

/// Assemble source text. `file` names the source in diagnostics and debug info.
///
/// The whole text is parsed before any statement runs, so a syntax error
/// is reported alone. Warnings are emitted through `diags` as they occur.
pub fn assemble(file: &str, code: &str, diags: &mut Diagnostics) -> Result<Session, Located> {
    let stmts = grammar::parse(file, code)?;
    let mut session = Session::new();
    session.run(&stmts, diags)?;
    Ok(session)
}

/// Assemble `config.input` and write the outputs.
///
/// Ingestion errors are emitted through `diags` and nothing is written.
pub fn run(config: &Config, diags: &mut Diagnostics) -> Result<Session, Error> {
    let path = &config.input;
    if !path.is_file() {
        return Err(Error::MissingInput(path.display().to_string()));
    }
    let code = std::fs::read_to_string(path)
        .map_err(|e| Error::FileRead(path.display().to_string(), e))?;

    let file = path.display().to_string();
    match assemble(&file, &code, diags) {
        Ok(session) => {
            emit::write(session.program(), config)?;
            Ok(session)
        }
        Err(Located { pos, error }) => {
            diags.error(&pos, error.to_string());
            Err(error)
        }
    }
}
