use std::path::Path;

use crate::config::Config;
use crate::error::Error;
use crate::program::Program;

/// Encode every instruction, in program order.
pub fn encode_all(program: &Program) -> Vec<u16> {
    program.lines().iter().map(|line| line.inst.encode()).collect()
}

/// Serialize words big-endian, whatever the host byte order.
pub fn to_bytes(words: &[u16]) -> Vec<u8> {
    words.iter().flat_map(|word| word.to_be_bytes()).collect()
}

/// One `file:line` record per instruction. Line `i` describes word `i`.
pub fn debug_info(program: &Program) -> String {
    program
        .lines()
        .iter()
        .map(|line| format!("{}\n", line.pos))
        .collect()
}

/// Write the binary, and the debug file when one is configured.
///
/// Both outputs are built before anything is written. If the debug file
/// cannot be written, the binary is removed again.
pub fn write(program: &Program, config: &Config) -> Result<(), Error> {
    let bin = to_bytes(&encode_all(program));
    let debug = config.debug.as_ref().map(|path| (path, debug_info(program)));

    write_file(&config.output, &bin)?;
    log::info!("wrote {} words to {}", program.len(), config.output.display());

    if let Some((path, info)) = debug {
        if let Err(e) = write_file(path, info.as_bytes()) {
            if let Err(rm) = std::fs::remove_file(&config.output) {
                log::warn!("cannot remove {}: {}", config.output.display(), rm);
            }
            return Err(e);
        }
        log::info!("wrote debug info to {}", path.display());
    }
    Ok(())
}

fn write_file(path: &Path, data: &[u8]) -> Result<(), Error> {
    std::fs::write(path, data).map_err(|e| Error::FileWrite(path.display().to_string(), e))
}
