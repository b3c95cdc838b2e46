use std::path::{Path, PathBuf};

/// Resolved options for one assembly run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    /// Binary output. Defaults to the input with extension `.o`.
    pub output: PathBuf,
    /// Debug side-file, next to the input with extension `.dbg`.
    pub debug: Option<PathBuf>,
    pub dump: bool,
}

impl Config {
    pub fn new(input: &Path, output: Option<&Path>, debug: bool) -> Self {
        Config {
            input: input.to_path_buf(),
            output: match output {
                Some(path) => path.to_path_buf(),
                None => input.with_extension("o"),
            },
            debug: debug.then(|| input.with_extension("dbg")),
            dump: false,
        }
    }

    pub fn with_dump(mut self, dump: bool) -> Self {
        self.dump = dump;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths() {
        let config = Config::new(Path::new("src/prog.s"), None, false);
        assert_eq!(config.output, PathBuf::from("src/prog.o"));
        assert_eq!(config.debug, None);

        let config = Config::new(Path::new("prog"), None, true);
        assert_eq!(config.output, PathBuf::from("prog.o"));
        assert_eq!(config.debug, Some(PathBuf::from("prog.dbg")));
    }

    #[test]
    fn explicit_output() {
        let config = Config::new(Path::new("dir/prog.s"), Some(Path::new("out.bin")), true);
        assert_eq!(config.output, PathBuf::from("out.bin"));
        // debug file always sits next to the input
        assert_eq!(config.debug, Some(PathBuf::from("dir/prog.dbg")));
    }
}
