use clap::Parser;
use color_print::ceprintln;
use s16asm::{util, Config, Diagnostics};
use std::path::PathBuf;
use std::process::ExitCode;

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {author}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(author, version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file
    input: PathBuf,

    /// Output file [default: input with `.o` extension]
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// Create debug file (input with `.dbg` extension)
    #[clap(short = 'g')]
    debug: bool,

    /// Dump assembly listing
    #[clap(short, long)]
    dump: bool,

    /// Enable debug logging
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = Config::new(&args.input, args.output.as_deref(), args.debug).with_dump(args.dump);
    log::debug!("{:?}", config);

    let mut diags = Diagnostics::new();
    match s16asm::run(&config, &mut diags) {
        Ok(session) => {
            if config.dump {
                util::print_dump(&session);
            }
            ExitCode::SUCCESS
        }
        // already reported with its source position
        Err(_) if diags.has_error() => ExitCode::FAILURE,
        Err(e) => {
            ceprintln!("<red,bold>error</>: {}", e);
            ExitCode::FAILURE
        }
    }
}
