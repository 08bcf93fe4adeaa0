use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::debug;

use arsplit::config::{Config, ConfigError};
use arsplit::error::SplitError;
use arsplit::exit_codes;
use arsplit::logging;
use arsplit::pipeline::{split, SplitRequest};
use arsplit::tools::{Archiver, BitcodeLinker};

/// Split a static archive into a linked bitcode module and an archive of
/// native members.
#[derive(Debug, Parser)]
#[command(name = "arsplit", version, about)]
struct Cli {
    /// Source archive to split.
    #[arg(long)]
    archive: PathBuf,

    /// Output path for the merged bitcode module.
    #[arg(long = "out-bc")]
    out_bc: PathBuf,

    /// Output path for the native-member archive.
    #[arg(long = "out-native")]
    out_native: PathBuf,

    /// Archive tool (llvm-ar or compatible). Falls back to `tools.ar`
    /// from the config file.
    #[arg(long = "llvm-ar")]
    llvm_ar: Option<PathBuf>,

    /// Bitcode link tool (llvm-link or compatible). Falls back to
    /// `tools.link` from the config file.
    #[arg(long = "llvm-link")]
    llvm_link: Option<PathBuf>,

    /// Working directory for extracted members. Supplying one transfers
    /// ownership: the directory is created if needed but never removed.
    #[arg(long)]
    workdir: Option<PathBuf>,

    /// Config file override.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    logging::init_tracing();
    let cli = Cli::parse();

    let code = match run(cli) {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    };
    process::exit(code);
}

fn run(cli: Cli) -> Result<(), SplitError> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let ar = resolve_tool(cli.llvm_ar, config.tools.ar, "--llvm-ar", "tools.ar")?;
    let link = resolve_tool(cli.llvm_link, config.tools.link, "--llvm-link", "tools.link")?;
    debug!(
        "using archive tool '{}' and link tool '{}'",
        ar.display(),
        link.display()
    );

    let request = SplitRequest {
        archive: cli.archive,
        out_bitcode: cli.out_bc,
        out_native: cli.out_native,
        workdir: cli.workdir,
    };
    split(&request, &Archiver::new(ar), &BitcodeLinker::new(link))?;
    Ok(())
}

/// Pick a tool path from the CLI flag, then the config file.
fn resolve_tool(
    flag_value: Option<PathBuf>,
    config_value: Option<PathBuf>,
    flag: &str,
    key: &str,
) -> Result<PathBuf, SplitError> {
    flag_value.or(config_value).ok_or_else(|| {
        SplitError::Config(ConfigError::ValidationError {
            message: format!("no tool path given; pass {flag} or set {key} in the config file"),
        })
    })
}
