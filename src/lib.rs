#![doc = include_str!("../README.md")]

pub mod cli;
pub mod command;
pub mod detect;
pub mod error;
pub mod icons;
pub mod layout;
pub mod relocate;
pub mod rewrite;
pub mod templates;
pub mod verify;

pub use detect::{DetectedIdentifiers, Detector, detect_identifiers};
pub use error::*;
pub use icons::{ensure_manifest_icons, generate_icons};
pub use relocate::{fix_package_declarations, relocate_namespace};
pub use rewrite::{IdentifierPair, rewrite_archive, rewrite_archive_auto};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run() -> Result<()> {
    use clap::Parser;
    use command::Command;

    let cli = cli::Cli::parse();

    let env = env_logger::Env::default().default_filter_or(cli.log_filter());
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();

    match cli.command {
        Command::Generate(args) => command::generate::execute(args, &cli.templates_dir),
        Command::Detect(args) => command::detect::execute(args, &cli.templates_dir),
        Command::Templates(args) => command::templates::execute(args, &cli.templates_dir),
    }
}
