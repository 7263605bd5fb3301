// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tribute_gallery::app::{self, Flags};

const HELP: &str = "\
Usage: tribute_gallery [OPTIONS] [MANIFEST]

Arguments:
  [MANIFEST]            Gallery manifest (TOML); defaults to the bundled one

Options:
  --lang <ID>           UI language (e.g. en-US, es)
  --config-dir <DIR>    Directory holding settings.toml
  -h, --help            Print help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring --lang");
        None
    });
    let config_dir = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring --config-dir");
        None
    });
    let manifest = args.finish().into_iter().next().map(PathBuf::from);

    app::run(Flags {
        manifest,
        lang,
        config_dir,
    })
}
