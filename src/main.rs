// SPDX-License-Identifier: MPL-2.0
use holocard::app::{self, paths, Flags};

const HELP: &str = "\
holocard - interactive 3D collectible card viewer

USAGE:
  holocard [OPTIONS] [CARD_DIR]

ARGS:
  <CARD_DIR>            Card bundle directory containing card.toml
                        (defaults to the built-in sample card)

OPTIONS:
      --lang <LANG>       UI language (e.g. en-US, fr)
      --config-dir <DIR>  Directory to read and write settings.toml in
  -h, --help              Print this help
";

fn main() -> iced::Result {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{}", HELP);
        return Ok(());
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or(None),
        card_dir: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    paths::init_cli_overrides(flags.config_dir.clone());

    log::info!("holocard v{} starting", env!("CARGO_PKG_VERSION"));
    app::run(flags)
}
