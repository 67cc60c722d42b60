// SPDX-License-Identifier: MPL-2.0
use tiksaver::app::{self, Flags};

fn main() -> iced::Result {
    if std::env::var("RUST_LOG").is_ok() {
        env_logger::init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        lang: read_option(&mut args, "--lang"),
        data_dir: read_option(&mut args, "--data-dir"),
        config_dir: read_option(&mut args, "--config-dir"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("Ignoring unexpected arguments: {remaining:?}");
    }

    app::run(flags)
}

fn read_option(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("Ignoring {key}: {err}");
            None
        }
    }
}
