// SPDX-License-Identifier: MPL-2.0
use art_space::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("art_space: {err}");
            std::process::exit(2);
        }
    };

    let unexpected = args.finish();
    if !unexpected.is_empty() {
        eprintln!("art_space: unexpected arguments: {unexpected:?}");
        std::process::exit(2);
    }

    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        log: args.opt_value_from_str("--log")?,
    })
}
