// SPDX-License-Identifier: MPL-2.0
use iced_album::app::{self, Flags};
use std::path::PathBuf;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        image_paths: args
            .finish()
            .into_iter()
            .map(PathBuf::from)
            .collect(),
    };

    app::run(flags)
}
