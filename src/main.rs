// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use logger::*;
use setplot::Config;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    let config = Config::new().unwrap_or_else(|e| {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    });

    Logger::new()
        .label("setplot")
        .level(config.logging().into())
        .init()
        .expect("Failed to initialize logger");

    info!("setplot {} initializing...", VERSION);

    config.print();

    match setplot::run(&config) {
        Ok(written) => {
            for path in written {
                println!("{}", path.display());
            }
        }
        Err(e) => {
            fatal!("{}", e);
        }
    }
}
