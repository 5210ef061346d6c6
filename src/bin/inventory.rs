/// Inventory CLI
use std::io;
use std::path::PathBuf;

use clap::{App, Arg};
use inventory::{JsonStore, Menu, Result};

fn main() -> Result<()> {
    env_logger::init();

    let matches = App::new("inventory")
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about("Interactive shop inventory")
        .arg(
            Arg::with_name("dir")
                .long("dir")
                .value_name("DIR")
                .takes_value(true)
                .help("Directory holding the inventory files (default: current directory)"),
        )
        .arg(
            Arg::with_name("strict")
                .long("strict")
                .help("Abort on invalid numeric input instead of asking again"),
        )
        .get_matches();

    // `-V`/`--version` and `-h`/`--help` are handled by clap
    let dir = match matches.value_of("dir") {
        Some(dir) => PathBuf::from(dir),
        None => std::env::current_dir()?,
    };

    if !JsonStore::is_data_present(&dir) {
        log::info!("No inventory found in {}, starting a new one", dir.display());
    }

    let store = JsonStore::open(dir)?;

    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut menu = Menu::new(store, stdin.lock(), stdout.lock()).strict(matches.is_present("strict"));
    menu.run()?;

    Ok(())
}
