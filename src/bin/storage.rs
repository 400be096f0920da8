/// Storage CLI
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};

use storage::{load_item, remove_item, save_item, Result, SledStore};

// Fetch a positional argument
fn arg(matches: Option<&ArgMatches>, name: &str) -> Result<String> {
    matches
        .and_then(|m| m.value_of(name))
        .map(str::to_owned)
        .ok_or_else(|| format!("Missing argument: {}", name).into())
}

fn main() -> Result<()> {
    env_logger::init();

    let matches = App::new("storage")
        .setting(AppSettings::ArgRequiredElseHelp)
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about("Save, load and remove items in a persistent store")
        .arg(Arg::with_name("V").short("V").help("Print version info"))
        .arg(
            Arg::with_name("dir")
                .long("dir")
                .value_name("PATH")
                .takes_value(true)
                .help("Data directory (defaults to the current directory)"),
        )
        .subcommand(
            SubCommand::with_name("save")
                .about("Save a value under a key")
                .arg(Arg::with_name("key").required(true))
                .arg(Arg::with_name("value").required(true)),
        )
        .subcommand(
            SubCommand::with_name("load")
                .about("Load the value stored under a key")
                .arg(Arg::with_name("key").required(true)),
        )
        .subcommand(
            SubCommand::with_name("remove")
                .about("Remove a key")
                .arg(Arg::with_name("key").required(true)),
        )
        .get_matches();

    // If version was requested, print it and return
    if matches.is_present("V") {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let dir = match matches.value_of("dir") {
        Some(dir) => dir.into(),
        None => std::env::current_dir()?,
    };

    if !SledStore::is_present(&dir) {
        log::info!("No existing store in {}, creating one", dir.display());
    }

    let mut store = SledStore::open(&dir)?;

    match matches.subcommand() {
        ("save", sub_match) => {
            let key = arg(sub_match, "key")?;
            let value = arg(sub_match, "value")?;
            save_item(&mut store, key, value)?;
        }
        ("load", sub_match) => {
            let key = arg(sub_match, "key")?;
            match load_item(&mut store, key)? {
                None => println!("Key not found"),
                Some(value) => println!("{}", value),
            }
        }
        ("remove", sub_match) => {
            let key = arg(sub_match, "key")?;
            remove_item(&mut store, key)?;
        }
        (s, _) => {
            return Err(format!("Unexpected subcommand: \"{}\"", s).into());
        }
    }

    Ok(())
}
