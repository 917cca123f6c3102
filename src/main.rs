use anyhow::Result;
use clap::{crate_authors, crate_description, crate_name, crate_version, App as Cli, Arg};
use log::LevelFilter;
use portfolio_tui::{
    app::App,
    config::{Config, ConfigError},
};

fn main() -> Result<()> {
    let matches = Cli::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Sets a custom configuration directory")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("theme")
                .short("t")
                .long("theme")
                .value_name("NAME")
                .help("Overrides the configured colour theme")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("init-config")
                .long("init-config")
                .help("Writes the current configuration file and exits"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Increases log verbosity (-v debug, -vv trace)"),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    if let Some(theme_name) = matches.value_of("theme") {
        config.theme_name = theme_name.to_string();
    }

    if matches.is_present("init-config") {
        config.theme()?;
        config.save()?;
        let path = config.file_path().ok_or(ConfigError::FilePathNotSet)?;
        println!("Wrote configuration to {}", path.display());
        return Ok(());
    }

    let level = match matches.occurrences_of("verbose") {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    App::start(config, level)
}
