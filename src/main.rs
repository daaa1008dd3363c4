//! Terminal user interface for tracking candidate rental homes during a
//! house hunt: add listings with their rent terms, browse them as cards,
//! and run a fixed inspection checklist per visit.

mod app;
mod camera;
mod config;
mod error;
mod events;
mod model;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use clap::{App as ClapApp, Arg};
use config::Config;

fn main() -> Result<()> {
    let matches = ClapApp::new("homescout")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A terminal user interface for tracking candidate rental homes")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Use a custom configuration directory")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;

    App::start(config)
}
