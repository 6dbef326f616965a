mod options;
mod runner;
mod term;

use std::{fs::File, io};

use clap::Parser;
use log::{error, info};
use simplelog::{Config, WriteLogger};

use crate::options::Options;
use crate::runner::Runner;

pub type TermInt = u16;
pub type Coords = (u16, u16);

fn main() -> crossterm::Result<()> {
    let options = Options::parse();

    // The terminal belongs to the game, so logs go to a file
    WriteLogger::init(options.log_level(), Config::default(), File::create(&options.log_file)?)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    let config = options.grid_config();
    config.validate().map_err(|msg| io::Error::new(io::ErrorKind::InvalidInput, msg))?;
    info!("Starting with {:?} ({}x{} cells)", config, config.grid().columns(), config.grid().rows());

    let result = Runner::new(config.grid(), options.seed, options.frame_interval())
        .and_then(|mut runner| runner.run());

    if let Err(e) = &result {
        error!("{}", e);
    }
    result
}
