use std::{path::PathBuf, time::Duration};

use clap::{ArgAction, Parser, ValueEnum};
use grid_snake::GridConfig;
use simplelog::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "grid-snake", version, about = "Classic Snake on a fixed grid, in the terminal")]
pub struct Options {
    /// Screen and tile size the grid is cut from
    #[arg(long, value_enum, default_value_t = Preset::Compact)]
    pub preset: Preset,

    /// Override the preset's tile size
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub tile_size: Option<u32>,

    /// Frames per second of the game loop
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: u32,

    /// Fixed seed for food placement
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value = "grid-snake.log")]
    pub log_file: PathBuf,

    /// More log output, repeat for more
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// 320x240 at tile 5
    Classic,
    /// 160x120 at tile 3
    Compact,
}

impl Options {
    pub fn grid_config(&self) -> GridConfig {
        let base = match self.preset {
            Preset::Classic => GridConfig::CLASSIC,
            Preset::Compact => GridConfig::COMPACT,
        };

        match self.tile_size {
            Some(tile_size) => GridConfig { tile_size, ..base },
            None => base,
        }
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Options {
        Options::try_parse_from(std::iter::once("grid-snake").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_to_compact_at_sixty_fps() {
        let options = parse(&[]);
        assert_eq!(options.grid_config(), GridConfig::COMPACT);
        assert_eq!(options.frame_interval(), Duration::from_secs(1) / 60);
        assert_eq!(options.log_level(), LevelFilter::Info);
        assert_eq!(options.seed, None);
    }

    #[test]
    fn tile_size_overrides_preset() {
        let options = parse(&["--preset", "classic", "--tile-size", "10"]);
        let config = options.grid_config();
        assert_eq!(config.screen_width, 320);
        assert_eq!(config.tile_size, 10);
        assert_eq!(config.grid().columns(), 32);
    }

    #[test]
    fn rejects_zero_tile_and_fps() {
        let argv = |extra: &[&str]| -> Vec<String> {
            std::iter::once("grid-snake").chain(extra.iter().copied()).map(String::from).collect()
        };
        assert!(Options::try_parse_from(argv(&["--tile-size", "0"])).is_err());
        assert!(Options::try_parse_from(argv(&["--fps", "0"])).is_err());
    }

    #[test]
    fn verbosity_raises_log_level() {
        assert_eq!(parse(&["-v"]).log_level(), LevelFilter::Debug);
        assert_eq!(parse(&["-vvv"]).log_level(), LevelFilter::Trace);
        assert_eq!(parse(&["--seed", "9"]).seed, Some(9));
    }
}
