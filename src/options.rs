use std::str::FromStr;
use std::time::Duration;

use yagol::FillMode;

const USAGE: &str = "usage: yagol [options]";

/// Why the program should stop before running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgsExit {
    /// `--help` was printed
    Help,
    /// Arguments were rejected and usage was printed to stderr
    Invalid,
}

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    fn options() -> getopts::Options {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("c", "console", "run in console mode");
        opts.optopt("w", "width", "set grid width", "WIDTH");
        opts.optopt("h", "height", "set grid height", "HEIGHT");
        opts.optopt(
            "f",
            "fill",
            "set fill type (random, alternating, all, empty)",
            "TYPE",
        );
        opts.optopt("d", "density", "live probability for random fill", "P");
        opts.optopt("", "seed", "seed the random fill for a repeatable run", "SEED");
        opts.optopt(
            "s",
            "sleep",
            "the amount of time to sleep between generations",
            "MILLIS",
        );
        opts.optopt("g", "gens", "max number of generations", "COUNT");
        opts.optopt("", "stats", "write stats csv to file", "FILE");
        opts
    }

    fn new<T: AsRef<str>>(args: &[T]) -> Result<Self, ArgsExit> {
        let opts = Self::options();
        let invalid = |e: &dyn std::fmt::Display| {
            eprintln!("{e}");
            eprintln!("{}", opts.usage(USAGE));
            ArgsExit::Invalid
        };
        let matches = opts
            .parse(args.iter().map(T::as_ref))
            .map_err(|e| invalid(&e))?;
        if matches.opt_present("help") {
            println!("{}", opts.usage(USAGE));
            return Err(ArgsExit::Help);
        }

        let args = Self { matches };
        // surface malformed values now rather than halfway through a run
        args.validate().map_err(|e| invalid(&e))?;
        Ok(args)
    }
    pub fn from_env() -> Result<Self, ArgsExit> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    fn validate(&self) -> Result<(), String> {
        self.get::<usize>("width")?;
        self.get::<usize>("height")?;
        self.get::<u64>("seed")?;
        self.get::<u64>("sleep")?;
        self.get::<u64>("gens")?;
        self.get::<f64>("density")?;
        self.try_fill_mode().map(|_| ())
    }

    fn get<T: FromStr>(&self, name: &str) -> Result<Option<T>, String> {
        self.matches
            .opt_get(name)
            .map_err(|_| format!("invalid value for --{name}"))
    }

    fn width(&self) -> Option<usize> {
        self.get("width").ok().flatten()
    }
    fn height(&self) -> Option<usize> {
        self.get("height").ok().flatten()
    }

    pub fn console(&self) -> bool {
        self.matches.opt_present("console")
    }

    pub fn generations(&self) -> u64 {
        self.get("gens").ok().flatten().unwrap_or(u64::MAX) // kinda hacky way of saying "infinity"
    }
    pub fn sleep(&self) -> Option<Duration> {
        match self.get("sleep").ok().flatten() {
            Some(millis) => Some(Duration::from_millis(millis)),
            None if self.console() => Some(Duration::from_millis(100)),
            None => None,
        }
    }
    pub fn seed(&self) -> Option<u64> {
        self.get("seed").ok().flatten()
    }

    /// The requested grid size, defaulting to the terminal in console mode
    pub fn grid_size(&self) -> (usize, usize) {
        let default = if self.console() {
            crossterm::terminal::size()
                .map(|(cols, rows)| console_grid_size(cols, rows))
                .unwrap_or((500, 500))
        } else {
            (500, 500)
        };

        (
            self.width().unwrap_or(default.0),
            self.height().unwrap_or(default.1),
        )
    }

    fn try_fill_mode(&self) -> Result<FillMode, String> {
        let density = self.get("density")?.unwrap_or(FillMode::DEFAULT_DENSITY);
        let name = self.matches.opt_str("fill");
        let name = name.as_deref().unwrap_or("random");
        FillMode::new(name, density)
            .ok_or_else(|| format!("invalid fill mode {name:?} (density {density})"))
    }
    pub fn fill_mode(&self) -> FillMode {
        self.try_fill_mode().unwrap_or(FillMode::Random {
            density: FillMode::DEFAULT_DENSITY,
        })
    }

    pub fn stats_file(&self) -> Option<String> {
        self.matches.opt_str("stats")
    }
}

/// Grid size that fills a terminal, leaving the last row for the report footer
pub fn console_grid_size(cols: u16, rows: u16) -> (usize, usize) {
    (cols as usize, rows.saturating_sub(1) as usize)
}
