use std::{error::Error, io, thread};

use rand::{SeedableRng, rngs::StdRng};
use yagol::{FillError, FillMode, Grid};

mod console;
mod options;
mod stats;

use console::{ConsoleCommand, ConsoleRender};
use options::ArgsExit;
use stats::{Recorder, Sample};

fn to_io<E: Error + Send + Sync + 'static>(e: E) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, e)
}

/// A deterministic generator when seeded, OS entropy otherwise
fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

struct Session {
    grid: Grid,
    fill: FillMode,
    rng: StdRng,
    paused: bool,
    /// Shown in the console footer until the next command replaces it
    notice: Option<String>,
}
impl Session {
    fn refill(&mut self) -> Result<usize, FillError> {
        self.fill.apply(&mut self.grid, &mut self.rng)
    }

    fn sample(&self) -> Sample {
        Sample {
            generation: self.grid.generation(),
            population: self.grid.population(),
        }
    }

    /// Applies a console command, returning `false` when the run should stop
    fn handle(&mut self, cmd: ConsoleCommand) -> io::Result<bool> {
        match cmd {
            ConsoleCommand::Exit => return Ok(false),
            ConsoleCommand::TogglePause => self.paused = !self.paused,
            ConsoleCommand::Step => {
                if self.paused {
                    self.grid.iterate();
                }
            }
            ConsoleCommand::ClearAll => self.grid.clear_all(),
            ConsoleCommand::Randomize => {
                self.refill().map_err(to_io)?;
            }
            ConsoleCommand::Paint { pos, alive } => {
                if alive {
                    self.grid.set_wrapped(pos);
                } else {
                    self.grid.clear_wrapped(pos);
                }
            }
            ConsoleCommand::Resize { cols, rows } => {
                let (w, h) = options::console_grid_size(cols, rows);
                match self.grid.resize(w, h) {
                    Ok(()) => {
                        self.notice = None;
                        self.refill().map_err(to_io)?;
                    }
                    // keep simulating the old board until the terminal is usable again
                    Err(e) => {
                        log::debug!("ignoring terminal resize: {}", e);
                        self.notice = Some(format!("resize ignored: {e}"));
                    }
                }
            }
            ConsoleCommand::Handled => {}
        }
        Ok(true)
    }
}

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match options::Args::from_env() {
        Ok(args) => args,
        Err(ArgsExit::Help) => return Ok(()),
        Err(ArgsExit::Invalid) => std::process::exit(2),
    };

    let (width, height) = args.grid_size();
    let mut session = Session {
        grid: Grid::new(width, height).map_err(to_io)?,
        fill: args.fill_mode(),
        rng: make_rng(args.seed()),
        paused: false,
        notice: None,
    };
    let alive = session.refill().map_err(to_io)?;
    log::info!("grid {}x{}, alive: {}", width, height, alive);

    let mut console = if args.console() {
        Some(ConsoleRender::new()?)
    } else {
        None
    };
    let sleep = args.sleep();
    let generations = args.generations();

    let stats_file = args.stats_file();
    let mut stats = stats::StatsRecorder::new(session.sample(), stats_file.is_some());
    let mut advanced = 0;
    'generations: while advanced < generations {
        // render the console if in console mode
        if let Some(ref mut console) = console {
            while let Some(cmd) = console.poll_events()? {
                if !session.handle(cmd)? {
                    break 'generations;
                }
            }
            console.set_paused(session.paused);
            console.set_notice(session.notice.clone());
            console.render(&session.grid)?;
        }

        // report metrics every 500ms
        if stats.has_report() {
            let report = stats.report();
            if let Some(ref mut console) = console {
                console.set_report(report);
            } else {
                log::info!("{}", report);
            }
        }

        // compute the next generation
        if !session.paused {
            session.grid.iterate();
            advanced += 1;
            stats.record(session.sample());
        }
        if let Some(time) = sleep {
            thread::sleep(time);
        }
    }
    std::mem::drop(console);

    log::info!(
        "finished after {} generations, alive: {}",
        session.grid.generation(),
        session.grid.population()
    );
    if let Some(file_name) = stats_file {
        if stats.save(&file_name)? {
            log::info!("wrote stats to {}", file_name);
        }
    }

    Ok(())
}
