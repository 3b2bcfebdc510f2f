use std::io::{self, Write};
use std::path::Path;
use std::time::{Duration, Instant};

const REPORT_INTERVAL: Duration = Duration::from_millis(500);

/// The state of the board right after a generation was computed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub generation: u64,
    pub population: usize,
}

pub trait Recorder {
    fn record(&mut self, sample: Sample);

    fn has_report(&self) -> bool;
    fn report(&mut self) -> String;
}

/// Throughput since the previous report, measured in generations rather than calls
///
/// Generations advanced outside the main loop (single steps while paused)
/// still count because the sample carries the board's own counter.
pub struct RateRecorder {
    latest: Sample,
    reported_generation: u64,
    last_report: Instant,
}
impl RateRecorder {
    pub fn new(start: Sample) -> Self {
        Self {
            latest: start,
            reported_generation: start.generation,
            last_report: Instant::now(),
        }
    }
}
impl Recorder for RateRecorder {
    fn record(&mut self, sample: Sample) {
        self.latest = sample;
    }

    fn has_report(&self) -> bool {
        self.last_report.elapsed() >= REPORT_INTERVAL
    }
    fn report(&mut self) -> String {
        let elapsed = self.last_report.elapsed().as_secs_f64();
        let advanced = self.latest.generation.saturating_sub(self.reported_generation);
        let rate = if elapsed > 0.0 {
            advanced as f64 / elapsed
        } else {
            0.0
        };
        self.last_report = Instant::now();
        self.reported_generation = self.latest.generation;

        format!(
            "{:.02}gen/s gen:{} alive:{}",
            rate, self.latest.generation, self.latest.population
        )
    }
}

/// Keeps every sample with the wall time spent reaching it, for CSV export
pub struct HistoryRecorder {
    rate: RateRecorder,
    rows: Vec<(Sample, Duration)>,
    last: Instant,
}
impl HistoryRecorder {
    pub fn new(start: Sample) -> Self {
        Self {
            rate: RateRecorder::new(start),
            rows: Vec::new(),
            last: Instant::now(),
        }
    }

    pub fn write_csv<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "generation,delta_us,population")?;
        for (sample, delta) in &self.rows {
            writeln!(
                out,
                "{},{},{}",
                sample.generation,
                delta.as_micros(),
                sample.population
            )?;
        }
        out.flush()
    }
}
impl Recorder for HistoryRecorder {
    fn record(&mut self, sample: Sample) {
        let now = Instant::now();
        self.rows.push((sample, now - self.last));
        self.last = now;
        self.rate.record(sample);
    }

    fn has_report(&self) -> bool {
        self.rate.has_report()
    }
    fn report(&mut self) -> String {
        self.rate.report()
    }
}

/// Picks the recorder once at startup from whether a stats file was requested
pub enum StatsRecorder {
    Rate(RateRecorder),
    History(HistoryRecorder),
}
impl StatsRecorder {
    pub fn new(start: Sample, keep_history: bool) -> Self {
        if keep_history {
            Self::History(HistoryRecorder::new(start))
        } else {
            Self::Rate(RateRecorder::new(start))
        }
    }

    /// Writes the CSV history, returning `false` when none was kept
    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<bool> {
        let Self::History(history) = self else {
            return Ok(false);
        };
        let file = std::fs::File::create(path)?;
        history.write_csv(io::BufWriter::new(file))?;
        Ok(true)
    }

    fn inner(&mut self) -> &mut dyn Recorder {
        match self {
            Self::Rate(r) => r,
            Self::History(r) => r,
        }
    }
}
impl Recorder for StatsRecorder {
    fn record(&mut self, sample: Sample) {
        self.inner().record(sample)
    }
    fn has_report(&self) -> bool {
        match self {
            Self::Rate(r) => r.has_report(),
            Self::History(r) => r.has_report(),
        }
    }
    fn report(&mut self) -> String {
        self.inner().report()
    }
}
