use crate::aggregation::Estimate;
use crate::utils::math::int_pow;
use std::fs::File;
use std::io::{BufWriter, Error, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceFormat {
    Csv,
    Tsv,
    Json,
}

/// Which fold counts a [`ConvergenceTrace`] keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportSchedule {
    /// Every `k`-th fold; `0` behaves like `1`.
    Every(u64),
    /// Folds `1, b, b^2, ...`; bases below 2 behave like 2.
    Geometric(u64),
}

impl ReportSchedule {
    pub fn is_due(&self, count: u64) -> bool {
        if count == 0 {
            return false;
        }
        match *self {
            Self::Every(k) => count % k.max(1) == 0,
            Self::Geometric(base) => {
                let base = base.max(2);
                (0u32..)
                    .map_while(|exp| int_pow(base, exp))
                    .take_while(|&p| p <= count)
                    .any(|p| p == count)
            }
        }
    }
}

impl Default for ReportSchedule {
    fn default() -> Self {
        Self::Every(1)
    }
}

/// Ordered record of estimates taken while a stream converges.
pub struct ConvergenceTrace {
    schedule: ReportSchedule,
    entries: Vec<Estimate>,
}

impl ConvergenceTrace {
    pub fn new(schedule: ReportSchedule) -> Self {
        Self {
            schedule,
            entries: vec![],
        }
    }

    pub fn push(&mut self, estimate: Estimate) {
        self.entries.push(estimate)
    }

    /// Keeps `estimate` only if the schedule asks for its fold count.
    pub fn record(&mut self, estimate: Estimate) -> bool {
        let due = self.schedule.is_due(estimate.count);
        if due {
            self.push(estimate);
        }
        due
    }

    /// Appends the final estimate unless it is already the latest entry.
    pub fn finish(&mut self, estimate: Estimate) {
        if self.latest().map(|e| e.count) != Some(estimate.count) {
            self.push(estimate);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<Estimate> {
        self.entries.last().copied()
    }

    pub fn entries(&self) -> &[Estimate] {
        &self.entries
    }

    pub fn export<P: AsRef<Path>>(&self, path: P, fmt: TraceFormat) -> Result<(), Error> {
        match fmt {
            TraceFormat::Csv => self.export_with_delimiter(path, ','),
            TraceFormat::Tsv => self.export_with_delimiter(path, '\t'),
            TraceFormat::Json => self.export_json(path),
        }
    }

    fn export_with_delimiter<P: AsRef<Path>>(&self, path: P, delimiter: char) -> Result<(), Error> {
        let mut w = BufWriter::new(File::create(path)?);
        writeln!(w, "count{d}mean{d}epsilon{d}confidence", d = delimiter)?;
        for e in &self.entries {
            writeln!(
                w,
                "{}{d}{:.12}{d}{:.12}{d}{}",
                e.count,
                e.mean,
                e.epsilon,
                e.confidence,
                d = delimiter
            )?;
        }
        w.flush()
    }

    fn export_json<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let mut w = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut w, &self.entries)?;
        writeln!(w)?;
        w.flush()
    }
}

impl Default for ConvergenceTrace {
    fn default() -> Self {
        Self::new(ReportSchedule::default())
    }
}
