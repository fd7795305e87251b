use std::{
    io::{self, Write},
    time::{Duration, Instant},
};

/// Split timer for the per-run diagnostics file: each named split records
/// the time elapsed since the previous one.
pub struct Stopwatch {
    name: String,
    start_total: Instant,
    start_split: Instant,
    splits: Vec<(String, Duration)>,
}

impl Stopwatch {
    pub fn new(name: &str) -> Stopwatch {
        let now = Instant::now();
        Stopwatch {
            name: name.to_owned(),
            start_total: now,
            start_split: now,
            splits: Vec::new(),
        }
    }

    pub fn record_split(&mut self, name: &str) -> Duration {
        let duration = self.start_split.elapsed();
        self.start_split = Instant::now();
        self.splits.push((name.to_owned(), duration));
        duration
    }

    pub fn display<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(
            writer,
            "Stopwatch: {};  Total elapsed duration: {:?}",
            self.name,
            self.start_total.elapsed()
        )?;
        for (name, duration) in self.splits.iter() {
            writeln!(writer, "  {}: {:?}", name, duration)?;
        }
        Ok(())
    }
}
