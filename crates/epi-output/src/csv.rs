//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `epidemic.csv`: tick, one column per status, one per severity
//! - `economy.csv`: tick, Q1..Q5

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{EconomyRow, EpidemicRow, OutputResult};

/// Writes statistics snapshots to two CSV files.
pub struct CsvWriter {
    epidemic: Writer<File>,
    economy:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (or truncate) both files, and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut epidemic = Writer::from_path(dir.join("epidemic.csv"))?;
        epidemic.write_record(EpidemicRow::header())?;

        let mut economy = Writer::from_path(dir.join("economy.csv"))?;
        economy.write_record(EconomyRow::header())?;

        Ok(Self { epidemic, economy, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_epidemic(&mut self, row: &EpidemicRow) -> OutputResult<()> {
        let record = std::iter::once(row.tick.to_string())
            .chain(row.status.iter().map(f64::to_string))
            .chain(row.severity.iter().map(f64::to_string));
        self.epidemic.write_record(record)?;
        Ok(())
    }

    fn write_economy(&mut self, row: &EconomyRow) -> OutputResult<()> {
        let record = std::iter::once(row.tick.to_string())
            .chain(row.wealth.iter().map(f64::to_string));
        self.economy.write_record(record)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.epidemic.flush()?;
        self.economy.flush()?;
        Ok(())
    }
}
