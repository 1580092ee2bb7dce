//! Loading the raw page-view series

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::{Error, Result};

/// One day of page views
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Observation {
    pub date: NaiveDate,
    pub value: f64,
}

#[derive(Deserialize)]
struct Row {
    date: NaiveDate,
    value: f64,
}

/// The unfiltered series, in source order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    observations: Vec<Observation>,
}

impl Dataset {
    /// Reads a CSV file with (at least) a `date` and a `value` column
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Dataset> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|inner| Error::Io {
            path: Some(path.to_owned()),
            source: inner,
        })?;

        let dataset = Dataset::from_reader(file).map_err(|e| match e {
            Error::Io { path: None, source } => Error::Io {
                path: Some(path.to_owned()),
                source,
            },
            e => e,
        })?;
        info!("Loaded {} observations from {:?}", dataset.len(), path);
        Ok(dataset)
    }

    /// Builds a dataset from observations that didn't come from a CSV file
    ///
    /// # Errors
    ///
    /// Returns `Error::MalformedInput` if any value is negative or not finite
    pub fn new(observations: Vec<Observation>) -> Result<Dataset> {
        for observation in &observations {
            check_count(None, observation)?;
        }

        Ok(Dataset { observations })
    }

    /// Reads CSV data with a header row from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Dataset> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = reader.headers()?.clone();
        let mut record = csv::StringRecord::new();
        let mut observations = vec![];

        while reader.read_record(&mut record)? {
            let line = record.position().map(|pos| pos.line());
            let row: Row = record
                .deserialize(Some(&headers))
                .map_err(|e| Error::malformed(line, e.to_string()))?;

            let observation = Observation {
                date: row.date,
                value: row.value,
            };
            check_count(line, &observation)?;
            observations.push(observation);
        }

        Ok(Dataset { observations })
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn values(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.value).collect()
    }
}

fn check_count(line: Option<u64>, observation: &Observation) -> Result<()> {
    if observation.value.is_finite() && observation.value >= 0. {
        Ok(())
    } else {
        Err(Error::malformed(
            line,
            format!(
                "value {} on {} is not a page-view count",
                observation.value, observation.date
            ),
        ))
    }
}
