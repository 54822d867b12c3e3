use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::{CoordinateSample, TrajectoryError};

const FIELDS_PER_RECORD: usize = 4;

/// Reads every sample from a headerless CSV file, in file order. An empty file is not an error
/// here; building a `Trajectory` from the result is what rejects it.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<CoordinateSample>, TrajectoryError> {
    let path = path.as_ref();
    let file = fs_err::File::open(path).map_err(|source| TrajectoryError::SourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let samples = load_from_reader(file)?;
    info!("Read {} samples from {}", samples.len(), path.display());
    Ok(samples)
}

pub fn load_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<CoordinateSample>, TrajectoryError> {
    // The csv reader skips blank lines, so catch them before it sees the input
    let mut contents = String::new();
    for (idx, line) in BufReader::new(reader).lines().enumerate() {
        let line_number = idx as u64 + 1;
        let line = line.map_err(|err| TrajectoryError::malformed(line_number, err.to_string()))?;
        if line.trim().is_empty() {
            return Err(TrajectoryError::malformed(line_number, "blank line"));
        }
        contents.push_str(&line);
        contents.push('\n');
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        // Count fields ourselves, so the error can say which line is short
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(contents.as_bytes());

    let mut samples = Vec::new();
    for (idx, rec) in reader.records().enumerate() {
        let rec = rec.map_err(|err| {
            let line = err
                .position()
                .map(|pos| pos.line())
                .unwrap_or(idx as u64 + 1);
            TrajectoryError::malformed(line, err.to_string())
        })?;
        let line = rec
            .position()
            .map(|pos| pos.line())
            .unwrap_or(idx as u64 + 1);

        if rec.len() != FIELDS_PER_RECORD {
            return Err(TrajectoryError::malformed(
                line,
                format!(
                    "expected {} fields, found {}",
                    FIELDS_PER_RECORD,
                    rec.len()
                ),
            ));
        }
        let sample: CoordinateSample = rec
            .deserialize(None)
            .map_err(|err| TrajectoryError::malformed(line, err.to_string()))?;
        if !sample.is_finite() {
            return Err(TrajectoryError::malformed(line, "non-finite coordinate"));
        }
        samples.push(sample);
    }
    Ok(samples)
}
