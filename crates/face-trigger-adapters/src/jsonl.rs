//! JSON Lines adapter for recorded snapshot streams.
//!
//! Each non-blank line holds one frame as a flat object mapping signal names
//! to intensities, e.g. `{"eyeBlinkLeft": 0.93, "eyeBlinkRight": 0.88}`.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use face_trigger_core::{SignalSnapshot, SnapshotSource};
use tracing::{debug, warn};

/// Path argument that selects standard input.
pub const STDIN_PATH: &str = "-";

enum Input {
    Path(PathBuf),
    Reader {
        label: String,
        reader: Box<dyn BufRead + Send>,
    },
}

/// JSON Lines snapshot source adapter.
pub struct JsonlSnapshotSource {
    inputs: Vec<Input>,
}

impl JsonlSnapshotSource {
    /// Creates a source reading the given files in order.
    ///
    /// A path of `-` reads standard input.
    #[must_use]
    pub fn new(paths: Vec<PathBuf>) -> Self {
        let inputs = paths
            .into_iter()
            .map(|path| {
                if path.as_os_str() == STDIN_PATH {
                    Input::Reader {
                        label: "<stdin>".into(),
                        reader: Box::new(BufReader::new(io::stdin())),
                    }
                } else {
                    Input::Path(path)
                }
            })
            .collect();
        Self { inputs }
    }

    /// Creates a source reading standard input.
    #[must_use]
    pub fn stdin() -> Self {
        Self::new(vec![PathBuf::from(STDIN_PATH)])
    }

    /// Creates a source reading from any buffered reader.
    #[must_use]
    pub fn from_reader(label: impl Into<String>, reader: Box<dyn BufRead + Send>) -> Self {
        Self {
            inputs: vec![Input::Reader {
                label: label.into(),
                reader,
            }],
        }
    }
}

impl SnapshotSource for JsonlSnapshotSource {
    fn snapshots(&mut self) -> Box<dyn Iterator<Item = Result<SignalSnapshot>> + '_> {
        Box::new(self.inputs.iter_mut().flat_map(read_input))
    }
}

/// Yields the frames of one input, or a single error if it cannot be opened.
fn read_input(input: &mut Input) -> Box<dyn Iterator<Item = Result<SignalSnapshot>> + '_> {
    match input {
        Input::Path(path) => match File::open(&*path) {
            Ok(file) => {
                debug!("Reading snapshots from {}", path.display());
                let label = path.display().to_string();
                Box::new(parse_lines(label, BufReader::new(file)))
            }
            Err(e) => {
                warn!("Cannot open {}: {e}", path.display());
                let err = anyhow::Error::new(e)
                    .context(format!("Failed to open snapshot file: {}", path.display()));
                Box::new(std::iter::once(Err(err)))
            }
        },
        Input::Reader { label, reader } => Box::new(parse_lines(label.clone(), reader.as_mut())),
    }
}

/// Parses frames line by line, skipping blank lines.
fn parse_lines<R: BufRead>(
    label: String,
    reader: R,
) -> impl Iterator<Item = Result<SignalSnapshot>> {
    reader
        .lines()
        .enumerate()
        .filter_map(move |(index, line)| {
            let line_no = index + 1;
            match line {
                Ok(line) if line.trim().is_empty() => None,
                Ok(line) => Some(
                    parse_snapshot(&line).with_context(|| format!("{label}:{line_no}")),
                ),
                Err(e) => Some(Err(
                    anyhow::Error::new(e).context(format!("{label}:{line_no}"))
                )),
            }
        })
}

/// Parses one frame.
///
/// # Errors
///
/// Returns an error if the line is not a JSON object of known signal names
/// to numbers.
pub fn parse_snapshot(line: &str) -> Result<SignalSnapshot> {
    serde_json::from_str(line.trim()).context("Invalid snapshot")
}

/// Returns true if `path` names standard input.
#[must_use]
pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}
