//! Replay command - run recorded snapshots through the evaluators.

use std::path::PathBuf;

use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::{Args, ValueEnum};
use face_trigger_adapters::{EventRecorder, JsonlSnapshotSource};
use face_trigger_core::{FaceTrigger, SnapshotSource, TriggerConfig, TriggerEvent};
use tracing::{debug, info, warn};

use super::ExitCode;
use crate::config::AppConfig;
use crate::output::EventOutput;

/// Output format for events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON Lines (one JSON object per line)
    #[default]
    Jsonl,
    /// Single JSON array
    Json,
}

/// Parse and validate a threshold value (0.0-1.0).
fn parse_threshold(s: &str) -> Result<f32, String> {
    let value: f32 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{value} is not in 0.0..=1.0"))
    }
}

/// Evaluator selection and threshold overrides.
#[derive(Args, Clone, Debug, Default)]
pub struct TriggerArgs {
    /// Smile threshold (0.0-1.0)
    #[arg(long, value_parser = parse_threshold)]
    pub smile_threshold: Option<f32>,

    /// Blink threshold (0.0-1.0)
    #[arg(long, value_parser = parse_threshold)]
    pub blink_threshold: Option<f32>,

    /// Lowered-brow threshold (0.0-1.0)
    #[arg(long, value_parser = parse_threshold)]
    pub brow_down_threshold: Option<f32>,

    /// Raised-brow threshold (0.0-1.0)
    #[arg(long, value_parser = parse_threshold)]
    pub brow_up_threshold: Option<f32>,

    /// Squint threshold (0.0-1.0)
    #[arg(long, value_parser = parse_threshold)]
    pub squint_threshold: Option<f32>,

    /// Mouth pucker threshold (0.0-1.0)
    #[arg(long, value_parser = parse_threshold)]
    pub mouth_pucker_threshold: Option<f32>,

    /// Jaw-open threshold (0.0-1.0)
    #[arg(long, value_parser = parse_threshold)]
    pub jaw_open_threshold: Option<f32>,

    /// Jaw-left threshold (0.0-1.0)
    #[arg(long, value_parser = parse_threshold)]
    pub jaw_left_threshold: Option<f32>,

    /// Jaw-right threshold (0.0-1.0)
    #[arg(long, value_parser = parse_threshold)]
    pub jaw_right_threshold: Option<f32>,

    /// Disable an evaluator (repeatable)
    #[arg(
        long,
        value_name = "NAME",
        value_parser = PossibleValuesParser::new(TriggerConfig::EVALUATOR_NAMES)
    )]
    pub disable: Vec<String>,
}

impl TriggerArgs {
    /// Apply configuration file values, respecting CLI precedence.
    ///
    /// Thresholds: CLI > config > hardcoded default. An evaluator is
    /// disabled if either the CLI or the config disables it.
    #[must_use]
    pub fn with_config(mut self, config: &AppConfig) -> Self {
        for (name, slot) in TriggerConfig::EVALUATOR_NAMES
            .into_iter()
            .zip(self.thresholds_mut())
        {
            if let Some(section) = config.evaluator(name) {
                *slot = slot.or(section.threshold);
            }
        }

        for name in TriggerConfig::EVALUATOR_NAMES {
            let disabled_by_config =
                config.evaluator(name).and_then(|section| section.enabled) == Some(false);
            if disabled_by_config && !self.is_disabled(name) {
                debug!("{name} disabled by config");
                self.disable.push(name.to_string());
            }
        }

        self
    }

    /// Builds the evaluator configuration these arguments describe.
    #[must_use]
    pub fn trigger_config(&self) -> TriggerConfig {
        let mut config = TriggerConfig::default();

        for (name, threshold) in TriggerConfig::EVALUATOR_NAMES
            .into_iter()
            .zip(self.thresholds())
        {
            let Some(slot) = config.slot_mut(name) else {
                continue;
            };
            if self.is_disabled(name) {
                *slot = None;
            } else if threshold.is_some() {
                *slot = threshold;
            }
        }

        config
    }

    fn is_disabled(&self, name: &str) -> bool {
        self.disable.iter().any(|d| d == name)
    }

    /// Threshold overrides in evaluator construction order.
    const fn thresholds(&self) -> [Option<f32>; 9] {
        [
            self.smile_threshold,
            self.blink_threshold,
            self.brow_down_threshold,
            self.brow_up_threshold,
            self.squint_threshold,
            self.mouth_pucker_threshold,
            self.jaw_open_threshold,
            self.jaw_left_threshold,
            self.jaw_right_threshold,
        ]
    }

    fn thresholds_mut(&mut self) -> [&mut Option<f32>; 9] {
        [
            &mut self.smile_threshold,
            &mut self.blink_threshold,
            &mut self.brow_down_threshold,
            &mut self.brow_up_threshold,
            &mut self.squint_threshold,
            &mut self.mouth_pucker_threshold,
            &mut self.jaw_open_threshold,
            &mut self.jaw_left_threshold,
            &mut self.jaw_right_threshold,
        ]
    }
}

/// Shared arguments for snapshot replay.
#[derive(Args, Clone, Debug, Default)]
pub struct ReplayArgs {
    /// Snapshot files in JSON Lines format (`-` or none reads stdin)
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub trigger: TriggerArgs,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output (only affects --format json)
    #[arg(long)]
    pub pretty: bool,
}

impl ReplayArgs {
    /// Apply configuration file values, respecting CLI precedence.
    ///
    /// Layering priority (lowest to highest):
    /// 1. Hardcoded defaults (in accessor methods)
    /// 2. Config file values (XDG, then project-local)
    /// 3. CLI arguments (already set on self)
    #[must_use]
    pub fn with_config(mut args: Self, config: &AppConfig) -> Self {
        args.trigger = args.trigger.with_config(config);

        // Output format: CLI > config (accessor provides fallback)
        if args.format.is_none() {
            args.format = config
                .output
                .format
                .as_ref()
                .and_then(|s| match s.as_str() {
                    "json" => Some(OutputFormat::Json),
                    "jsonl" => Some(OutputFormat::Jsonl),
                    _ => None,
                });
        }

        if !args.pretty {
            args.pretty = config.output.pretty.unwrap_or(false);
        }

        args
    }

    /// Get output format with fallback to JSONL.
    fn format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}

/// Result of running the replay command.
#[allow(dead_code)] // Fields exposed for programmatic use
pub struct ReplayResult {
    /// Number of frames evaluated.
    pub processed: usize,
    /// Number of unreadable frames skipped.
    pub skipped: usize,
    /// Number of events emitted.
    pub events: usize,
    /// Exit code.
    pub exit_code: ExitCode,
}

/// Run the replay command.
///
/// Expects `args` to have been processed through `with_config()` first
/// to apply configuration file settings.
pub fn run(args: &ReplayArgs) -> Result<ReplayResult> {
    let mut source = if args.paths.is_empty() {
        info!("Reading snapshots from stdin");
        JsonlSnapshotSource::stdin()
    } else {
        info!("Running replay on {} inputs", args.paths.len());
        JsonlSnapshotSource::new(args.paths.clone())
    };

    let mut trigger = FaceTrigger::from_config(&args.trigger.trigger_config());

    if trigger.evaluator_names().is_empty() {
        warn!("All evaluators disabled, nothing to replay");
        return Ok(ReplayResult {
            processed: 0,
            skipped: 0,
            events: 0,
            exit_code: ExitCode::Success,
        });
    }

    let output = EventOutput::stdout();
    replay_frames(&mut source, &mut trigger, &output, args)
}

/// Feed every frame through the trigger, writing events as they occur.
///
/// Frame indices count unreadable frames so they line up with the input.
fn replay_frames(
    source: &mut dyn SnapshotSource,
    trigger: &mut FaceTrigger,
    output: &EventOutput,
    args: &ReplayArgs,
) -> Result<ReplayResult> {
    let mut recorder = EventRecorder::new();
    let mut processed = 0usize;
    let mut skipped = 0usize;
    let mut emitted = 0usize;
    let mut all_events: Vec<TriggerEvent> = Vec::new();

    trigger.start();

    for (index, snapshot) in source.snapshots().enumerate() {
        let snapshot = match snapshot {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!("Skipping frame {index}: {e:#}");
                skipped += 1;
                continue;
            }
        };

        recorder.begin_frame(index as u64);
        trigger.process(&snapshot, &mut recorder);
        processed += 1;

        let events = recorder.drain();
        emitted += events.len();

        match args.format() {
            OutputFormat::Jsonl => {
                for event in &events {
                    output.write(event)?;
                }
            }
            OutputFormat::Json => all_events.extend(events),
        }
    }

    // For JSON format, output all events as one array
    if args.format() == OutputFormat::Json {
        output.write_array(&all_events, args.pretty)?;
    }

    output.flush()?;

    info!("Replayed {processed} frames: {emitted} events, {skipped} skipped");

    let exit_code = if skipped > 0 {
        ExitCode::FramesSkipped
    } else {
        ExitCode::Success
    };

    Ok(ReplayResult {
        processed,
        skipped,
        events: emitted,
        exit_code,
    })
}
