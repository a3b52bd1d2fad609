//! Evaluators command - show which evaluators a replay would run.

use std::io::{self, Write};

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use super::replay::TriggerArgs;
use crate::config::AppConfig;

/// Arguments for the evaluators command.
#[derive(Args, Clone, Debug, Default)]
pub struct EvaluatorsArgs {
    #[command(flatten)]
    pub trigger: TriggerArgs,

    /// Print as a JSON array
    #[arg(long)]
    pub json: bool,
}

impl EvaluatorsArgs {
    /// Apply configuration file values, respecting CLI precedence.
    #[must_use]
    pub fn with_config(mut args: Self, config: &AppConfig) -> Self {
        args.trigger = args.trigger.with_config(config);
        args
    }
}

#[derive(Serialize)]
struct EvaluatorInfo {
    name: &'static str,
    threshold: f32,
}

/// Run the evaluators command.
pub fn run(args: &EvaluatorsArgs) -> Result<()> {
    let enabled = args.trigger.trigger_config().enabled();
    let mut stdout = io::stdout().lock();
    write_listing(&mut stdout, &enabled, args.json)
}

fn write_listing(out: &mut impl Write, enabled: &[(&'static str, f32)], json: bool) -> Result<()> {
    if json {
        let infos: Vec<_> = enabled
            .iter()
            .map(|&(name, threshold)| EvaluatorInfo { name, threshold })
            .collect();
        serde_json::to_writer(&mut *out, &infos)?;
        writeln!(out)?;
    } else {
        for (name, threshold) in enabled {
            writeln!(out, "{name:<14}{threshold:.2}")?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_listing() {
        let mut out = Vec::new();
        write_listing(&mut out, &[("smile", 0.7), ("jaw_left", 0.3)], false).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "smile         0.70\njaw_left      0.30\n"
        );
    }

    #[test]
    fn test_json_listing() {
        let mut out = Vec::new();
        write_listing(&mut out, &[("blink", 0.5)], true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["name"], "blink");
        assert_eq!(value[0]["threshold"], 0.5);
    }
}
