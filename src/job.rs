//! One generation run: encode a configured shape, then report on the text.

use serde::{Deserialize, Serialize};
use slicekit_core::{JobError, PrintStats, Result};
use slicekit_designer::ToolpathToGcode;
use slicekit_settings::JobConfig;
use slicekit_visualizer::calculate_stats;
use std::path::Path;
use tracing::{debug, info};

/// Encoded program and the statistics re-derived from it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PrintJobOutput {
    pub gcode: Vec<String>,
    pub stats: PrintStats,
}

impl PrintJobOutput {
    /// The program as newline-terminated text.
    pub fn gcode_text(&self) -> String {
        let mut text = self.gcode.join("\n");
        if !text.is_empty() {
            text.push('\n');
        }
        text
    }

    /// Write the program to `path` as newline-terminated text.
    pub fn write_gcode(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.gcode_text())?;
        debug!("Wrote {} lines to {}", self.gcode.len(), path.display());
        Ok(())
    }
}

/// Read a G-code file as one string per line.
pub fn read_gcode_lines(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)?;
    Ok(text.lines().map(str::to_string).collect())
}

/// Encode the job's shape and compute stats on the produced text.
///
/// Does not validate `config`; any input yields some (possibly empty) program.
pub fn generate_job(config: &JobConfig) -> PrintJobOutput {
    let encoder = ToolpathToGcode::new(config.printer)
        .with_mode(config.output.mode)
        .with_segments(config.output.segments);

    let gcode = encoder.generate(&config.shape, &config.transform);
    let stats = calculate_stats(&gcode);
    debug!("Generated {} lines for {}", gcode.len(), config.shape);
    info!(
        "Job complete: {} moves over {} layers",
        stats.total_moves, stats.layer_count
    );

    PrintJobOutput { gcode, stats }
}

/// Validate `config`, then run [`generate_job`] on the blocking pool.
pub async fn generate_job_async(config: JobConfig) -> Result<PrintJobOutput> {
    config.validate().map_err(|e| JobError::InvalidJob {
        reason: e.to_string(),
    })?;

    let output = tokio::task::spawn_blocking(move || generate_job(&config))
        .await
        .map_err(|e| JobError::TaskFailed {
            reason: e.to_string(),
        })?;
    Ok(output)
}
