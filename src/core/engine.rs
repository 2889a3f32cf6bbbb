use crate::core::aggregator::aggregate;
use crate::core::report::Reporter;
use crate::domain::ports::Pipeline;
use crate::utils::error::{FlowError, Result};
use crate::utils::validation::has_extension;
use std::io::Write;
use std::path::Path;

pub const SUPPORTED_EXTENSION: &str = "yaf";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Completed,
    UnsupportedFileType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub status: RunStatus,
    pub exported_flows: usize,
    pub parsed_flows: usize,
    pub bad_lines: usize,
}

impl RunSummary {
    fn unsupported() -> Self {
        Self {
            status: RunStatus::UnsupportedFileType,
            exported_flows: 0,
            parsed_flows: 0,
            bad_lines: 0,
        }
    }
}

pub struct FlowEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> FlowEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs the whole analysis for one input file, writing reports to `out`.
    ///
    /// Exporter failures, a missing companion file and malformed lines are
    /// reported on `out` and the run carries on with no flows for that
    /// stage. Only failures to write the report itself are returned.
    pub fn run<W: Write>(&self, input: &Path, out: W) -> Result<RunSummary> {
        let mut reporter = Reporter::new(out, self.pipeline.output_format());

        if !has_extension(input, SUPPORTED_EXTENSION) {
            tracing::warn!("Unsupported input: {}", input.display());
            reporter.notice("Unsupported file type. Please use .yaf")?;
            return Ok(RunSummary::unsupported());
        }

        tracing::info!("Analyzing {}", input.display());

        // Extract
        let exported = match self.pipeline.extract(input) {
            Ok(flows) => flows,
            Err(e) => {
                recover(&mut reporter, &e)?;
                Vec::new()
            }
        };
        tracing::info!("Exported {} flows", exported.len());
        if !exported.is_empty() {
            reporter.list_all(&exported)?;
        }

        // Transform
        let parsed = match self.pipeline.transform(input) {
            Ok(parsed) => parsed,
            Err(e) => {
                recover(&mut reporter, &e)?;
                Default::default()
            }
        };
        if parsed.bad_lines > 0 {
            reporter.notice(&format!("Skipped {} malformed lines.", parsed.bad_lines))?;
        }
        tracing::info!(
            "Parsed {} flows from companion file ({} malformed)",
            parsed.records.len(),
            parsed.bad_lines
        );

        // Load
        if !parsed.records.is_empty() {
            let tables = aggregate(&parsed.records);
            reporter.top(&tables, self.pipeline.top_n())?;
        }

        Ok(RunSummary {
            status: RunStatus::Completed,
            exported_flows: exported.len(),
            parsed_flows: parsed.records.len(),
            bad_lines: parsed.bad_lines,
        })
    }
}

fn recover<W: Write>(reporter: &mut Reporter<W>, error: &FlowError) -> Result<()> {
    tracing::warn!("{} ({})", error, error.recovery_suggestion());
    reporter.notice(&error.user_friendly_message())
}
