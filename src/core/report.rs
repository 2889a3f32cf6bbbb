use crate::core::aggregator::{FlowField, FlowTables, Ranked};
use crate::domain::model::{FlowRecord, OutputFormat};
use crate::utils::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct FlowListReport<'a> {
    flow_count: usize,
    flows: &'a [FlowRecord],
}

#[derive(Serialize)]
struct TopReport {
    flow_count: usize,
    top_n: usize,
    source_addresses: Vec<Ranked>,
    destination_addresses: Vec<Ranked>,
    source_ports: Vec<Ranked>,
    destination_ports: Vec<Ranked>,
}

/// Writes flow reports to any sink, stdout in the binary.
pub struct Reporter<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn list_all(&mut self, flows: &[FlowRecord]) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                writeln!(self.out, "\nFound {} flows\n", flows.len())?;
                for flow in flows {
                    writeln!(self.out, "{}", flow)?;
                }
            }
            OutputFormat::Json => {
                let report = FlowListReport {
                    flow_count: flows.len(),
                    flows,
                };
                serde_json::to_writer_pretty(&mut self.out, &report)?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }

    pub fn top(&mut self, tables: &FlowTables, top_n: usize) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                writeln!(self.out, "\nFound {} flows", tables.flow_count)?;
                for field in FlowField::ALL {
                    writeln!(self.out, "\nTop {} {}:", top_n, field.title())?;
                    for entry in tables.table(field).top(top_n) {
                        writeln!(self.out, "{}: {} flows", entry.value, entry.count)?;
                    }
                }
            }
            OutputFormat::Json => {
                let report = TopReport {
                    flow_count: tables.flow_count,
                    top_n,
                    source_addresses: tables.source_addresses.top(top_n),
                    destination_addresses: tables.destination_addresses.top(top_n),
                    source_ports: tables.source_ports.top(top_n),
                    destination_ports: tables.destination_ports.top(top_n),
                };
                serde_json::to_writer_pretty(&mut self.out, &report)?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }

    /// Free-form status line; suppressed in JSON mode so stdout stays parseable.
    pub fn notice(&mut self, message: &str) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", message)?,
            OutputFormat::Json => tracing::warn!("{}", message),
        }
        Ok(())
    }
}
