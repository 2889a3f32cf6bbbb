use crate::domain::model::{ColumnLayout, FlowRecord, LineError, ParsedFlows};

const ARROW: &str = "=>";
const EXPORT_DELIMITER: char = '|';
const EXPORT_MIN_FIELDS: usize = 10;

/// Parses flow log text in either arrow form (`src:port => dst:port`) or
/// columnar form (whitespace columns, endpoints at fixed positions).
#[derive(Debug, Clone, Copy, Default)]
pub struct LineParser {
    layout: ColumnLayout,
}

impl LineParser {
    pub fn new(layout: ColumnLayout) -> Self {
        Self { layout }
    }

    /// Parses one non-blank line. Any `=>` in the line selects arrow form,
    /// and arrow form needs a standalone `=>` token with an endpoint on
    /// each side.
    pub fn parse_line(&self, line: &str) -> Result<FlowRecord, LineError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        let (source, destination) = if line.contains(ARROW) {
            match tokens.iter().position(|t| *t == ARROW) {
                Some(arrow) if arrow > 0 && arrow + 1 < tokens.len() => {
                    (tokens[arrow - 1], tokens[arrow + 1])
                }
                _ => return Err(LineError::MissingArrowOperand),
            }
        } else {
            self.columnar_endpoints(&tokens)?
        };

        let (source_address, source_port) = split_endpoint(source)?;
        let (destination_address, destination_port) = split_endpoint(destination)?;

        Ok(FlowRecord {
            source_address: source_address.to_string(),
            destination_address: destination_address.to_string(),
            source_port: source_port.to_string(),
            destination_port: destination_port.to_string(),
        })
    }

    fn columnar_endpoints<'a>(&self, tokens: &[&'a str]) -> Result<(&'a str, &'a str), LineError> {
        let required = self
            .layout
            .min_columns
            .max(self.layout.source_column.max(self.layout.destination_column) + 1);
        if tokens.len() < required {
            return Err(LineError::TooFewColumns {
                found: tokens.len(),
                required,
            });
        }
        Ok((
            tokens[self.layout.source_column],
            tokens[self.layout.destination_column],
        ))
    }

    /// Parses a whole text body. Blank lines are skipped; lines that fail
    /// to parse are counted in `bad_lines`.
    pub fn parse_text(&self, text: &str) -> ParsedFlows {
        let mut parsed = ParsedFlows::default();

        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match self.parse_line(line) {
                Ok(record) => parsed.records.push(record),
                Err(e) => {
                    tracing::debug!("Skipping malformed line {}: {}", index + 1, e);
                    parsed.bad_lines += 1;
                }
            }
        }

        tracing::debug!(
            "Parsed {} flows, {} malformed lines",
            parsed.records.len(),
            parsed.bad_lines
        );
        parsed
    }
}

/// Splits `address:port` at the last colon, so IPv6 addresses keep theirs.
pub fn split_endpoint(endpoint: &str) -> Result<(&str, &str), LineError> {
    endpoint
        .rsplit_once(':')
        .ok_or_else(|| LineError::MissingPort {
            endpoint: endpoint.to_string(),
        })
}

/// Parses the exporter's pipe-delimited output. Fields 1 to 4 hold the
/// source address, destination address, source port and destination port.
/// Short lines are dropped without being counted.
pub fn parse_export_output(text: &str) -> Vec<FlowRecord> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let fields: Vec<&str> = line.split(EXPORT_DELIMITER).map(str::trim).collect();
            if fields.len() < EXPORT_MIN_FIELDS {
                return None;
            }
            Some(FlowRecord {
                source_address: fields[1].to_string(),
                destination_address: fields[2].to_string(),
                source_port: fields[3].to_string(),
                destination_port: fields[4].to_string(),
            })
        })
        .collect()
}
