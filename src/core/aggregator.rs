use crate::domain::model::FlowRecord;
use serde::Serialize;
use std::collections::HashMap;

/// Occurrence counts keyed by value, remembering the order in which values
/// were first seen.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    index: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ranked {
    pub value: String,
    pub count: usize,
}

impl FrequencyTable {
    pub fn increment(&mut self, value: &str) {
        match self.index.get(value) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(value.to_string(), self.entries.len());
                self.entries.push((value.to_string(), 1));
            }
        }
    }

    pub fn count(&self, value: &str) -> usize {
        self.index
            .get(value)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// The `n` most frequent values. Equal counts keep first-seen order.
    pub fn top(&self, n: usize) -> Vec<Ranked> {
        let mut ranked: Vec<&(String, usize)> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(n)
            .map(|(value, count)| Ranked {
                value: value.clone(),
                count: *count,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowField {
    SourceAddress,
    DestinationAddress,
    SourcePort,
    DestinationPort,
}

impl FlowField {
    pub const ALL: [FlowField; 4] = [
        FlowField::SourceAddress,
        FlowField::DestinationAddress,
        FlowField::SourcePort,
        FlowField::DestinationPort,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            FlowField::SourceAddress => "Source Addresses",
            FlowField::DestinationAddress => "Destination Addresses",
            FlowField::SourcePort => "Source Ports",
            FlowField::DestinationPort => "Destination Ports",
        }
    }

    fn value<'a>(&self, record: &'a FlowRecord) -> &'a str {
        match self {
            FlowField::SourceAddress => &record.source_address,
            FlowField::DestinationAddress => &record.destination_address,
            FlowField::SourcePort => &record.source_port,
            FlowField::DestinationPort => &record.destination_port,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FlowTables {
    pub flow_count: usize,
    pub source_addresses: FrequencyTable,
    pub destination_addresses: FrequencyTable,
    pub source_ports: FrequencyTable,
    pub destination_ports: FrequencyTable,
}

impl FlowTables {
    pub fn table(&self, field: FlowField) -> &FrequencyTable {
        match field {
            FlowField::SourceAddress => &self.source_addresses,
            FlowField::DestinationAddress => &self.destination_addresses,
            FlowField::SourcePort => &self.source_ports,
            FlowField::DestinationPort => &self.destination_ports,
        }
    }

    fn table_mut(&mut self, field: FlowField) -> &mut FrequencyTable {
        match field {
            FlowField::SourceAddress => &mut self.source_addresses,
            FlowField::DestinationAddress => &mut self.destination_addresses,
            FlowField::SourcePort => &mut self.source_ports,
            FlowField::DestinationPort => &mut self.destination_ports,
        }
    }
}

pub fn aggregate(records: &[FlowRecord]) -> FlowTables {
    let mut tables = FlowTables {
        flow_count: records.len(),
        ..FlowTables::default()
    };

    for record in records {
        for field in FlowField::ALL {
            tables.table_mut(field).increment(field.value(record));
        }
    }

    tracing::debug!(
        "Aggregated {} flows: {} source addresses, {} destination addresses",
        tables.flow_count,
        tables.source_addresses.distinct(),
        tables.destination_addresses.distinct()
    );
    tables
}
