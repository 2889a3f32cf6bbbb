use crate::core::parser::{parse_export_output, LineParser};
use crate::domain::model::{FlowRecord, OutputFormat, ParsedFlows};
use crate::domain::ports::{ConfigProvider, FlowExporter, Pipeline, Storage};
use crate::utils::error::{FlowError, Result};
use std::path::{Path, PathBuf};

pub const COMPANION_SUFFIX: &str = ".yaf.txt";

/// Name of the text rendering that accompanies a capture:
/// `dir/capture.yaf` becomes `capture.yaf.txt`.
pub fn companion_file_name(input: &Path) -> Result<PathBuf> {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| FlowError::Config {
            message: format!("'{}' has no usable file name", input.display()),
        })?;
    Ok(PathBuf::from(format!("{}{}", stem, COMPANION_SUFFIX)))
}

pub struct YafPipeline<E: FlowExporter, S: Storage, C: ConfigProvider> {
    exporter: E,
    storage: S,
    config: C,
    parser: LineParser,
}

impl<E: FlowExporter, S: Storage, C: ConfigProvider> YafPipeline<E, S, C> {
    pub fn new(exporter: E, storage: S, config: C) -> Self {
        let parser = LineParser::new(config.column_layout());
        Self {
            exporter,
            storage,
            config,
            parser,
        }
    }
}

impl<E: FlowExporter, S: Storage, C: ConfigProvider> Pipeline for YafPipeline<E, S, C> {
    fn extract(&self, input: &Path) -> Result<Vec<FlowRecord>> {
        let text = self.exporter.export(input)?;
        let flows = parse_export_output(&text);
        tracing::debug!("Exporter yielded {} flows", flows.len());
        Ok(flows)
    }

    fn transform(&self, input: &Path) -> Result<ParsedFlows> {
        let companion = companion_file_name(input)?;
        tracing::debug!("Companion text file: {}", companion.display());

        let text = self.storage.read_to_string(&companion)?;
        Ok(self.parser.parse_text(&text))
    }

    fn top_n(&self) -> usize {
        self.config.top_n()
    }

    fn output_format(&self) -> OutputFormat {
        self.config.output_format()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::domain::model::ColumnLayout;
    use std::cell::RefCell;
    use std::collections::HashMap;

    struct MockExporter {
        output: std::result::Result<String, &'static str>,
        calls: RefCell<Vec<PathBuf>>,
    }

    impl MockExporter {
        fn ok(output: &str) -> Self {
            Self {
                output: Ok(output.to_string()),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn missing() -> Self {
            Self {
                output: Err("missing"),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl FlowExporter for MockExporter {
        fn export(&self, input: &Path) -> Result<String> {
            self.calls.borrow_mut().push(input.to_path_buf());
            match &self.output {
                Ok(text) => Ok(text.clone()),
                Err(_) => Err(FlowError::ExporterMissing {
                    program: "yafscii".to_string(),
                }),
            }
        }
    }

    struct MockStorage {
        files: HashMap<PathBuf, String>,
    }

    impl MockStorage {
        fn with(name: &str, content: &str) -> Self {
            let mut files = HashMap::new();
            files.insert(PathBuf::from(name), content.to_string());
            Self { files }
        }
    }

    impl Storage for MockStorage {
        fn read_to_string(&self, path: &Path) -> Result<String> {
            self.files
                .get(path)
                .cloned()
                .ok_or_else(|| FlowError::NotFound {
                    path: path.display().to_string(),
                })
        }
    }

    #[test]
    fn test_companion_file_name() {
        assert_eq!(
            companion_file_name(Path::new("/data/run1/capture.yaf")).unwrap(),
            PathBuf::from("capture.yaf.txt")
        );
        assert_eq!(
            companion_file_name(Path::new("CAPTURE.YAF")).unwrap(),
            PathBuf::from("CAPTURE.yaf.txt")
        );
    }

    #[test]
    fn test_extract_parses_exporter_output() {
        let exporter = MockExporter::ok(
            "t|10.0.0.1|192.168.1.5|443|51000|6|a|b|c|d\nshort|line\n",
        );
        let pipeline = YafPipeline::new(exporter, MockStorage::with("x", ""), Settings::default());

        let flows = pipeline.extract(Path::new("capture.yaf")).unwrap();
        assert_eq!(flows.len(), 1);
        assert_eq!(flows[0].source_port, "443");
        assert_eq!(
            pipeline.exporter.calls.borrow().as_slice(),
            &[PathBuf::from("capture.yaf")]
        );
    }

    #[test]
    fn test_extract_propagates_missing_exporter() {
        let pipeline = YafPipeline::new(
            MockExporter::missing(),
            MockStorage::with("x", ""),
            Settings::default(),
        );
        assert!(matches!(
            pipeline.extract(Path::new("capture.yaf")),
            Err(FlowError::ExporterMissing { .. })
        ));
    }

    #[test]
    fn test_transform_reads_companion() {
        let storage = MockStorage::with(
            "capture.yaf.txt",
            "10.0.0.1:443 => 192.168.1.5:51000\nbad line\n",
        );
        let pipeline = YafPipeline::new(MockExporter::ok(""), storage, Settings::default());

        let parsed = pipeline.transform(Path::new("in/capture.yaf")).unwrap();
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.bad_lines, 1);
    }

    #[test]
    fn test_transform_uses_configured_layout() {
        let settings = Settings {
            column_layout: ColumnLayout {
                source_column: 1,
                destination_column: 2,
                min_columns: 3,
            },
            ..Settings::default()
        };
        let storage = MockStorage::with("c.yaf.txt", "tcp 10.0.0.1:1 10.0.0.2:2\n");
        let pipeline = YafPipeline::new(MockExporter::ok(""), storage, settings);

        let parsed = pipeline.transform(Path::new("c.yaf")).unwrap();
        assert_eq!(parsed.bad_lines, 0);
        assert_eq!(parsed.records[0].destination_address, "10.0.0.2");
    }

    #[test]
    fn test_transform_missing_companion() {
        let pipeline = YafPipeline::new(
            MockExporter::ok(""),
            MockStorage::with("other.yaf.txt", ""),
            Settings::default(),
        );
        assert!(matches!(
            pipeline.transform(Path::new("capture.yaf")),
            Err(FlowError::NotFound { .. })
        ));
    }
}
