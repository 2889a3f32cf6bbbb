use clap::Parser;
use std::path::Path;
use yaf_reader::domain::model::OutputFormat;
use yaf_reader::domain::ports::ConfigProvider;
use yaf_reader::utils::{logger, validation::Validate};
use yaf_reader::{CliConfig, CommandExporter, FlowEngine, LocalStorage, Settings, YafPipeline};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose, cli.format == Some(OutputFormat::Json));

    tracing::debug!("CLI config: {:?}", cli);

    let settings = match Settings::from_cli(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let exporter = CommandExporter::new(settings.exporter_program());
    let storage = LocalStorage::new(settings.work_dir());
    let pipeline = YafPipeline::new(exporter, storage, settings);
    let engine = FlowEngine::new(pipeline);

    let stdout = std::io::stdout();
    let summary = engine.run(Path::new(&cli.file), stdout.lock())?;
    tracing::debug!("Run summary: {:?}", summary);

    Ok(())
}
