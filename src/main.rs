use clap::Parser;
use cms_docgen::core::report::{print_plan, print_report};
use cms_docgen::utils::{logger, validation::Validate};
use cms_docgen::{
    BuiltinSource, CliConfig, DocgenError, DocumentEmitter, DocumentSet, DocumentSource,
    EmissionReport, LocalStorage, ManifestSource,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting cms-docgen");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        exit_with_config_error(&e);
    }

    let (documents, output_dir) = match load_documents(&config).await {
        Ok(loaded) => loaded,
        Err(e) => exit_with_config_error(&e),
    };

    if config.list {
        let stdout = std::io::stdout();
        if let Err(e) = print_plan(&mut stdout.lock(), &documents, &output_dir) {
            tracing::error!("Failed to print document list: {}", e);
        }
        return Ok(());
    }

    if config.create_dir {
        if let Err(e) = tokio::fs::create_dir_all(&output_dir).await {
            // 不中止：後續每個文件會各自回報寫入失敗
            tracing::warn!("Could not create output directory {}: {}", output_dir, e);
        }
    }

    let emitter = DocumentEmitter::new(LocalStorage::new(&output_dir));
    let results = emitter.emit(&documents).await;
    let report = EmissionReport::new(&output_dir, results);

    tracing::info!(
        total = report.total,
        succeeded = report.succeeded,
        failed = report.failed,
        "Emission finished"
    );

    // 文件已寫出，報告輸出失敗只記錄，不影響結束碼
    let stdout = std::io::stdout();
    if let Err(e) = print_report(&mut stdout.lock(), &report, config.report) {
        tracing::error!("Failed to print emission report: {}", e);
    }

    if config.strict && report.has_failures() {
        std::process::exit(1);
    }

    Ok(())
}

async fn load_documents(config: &CliConfig) -> cms_docgen::Result<(DocumentSet, String)> {
    match &config.manifest {
        Some(path) => {
            let source = ManifestSource::new(path);
            tracing::info!("Loading documents from {}", source.describe());
            let manifest = source.read_manifest().await?;
            let documents = manifest.resolve(source.base_dir()).await?;
            Ok((documents, config.resolve_output_dir(manifest.output_dir())))
        }
        None => {
            let source = BuiltinSource;
            tracing::info!("Loading documents from {}", source.describe());
            Ok((source.load().await?, config.resolve_output_dir(None)))
        }
    }
}

fn exit_with_config_error(e: &DocgenError) -> ! {
    tracing::error!("Configuration error: {} (Category: {:?})", e, e.category());
    tracing::error!("Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}
