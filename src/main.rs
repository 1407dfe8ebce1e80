use clap::Parser;
use make_routes::core::ConfigProvider;
use make_routes::utils::{logger, validation::Validate};
use make_routes::{CliConfig, LocalStorage, RouteEngine, RouteGenError, RoutePipeline, TomlConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting make-routes");
    tracing::debug!("CLI config: {:?}", cli);

    let dry_run = cli.dry_run;
    let result = match cli.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            TomlConfig::from_file(&path)
                .map(|config| config.with_seed_override(cli.seed))
                .and_then(|config| run(config, dry_run))
        }
        None => run(cli, dry_run),
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ Route generation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        std::process::exit(e.severity().exit_code());
    }
}

fn run<C>(config: C, dry_run: bool) -> Result<(), RouteGenError>
where
    C: ConfigProvider + Validate,
{
    config.validate()?;
    tracing::info!("✅ Configuration validated");

    display_plan(&config);

    // 沒有指定 seed 時抽一個新的並記錄，方便重現
    let seed = config.seed().unwrap_or_else(|| rand::thread_rng().gen());
    tracing::info!("🎲 Using seed {}", seed);

    let storage = LocalStorage::default();
    let pipeline = RoutePipeline::new(storage, config, StdRng::seed_from_u64(seed));
    let mut engine = RouteEngine::new(pipeline);

    if dry_run {
        tracing::info!("🔍 DRY RUN MODE - the route file will not be written");
        engine.dry_run()?;
        return Ok(());
    }

    let output_path = engine.run()?;
    tracing::info!("✅ Route generation completed successfully!");
    println!("📁 Routes saved to: {}", output_path);

    Ok(())
}

fn display_plan<C: ConfigProvider>(config: &C) {
    let range = config.stop_range();
    tracing::info!("📋 Input: {}", config.input_path());
    tracing::info!("📋 Output: {}", config.output_path());
    tracing::info!("📋 Stops per route: {}..={}", range.start(), range.end());
    for batch in config.batches() {
        tracing::info!("📋   {} x {}", batch.origin, batch.count);
    }
}
