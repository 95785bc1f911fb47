use animals_web::core::render;
use animals_web::utils::error::{ErrorSeverity, EtlError};
use animals_web::utils::{logger, validation::Validate};
use animals_web::{
    AnimalPipeline, CliConfig, ConsolePrompt, FixedSkinType, GeneratorEngine, LocalStorage,
};
use anyhow::Context;
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }

    let mut prompt = ConsolePrompt::stdio();
    prompt
        .greet()
        .await
        .context("failed to write to the console")?;

    let storage = LocalStorage::new(config.base_dir.clone());
    let fixed_skin_type = config.skin_type.clone();
    let engine = GeneratorEngine::new(AnimalPipeline::new(storage, config));

    let outcome = match fixed_skin_type {
        Some(value) => engine.run(&mut FixedSkinType::new(value)).await,
        None => engine.run(&mut prompt).await,
    };

    match outcome {
        Ok(report) => {
            if cli.print {
                print!("{}", render::render_text(&report.cards));
            }
            println!("HTML file created!");
            println!("📁 Output saved to: {}", report.output_path);
            Ok(())
        }
        Err(e) => exit_with(&e),
    }
}

fn exit_with(e: &EtlError) -> ! {
    tracing::error!(
        "❌ Generation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::Medium | ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
