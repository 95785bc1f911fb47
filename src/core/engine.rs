use crate::core::{skin_types, Pipeline, RunReport, SkinTypeChooser};
use crate::utils::error::Result;

pub struct GeneratorEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> GeneratorEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// 依序執行 extract → 皮膚類型索引 → 選擇 → transform → load。
    pub async fn run<C: SkinTypeChooser>(&self, chooser: &mut C) -> Result<RunReport> {
        tracing::info!("Starting animals web generation");

        // Extract
        let records = self.pipeline.extract().await?;
        tracing::info!("Loaded {} animal records", records.len());

        let available = skin_types::collect_skin_types(&records);
        tracing::debug!("Found {} skin types", available.len());

        let skin_type = chooser.choose(&available).await?;
        tracing::info!("Filtering by skin type '{}'", skin_type);

        // Transform
        let result = self.pipeline.transform(&records, &skin_type).await?;
        tracing::info!("Rendered {} animal cards", result.cards.len());

        // Load
        let output_path = self.pipeline.load(&result).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(RunReport {
            output_path,
            skin_type: result.skin_type,
            cards: result.cards,
        })
    }
}
