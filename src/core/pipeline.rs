use crate::core::{
    loader, projector, render, selector, template, ConfigProvider, Pipeline, RawRecord, Storage,
    TransformResult,
};
use crate::utils::error::Result;

/// 讀取動物資料、依皮膚類型篩選並寫出 HTML 頁面的管道。
pub struct AnimalPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> AnimalPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for AnimalPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<RawRecord>> {
        tracing::debug!("Loading animal data from: {}", self.config.data_file());
        let data = self.storage.read_file(self.config.data_file()).await?;
        loader::parse_records(&data)
    }

    async fn transform(&self, data: &[RawRecord], skin_type: &str) -> Result<TransformResult> {
        let selected = selector::select(data, skin_type);
        tracing::debug!(
            "Selected {} of {} records with skin type '{}'",
            selected.len(),
            data.len(),
            skin_type
        );

        let cards = projector::project_all(selected)?;
        let html_fragment = render::render_cards(&cards);

        Ok(TransformResult {
            skin_type: skin_type.to_string(),
            cards,
            html_fragment,
        })
    }

    async fn load(&self, result: &TransformResult) -> Result<String> {
        let template_bytes = self.storage.read_file(self.config.template_file()).await?;
        let html = template::inject(
            &template_bytes,
            self.config.placeholder(),
            &result.html_fragment,
        );

        self.storage
            .write_file(self.config.output_file(), &html)
            .await?;

        tracing::debug!("Wrote {} bytes to {}", html.len(), self.config.output_file());
        Ok(self.config.output_file().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::utils::error::EtlError;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn put(&self, path: &str, data: &str) {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.as_bytes().to_vec());
        }

        async fn get_file(&self, path: &str) -> Option<String> {
            let files = self.files.lock().await;
            files
                .get(path)
                .map(|data| String::from_utf8_lossy(data).into_owned())
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| EtlError::NotFound {
                path: path.to_string(),
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    const ANIMALS: &str = r#"[
        {"name": "Fox", "characteristics": {"diet": "Omnivore", "type": "Mammal", "skin_type": "Fur"}, "locations": ["Europe"]},
        {"name": "Cobra", "characteristics": {"diet": "Carnivore", "skin_type": "Scales"}, "locations": ["Asia", "Africa"]},
        {"name": "Bear", "characteristics": {"diet": "Omnivore", "skin_type": "Fur"}, "locations": ["North-America"]},
        {"name": "Snail", "characteristics": {"diet": "Herbivore"}, "locations": ["Europe"]}
    ]"#;

    async fn pipeline_with(data: &str) -> (AnimalPipeline<MockStorage, GeneratorConfig>, MockStorage) {
        let storage = MockStorage::new();
        storage.put("animals_data.json", data).await;
        storage
            .put(
                "animals_template.html",
                "<ul class=\"cards\">\n__REPLACE_ANIMALS_INFO__</ul>\n",
            )
            .await;
        let pipeline = AnimalPipeline::new(storage.clone(), GeneratorConfig::default());
        (pipeline, storage)
    }

    #[tokio::test]
    async fn test_extract_reads_configured_file() {
        let (pipeline, _) = pipeline_with(ANIMALS).await;

        let records = pipeline.extract().await.unwrap();

        assert_eq!(records.len(), 4);
        assert_eq!(records[3].skin_type(), None);
    }

    #[tokio::test]
    async fn test_extract_missing_file() {
        let pipeline = AnimalPipeline::new(MockStorage::new(), GeneratorConfig::default());

        let result = pipeline.extract().await;

        assert!(matches!(result, Err(EtlError::NotFound { path }) if path == "animals_data.json"));
    }

    #[tokio::test]
    async fn test_transform_filters_projects_and_renders() {
        let (pipeline, _) = pipeline_with(ANIMALS).await;
        let records = pipeline.extract().await.unwrap();

        let result = pipeline.transform(&records, "Fur").await.unwrap();

        assert_eq!(result.skin_type, "Fur");
        let names: Vec<_> = result.cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Fox", "Bear"]);
        assert_eq!(result.html_fragment.matches("<li class=\"cards__item\">").count(), 2);
        assert_eq!(result.html_fragment.matches("<li>Type:").count(), 1);
        assert!(!result.html_fragment.contains("Cobra"));
    }

    #[tokio::test]
    async fn test_transform_missing_field_aborts() {
        let data = r#"[{"name": "Ghost", "characteristics": {"skin_type": "Fur"}, "locations": []}]"#;
        let (pipeline, _) = pipeline_with(data).await;
        let records = pipeline.extract().await.unwrap();

        let result = pipeline.transform(&records, "Fur").await;

        assert!(matches!(
            result,
            Err(EtlError::MissingField { field, .. }) if field == "characteristics.diet"
        ));
    }

    #[tokio::test]
    async fn test_transform_skips_bad_records_that_are_not_selected() {
        let data = r#"[
            {"name": "Ghost", "characteristics": {"skin_type": "Mist"}},
            {"name": "Fox", "characteristics": {"diet": "Omnivore", "skin_type": "Fur"}, "locations": ["Europe"]}
        ]"#;
        let (pipeline, _) = pipeline_with(data).await;
        let records = pipeline.extract().await.unwrap();

        let result = pipeline.transform(&records, "Fur").await.unwrap();

        assert_eq!(result.cards.len(), 1);
    }

    #[tokio::test]
    async fn test_load_injects_into_template() {
        let (pipeline, storage) = pipeline_with(ANIMALS).await;
        let records = pipeline.extract().await.unwrap();
        let result = pipeline.transform(&records, "Scales").await.unwrap();

        let output_path = pipeline.load(&result).await.unwrap();

        assert_eq!(output_path, "animals.html");
        let html = storage.get_file("animals.html").await.unwrap();
        assert!(html.starts_with("<ul class=\"cards\">\n<li class=\"cards__item\">"));
        assert!(html.ends_with("</li>\n</ul>\n"));
        assert!(html.contains("Location: Asia, Africa"));
        assert!(!html.contains("__REPLACE_ANIMALS_INFO__"));
    }

    #[tokio::test]
    async fn test_load_missing_template() {
        let storage = MockStorage::new();
        let pipeline = AnimalPipeline::new(storage.clone(), GeneratorConfig::default());
        let result = TransformResult {
            skin_type: "Fur".to_string(),
            cards: vec![],
            html_fragment: String::new(),
        };

        let load = pipeline.load(&result).await;

        assert!(matches!(load, Err(EtlError::NotFound { .. })));
        assert!(storage.get_file("animals.html").await.is_none());
    }
}
