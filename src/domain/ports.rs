use crate::domain::model::{RawRecord, SkinTypeSet, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn data_file(&self) -> &str;
    fn template_file(&self) -> &str;
    fn output_file(&self) -> &str;
    fn placeholder(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<RawRecord>>;
    async fn transform(&self, data: &[RawRecord], skin_type: &str) -> Result<TransformResult>;
    async fn load(&self, result: &TransformResult) -> Result<String>;
}

/// 從已知的皮膚類型中決定本次要篩選的值（回傳原始大小寫）。
#[async_trait]
pub trait SkinTypeChooser: Send {
    async fn choose(&mut self, available: &SkinTypeSet) -> Result<String>;
}
