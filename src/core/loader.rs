use crate::domain::model::RawRecord;
use crate::utils::error::Result;

/// 將資料檔內容解析為動物記錄。缺少欄位不在此檢查，留給投影階段。
pub fn parse_records(data: &[u8]) -> Result<Vec<RawRecord>> {
    let records: Vec<RawRecord> = serde_json::from_slice(data)?;
    tracing::debug!("Parsed {} animal records", records.len());
    Ok(records)
}
