use crate::domain::model::{OutputRecord, RawRecord};
use crate::utils::error::{EtlError, Result};

pub fn project(record: &RawRecord) -> Result<OutputRecord> {
    let name = required(record.name.as_deref(), "name", record)?;
    let diet = required(record.diet(), "characteristics.diet", record)?;
    let locations = record
        .locations
        .clone()
        .ok_or_else(|| missing("locations", record))?;

    Ok(OutputRecord {
        name: name.to_string(),
        diet: diet.to_string(),
        locations,
        kind: record.kind().map(str::to_string),
    })
}

/// 逐筆投影；遇到第一筆缺欄位的記錄即中止。
pub fn project_all<'a, I>(records: I) -> Result<Vec<OutputRecord>>
where
    I: IntoIterator<Item = &'a RawRecord>,
{
    records.into_iter().map(project).collect()
}

fn required<'a>(value: Option<&'a str>, field: &str, record: &RawRecord) -> Result<&'a str> {
    value.ok_or_else(|| missing(field, record))
}

fn missing(field: &str, record: &RawRecord) -> EtlError {
    EtlError::MissingField {
        field: field.to_string(),
        record: record
            .name
            .as_deref()
            .map(|name| format!("'{}'", name))
            .unwrap_or_else(|| "<unnamed>".to_string()),
    }
}
