use crate::domain::model::{RawRecord, SkinTypeSet};

/// 比對使用者輸入與已知皮膚類型。
///
/// 完全相同者優先，否則取第一個大小寫不敏感相符的值；回傳的是集合中的原始寫法。
/// 大小寫不敏感比對時，輸入與候選值兩邊的前後空白都會去除。
pub fn validate(candidates: &SkinTypeSet, input: &str) -> Option<String> {
    if candidates.contains(input) {
        return Some(input.to_string());
    }

    let wanted = input.trim().to_lowercase();
    candidates
        .iter()
        .find(|candidate| candidate.trim().to_lowercase() == wanted)
        .map(str::to_string)
}

/// 回傳皮膚類型與 `skin_type` 完全相同的記錄，保留原本順序。
pub fn select<'a>(records: &'a [RawRecord], skin_type: &str) -> Vec<&'a RawRecord> {
    records
        .iter()
        .filter(|record| record.skin_type() == Some(skin_type))
        .collect()
}
