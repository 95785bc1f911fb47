use crate::domain::model::{RawRecord, SkinTypeSet};

/// 收集所有記錄中出現過的皮膚類型，保留首次出現的順序。
pub fn collect_skin_types(records: &[RawRecord]) -> SkinTypeSet {
    let mut set = SkinTypeSet::new();
    for skin_type in records.iter().filter_map(RawRecord::skin_type) {
        set.insert(skin_type);
    }
    set
}
