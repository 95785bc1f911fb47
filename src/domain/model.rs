use serde::{Deserialize, Serialize};

/// 來源 JSON 中的一筆動物資料。所有欄位皆為選填，缺漏時回傳 `None`。
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawRecord {
    pub name: Option<String>,
    pub characteristics: Option<Characteristics>,
    pub locations: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Characteristics {
    pub diet: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub skin_type: Option<String>,
}

impl RawRecord {
    pub fn diet(&self) -> Option<&str> {
        self.characteristics.as_ref()?.diet.as_deref()
    }

    pub fn kind(&self) -> Option<&str> {
        self.characteristics.as_ref()?.kind.as_deref()
    }

    pub fn skin_type(&self) -> Option<&str> {
        self.characteristics.as_ref()?.skin_type.as_deref()
    }
}

/// 投影後、用於輸出的動物卡片資料。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Diet")]
    pub diet: String,
    #[serde(rename = "Location")]
    pub locations: Vec<String>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// 依首次出現順序保存的不重複皮膚類型。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkinTypeSet {
    values: Vec<String>,
}

impl SkinTypeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已存在（大小寫完全相同）時不插入，回傳 false。
    pub fn insert(&mut self, value: &str) -> bool {
        if self.contains(value) {
            return false;
        }
        self.values.push(value.to_string());
        true
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.values.clone()
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub skin_type: String,
    pub cards: Vec<OutputRecord>,
    pub html_fragment: String,
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub output_path: String,
    pub skin_type: String,
    pub cards: Vec<OutputRecord>,
}
