/// 以 `fragment` 取代範本中第一個 `placeholder`，其餘位元組保持不變。
///
/// 範本不必是合法 UTF-8。範本中沒有佔位符時原樣回傳，不視為錯誤。
pub fn inject(template: &[u8], placeholder: &str, fragment: &str) -> Vec<u8> {
    let Some(start) = find(template, placeholder.as_bytes()) else {
        tracing::warn!(
            "Placeholder '{}' not found in template, output is unchanged",
            placeholder
        );
        return template.to_vec();
    };

    let end = start + placeholder.len();
    let mut html = Vec::with_capacity(template.len() - placeholder.len() + fragment.len());
    html.extend_from_slice(&template[..start]);
    html.extend_from_slice(fragment.as_bytes());
    html.extend_from_slice(&template[end..]);
    html
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
