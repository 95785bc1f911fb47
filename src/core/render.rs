use crate::domain::model::OutputRecord;

/// 將一張動物卡片轉為 HTML 片段。欄位值原樣插入，不做 HTML 跳脫。
pub fn render_card(card: &OutputRecord) -> String {
    let mut html = String::new();
    push_card(&mut html, card);
    html
}

/// 依輸入順序串接所有卡片片段。
pub fn render_cards(cards: &[OutputRecord]) -> String {
    let mut html = String::new();
    for card in cards {
        push_card(&mut html, card);
    }
    html
}

fn push_card(out: &mut String, card: &OutputRecord) {
    out.push_str("<li class=\"cards__item\">\n");
    out.push_str(&format!("  <div class=\"card__title\">{}</div>\n", card.name));
    out.push_str("  <p class=\"card__text\">\n");
    out.push_str("    <ul>\n");
    out.push_str(&format!("      <li>Location: {}</li>\n", card.locations.join(", ")));
    if let Some(kind) = &card.kind {
        out.push_str(&format!("      <li>Type: {}</li>\n", kind));
    }
    out.push_str(&format!("      <li>Diet: {}</li>\n", card.diet));
    out.push_str("    </ul>\n");
    out.push_str("  </p>\n");
    out.push_str("</li>\n");
}

/// 純文字清單：Name、Diet、Location、Type（若有），每張卡片之間空一行。
pub fn render_text(cards: &[OutputRecord]) -> String {
    let mut text = String::new();
    for card in cards {
        text.push_str(&format!("Name: {}\n", card.name));
        text.push_str(&format!("Diet: {}\n", card.diet));
        text.push_str(&format!("Location: {}\n", card.locations.join(", ")));
        if let Some(kind) = &card.kind {
            text.push_str(&format!("Type: {}\n", kind));
        }
        text.push('\n');
    }
    text
}
