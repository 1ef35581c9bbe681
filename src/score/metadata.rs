pub fn alias_score(alias: Option<&str>) -> u32 {
    match alias {
        Some(alias) if !alias.is_empty() => 15,
        _ => 0,
    }
}

pub fn meta_description_score(description: Option<&str>) -> u32 {
    let length = description.map(|text| text.chars().count()).unwrap_or(0);
    if (120..=160).contains(&length) {
        20
    } else if (80..=200).contains(&length) {
        15
    } else if length > 0 {
        5
    } else {
        0
    }
}
