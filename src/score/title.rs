pub fn title_score(title: &str) -> u32 {
    let length = title.chars().count();
    if (30..=60).contains(&length) {
        20
    } else if (20..=70).contains(&length) {
        15
    } else if length > 0 {
        5
    } else {
        0
    }
}
