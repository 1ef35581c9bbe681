const POINTS_PER_REFERENCE: u32 = 5;
const MEDIA_CAP: u32 = 15;

pub fn images_score(images: &[String]) -> u32 {
    references_score(images)
}

pub fn tags_score(tags: &[String]) -> u32 {
    references_score(tags)
}

fn references_score(references: &[String]) -> u32 {
    let filled = references
        .iter()
        .filter(|reference| !reference.is_empty())
        .count() as u32;
    filled.saturating_mul(POINTS_PER_REFERENCE).min(MEDIA_CAP)
}
