use crate::score::markup::strip_markup;

pub fn body_score(body: &str) -> u32 {
    let length = strip_markup(body).chars().count();
    if length > 1000 {
        30
    } else if length > 300 {
        20
    } else if length > 100 {
        10
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_bands_are_exclusive_thresholds() {
        assert_eq!(body_score(""), 0);
        assert_eq!(body_score(&"x".repeat(100)), 0);
        assert_eq!(body_score(&"x".repeat(101)), 10);
        assert_eq!(body_score(&"x".repeat(300)), 10);
        assert_eq!(body_score(&"x".repeat(301)), 20);
        assert_eq!(body_score(&"x".repeat(1000)), 20);
        assert_eq!(body_score(&"x".repeat(1001)), 30);
    }

    #[test]
    fn markup_does_not_count_towards_length() {
        let body = format!("<div class=\"long-wrapper-class\">{}</div>", "x".repeat(90));
        assert!(body.len() > 100);
        assert_eq!(body_score(&body), 0);
    }
}
