use serde::Serialize;

pub type Score = u8;

pub const MAX_SCORE: u32 = 100;

/// Per-category points; each field is already capped by its own category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub title: u32,
    pub body: u32,
    pub alias: u32,
    pub meta_description: u32,
    pub images: u32,
    pub tags: u32,
}

impl ScoreBreakdown {
    pub fn raw_total(&self) -> u32 {
        self.title + self.body + self.alias + self.meta_description + self.images + self.tags
    }

    pub fn total(&self) -> Score {
        // min(100) keeps the value in u8 range
        self.raw_total().min(MAX_SCORE) as Score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_capped_at_one_hundred() {
        let breakdown = ScoreBreakdown {
            title: 20,
            body: 30,
            alias: 15,
            meta_description: 20,
            images: 10,
            tags: 15,
        };
        assert_eq!(breakdown.raw_total(), 110);
        assert_eq!(breakdown.total(), 100);
    }
}
