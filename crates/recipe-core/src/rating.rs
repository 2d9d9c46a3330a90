//! Star Rating Helpers

pub const MAX_STARS: usize = 5;

/// Number of filled stars for a rating: whole stars only, 4.8 -> 4
pub fn filled_stars(rating: f32) -> usize {
    if rating.is_nan() || rating <= 0.0 {
        return 0;
    }
    (rating.floor() as usize).min(MAX_STARS)
}

/// Keep a user-picked rating within 1..=5
pub fn clamp_user_rating(rating: u8) -> u8 {
    rating.clamp(1, MAX_STARS as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_stars_floors() {
        assert_eq!(filled_stars(4.8), 4);
        assert_eq!(filled_stars(5.0), 5);
        assert_eq!(filled_stars(0.9), 0);
    }

    #[test]
    fn test_filled_stars_out_of_range() {
        assert_eq!(filled_stars(7.0), MAX_STARS);
        assert_eq!(filled_stars(-1.0), 0);
        assert_eq!(filled_stars(f32::NAN), 0);
    }

    #[test]
    fn test_clamp_user_rating() {
        assert_eq!(clamp_user_rating(0), 1);
        assert_eq!(clamp_user_rating(3), 3);
        assert_eq!(clamp_user_rating(9), 5);
    }
}
