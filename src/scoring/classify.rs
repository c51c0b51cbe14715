use crate::models::Category;
use crate::scoring::{Classification, LABEL_SEPARATOR, ScoreTally};

/// Picks every category that reaches the highest count.
///
/// Winners come out in canonical category order, so a tie always reads the
/// same way no matter which answers were recorded first. An all-zero tally
/// ties every category.
pub fn classify(tally: &ScoreTally) -> Classification {
    let max_count = tally.iter().map(|(_, n)| n).max().unwrap_or(0);

    let winners: Vec<Category> = Category::ALL
        .iter()
        .copied()
        .filter(|&c| tally.get(c) == max_count)
        .collect();

    let label = winners
        .iter()
        .map(|c| c.label())
        .collect::<Vec<_>>()
        .join(LABEL_SEPARATOR);

    Classification { winners, label }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(visual: u32, auditory: u32, kinesthetic: u32) -> ScoreTally {
        let mut tally = ScoreTally::zeroed();
        for (category, n) in [
            (Category::Kinesthetic, kinesthetic),
            (Category::Auditory, auditory),
            (Category::Visual, visual),
        ] {
            for _ in 0..n {
                tally.increment(category);
            }
        }
        tally
    }

    #[test]
    fn single_winner() {
        let result = classify(&tally(3, 7, 2));
        assert_eq!(result.winners, vec![Category::Auditory]);
        assert_eq!(result.label, "Auditiv");
        assert!(!result.is_blend());
    }

    #[test]
    fn tie_uses_canonical_order() {
        let result = classify(&tally(1, 4, 4));
        assert_eq!(result.winners, vec![Category::Auditory, Category::Kinesthetic]);
        assert_eq!(result.label, "Auditiv-Kinästhetisch");

        let result = classify(&tally(5, 0, 5));
        assert_eq!(result.label, "Visuell-Kinästhetisch");
        assert!(result.is_blend());
    }

    #[test]
    fn all_zero_ties_everything() {
        let result = classify(&ScoreTally::zeroed());
        assert_eq!(result.winners, Category::ALL.to_vec());
        assert_eq!(result.label, "Visuell-Auditiv-Kinästhetisch");
    }
}
