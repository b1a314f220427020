//! Property-based tests for popular tag counting

use proptest::prelude::*;

use forum_live::shared::tags::split_tags;
use forum_live::shared::popular_tags;

fn raw_tag_lists() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::collection::vec("[a-c]{1,2}|[ ]{0,2}", 0..5).prop_map(|tags| tags.join(",")),
        0..12,
    )
}

proptest! {
    #[test]
    fn test_counts_cover_every_tag(raw in raw_tag_lists()) {
        let counted = popular_tags(raw.iter().map(String::as_str), usize::MAX);
        let total: usize = counted.iter().map(|t| t.count).sum();
        let expected = raw.iter().map(|r| split_tags(r).count()).sum::<usize>();
        prop_assert_eq!(total, expected);
    }

    #[test]
    fn test_sorted_by_count_and_limited(raw in raw_tag_lists(), limit in 0usize..6) {
        let counted = popular_tags(raw.iter().map(String::as_str), limit);
        prop_assert!(counted.len() <= limit);
        prop_assert!(counted.windows(2).all(|pair| pair[0].count >= pair[1].count));
        prop_assert!(counted.iter().all(|t| !t.tag.is_empty() && t.tag.trim() == t.tag));
    }
}
