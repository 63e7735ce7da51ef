//! Property-based tests for the weighted edit distance.

use proptest::prelude::*;

use wordsmith::spelling::{
    CostModel, DistanceMatrix, distance_percentage, min_edit_distance, similarity_percentage,
};

fn arb_word() -> impl Strategy<Value = String> {
    "[a-e]{0,8}"
}

fn arb_costs() -> impl Strategy<Value = CostModel> {
    (0u32..5, 0u32..5, 0u32..5).prop_map(|(i, d, r)| CostModel::new(i, d, r))
}

proptest! {
    #[test]
    fn identical_strings_cost_nothing(word in arb_word(), costs in arb_costs()) {
        prop_assert_eq!(min_edit_distance(&word, &word, &costs), 0);
    }

    #[test]
    fn empty_source_costs_pure_insertion(word in arb_word(), costs in arb_costs()) {
        let expected = word.chars().count() as u64 * costs.insertion as u64;
        prop_assert_eq!(min_edit_distance("", &word, &costs), expected);
    }

    #[test]
    fn empty_target_costs_pure_deletion(word in arb_word(), costs in arb_costs()) {
        let expected = word.chars().count() as u64 * costs.deletion as u64;
        prop_assert_eq!(min_edit_distance(&word, "", &costs), expected);
    }

    #[test]
    fn unit_costs_satisfy_triangle_inequality(
        a in arb_word(),
        b in arb_word(),
        c in arb_word(),
    ) {
        let costs = CostModel::unit();
        let ab = min_edit_distance(&a, &b, &costs);
        let bc = min_edit_distance(&b, &c, &costs);
        let ac = min_edit_distance(&a, &c, &costs);
        prop_assert!(ac <= ab + bc);
    }

    #[test]
    fn swapping_insert_and_delete_costs_reverses_direction(
        a in arb_word(),
        b in arb_word(),
        costs in arb_costs(),
    ) {
        let swapped = CostModel::new(costs.deletion, costs.insertion, costs.replacement);
        prop_assert_eq!(
            min_edit_distance(&a, &b, &costs),
            min_edit_distance(&b, &a, &swapped)
        );
    }

    #[test]
    fn distance_is_bounded_by_length_difference_and_worst_case(
        a in arb_word(),
        b in arb_word(),
    ) {
        let costs = CostModel::default();
        let d = min_edit_distance(&a, &b, &costs);
        let la = a.chars().count() as u64;
        let lb = b.chars().count() as u64;
        prop_assert!(d >= la.abs_diff(lb));
        prop_assert!(d <= la + lb);
    }

    #[test]
    fn percentages_are_complementary(a in arb_word(), b in arb_word()) {
        let costs = CostModel::default();
        let distance = distance_percentage(&a, &b, &costs);
        let similarity = similarity_percentage(&a, &b, &costs);
        prop_assert!((0.0..=100.0).contains(&distance));
        prop_assert!((distance + similarity - 100.0).abs() < 1e-9);
    }

    #[test]
    fn matrix_has_one_cell_per_prefix_pair(a in arb_word(), b in arb_word()) {
        let matrix = DistanceMatrix::compute(&a, &b, &CostModel::default());
        prop_assert_eq!(matrix.rows(), a.chars().count() + 1);
        prop_assert_eq!(matrix.cols(), b.chars().count() + 1);
        prop_assert_eq!(matrix.get(0, 0), Some(0));
        prop_assert_eq!(matrix.get(matrix.rows(), 0), None);
    }
}
