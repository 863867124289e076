#[cfg(test)]
mod tests {
    use super::super::calculator::*;
    use super::super::error::InputError;
    use super::super::scale::GradeScale;
    use super::super::types::*;

    fn assert_valid(result: CalculationResult, expected: f64) {
        match result {
            CalculationResult::Valid(v) => {
                assert!((v - expected).abs() < 1e-9, "Expected {}, got {}", expected, v)
            }
            CalculationResult::Invalid => panic!("Expected Valid({}), got Invalid", expected),
        }
    }

    #[test]
    fn test_formula_matches_weighted_average_inversion() {
        let cases = [
            (85.0, 90.0, 0.4),
            (72.5, 80.0, 0.25),
            (0.0, 60.0, 1.0),
            (95.0, 70.0, 0.5),
            (50.0, 50.0, 0.3),
        ];

        for (current, desired, weight) in cases {
            let result = compute_required_score(
                &current.to_string(),
                &desired.to_string(),
                &weight.to_string(),
                None,
            );
            let expected = (desired - current * (1.0 - weight)) / weight;
            assert_valid(result, expected);

            // Plugging the exam score back in gives the desired final grade
            let exam = result.score().unwrap();
            let final_grade = current * (1.0 - weight) + exam * weight;
            assert!((final_grade - desired).abs() < 1e-9);
        }
    }

    #[test]
    fn test_weight_boundaries() {
        assert_eq!(
            compute_required_score("80", "90", "0", None),
            CalculationResult::Invalid
        );
        assert_valid(compute_required_score("80", "90", "1.0", None), 90.0);
        assert_eq!(
            compute_required_score("80", "90", "1.01", None),
            CalculationResult::Invalid
        );
        assert_eq!(
            compute_required_score("80", "90", "-0.1", None),
            CalculationResult::Invalid
        );
    }

    #[test]
    fn test_non_numeric_current_is_invalid() {
        assert_eq!(
            compute_required_score("abc", "90", "0.4", None),
            CalculationResult::Invalid
        );
        assert_eq!(
            compute_required_score("abc", "A", "0.4", Some(GradeScale::standard())),
            CalculationResult::Invalid
        );
        assert_eq!(
            compute_required_score("", "90", "0.4", None),
            CalculationResult::Invalid
        );
    }

    #[test]
    fn test_letter_target() {
        // (90 - 85 * 0.6) / 0.4
        assert_valid(
            compute_required_score("85", "A", "0.4", Some(GradeScale::standard())),
            97.5,
        );
        assert_eq!(
            compute_required_score("85", "E", "0.4", Some(GradeScale::standard())),
            CalculationResult::Invalid
        );
    }

    #[test]
    fn test_numeric_target() {
        // (90 - 100 * 0.7) / 0.3
        assert_valid(compute_required_score("100", "90", "0.3", None), 20.0 / 0.3);
        assert_eq!(
            compute_required_score("100", "ninety", "0.3", None),
            CalculationResult::Invalid
        );
    }

    #[test]
    fn test_result_above_maximum_is_valid() {
        // (90 - 40 * 0.8) / 0.2
        let result = compute_required_score("40", "90", "0.2", None);
        assert_valid(result, 290.0);
        assert_eq!(result.standing(100.0), Some(Standing::ExceedsMaximum));
    }

    #[test]
    fn test_negative_result_is_valid() {
        // (40 - 100 * 0.5) / 0.5
        let result = compute_required_score("100", "40", "0.5", None);
        assert_valid(result, -20.0);
        assert_eq!(result.standing(100.0), Some(Standing::AlreadySecured));
    }

    #[test]
    fn test_idempotent() {
        let first = compute_required_score("85", "A", "0.4", Some(GradeScale::standard()));
        let second = compute_required_score("85", "A", "0.4", Some(GradeScale::standard()));
        assert_eq!(first, second);

        let calculator = GradeRequirementCalculator::numeric();
        let inputs = RawInputs::new("40", "90", "0.2");
        assert_eq!(calculator.compute(&inputs), calculator.compute(&inputs));
    }

    #[test]
    fn test_non_finite_inputs_rejected() {
        assert_eq!(
            compute_required_score("inf", "90", "0.4", None),
            CalculationResult::Invalid
        );
        assert_eq!(
            compute_required_score("85", "NaN", "0.4", None),
            CalculationResult::Invalid
        );
        assert_eq!(
            compute_required_score("85", "90", "nan", None),
            CalculationResult::Invalid
        );
    }

    #[test]
    fn test_overflowing_score_is_invalid() {
        // Tiny weight: the division overflows
        assert_eq!(
            compute_required_score("0", "90", "1e-310", None),
            CalculationResult::Invalid
        );
        // Huge grades: the weighted term overflows
        assert_eq!(
            compute_required_score("1e308", "-1e308", "0.5", None),
            CalculationResult::Invalid
        );
        assert_eq!(
            try_compute_required_score("0", "90", "1e-310", None),
            Err(InputError::ScoreOutOfRange(f64::INFINITY))
        );
        assert_eq!(
            try_compute_required_score("1e308", "-1e308", "0.5", None),
            Err(InputError::ScoreOutOfRange(f64::NEG_INFINITY))
        );
    }

    #[test]
    fn test_custom_scale() {
        let scale = GradeScale::new([("Pass", 50.0), ("Distinction", 75.0)]);
        // (75 - 60 * 0.5) / 0.5
        assert_valid(
            compute_required_score("60", "Distinction", "0.5", Some(&scale)),
            90.0,
        );
        assert_eq!(
            compute_required_score("60", "A", "0.5", Some(&scale)),
            CalculationResult::Invalid
        );
    }

    #[test]
    fn test_auto_mode_uses_detector() {
        let inputs = RawInputs::new("85", "A", "0.4");
        let calculator = GradeRequirementCalculator::for_mode(TargetMode::Auto, &inputs.desired_grade);
        assert_valid(calculator.compute(&inputs), 97.5);

        let inputs = RawInputs::new("85", "90", "0.4");
        let calculator = GradeRequirementCalculator::for_mode(TargetMode::Auto, &inputs.desired_grade);
        assert_valid(calculator.compute(&inputs), 97.5);
    }
}
