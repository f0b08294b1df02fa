use crate::models::Grade;

// Strict lower bounds, checked top-down; anything below the last band is G
pub const REPORT_LADDER: [(f64, Grade); 6] = [
    (80.0, Grade::A),
    (70.0, Grade::B),
    (55.0, Grade::C),
    (40.0, Grade::D),
    (25.0, Grade::E),
    (10.0, Grade::F),
];

pub const ECO_INDEX_LADDER: [(f64, Grade); 6] = [
    (75.0, Grade::A),
    (65.0, Grade::B),
    (50.0, Grade::C),
    (35.0, Grade::D),
    (20.0, Grade::E),
    (5.0, Grade::F),
];

pub fn grade_from_ladder(score: f64, ladder: &[(f64, Grade)]) -> Grade {
    ladder
        .iter()
        .find(|(threshold, _)| score > *threshold)
        .map(|(_, grade)| *grade)
        .unwrap_or(Grade::G)
}

/// Letter grade for the averaged report score.
pub fn get_grade(score: f64) -> Grade {
    grade_from_ladder(score, &REPORT_LADDER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_ladder_boundaries() {
        let table = [
            (100.0, Grade::A),
            (81.0, Grade::A),
            (80.01, Grade::A),
            (80.0, Grade::B),
            (71.0, Grade::B),
            (70.0, Grade::C),
            (55.5, Grade::C),
            (55.0, Grade::D),
            (40.0, Grade::E),
            (25.0, Grade::F),
            (10.5, Grade::F),
            (10.0, Grade::G),
            (0.0, Grade::G),
            (-5.0, Grade::G),
        ];
        for (score, expected) in table {
            assert_eq!(get_grade(score), expected, "score {}", score);
        }
    }

    #[test]
    fn out_of_range_scores_still_grade() {
        assert_eq!(get_grade(250.0), Grade::A);
        assert_eq!(get_grade(f64::NEG_INFINITY), Grade::G);
        assert_eq!(get_grade(f64::NAN), Grade::G);
    }

    #[test]
    fn eco_index_ladder_boundaries() {
        let table = [
            (75.5, Grade::A),
            (75.0, Grade::B),
            (65.0, Grade::C),
            (50.0, Grade::D),
            (35.0, Grade::E),
            (20.0, Grade::F),
            (5.0, Grade::G),
        ];
        for (score, expected) in table {
            assert_eq!(grade_from_ladder(score, &ECO_INDEX_LADDER), expected, "score {}", score);
        }
    }
}
