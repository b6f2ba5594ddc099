use crate::model::Student;
use std::collections::BTreeSet;

/// Sum of the credit points of all students.
pub fn total_credits(students: &[Student]) -> u64 {
    students
        .iter()
        .map(|s| u64::from(s.credits))
        .fold(0, |total, cps| total + cps)
}

/// Distinct credit points held by IFM students.
pub fn distinct_ifm_credits(students: &[Student]) -> BTreeSet<u32> {
    students
        .iter()
        .filter(|s| s.is_ifm())
        .map(|s| s.credits)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Enrollment::{Arch, Elt, Ifm};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;

    fn students(cps: [u32; 2]) -> Vec<Student> {
        vec![
            Student::new("A", cps[0], Ifm),
            Student::new("B", cps[1], Ifm),
            Student::new("C", 60, Elt),
            Student::new("D", 45, Arch),
            Student::new("E", 80, Ifm),
        ]
    }

    #[test]
    fn test_total_credits() {
        assert_eq!(total_credits(&students([30, 45])), 260);
        assert_eq!(total_credits(&[]), 0);
    }

    #[test]
    fn test_total_credits_ignores_order() {
        let mut s = students([30, 45]);
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..10 {
            s.shuffle(&mut rng);
            assert_eq!(total_credits(&s), 260);
        }
        s.reverse();
        assert_eq!(total_credits(&s), 260);
    }

    #[test]
    fn test_total_credits_does_not_overflow() {
        let s = vec![
            Student::new("A", u32::MAX, Elt),
            Student::new("B", u32::MAX, Arch),
        ];
        assert_eq!(total_credits(&s), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_distinct_ifm_credits() {
        assert_eq!(
            distinct_ifm_credits(&students([35, 35])),
            BTreeSet::from([35, 80])
        );
        assert_eq!(
            distinct_ifm_credits(&students([30, 45])),
            BTreeSet::from([30, 45, 80])
        );
    }

    #[test]
    fn test_distinct_ifm_credits_without_ifm() {
        assert!(distinct_ifm_credits(&[]).is_empty());
        let s = vec![Student::new("C", 60, Elt), Student::new("D", 45, Arch)];
        assert!(distinct_ifm_credits(&s).is_empty());
    }
}
