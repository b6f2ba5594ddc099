use serde::Deserialize;
use std::fmt;

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Enrollment {
    Ifm,
    Elt,
    Arch,
}

impl fmt::Display for Enrollment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Enrollment::Ifm => "IFM",
            Enrollment::Elt => "ELT",
            Enrollment::Arch => "ARCH",
        })
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Student {
    pub name: String,
    #[serde(rename = "cps", alias = "credits")]
    pub credits: u32,
    pub enrollment: Enrollment,
}

impl Student {
    pub fn new(name: impl Into<String>, credits: u32, enrollment: Enrollment) -> Student {
        Student {
            name: name.into(),
            credits,
            enrollment,
        }
    }

    pub fn is_ifm(&self) -> bool {
        self.enrollment == Enrollment::Ifm
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} cps, {})", self.name, self.credits, self.enrollment)
    }
}

#[test]
fn test_is_ifm() {
    let s = Student::new("A", 30, Enrollment::Ifm);
    assert!(s.is_ifm());
    let s = Student {
        enrollment: Enrollment::Arch,
        ..s
    };
    assert!(!s.is_ifm());
    assert_eq!(s.to_string(), "A (30 cps, ARCH)");
}
