pub use self::student::{Enrollment, Student};

mod student;
