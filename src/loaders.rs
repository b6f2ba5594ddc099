use crate::model::Student;
use eyre::{Result, WrapErr};
use std::io::Read;
use std::path::Path;
use tracing::{debug, trace};

/// Load students from a CSV file with a `name,cps,enrollment` header.
pub fn load_students(path: &Path) -> Result<Vec<Student>> {
    let reader = csv::Reader::from_path(path).wrap_err("cannot load students")?;
    let students = read_students(reader)?;
    debug!(path = %path.display(), count = students.len(), "loaded students");
    Ok(students)
}

fn read_students<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<Student>> {
    reader
        .deserialize()
        .map(|record| {
            let student: Student = record.wrap_err("cannot load students")?;
            trace!(%student, "read student");
            Ok(student)
        })
        .collect()
}
