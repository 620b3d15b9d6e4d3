use serde::Serialize;

use reg_core::enums::LetterGrade;
use reg_core::grading::grade;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::GradeArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
struct GradeResponse {
    total: i64,
    grade: LetterGrade,
    gpa: f64,
    remark: &'static str,
}

/// Handle `regr grade`.
pub fn handle(args: &GradeArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let band = grade(args.total)?;
    output(
        &GradeResponse {
            total: args.total,
            grade: band.letter,
            gpa: band.gpa,
            remark: band.remark,
        },
        flags.format,
    )
}
