//! ID prefixes for every stored entity.
//!
//! IDs are generated by the database as `{prefix}-{8 hex chars}`, e.g. `enr-a3f8b2c1`.

pub const PREFIX_DEPARTMENT: &str = "dpt";
pub const PREFIX_USER: &str = "usr";
pub const PREFIX_COURSE: &str = "crs";
pub const PREFIX_COURSE_SESSION: &str = "cse";
pub const PREFIX_ENROLLMENT: &str = "enr";

/// Every prefix in use. Handy for exhaustive ID-format tests.
pub const ALL_PREFIXES: &[&str] = &[
    PREFIX_DEPARTMENT,
    PREFIX_USER,
    PREFIX_COURSE,
    PREFIX_COURSE_SESSION,
    PREFIX_ENROLLMENT,
];
