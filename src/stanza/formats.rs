//! Output formats for parsed trees

pub mod treeviz;
