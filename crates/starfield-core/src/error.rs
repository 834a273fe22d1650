use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VariantError {
    #[error("unknown scene variant {0:?} (expected one of: main, sidebar-stars, sidebar-particles)")]
    Unknown(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("constellation {name}: line {line:?} references a point outside 0..{points}")]
    LineOutOfRange {
        name: &'static str,
        line: [usize; 2],
        points: usize,
    },
}
