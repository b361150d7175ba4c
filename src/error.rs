use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DialError {
    #[error("Dial needs at least one section")]
    NoSections,
    #[error("Section index {index} out of range for {len} sections")]
    IndexOutOfRange { index: usize, len: usize },
}
