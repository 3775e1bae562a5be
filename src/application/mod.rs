/// Application layer
///
/// `use_cases` drives the report pipeline through the outbound ports;
/// `dto` holds the run parameters and the resulting package list.
pub mod dto;
pub mod use_cases;
