/// Report generation domain - package model and the pure pipeline stages
///
/// Nothing in this module touches the file system or the network; adapters
/// hand it text or bytes and it hands back domain values.
pub mod domain;
pub mod services;
