/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports are the interfaces the application core uses to reach
/// the file system, the NuGet registry, and the console.
pub mod outbound;
