//! Browser binding: builds the page, wires window listeners and the idle
//! timer to the controller, and exposes `Playground` to JS.

mod facade;
mod page;
mod probe;
mod scheduler;
mod session;

pub use facade::Playground;
