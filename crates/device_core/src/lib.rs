pub mod clock;
pub mod device;
pub mod drift;
pub mod runner;
pub mod scenario;
pub mod systems;
pub mod telemetry;
