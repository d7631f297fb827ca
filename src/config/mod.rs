pub mod traits;
pub mod simulation;
pub mod founders;
pub mod report;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use simulation::SimulationConfig;
pub use founders::{FoundersConfig, FounderGenome};
pub use report::{ReportConfig, ReportFormat};
pub use traits::ConfigSection;
