//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod account;
pub mod integration;
pub mod scheduler;
pub mod storage;

pub use account::{Automation, AutomationHome, Coordinator};
pub use integration::{Integration, IntegrationContext};
pub use scheduler::Scheduler;
pub use storage::EntityRepository;
