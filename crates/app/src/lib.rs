//! # climahub-app
//!
//! Application layer — use-cases, **port definitions** (traits) and the
//! capability traits every platform entity implements.
//!
//! ## Responsibilities
//! - Define **port traits** that adapters implement or consume:
//!   - `Coordinator`, `AutomationHome`, `Automation` — the vendor account
//!   - `Scheduler` — deferred, fire-and-forget work
//!   - `Integration`, `IntegrationContext` — integration lifecycle and registration
//!   - `EntityRepository` — entity snapshot storage
//! - Define the **entity capabilities** (`PlatformEntity`, `Scene`)
//! - Provide **in-process infrastructure** that doesn't need IO
//!   (`TokioScheduler`, `EntityService`, `ServiceContext`)
//!
//! ## Dependency rule
//! Depends on `climahub-domain` only (plus `tokio` for timers and tasks).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod platform;
pub mod ports;
pub mod scheduler;
pub mod services;
