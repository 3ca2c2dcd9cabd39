//! Services: orchestration around the pure domain reducer.

pub mod fetch;
pub mod session;

pub use fetch::FetchCoordinator;
pub use session::GameSession;
