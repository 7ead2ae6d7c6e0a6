// Coordinators layer - Workflow orchestration
//
// Coordinators compose store and provider operations for specific API
// endpoints. Each public operation owns exactly one database transaction.

pub mod club_coordinator;
pub mod tag_coordinator;
pub mod user_coordinator;

pub use club_coordinator::ClubCoordinator;
pub use tag_coordinator::TagCoordinator;
pub use user_coordinator::UserCoordinator;
