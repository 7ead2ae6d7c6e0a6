// Internal domain types passed between coordinators, providers and stores
pub mod club;
pub mod session;

pub use club::{ClubPatch, NewClub};
pub use session::Session;
