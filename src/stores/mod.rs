// Stores layer - Data access over a caller-supplied connection or transaction
pub mod club_store;
pub mod favorite_store;
pub mod tag_store;
pub mod user_store;

pub use club_store::ClubStore;
pub use favorite_store::FavoriteStore;
pub use tag_store::TagStore;
pub use user_store::UserStore;
