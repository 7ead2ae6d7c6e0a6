// Providers layer - Work performers and business logic
//
// Providers contain business logic and provide composable operations that
// coordinators can orchestrate.

pub mod authentication_provider;
pub mod clock;
pub mod crypto_provider;
pub mod session_provider;

pub use authentication_provider::AuthenticationProvider;
pub use clock::{Clock, ManualClock, SystemClock};
pub use crypto_provider::CryptoProvider;
pub use session_provider::SessionProvider;
