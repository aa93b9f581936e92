pub mod types;
pub mod key;
pub mod mac;
pub mod nonce;

pub use types::*;
pub use key::*;
pub use mac::*;
pub use nonce::*;
