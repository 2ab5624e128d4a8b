//! Team profile aggregate and the budget/cart engine.

mod aggregate;
mod cart;
mod errors;

pub use aggregate::{TeamProfile, MAX_TEAM_NAME_LENGTH};
pub use cart::CartItem;
pub use errors::TeamError;
