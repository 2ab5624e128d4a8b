//! Team command and query handlers: the student-facing shop flow.

mod add_to_cart;
mod checkout;
mod create_team;
mod get_team;
mod remove_from_cart;
mod sell_item;
mod submit_build;

pub use add_to_cart::{AddToCartCommand, AddToCartHandler, CartSelection};
pub use checkout::{CheckoutCommand, CheckoutHandler};
pub use create_team::{CreateTeamCommand, CreateTeamHandler};
pub use get_team::{GetTeamHandler, GetTeamQuery};
pub use remove_from_cart::{RemoveFromCartCommand, RemoveFromCartHandler};
pub use sell_item::{SellItemCommand, SellItemHandler, SellItemResult};
pub use submit_build::{SubmitBuildCommand, SubmitBuildHandler};
