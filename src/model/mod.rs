//! Pure data structures (DTOs) shared by the cart, the checkout flow and the
//! delivery tracker.

pub mod cart;
pub mod catalog;
pub mod contact;
pub mod delivery;
pub mod forms;

pub use cart::*;
pub use catalog::*;
pub use contact::*;
pub use delivery::*;
pub use forms::*;
