//! Pure data structures shared by the catalog, the order engine and the kiosk.

pub mod menu;
pub mod order;
pub mod payment;

pub use menu::*;
pub use order::*;
pub use payment::*;
