pub mod catalog;
pub mod price;
pub mod skin;
pub mod sub;
pub mod watchlist;

pub use catalog::*;
pub use price::*;
pub use skin::*;
pub use sub::*;
pub use watchlist::*;
