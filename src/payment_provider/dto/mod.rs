mod payment_link;
mod price;
mod product;

pub use payment_link::*;
pub use price::*;
pub use product::*;
