pub mod activity;
pub mod allowlist;
pub mod currency;
pub mod governance;
pub mod points;

pub use activity::*;
pub use allowlist::*;
pub use currency::*;
pub use governance::*;
pub use points::*;
