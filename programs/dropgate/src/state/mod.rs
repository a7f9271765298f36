pub mod ledger;
pub mod merkle;
pub mod message;
pub mod records;

pub use ledger::*;
pub use merkle::*;
pub use message::*;
pub use records::*;
