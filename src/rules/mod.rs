//! Game rules as pure, independently testable pieces.
//!
//! - `deal`: hand generator
//! - `ledger`: bid validation and the round's bid history
//! - `resolver`: wild-aware tally and challenge resolution
//! - `elimination`: player lifecycle and termination
//!
//! The engine sequences these; none of them call each other's state.

pub mod deal;
pub mod ledger;
pub mod resolver;
pub mod elimination;

pub use deal::{deal, Hands};
pub use ledger::{check_raise, BidRecord, Round};
pub use resolver::{resolve, tally, Outcome, Resolution};
pub use elimination::{EliminationTracker, Standing};
