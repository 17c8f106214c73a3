//! Text heuristics over the betting block of a fixture.

pub mod safe_bet;

pub use safe_bet::{SafeBet, safe_bet};
