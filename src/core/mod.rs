mod error;
mod ordinal;
mod payout;
mod payout_type;

pub use error::RSPayoutError;
pub use ordinal::{ordinal, place_label};
pub use payout::Payout;
pub use payout_type::PayoutType;
