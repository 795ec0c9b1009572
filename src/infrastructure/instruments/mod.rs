//! Concrete payment instruments. Each one supplies only its execution and
//! refund steps; validation and auditing come from the shared pipeline.

pub mod card;
pub mod debit_card;
pub mod paypal;
pub mod upi;

pub use card::Card;
pub use debit_card::DebitCard;
pub use paypal::PayPal;
pub use upi::Upi;
