//! Financial instrument definitions.
//!
//! Instruments are a closed enum ([`InstrumentSpec`]) so that every
//! pricing dispatch is a static `match`; there are no trait objects.
//!
//! # Instrument Types
//!
//! - `Vanilla`: European call/put
//! - `American`: early-exercise call/put
//! - `Digital`: cash-or-nothing call/put
//! - `Barrier`: up/down, knock-in/knock-out call/put
//! - `Asian`: average-price call/put
//! - `Forward`: linear forward contract
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{InstrumentSpec, OptionType};
//!
//! let put = InstrumentSpec::American {
//!     option_type: OptionType::Put,
//!     strike: 100.0,
//!     expiry: 1.0,
//! };
//! assert!(put.validate().is_ok());
//! assert_eq!(put.intrinsic_value(90.0), 10.0);
//! ```

mod error;
mod payoff;
mod spec;

pub use error::InstrumentError;
pub use payoff::{BarrierDirection, KnockType, OptionType};
pub use spec::InstrumentSpec;
