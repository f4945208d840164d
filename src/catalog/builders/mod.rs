//! Per-kind link-catalog builders.
//!
//! Each builder is a pure function from an identifier string to an ordered
//! table of fixed-template entries. Builders never fail and never touch the
//! network; the only processing is percent-encoding plus the kind-specific
//! cleanup (digit-stripping, plate normalization).

mod contact;
mod online;
mod person;
mod photo;
mod records;

pub use contact::{email, phone};
pub use online::{domain_or_ip, username};
pub use person::{person_name, street_address};
pub use photo::photo;
pub use records::{process_number, tax_id, tax_id_services, vehicle_plate};
