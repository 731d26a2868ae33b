extern crate hex;
#[macro_use]
extern crate log;

pub mod hash;
pub mod nsrl;
