//! An implementation of the SHA-1 cryptographic hash algorithm.
//!
//! The whole message is hashed in one call: the input is padded, split into
//! 64-byte blocks, each block is expanded into an 80-word schedule and folded
//! into the five-word working state, and the final state is written out both
//! as a 20-byte digest and as 40 lowercase hex characters.
//!
//! SHA-1 is broken against collision attacks. It is provided for
//! compatibility with existing formats and protocols only.
//!
//! # Usage
//!
//! ```rust
//! extern crate sha1;
//!
//! let (digest, hex) = sha1::sha1_digest(b"abc").unwrap();
//!
//! assert_eq!(hex, "a9993e364706816aba3e25717850c26c9cd0d89d");
//! assert_eq!(digest[..4], [0xa9, 0x99, 0x3e, 0x36]);
//! ```

#![cfg_attr(not(feature = "use-std"), no_std)]
#![cfg_attr(all(test, feature = "bench"), feature(test))]
#[cfg(all(test, feature = "bench"))]
extern crate test;
#[cfg(feature = "use-std")]
extern crate core;
extern crate alloc;
extern crate byte_tools;
extern crate generic_array;
extern crate hex;
#[macro_use]
extern crate log;
#[cfg(test)]
#[macro_use]
extern crate crypto_tests;
#[cfg(test)]
extern crate rand;

use alloc::string::String;

pub mod consts;
mod error;
mod padding;
mod state;
mod utils;

pub use error::Error;
pub use padding::{Blocks, PaddedMessage, bit_length};
pub use state::{Output, Sha1State};
pub use utils::{sha1_digest_block, sha1_digest_block_u32, sha1_schedule};

/// Run every block of the padded message through a fresh state.
fn digest_state(data: &[u8]) -> Sha1State {
    let padded = PaddedMessage::new(data);
    trace!("sha1: {} bytes in {} blocks", data.len(), padded.block_count());

    let mut state = Sha1State::new();
    for block in padded.blocks() {
        state.process_block(block);
    }
    state
}

/// Compute the SHA-1 digest of `data`, returning the 20-byte digest and its
/// lowercase hex rendering. Both are written from the same final state.
///
/// The only failure is being unable to allocate the hex string.
pub fn sha1_digest(data: &[u8]) -> Result<(Output, String), Error> {
    let state = digest_state(data);
    let hex = state.result_str()?;
    Ok((state.result(), hex))
}

/// Compute the 20-byte SHA-1 digest of `data`.
pub fn sha1_bytes(data: &[u8]) -> Output { digest_state(data).result() }

/// Compute the SHA-1 digest of `data` as 40 lowercase hex characters.
pub fn sha1_hex(data: &[u8]) -> Result<String, Error> {
    digest_state(data).result_str()
}


#[cfg(all(test, feature = "bench"))]
mod bench;
