use alloc::string::String;

use byte_tools::write_u32v_be;
use generic_array::GenericArray;
use generic_array::typenum::U20;
use hex;

use consts::{H, HEX_LEN, STATE_LEN};
use error::Error;
use utils::sha1_digest_block;

/// A SHA-1 digest: the five state words written big-endian.
pub type Output = GenericArray<u8, U20>;

/// A structure that represents the working state of a SHA-1 computation:
/// the five chaining registers carried from block to block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sha1State {
    h: [u32; STATE_LEN],
}

impl Sha1State {
    /// A state holding the SHA-1 initial hash value.
    pub fn new() -> Sha1State { Sha1State { h: H } }

    pub fn reset(&mut self) { self.h = H; }

    /// Fold one 64-byte block into the state.
    pub fn process_block(&mut self, block: &[u8]) {
        sha1_digest_block(&mut self.h, block);
    }

    /// The raw state words.
    pub fn words(&self) -> &[u32; STATE_LEN] { &self.h }

    /// Write the state out as a 20-byte digest.
    pub fn result(&self) -> Output {
        let mut out = Output::default();
        write_u32v_be(&mut out, &self.h);
        out
    }

    /// Render the state as 40 lowercase hex characters.
    ///
    /// This is the only heap allocation of a digest computation and so the
    /// only place one can fail.
    pub fn result_str(&self) -> Result<String, Error> {
        let mut buf = [0u8; HEX_LEN];
        hex::encode_to_slice(self.result(), &mut buf)
            .expect("hex buffer is HEX_LEN bytes");

        let mut out = String::new();
        out.try_reserve_exact(HEX_LEN)?;
        out.extend(buf.iter().map(|&c| c as char));
        Ok(out)
    }
}

impl Default for Sha1State {
    fn default() -> Self { Self::new() }
}
