use core::iter::Chain;
use core::slice::Chunks;

use byte_tools::{copy_memory, write_u64_be};

use consts::BLOCK_BYTES;

/// Size of the big-endian length field closing the last block.
const LENGTH_FIELD: usize = 8;

/// The message length in bits as stored in the length field. Messages of
/// 2^61 bytes or more wrap, exactly as every other SHA-1 implementation does.
#[inline]
pub fn bit_length(len: u64) -> u64 {
    len.wrapping_mul(8)
}

/// Blocks of a padded message, in order.
pub type Blocks<'b> = Chain<Chunks<'b, u8>, Chunks<'b, u8>>;

/// A message with SHA-1 padding applied.
///
/// All complete blocks of the input are borrowed as they are. Only the tail
/// (the leftover bytes, the `0x80` marker, the zero run and the length field)
/// is copied into a fixed buffer, which spans one block or two when the
/// leftover bytes leave no room for the marker and the length field.
#[derive(Clone)]
pub struct PaddedMessage<'a> {
    body: &'a [u8],
    tail: [u8; 2 * BLOCK_BYTES],
    tail_len: usize,
}

impl<'a> PaddedMessage<'a> {
    pub fn new(data: &'a [u8]) -> PaddedMessage<'a> {
        let rem = data.len() % BLOCK_BYTES;
        let (body, rest) = data.split_at(data.len() - rem);

        let mut tail = [0u8; 2 * BLOCK_BYTES];
        copy_memory(rest, &mut tail);
        tail[rem] = 0x80;

        let tail_len = if rem + 1 + LENGTH_FIELD <= BLOCK_BYTES {
            BLOCK_BYTES
        } else {
            2 * BLOCK_BYTES
        };
        write_u64_be(&mut tail[tail_len - LENGTH_FIELD..tail_len],
                     bit_length(data.len() as u64));

        PaddedMessage {
            body: body,
            tail: tail,
            tail_len: tail_len,
        }
    }

    /// Length of the padded message in bytes; always a multiple of 64.
    pub fn len(&self) -> usize { self.body.len() + self.tail_len }

    /// Always false: even an empty message pads to one block.
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Number of 64-byte blocks.
    pub fn block_count(&self) -> usize { self.len() / BLOCK_BYTES }

    pub fn blocks<'b>(&'b self) -> Blocks<'b> {
        self.body
            .chunks(BLOCK_BYTES)
            .chain(self.tail[..self.tail_len].chunks(BLOCK_BYTES))
    }
}
