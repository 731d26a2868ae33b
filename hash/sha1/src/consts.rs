/// Number of 32-bit words in the working state.
pub const STATE_LEN: usize = 5;
/// Number of 32-bit words in one message block.
pub const BLOCK_LEN: usize = 16;
/// Number of bytes in one message block.
pub const BLOCK_BYTES: usize = BLOCK_LEN * 4;
/// Number of words in an expanded message schedule, one per round.
pub const SCHEDULE_LEN: usize = 80;
/// Number of bytes in a digest.
pub const OUTPUT_LEN: usize = STATE_LEN * 4;
/// Number of characters in the hex rendering of a digest.
pub const HEX_LEN: usize = OUTPUT_LEN * 2;

/// Initial hash value.
pub const H: [u32; STATE_LEN] =
    [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];

/// Round constants, one per group of 20 rounds.
pub const K: [u32; 4] = [0x5A827999, 0x6ED9EBA1, 0x8F1BBCDC, 0xCA62C1D6];
