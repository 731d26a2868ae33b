use byte_tools::read_u32v_be;

use consts::{BLOCK_BYTES, BLOCK_LEN, K, SCHEDULE_LEN, STATE_LEN};

macro_rules! bool3ary_202 {
    ($a:expr, $b:expr, $c:expr) => (($c ^ ($a & ($b ^ $c))))
} // Choose, MD5F, SHA1C
macro_rules! bool3ary_150 {
    ($a:expr, $b:expr, $c:expr) => (($a ^ $b ^ $c))
} // Parity, XOR, MD5H, SHA1P
macro_rules! bool3ary_232 {
    ($a:expr, $b:expr, $c:expr) => (($a & $b) ^ ($a & $c) ^ ($b & $c))
} // Majority, SHA1M

/// Expands one 64-byte block into the 80 words consumed by the rounds.
///
/// The first 16 words are the block read big-endian; every later word is
/// `rotl1(w[t-3] ^ w[t-8] ^ w[t-14] ^ w[t-16])`.
pub fn sha1_schedule(block: &[u8]) -> [u32; SCHEDULE_LEN] {
    assert_eq!(block.len(), BLOCK_BYTES);
    let mut w = [0u32; SCHEDULE_LEN];
    read_u32v_be(&mut w[..BLOCK_LEN], block);
    for t in BLOCK_LEN..SCHEDULE_LEN {
        w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotate_left(1);
    }
    w
}

#[inline(always)]
fn mix(a: u32, f: u32, e: u32, k: u32, w: u32) -> u32 {
    a.rotate_left(5)
        .wrapping_add(f)
        .wrapping_add(e)
        .wrapping_add(k)
        .wrapping_add(w)
}

/// Process a block with the SHA-1 algorithm, given its expanded schedule.
pub fn sha1_digest_block_u32(state: &mut [u32; STATE_LEN],
                             w: &[u32; SCHEDULE_LEN]) {
    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];

    // rounds 0..20
    for t in 0..20 {
        let temp = mix(a, bool3ary_202!(b, c, d), e, K[0], w[t]);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    // rounds 20..40
    for t in 20..40 {
        let temp = mix(a, bool3ary_150!(b, c, d), e, K[1], w[t]);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    // rounds 40..60
    for t in 40..60 {
        let temp = mix(a, bool3ary_232!(b, c, d), e, K[2], w[t]);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    // rounds 60..80
    for t in 60..80 {
        let temp = mix(a, bool3ary_150!(b, c, d), e, K[3], w[t]);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
}

/// Process a block with the SHA-1 algorithm.
///
/// Blocks must be fed in message order: each one folds into the state left
/// behind by the previous one.
pub fn sha1_digest_block(state: &mut [u32; STATE_LEN], block: &[u8]) {
    let w = sha1_schedule(block);
    sha1_digest_block_u32(state, &w);
}

#[cfg(all(test, feature = "use-std"))]
mod tests {
    use consts::H;
    use super::{sha1_digest_block, sha1_schedule};

    fn abc_block() -> [u8; 64] {
        let mut block = [0u8; 64];
        block[..3].copy_from_slice(b"abc");
        block[3] = 0x80;
        block[63] = 24;
        block
    }

    #[test]
    fn schedule_reads_big_endian() {
        let w = sha1_schedule(&abc_block());
        assert_eq!(w[0], 0x61626380);
        assert!(w[1..15].iter().all(|&x| x == 0));
        assert_eq!(w[15], 0x00000018);
        // FIPS 180-1 appendix A
        assert_eq!(w[16], 0xC2C4C700);
        assert_eq!(w[17], 0x00000000);
        assert_eq!(w[18], 0x00000030);
    }

    #[test]
    fn schedule_is_block_local() {
        let block = abc_block();
        assert_eq!(sha1_schedule(&block)[..], sha1_schedule(&block)[..]);
    }

    #[test]
    #[should_panic]
    fn short_block_panics() {
        sha1_schedule(&[0u8; 63]);
    }

    #[test]
    fn single_block_abc() {
        let mut state = H;
        sha1_digest_block(&mut state, &abc_block());
        assert_eq!(state, [0xA9993E36, 0x4706816A, 0xBA3E2571, 0x7850C26C, 0x9CD0D89D]);
    }

    #[test]
    fn block_order_matters() {
        let first = [0x11u8; 64];
        let second = [0x22u8; 64];

        let mut forward = H;
        sha1_digest_block(&mut forward, &first);
        sha1_digest_block(&mut forward, &second);

        let mut backward = H;
        sha1_digest_block(&mut backward, &second);
        sha1_digest_block(&mut backward, &first);

        assert!(forward != backward);
    }
}
