use test::Bencher;
use consts::{STATE_LEN, SCHEDULE_LEN};
use super::{sha1_bytes, sha1_digest, sha1_digest_block_u32, sha1_schedule};

#[bench]
pub fn sha1_block(bh: &mut Bencher) {
    let mut state = [0u32; STATE_LEN];
    let words = [1u32; SCHEDULE_LEN];
    bh.iter(|| {
        sha1_digest_block_u32(&mut state, &words);
    });
    bh.bytes = 64u64;
}

#[bench]
pub fn sha1_schedule_block(bh: &mut Bencher) {
    let block = [1u8; 64];
    bh.iter(|| sha1_schedule(&block));
    bh.bytes = 64u64;
}

#[bench]
pub fn sha1_10(bh: &mut Bencher) {
    let bytes = [1u8; 10];
    bh.iter(|| sha1_digest(&bytes));
    bh.bytes = bytes.len() as u64;
}

#[bench]
pub fn sha1_1k(bh: &mut Bencher) {
    let bytes = [1u8; 1024];
    bh.iter(|| sha1_bytes(&bytes));
    bh.bytes = bytes.len() as u64;
}

#[bench]
pub fn sha1_64k(bh: &mut Bencher) {
    let bytes = [1u8; 65536];
    bh.iter(|| sha1_bytes(&bytes));
    bh.bytes = bytes.len() as u64;
}
