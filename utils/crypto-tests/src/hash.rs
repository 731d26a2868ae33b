use std::fmt;

use hex;

/// A known-answer vector loaded from `data/<name>.input` and
/// `data/<name>.output`.
pub struct Test {
    pub name: &'static str,
    pub input: &'static [u8],
    pub output: &'static [u8],
}

#[macro_export]
macro_rules! new_tests {
    ( $( $name:expr ),*  ) => {
        [$(
            Test {
                name: $name,
                input: include_bytes!(concat!("data/", $name, ".input")),
                output: include_bytes!(concat!("data/", $name, ".output")),
            },
        )*]
    };
}

/// Check every vector: the binary digest must equal the expected bytes and
/// the hex digest must be their lowercase rendering.
pub fn main_test<F, E>(digest: &F, tests: &[Test])
    where F: Fn(&[u8]) -> Result<(Vec<u8>, String), E>,
          E: fmt::Debug
{
    for t in tests.iter() {
        let (out, out_str) = digest(t.input).unwrap();

        assert_eq!(out[..], t.output[..], "{}", t.name);
        assert_eq!(out_str.len(), t.output.len() * 2, "{}", t.name);
        assert_eq!(out_str, hex::encode(t.output), "{}", t.name);
    }
}

pub fn one_million_a<F, E>(digest: &F, expected: &[u8])
    where F: Fn(&[u8]) -> Result<(Vec<u8>, String), E>,
          E: fmt::Debug
{
    let input = vec![b'a'; 1000000];
    let (out, out_str) = digest(&input).unwrap();
    assert_eq!(out[..], expected[..]);
    assert_eq!(out_str, hex::encode(expected));
}

fn status(matches: bool) -> &'static str {
    if matches { "matches" } else { "does NOT match" }
}

/// Hash `data` and compare both the hex digest and the hex rendering of the
/// binary digest against `known`, ignoring case.
///
/// Returns the number of mismatches: 0 when both agree with `known`, up to 2
/// otherwise. A failed digest call counts as one mismatch.
pub fn known_answer<F, E>(digest: &F, data: &[u8], known: &str) -> usize
    where F: Fn(&[u8]) -> Result<(Vec<u8>, String), E>,
          E: fmt::Display
{
    let (out, out_str) = match digest(data) {
        Ok(result) => result,
        Err(e) => {
            error!("digest of {} bytes failed: {}", data.len(), e);
            return 1;
        }
    };
    let bin_str = hex::encode(&out);

    let hex_ok = out_str.eq_ignore_ascii_case(known);
    let bin_ok = bin_str.eq_ignore_ascii_case(known);

    debug!("Known digest:  '{}'  data length: {}", known, data.len());
    debug!("  Hex digest:  '{}'  {}", out_str, status(hex_ok));
    debug!("  Bin digest:  '{}'  {}", bin_str, status(bin_ok));
    if !(hex_ok && bin_ok) {
        warn!("digest mismatch for {} bytes, expected {}", data.len(), known);
    }

    (!hex_ok) as usize + (!bin_ok) as usize
}
