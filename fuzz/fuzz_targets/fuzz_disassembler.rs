//! Fuzz target for the disassembler.
//!
//! Feeds arbitrary byte sequences to the disassembler and checks that the
//! listing tiles the input exactly.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use system65::disassembler::disassemble;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    bytes: Vec<u8>,
    start_address: u16,
}

fuzz_target!(|input: FuzzInput| {
    // Limit input size to prevent OOM
    if input.bytes.len() > 65536 {
        return;
    }

    let instructions = disassemble(&input.bytes, input.start_address);

    let mut total_size: usize = 0;
    let mut expected_address = input.start_address;

    for instr in &instructions {
        assert_eq!(instr.address, expected_address);

        let size = instr.size_bytes();
        assert!((1..=3).contains(&size));
        assert!(!instr.to_string().is_empty());

        total_size += size as usize;
        expected_address = expected_address.wrapping_add(size as u16);
    }

    assert_eq!(total_size, input.bytes.len());
});
