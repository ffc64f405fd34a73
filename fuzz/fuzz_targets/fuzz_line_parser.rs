//! Fuzz target: `LineDecoder::push` + `InboundCommand::parse`
//!
//! Streams arbitrary bytes through the serial line decoder and parses every
//! completed line, as the firmware does with UART input.
//!
//! Invariants checked:
//! - No panics under any byte sequence
//! - Yielded lines never exceed `MAX_LINE_LEN` and never contain the terminator
//! - A line starting with `1`/`2`/`3` always parses to that command
//!
//! cargo fuzz run fuzz_line_parser

#![no_main]

use libfuzzer_sys::fuzz_target;
use pulsebridge::app::commands::InboundCommand;
use pulsebridge::config::MAX_LINE_LEN;
use pulsebridge::serial::codec::LineDecoder;

fuzz_target!(|data: &[u8]| {
    let mut decoder = LineDecoder::new();

    for &byte in data {
        let Ok(Some(line)) = decoder.push(byte) else {
            continue;
        };
        assert!(line.len() <= MAX_LINE_LEN);
        assert!(!line.contains('\n'));

        let cmd = InboundCommand::parse(&line);
        match line.chars().next() {
            Some('1') => assert_eq!(cmd, InboundCommand::ActivateChannel1),
            Some('2') => assert_eq!(cmd, InboundCommand::ActivateChannel2),
            Some('3') => assert!(matches!(cmd, InboundCommand::ActivateChannel3 { .. })),
            _ => assert_eq!(cmd, InboundCommand::Unrecognized),
        }
    }

    assert!(decoder.pending() <= MAX_LINE_LEN);
});
