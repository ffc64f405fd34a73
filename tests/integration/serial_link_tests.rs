//! Controller driven through the real line codec over an in-memory byte
//! transport, as the firmware wires it to the UART.

use std::collections::VecDeque;

use pulsebridge::app::controller::Controller;
use pulsebridge::app::ports::{ChannelId, InputId, Level};
use pulsebridge::clock::Clock;
use pulsebridge::config::SystemConfig;
use pulsebridge::serial::LineLink;
use pulsebridge::serial::transport::Transport;

use crate::mock_hw::{ManualClock, MockHardware, RecordingStatus};

/// Byte pipe: the peer writes into `rx`, the firmware writes into `tx`.
#[derive(Default)]
struct Pipe {
    rx: VecDeque<u8>,
    tx: Vec<u8>,
}

impl Pipe {
    fn send(&mut self, bytes: &[u8]) {
        self.rx.extend(bytes.iter().copied());
    }
}

impl Transport for Pipe {
    type Error = ();

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, ()> {
        let n = buf.len().min(self.rx.len());
        for (slot, byte) in buf.iter_mut().zip(self.rx.drain(..n)) {
            *slot = byte;
        }
        Ok(n)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, ()> {
        self.tx.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> Result<(), ()> {
        Ok(())
    }
}

struct Bench {
    ctrl: Controller,
    clock: ManualClock,
    hw: MockHardware,
    link: LineLink<Pipe>,
    status: RecordingStatus,
}

impl Bench {
    fn new() -> Self {
        let mut bench = Self {
            ctrl: Controller::new(SystemConfig::default()),
            clock: ManualClock::at(0),
            hw: MockHardware::new(),
            link: LineLink::new(Pipe::default()),
            status: RecordingStatus::new(),
        };
        bench.ctrl.start(&mut bench.hw);
        bench
    }

    fn run_for(&mut self, ms: u32) {
        for _ in 0..ms {
            self.clock.advance(1);
            let now = self.clock.now();
            self.ctrl
                .poll(now, &mut self.hw, &mut self.link, &mut self.status);
        }
    }
}

#[test]
fn crlf_command_drives_channel3() {
    let mut bench = Bench::new();
    bench.link.transport_mut().send(b"3,150\r\n");
    bench.run_for(1);
    assert_eq!(bench.hw.output(ChannelId::Ch3), Level::High);
    assert_eq!(bench.ctrl.channel3_pulse_ms(), 150);
    bench.run_for(150);
    assert_eq!(bench.hw.output(ChannelId::Ch3), Level::Low);
}

#[test]
fn burst_of_lines_is_applied_one_per_cycle() {
    let mut bench = Bench::new();
    bench.link.transport_mut().send(b"1\n2\n3\n");
    bench.run_for(1);
    assert!(bench.ctrl.is_output_active(ChannelId::Ch1));
    assert!(!bench.ctrl.is_output_active(ChannelId::Ch2));
    bench.run_for(2);
    assert!(bench.ctrl.is_output_active(ChannelId::Ch2));
    assert!(bench.ctrl.is_output_active(ChannelId::Ch3));
}

#[test]
fn overlong_line_is_dropped_and_link_recovers() {
    let mut bench = Bench::new();
    let mut junk = vec![b'1'; 200];
    junk.push(b'\n');
    bench.link.transport_mut().send(&junk);
    bench.link.transport_mut().send(b"2\n");
    bench.run_for(20);
    assert_eq!(bench.hw.writes_to(ChannelId::Ch1, Level::High), 0);
    assert_eq!(bench.hw.writes_to(ChannelId::Ch2, Level::High), 1);
}

#[test]
fn press_is_written_as_digit_line() {
    let mut bench = Bench::new();
    bench.hw.press(InputId::Switch1);
    bench.run_for(60);
    bench.hw.release(InputId::Switch1);
    bench.hw.press(InputId::Switch2);
    bench.run_for(60);
    assert_eq!(bench.link.transport().tx, b"1\n2\n");
}
