//! End-to-end controller behaviour against mock adapters.
//!
//! Every test drives the controller at 1 ms steps from a manual clock, the
//! same cadence the firmware loop runs at.

use pulsebridge::app::controller::Controller;
use pulsebridge::app::events::Notification;
use pulsebridge::app::ports::{ChannelId, InputId, Level};
use pulsebridge::app::snapshot::Direction;
use pulsebridge::clock::Clock;
use pulsebridge::config::{BLACK, SystemConfig, WHITE};
use pulsebridge::error::SerialError;

use crate::mock_hw::{HwCall, ManualClock, MockHardware, MockLink, RecordingStatus};

struct Rig {
    ctrl: Controller,
    clock: ManualClock,
    hw: MockHardware,
    link: MockLink,
    status: RecordingStatus,
}

impl Rig {
    fn at(start_ms: u32) -> Self {
        let mut rig = Self {
            ctrl: Controller::new(SystemConfig::default()),
            clock: ManualClock::at(start_ms),
            hw: MockHardware::new(),
            link: MockLink::new(),
            status: RecordingStatus::new(),
        };
        rig.ctrl.start(&mut rig.hw);
        rig
    }

    fn new() -> Self {
        Self::at(1_000)
    }

    /// One poll cycle at the current time.
    fn tick(&mut self) {
        let now = self.clock.now();
        self.ctrl
            .poll(now, &mut self.hw, &mut self.link, &mut self.status);
    }

    /// Advance `ms` and poll once.
    fn step(&mut self, ms: u32) {
        self.clock.advance(ms);
        self.tick();
    }

    /// Poll every millisecond for `ms` milliseconds.
    fn run_for(&mut self, ms: u32) {
        for _ in 0..ms {
            self.step(1);
        }
    }
}

// ── Startup ───────────────────────────────────────────────────

#[test]
fn start_drives_outputs_low_and_blanks_strip() {
    let rig = Rig::new();
    assert_eq!(
        rig.hw.calls,
        [
            HwCall::Write(ChannelId::Ch1, Level::Low),
            HwCall::Write(ChannelId::Ch2, Level::Low),
            HwCall::Write(ChannelId::Ch3, Level::Low),
            HwCall::Show(BLACK),
        ]
    );
    assert!(!rig.hw.light_on());
}

// ── Switch 1 ──────────────────────────────────────────────────

#[test]
fn switch1_press_full_timeline() {
    let mut rig = Rig::new();
    rig.hw.press(InputId::Switch1);
    rig.tick(); // t=1000, raw change seen

    rig.run_for(49); // t=1049
    assert!(rig.link.sent.is_empty());
    assert_eq!(rig.hw.output(ChannelId::Ch1), Level::Low);

    rig.step(1); // t=1050, debounce window met
    assert_eq!(rig.link.sent, [Notification::Button1Pressed]);
    assert_eq!(rig.hw.output(ChannelId::Ch1), Level::High);
    assert_eq!(rig.hw.output(ChannelId::Ch2), Level::High);
    assert_eq!(rig.hw.output(ChannelId::Ch3), Level::Low);
    assert_eq!(rig.hw.shown, Some(WHITE));

    rig.run_for(59); // t=1109
    assert_eq!(rig.hw.output(ChannelId::Ch1), Level::High);
    rig.step(1); // t=1110
    assert_eq!(rig.hw.output(ChannelId::Ch1), Level::Low);
    assert_eq!(rig.hw.output(ChannelId::Ch2), Level::Low);
    assert!(rig.hw.light_on());

    rig.run_for(39); // t=1149
    assert!(rig.hw.light_on());
    rig.step(1); // t=1150
    assert!(!rig.hw.light_on());
    assert!(!rig.ctrl.is_light_active());

    assert_eq!(rig.link.wire(), b"1\n");
    assert_eq!(rig.hw.writes_to(ChannelId::Ch1, Level::High), 1);
    // start + expiry
    assert_eq!(rig.hw.writes_to(ChannelId::Ch1, Level::Low), 2);
}

#[test]
fn held_switch_triggers_once_then_rearms_after_release() {
    let mut rig = Rig::new();
    rig.hw.press(InputId::Switch1);
    rig.run_for(500);
    assert_eq!(rig.link.sent.len(), 1);
    assert_eq!(rig.hw.writes_to(ChannelId::Ch1, Level::High), 1);

    rig.hw.release(InputId::Switch1);
    rig.run_for(60);
    assert_eq!(rig.link.sent.len(), 1);

    rig.hw.press(InputId::Switch1);
    rig.run_for(60);
    assert_eq!(rig.link.sent.len(), 2);
    assert_eq!(rig.hw.writes_to(ChannelId::Ch1, Level::High), 2);
}

#[test]
fn contact_chatter_is_ignored() {
    let mut rig = Rig::new();
    for i in 0..20 {
        if i % 2 == 0 {
            rig.hw.press(InputId::Switch1);
        } else {
            rig.hw.release(InputId::Switch1);
        }
        rig.run_for(10);
    }
    assert!(rig.link.sent.is_empty());

    rig.hw.press(InputId::Switch1);
    rig.run_for(60);
    assert_eq!(rig.link.sent, [Notification::Button1Pressed]);
}

// ── Switch 2 ──────────────────────────────────────────────────

#[test]
fn switch2_only_notifies() {
    let mut rig = Rig::new();
    rig.hw.press(InputId::Switch2);
    rig.run_for(60);

    assert_eq!(rig.link.sent, [Notification::Button2Pressed]);
    assert_eq!(rig.link.wire(), b"2\n");
    for ch in ChannelId::ALL {
        assert_eq!(rig.hw.writes_to(ch, Level::High), 0);
    }
    assert!(!rig.hw.light_on());
}

#[test]
fn both_switches_in_one_cycle_notify_in_order() {
    let mut rig = Rig::new();
    rig.hw.press(InputId::Switch1);
    rig.hw.press(InputId::Switch2);
    rig.run_for(51);
    assert_eq!(
        rig.link.sent,
        [Notification::Button1Pressed, Notification::Button2Pressed]
    );
}

// ── Serial commands ───────────────────────────────────────────

#[test]
fn channel3_duration_is_remembered() {
    let mut rig = Rig::new();
    rig.link.push_line("3,200");
    rig.tick(); // t=1000
    assert_eq!(rig.hw.output(ChannelId::Ch3), Level::High);
    assert_eq!(rig.ctrl.channel3_pulse_ms(), 200);

    rig.run_for(199);
    assert_eq!(rig.hw.output(ChannelId::Ch3), Level::High);
    rig.step(1); // t=1200
    assert_eq!(rig.hw.output(ChannelId::Ch3), Level::Low);

    rig.link.push_line("3");
    rig.step(1); // t=1201
    assert_eq!(rig.hw.output(ChannelId::Ch3), Level::High);
    rig.run_for(199); // t=1400
    assert_eq!(rig.hw.output(ChannelId::Ch3), Level::High);
    rig.step(1); // t=1401
    assert_eq!(rig.hw.output(ChannelId::Ch3), Level::Low);

    let rec = rig.ctrl.last_command().unwrap();
    assert_eq!(rec.code, '3');
    assert_eq!(rec.direction, Direction::Received);
}

#[test]
fn malformed_duration_keeps_previous_length() {
    let mut rig = Rig::new();
    rig.link.push_line("3,200");
    rig.tick();
    rig.link.push_line("3,abc");
    rig.step(1);
    assert_eq!(rig.ctrl.channel3_pulse_ms(), 200);
    assert!(rig.ctrl.is_output_active(ChannelId::Ch3));
}

#[test]
fn retrigger_extends_pulse_without_extra_edges() {
    let mut rig = Rig::new();
    rig.link.push_line("1");
    rig.tick(); // t=1000
    rig.run_for(30);
    rig.link.push_line("1");
    rig.tick(); // t=1030, restart

    rig.run_for(59); // t=1089
    assert_eq!(rig.hw.output(ChannelId::Ch1), Level::High);
    rig.step(1); // t=1090
    assert_eq!(rig.hw.output(ChannelId::Ch1), Level::Low);
    assert_eq!(rig.hw.writes_to(ChannelId::Ch1, Level::Low), 2);
}

#[test]
fn zero_duration_pulse_ends_in_same_cycle() {
    let mut rig = Rig::new();
    rig.link.push_line("3,0");
    rig.tick();
    assert_eq!(rig.hw.output(ChannelId::Ch3), Level::Low);
    assert_eq!(rig.hw.writes_to(ChannelId::Ch3, Level::High), 1);
    assert_eq!(rig.hw.writes_to(ChannelId::Ch3, Level::Low), 2);
    assert!(!rig.ctrl.is_output_active(ChannelId::Ch3));
}

#[test]
fn unrecognized_lines_change_nothing() {
    let mut rig = Rig::new();
    let before = rig.hw.calls.len();
    for text in ["9", "", "hello", "4,100"] {
        rig.link.push_line(text);
        rig.step(1);
    }
    assert_eq!(rig.hw.calls.len(), before);
    assert!(rig.ctrl.last_command().is_none());
}

#[test]
fn one_line_consumed_per_cycle() {
    let mut rig = Rig::new();
    rig.link.push_line("1");
    rig.link.push_line("2");
    rig.tick();
    assert!(rig.ctrl.is_output_active(ChannelId::Ch1));
    assert!(!rig.ctrl.is_output_active(ChannelId::Ch2));
    rig.step(1);
    assert!(rig.ctrl.is_output_active(ChannelId::Ch2));
}

#[test]
fn pulse_expiry_survives_counter_wrap() {
    let mut rig = Rig::at(u32::MAX - 20);
    rig.link.push_line("2");
    rig.tick();
    rig.run_for(59);
    assert_eq!(rig.hw.output(ChannelId::Ch2), Level::High);
    rig.step(1);
    assert_eq!(rig.hw.output(ChannelId::Ch2), Level::Low);
}

// ── Status rendering ──────────────────────────────────────────

#[test]
fn renders_are_throttled_to_interval() {
    let mut rig = Rig::new();
    rig.tick(); // t=1000, first render is immediate
    assert_eq!(rig.status.renders.len(), 1);
    rig.run_for(9);
    assert_eq!(rig.status.renders.len(), 1);
    rig.step(1);
    assert_eq!(rig.status.renders.len(), 2);
    rig.run_for(90); // t=1100
    assert_eq!(rig.status.renders.len(), 11);
}

#[test]
fn status_frame_reflects_press() {
    let mut rig = Rig::new();
    rig.hw.press(InputId::Switch1);
    rig.tick();
    rig.run_for(50); // t=1050 press, render in same cycle

    let frame = rig.status.last_frame().unwrap();
    let lines: Vec<&str> = frame.lines().collect();
    assert_eq!(lines[1], "IN  SW1: LOW");
    assert_eq!(lines[3], "OUT CH1: HIGH");
    assert_eq!(lines[4], "OUT CH2: HIGH");
    assert_eq!(lines[6], "LEDs: ON");
    assert_eq!(lines[7], "Serial: tx 1 (0s)");
}

// ── Failure paths ─────────────────────────────────────────────

#[test]
fn input_read_failure_skips_switches() {
    let mut rig = Rig::new();
    rig.hw.fail_reads = true;
    rig.hw.press(InputId::Switch1);
    rig.run_for(100);
    assert!(rig.link.sent.is_empty());
    assert_eq!(rig.ctrl.poll_count(), 100);

    // Recovers once reads succeed again.
    rig.hw.fail_reads = false;
    rig.run_for(51);
    assert_eq!(rig.link.sent, [Notification::Button1Pressed]);
}

#[test]
fn notify_failure_still_pulses_locally() {
    let mut rig = Rig::new();
    rig.link.fail_notify = true;
    rig.hw.press(InputId::Switch1);
    rig.run_for(51);
    assert!(rig.ctrl.is_output_active(ChannelId::Ch1));
    assert!(rig.hw.light_on());
    assert!(rig.ctrl.last_command().is_none());
}

#[test]
fn output_write_failure_keeps_timing() {
    let mut rig = Rig::new();
    rig.hw.fail_writes = true;
    rig.link.push_line("1");
    rig.tick();
    assert!(rig.ctrl.is_output_active(ChannelId::Ch1));
    rig.run_for(60);
    assert!(!rig.ctrl.is_output_active(ChannelId::Ch1));
}

#[test]
fn light_failure_does_not_stop_cycle() {
    let mut rig = Rig::new();
    rig.hw.fail_show = true;
    rig.hw.press(InputId::Switch1);
    rig.run_for(51);
    assert!(rig.ctrl.is_light_active());
    assert!(!rig.hw.light_on());
    assert_eq!(rig.link.sent, [Notification::Button1Pressed]);
    rig.run_for(100);
    assert!(!rig.ctrl.is_light_active());
}

#[test]
fn serial_errors_are_skipped() {
    let mut rig = Rig::new();
    rig.link.push_error(SerialError::LineTooLong);
    rig.link.push_line("1");
    rig.tick();
    assert!(!rig.ctrl.is_output_active(ChannelId::Ch1));
    rig.step(1);
    assert!(rig.ctrl.is_output_active(ChannelId::Ch1));
}
