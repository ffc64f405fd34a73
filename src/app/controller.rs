//! Controller — the hexagonal core.
//!
//! [`Controller`] owns both debouncers, the three output pulse timers, the
//! light pulse and the render throttle.  It exposes a single non-blocking
//! [`poll`](Controller::poll) that the main loop calls as often as it can.
//! All I/O flows through port traits passed in per call, so the whole
//! controller is testable with mock adapters and a synthetic clock.
//!
//! ```text
//!  SerialLink ──▶ ┌──────────────────────────────┐ ──▶ OutputPort
//!  InputPort  ──▶ │          Controller           │ ──▶ LightSink
//!                 │ Debounce · Pulses · Throttle  │ ──▶ StatusSink
//!                 └──────────────────────────────┘ ──▶ SerialLink
//! ```
//!
//! ## Cycle order
//!
//! 1. serial command dispatch
//! 2. switch 1, then switch 2
//! 3. pulse expiry
//! 4. throttled status render
//!
//! Expiry runs after activation so a freshly armed pulse is compared
//! against its own start time first; only a 0 ms pulse expires in the cycle
//! that armed it.

use log::{debug, info, warn};

use crate::clock::Instant;
use crate::config::{BLACK, SystemConfig};
use crate::drivers::button::Debouncer;

use super::commands::InboundCommand;
use super::events::Notification;
use super::ports::{
    ChannelId, InputId, InputPort, Level, LightSink, OutputPort, SerialLink, StatusSink,
};
use super::pulse::{LightPulse, PulseTimer};
use super::snapshot::{CommandRecord, Direction, RenderThrottle, Snapshot};

// ───────────────────────────────────────────────────────────────
// Controller
// ───────────────────────────────────────────────────────────────

/// The controller orchestrates all domain logic.
pub struct Controller {
    config: SystemConfig,
    switch1: Debouncer,
    switch2: Debouncer,
    outputs: [PulseTimer; 3],
    /// Current channel-3 pulse length; updated by `3,<ms>` commands.
    channel3_pulse_ms: u32,
    light: LightPulse,
    throttle: RenderThrottle,
    last_command: Option<CommandRecord>,
    poll_count: u64,
}

impl Controller {
    /// Construct the controller from configuration.
    ///
    /// Does **not** touch hardware — call [`start`](Self::start) next.
    pub fn new(config: SystemConfig) -> Self {
        Self {
            switch1: Debouncer::new(config.debounce_ms),
            switch2: Debouncer::new(config.debounce_ms),
            outputs: [PulseTimer::new(); 3],
            channel3_pulse_ms: config.channel3_pulse_ms,
            light: LightPulse::new(config.light_colour),
            throttle: RenderThrottle::new(config.render_interval_ms),
            last_command: None,
            poll_count: 0,
            config,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Drive every output LOW and blank the strip.
    pub fn start(&mut self, hw: &mut (impl OutputPort + LightSink)) {
        for ch in ChannelId::ALL {
            if let Err(e) = hw.write_output(ch, Level::Low) {
                warn!("start: {:?} idle write failed: {}", ch, e);
            }
        }
        hw.set_all(BLACK);
        if let Err(e) = hw.show() {
            warn!("start: strip blank failed: {}", e);
        }
        info!(
            "Controller started (debounce={}ms pulse={}ms ch3={}ms light={}ms)",
            self.config.debounce_ms,
            self.config.channel_pulse_ms,
            self.channel3_pulse_ms,
            self.config.light_pulse_ms
        );
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Run one full poll cycle at `now`.  Never blocks.
    pub fn poll(
        &mut self,
        now: Instant,
        hw: &mut (impl InputPort + OutputPort + LightSink),
        link: &mut impl SerialLink,
        status: &mut impl StatusSink,
    ) {
        self.poll_count += 1;

        // 1. Serial command
        match link.read_line() {
            Ok(Some(line)) => {
                debug!("rx line: {:?}", line.as_str());
                let cmd = InboundCommand::parse(&line);
                self.handle_command(cmd, now, hw);
            }
            Ok(None) => {}
            Err(e) => warn!("serial rx: {} (ignored)", e),
        }

        // 2. Switch 1: local pulse + notify peer
        if self.poll_switch(InputId::Switch1, now, hw) {
            info!("Switch 1 pressed -> ch1+ch2, light, notify");
            self.activate_output(ChannelId::Ch1, now, self.config.channel_pulse_ms, hw);
            self.activate_output(ChannelId::Ch2, now, self.config.channel_pulse_ms, hw);
            self.activate_light(now, hw);
            self.send(Notification::Button1Pressed, now, link);
        }

        // 3. Switch 2: notify peer only
        if self.poll_switch(InputId::Switch2, now, hw) {
            info!("Switch 2 pressed -> notify");
            self.send(Notification::Button2Pressed, now, link);
        }

        // 4. Expiry
        self.expire(now, hw);

        // 5. Throttled render
        if self.throttle.ready(now) {
            status.render(&self.snapshot(now));
        }
    }

    // ── Command handling ──────────────────────────────────────

    /// Apply one inbound command.
    pub fn handle_command(&mut self, cmd: InboundCommand, now: Instant, hw: &mut impl OutputPort) {
        match cmd {
            InboundCommand::ActivateChannel1 => {
                self.activate_output(ChannelId::Ch1, now, self.config.channel_pulse_ms, hw);
            }
            InboundCommand::ActivateChannel2 => {
                self.activate_output(ChannelId::Ch2, now, self.config.channel_pulse_ms, hw);
            }
            InboundCommand::ActivateChannel3 { duration_ms } => {
                if let Some(ms) = duration_ms {
                    info!("ch3 pulse length {} -> {} ms", self.channel3_pulse_ms, ms);
                    self.channel3_pulse_ms = ms;
                }
                self.activate_output(ChannelId::Ch3, now, self.channel3_pulse_ms, hw);
            }
            InboundCommand::Unrecognized => {
                warn!("unrecognized command ignored");
                return;
            }
        }

        if let Some(code) = cmd.wire_char() {
            self.last_command = Some(CommandRecord {
                code,
                direction: Direction::Received,
                at: now,
            });
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Build a status snapshot for `now`.
    pub fn snapshot(&self, now: Instant) -> Snapshot {
        let level = |t: &PulseTimer| Level::from(t.is_active());
        Snapshot {
            taken_at: now,
            inputs: [self.switch1.last_raw(), self.switch2.last_raw()],
            outputs: [
                level(&self.outputs[0]),
                level(&self.outputs[1]),
                level(&self.outputs[2]),
            ],
            channel3_pulse_ms: self.channel3_pulse_ms,
            light_on: self.light.is_active(),
            last_command: self.last_command,
        }
    }

    pub fn is_output_active(&self, channel: ChannelId) -> bool {
        self.outputs[channel.index()].is_active()
    }

    pub fn is_light_active(&self) -> bool {
        self.light.is_active()
    }

    pub fn channel3_pulse_ms(&self) -> u32 {
        self.channel3_pulse_ms
    }

    pub fn last_command(&self) -> Option<CommandRecord> {
        self.last_command
    }

    /// Total poll cycles executed since startup.
    pub fn poll_count(&self) -> u64 {
        self.poll_count
    }

    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    // ── Internal ──────────────────────────────────────────────

    /// Sample and debounce one switch; `true` on a press trigger.
    fn poll_switch(&mut self, input: InputId, now: Instant, hw: &mut impl InputPort) -> bool {
        let raw = match hw.read_input(input) {
            Ok(level) => level,
            Err(e) => {
                warn!("{:?} read failed: {} (skipped this cycle)", input, e);
                return false;
            }
        };

        let debouncer = match input {
            InputId::Switch1 => &mut self.switch1,
            InputId::Switch2 => &mut self.switch2,
        };

        match debouncer.poll(raw, now) {
            Some(edge) => {
                debug!("{:?} edge {:?} -> {:?}", input, edge.from, edge.to);
                edge.press
            }
            None => false,
        }
    }

    fn activate_output(
        &mut self,
        channel: ChannelId,
        now: Instant,
        duration_ms: u32,
        hw: &mut impl OutputPort,
    ) {
        self.outputs[channel.index()].activate(now, duration_ms);
        if let Err(e) = hw.write_output(channel, Level::High) {
            warn!("{:?} HIGH write failed: {}", channel, e);
        }
        debug!("{:?} HIGH for {} ms", channel, duration_ms);
    }

    fn activate_light(&mut self, now: Instant, hw: &mut impl LightSink) {
        self.light.activate(now, self.config.light_pulse_ms);
        hw.set_all(self.light.colour());
        if let Err(e) = hw.show() {
            warn!("light on failed: {}", e);
        }
    }

    fn send(&mut self, notification: Notification, now: Instant, link: &mut impl SerialLink) {
        match link.notify(notification) {
            Ok(()) => {
                self.last_command = Some(CommandRecord {
                    code: notification.wire_code().as_char(),
                    direction: Direction::Sent,
                    at: now,
                });
            }
            Err(e) => warn!("notify {:?} failed: {}", notification, e),
        }
    }

    fn expire(&mut self, now: Instant, hw: &mut (impl OutputPort + LightSink)) {
        for ch in ChannelId::ALL {
            if self.outputs[ch.index()].poll(now) {
                if let Err(e) = hw.write_output(ch, Level::Low) {
                    warn!("{:?} LOW write failed: {}", ch, e);
                }
                debug!("{:?} LOW", ch);
            }
        }

        if self.light.poll(now) {
            hw.set_all(BLACK);
            if let Err(e) = hw.show() {
                warn!("light off failed: {}", e);
            }
        }
    }
}
