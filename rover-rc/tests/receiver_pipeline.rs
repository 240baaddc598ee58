//! End-to-end pipeline test: SBUS bytes in, chassis enable flag out.

use rc_core::{Chassis, LinkError, Protocol, RcLoop, RunState, SerialLink};
use rover_rc::AtomicChassis;
use sbus_proto::{pack_channels, SbusDecoder, FOOTER, HEADER};

use std::collections::VecDeque;

/// Serves scripted byte chunks; an explicitly empty chunk simulates one read
/// timeout. Cancels the loop once the script runs dry, so `RcLoop::run`
/// returns instead of polling an idle link forever.
struct ScriptedLink {
    chunks: VecDeque<Vec<u8>>,
    run: RunState,
}

impl SerialLink for ScriptedLink {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, LinkError> {
        let Some(front) = self.chunks.front_mut() else {
            self.run.cancel();
            return Ok(0);
        };
        if front.is_empty() {
            self.chunks.pop_front();
            return Ok(0);
        }
        let n = buf.len().min(front.len());
        buf[..n].copy_from_slice(&front[..n]);
        front.drain(..n);
        if front.is_empty() {
            self.chunks.pop_front();
        }
        Ok(n)
    }

    fn write(&mut self, buf: &[u8]) -> Result<usize, LinkError> {
        Ok(buf.len())
    }
}

/// A full wire frame (with a leading resync footer) for the given raw
/// channel values.
fn frame(channels: &[u16; 16]) -> Vec<u8> {
    let mut bytes = vec![FOOTER, HEADER];
    bytes.extend_from_slice(&pack_channels(channels));
    bytes.push(0x00); // flags
    bytes.push(FOOTER);
    bytes
}

fn run_frames(frames: Vec<u8>, chassis: AtomicChassis) {
    let run = RunState::new();
    let link = ScriptedLink {
        // The empty first chunk lets the startup drain find a quiet port
        // instead of eating the scripted frames.
        chunks: VecDeque::from([Vec::new(), frames]),
        run: run.clone(),
    };
    let decoder = SbusDecoder::new(link);
    let mut rc_loop = RcLoop::new(Box::new(decoder), Protocol::Sbus, chassis, run);
    rc_loop.run();
}

#[test]
fn test_enabled_frame_arms_rc_input() {
    // Raw 1811 calibrates to ~2000: enable switch on, full throttle.
    let mut channels = [992u16; 16];
    channels[2] = 1811;
    channels[4] = 1811;

    let chassis = AtomicChassis::new(0.5, 5.0);
    run_frames(frame(&channels), chassis.clone());

    assert!(chassis.use_rc_input());
}

#[test]
fn test_disabled_frame_drops_rc_input() {
    // Raw 172 calibrates to ~1000: enable switch off.
    let mut channels = [992u16; 16];
    channels[4] = 172;

    let chassis = AtomicChassis::new(0.5, 5.0);
    chassis.set_use_rc_input(true);
    run_frames(frame(&channels), chassis.clone());

    assert!(!chassis.use_rc_input());
}
