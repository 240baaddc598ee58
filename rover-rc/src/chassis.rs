//! Chassis handle the receiver drives.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rc_core::Chassis;

/// A chassis-contract implementation backed by an atomic enable flag.
///
/// Owns the `use_rc_input` flag the web layer polls; the receiver loop is
/// the single writer, readers tolerate one cycle of staleness. Motion
/// commands are forwarded to the log. A real integration implements
/// [`Chassis`] on its own chassis type the same way and routes them to the
/// wheel controllers.
#[derive(Debug, Clone)]
pub struct AtomicChassis {
    inner: Arc<ChassisState>,
}

#[derive(Debug)]
struct ChassisState {
    min_radius: f64,
    max_radius: f64,
    use_rc_input: AtomicBool,
}

impl AtomicChassis {
    #[must_use]
    pub fn new(min_radius: f64, max_radius: f64) -> Self {
        Self {
            inner: Arc::new(ChassisState {
                min_radius,
                max_radius,
                use_rc_input: AtomicBool::new(false),
            }),
        }
    }

    /// Whether RC currently owns the drive inputs.
    #[must_use]
    pub fn use_rc_input(&self) -> bool {
        self.inner.use_rc_input.load(Ordering::Relaxed)
    }
}

impl Chassis for AtomicChassis {
    fn min_radius(&self) -> f64 {
        self.inner.min_radius
    }

    fn max_radius(&self) -> f64 {
        self.inner.max_radius
    }

    fn set_use_rc_input(&self, enabled: bool) {
        self.inner.use_rc_input.store(enabled, Ordering::Relaxed);
    }

    fn ensure_ready(&self) {}

    fn move_velocity_radius(&self, throttle: f64, radius: f64) {
        if radius.is_infinite() {
            log::info!("chassis: throttle {throttle:.1}% straight");
        } else {
            log::info!("chassis: throttle {throttle:.1}% radius {radius:.2}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enable_flag_round_trip() {
        let chassis = AtomicChassis::new(0.5, 5.0);
        assert!(!chassis.use_rc_input());

        chassis.set_use_rc_input(true);
        assert!(chassis.use_rc_input());

        // Clones share the flag.
        let other = chassis.clone();
        other.set_use_rc_input(false);
        assert!(!chassis.use_rc_input());
    }

    #[test]
    fn test_geometry_limits() {
        let chassis = AtomicChassis::new(0.45, 7.1);
        assert_eq!(chassis.min_radius(), 0.45);
        assert_eq!(chassis.max_radius(), 7.1);
    }
}
