//! Connection parameters and protocol selection.

use std::time::Duration;

/// Serial parity setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Parity {
    #[default]
    None,
    Even,
    Odd,
}

impl Parity {
    /// Legacy single-letter configuration values: `E` is even, `O` is odd,
    /// anything else is none.
    #[must_use]
    pub fn from_config_letter(letter: &str) -> Self {
        match letter {
            "E" => Parity::Even,
            "O" => Parity::Odd,
            _ => Parity::None,
        }
    }
}

/// Which wire protocol the receiver speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    /// Packed binary SBUS frames (16 channels).
    Sbus,
    /// Line-oriented `I <c0> … <c7>` sentences (8 channels).
    Ascii,
}

impl Protocol {
    /// Legacy selection rule preserved from earlier deployments: ports named
    /// like `…sbus-rc` carry SBUS, everything else the ASCII sentences.
    /// Prefer setting [`ConnectionConfig::protocol`] explicitly.
    #[must_use]
    pub fn from_port_name(port: &str) -> Self {
        if port.contains("sbus-rc") {
            Protocol::Sbus
        } else {
            Protocol::Ascii
        }
    }
}

/// Immutable serial connection parameters, resolved by the configuration
/// layer before the receiver starts.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Device path, e.g. `/dev/ttyUSB0` or `/dev/sbus-rc`.
    pub port: String,
    pub baud_rate: u32,
    pub parity: Parity,
    /// 1 or 2 stop bits.
    pub stop_bits: u8,
    /// Bound on every blocking read.
    pub timeout: Duration,
    /// Explicit protocol choice; `None` falls back to the port-name rule.
    pub protocol: Option<Protocol>,
}

impl ConnectionConfig {
    /// Typical SBUS receiver hardware: 100000 baud, even parity, 2 stop bits.
    #[must_use]
    pub fn sbus(port: impl Into<String>) -> Self {
        Self {
            port: port.into(),
            baud_rate: 100_000,
            parity: Parity::Even,
            stop_bits: 2,
            timeout: Duration::from_millis(20),
            protocol: Some(Protocol::Sbus),
        }
    }

    /// ASCII sentence link: 8N1 at 115200 baud.
    #[must_use]
    pub fn ascii(port: impl Into<String>) -> Self {
        Self {
            port: port.into(),
            baud_rate: 115_200,
            parity: Parity::None,
            stop_bits: 1,
            timeout: Duration::from_millis(100),
            protocol: Some(Protocol::Ascii),
        }
    }

    /// The protocol this connection carries: the explicit choice when set,
    /// otherwise the legacy port-name rule.
    #[must_use]
    pub fn resolve_protocol(&self) -> Protocol {
        self.protocol
            .unwrap_or_else(|| Protocol::from_port_name(&self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parity_letters() {
        assert_eq!(Parity::from_config_letter("E"), Parity::Even);
        assert_eq!(Parity::from_config_letter("O"), Parity::Odd);
        assert_eq!(Parity::from_config_letter("N"), Parity::None);
        assert_eq!(Parity::from_config_letter(""), Parity::None);
    }

    #[test]
    fn test_port_name_rule() {
        assert_eq!(Protocol::from_port_name("/dev/sbus-rc"), Protocol::Sbus);
        assert_eq!(Protocol::from_port_name("/dev/tty-sbus-rc0"), Protocol::Sbus);
        assert_eq!(Protocol::from_port_name("/dev/ttyUSB0"), Protocol::Ascii);
    }

    #[test]
    fn test_explicit_protocol_wins_over_port_name() {
        let mut config = ConnectionConfig::ascii("/dev/sbus-rc");
        assert_eq!(config.resolve_protocol(), Protocol::Ascii);

        config.protocol = None;
        assert_eq!(config.resolve_protocol(), Protocol::Sbus);
    }

    #[test]
    fn test_sbus_defaults_match_receiver_hardware() {
        let config = ConnectionConfig::sbus("/dev/sbus-rc");
        assert_eq!(config.baud_rate, 100_000);
        assert_eq!(config.parity, Parity::Even);
        assert_eq!(config.stop_bits, 2);
    }
}
