//! Optional output capabilities, decided once at startup.

/// Which optional output formats this build can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// CSV output, available when built with the `csv` feature.
    pub csv: bool,
}

impl Capabilities {
    /// Probe the capabilities compiled into this binary.
    pub fn detect() -> Self {
        Capabilities {
            csv: cfg!(feature = "csv"),
        }
    }

    /// Capabilities with every optional format switched off.
    pub fn none() -> Self {
        Capabilities { csv: false }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_matches_feature() {
        assert_eq!(Capabilities::detect().csv, cfg!(feature = "csv"));
    }

    #[test]
    fn test_none_disables_csv() {
        assert!(!Capabilities::none().csv);
    }
}
