//! Decode-time configuration (spec.md §9's design note replacing the
//! original source's compile-time `FORCE_SKIP_HEADERS`/`FORCE_VIS_CODE`
//! flags with runtime options).

/// Runtime options controlling a single decode operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecodeOptions {
    /// Shift the detected header/line-sync boundary by this many samples
    /// before resuming demodulation. Positive values skip forward,
    /// negative values back up; zero is the default calibrated offset.
    pub align_add: i64,
    /// Skip calibration-header search and VIS decoding entirely, forcing
    /// the mode with this VIS code. `None` runs the full header/VIS
    /// pipeline.
    pub force_skip_header: Option<u8>,
}

impl DecodeOptions {
    /// The default options: full header search, no sample offset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Force decoding to start directly in the mode for `vis`, skipping
    /// calibration-header search and VIS decode.
    pub fn with_forced_mode(mut self, vis: u8) -> Self {
        self.force_skip_header = Some(vis);
        self
    }

    /// Shift the detected alignment boundary by `samples`.
    pub fn with_align_add(mut self, samples: i64) -> Self {
        self.align_add = samples;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_run_full_pipeline() {
        let opts = DecodeOptions::new();
        assert_eq!(opts.align_add, 0);
        assert_eq!(opts.force_skip_header, None);
    }

    #[test]
    fn builder_methods_set_expected_fields() {
        let opts = DecodeOptions::new().with_forced_mode(95).with_align_add(-12);
        assert_eq!(opts.force_skip_header, Some(95));
        assert_eq!(opts.align_add, -12);
    }
}
