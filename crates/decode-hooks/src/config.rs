//! Decoder configuration

use decode_hooks_rules::Composer;

/// Options controlling how a `Decoder` treats its input
#[derive(Debug, Clone)]
pub struct DecoderConfig {
    /// Hook chain applied to every field
    pub composer: Composer,
    /// Fail on input keys that match no schema field
    pub error_unused: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            composer: Composer::all(),
            error_unused: false,
        }
    }
}

impl DecoderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the hook chain
    pub fn with_composer(mut self, composer: Composer) -> Self {
        self.composer = composer;
        self
    }

    /// Reject input keys that match no schema field
    pub fn error_unused(mut self, enabled: bool) -> Self {
        self.error_unused = enabled;
        self
    }
}
