use crate::Interop;

/// Customized config for creating an [`Interop`] instance.
///
/// ```
/// use sdp_interop::InteropConfig;
///
/// let interop = InteropConfig::new()
///     .set_drop_simulcast_groups(false)
///     .build();
/// ```
///
/// Configs implement [`Clone`] to help create one `Interop` per peer connection.
#[derive(Debug, Clone)]
pub struct InteropConfig {
    pub(crate) trust_input_format: bool,
    pub(crate) drop_simulcast_groups: bool,
}

impl InteropConfig {
    /// Creates a new default config.
    pub fn new() -> Self {
        InteropConfig::default()
    }

    /// Skip the format heuristic.
    ///
    /// By default each transform classifies its input and returns it unchanged
    /// if it already looks like the target representation. A Unified Plan
    /// session with at most three m-lines named `audio`, `video` and `data`
    /// looks exactly like Plan B and would be passed through untouched.
    ///
    /// When enabled, [`Interop::to_plan_b`] always treats its input as Unified
    /// Plan and [`Interop::to_unified_plan`] always treats it as Plan B.
    pub fn set_trust_input_format(mut self, enabled: bool) -> Self {
        self.trust_input_format = enabled;
        self
    }

    /// Whether the format heuristic is skipped.
    ///
    /// ```
    /// # use sdp_interop::Interop;
    /// let config = Interop::builder();
    ///
    /// // Defaults to false.
    /// assert_eq!(config.trust_input_format(), false);
    /// ```
    pub fn trust_input_format(&self) -> bool {
        self.trust_input_format
    }

    /// Drop `a=ssrc-group:SIM` when going from Plan B to Unified Plan.
    ///
    /// Unified Plan receivers generally can't be told about simulcast this way,
    /// so the group is dropped and each layer becomes its own m-line. Turn this
    /// off to keep the layers together on one m-line.
    pub fn set_drop_simulcast_groups(mut self, enabled: bool) -> Self {
        self.drop_simulcast_groups = enabled;
        self
    }

    /// Whether simulcast groups are dropped.
    ///
    /// ```
    /// # use sdp_interop::Interop;
    /// let config = Interop::builder();
    ///
    /// // Defaults to true.
    /// assert_eq!(config.drop_simulcast_groups(), true);
    /// ```
    pub fn drop_simulcast_groups(&self) -> bool {
        self.drop_simulcast_groups
    }

    /// Create a [`Interop`] from the configuration.
    pub fn build(self) -> Interop {
        Interop::new_from_config(self)
    }
}

impl Default for InteropConfig {
    fn default() -> Self {
        Self {
            trust_input_format: false,
            drop_simulcast_groups: true,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        let config = InteropConfig::new();
        assert!(!config.trust_input_format());
        assert!(config.drop_simulcast_groups());
    }

    #[test]
    fn setters_chain() {
        let config = InteropConfig::new()
            .set_trust_input_format(true)
            .set_drop_simulcast_groups(false);
        assert!(config.trust_input_format());
        assert!(!config.drop_simulcast_groups());
    }
}
