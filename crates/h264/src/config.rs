/// What to do with the bytes after the last start code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TrailingUnitPolicy {
    /// The end of the buffer terminates the final unit
    #[default]
    ImplicitTerminator,
    /// The final unit is dropped unless another start code follows it
    Discard,
}

/// How the SPS walker treats `scaling_list()` payloads of present lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ScalingListHandling {
    /// Read only the presence flags. Any list payload in the stream is then
    /// read as the following fields.
    #[default]
    PresenceOnly,
    /// Read the presence flags and step over each present list's deltas
    Skip,
}

/// Configurable options for a [`ParseSession`](crate::ParseSession)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    /// Handling of the unit after the last start code
    pub trailing_unit: TrailingUnitPolicy,

    /// Strip `00 00 03` escapes from SPS payloads before walking them
    pub emulation_prevention: bool,

    /// Stop after this many units (None = no limit)
    pub max_units: Option<usize>,

    /// Scaling list mode handed to the SPS walker
    pub scaling_lists: ScalingListHandling,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            trailing_unit: TrailingUnitPolicy::default(),
            emulation_prevention: true,
            max_units: None,
            scaling_lists: ScalingListHandling::default(),
        }
    }
}

impl SessionConfig {
    /// Sets the trailing unit policy
    pub fn with_trailing_unit(mut self, policy: TrailingUnitPolicy) -> Self {
        self.trailing_unit = policy;
        self
    }

    /// Enables or disables emulation prevention removal
    pub fn with_emulation_prevention(mut self, enabled: bool) -> Self {
        self.emulation_prevention = enabled;
        self
    }

    /// Caps the number of reported units
    pub fn with_max_units(mut self, max_units: Option<usize>) -> Self {
        self.max_units = max_units;
        self
    }

    /// Sets the scaling list mode
    pub fn with_scaling_lists(mut self, scaling_lists: ScalingListHandling) -> Self {
        self.scaling_lists = scaling_lists;
        self
    }
}
