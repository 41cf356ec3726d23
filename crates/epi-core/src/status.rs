//! Health status and infection severity.

use std::fmt;

/// Epidemiological status of one agent.
///
/// `Dead` and `Recovered` are terminal for disease progression.  `Dead`
/// agents stay in the population but are inert.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    #[default]
    Susceptible,
    Exposed,
    Protected,
    Infected,
    Confirmed,
    Recovered,
    Dead,
}

impl Status {
    pub const COUNT: usize = 7;

    /// Every status in declaration order.  Reports list statuses in this order.
    pub const ALL: [Status; Status::COUNT] = [
        Status::Susceptible,
        Status::Exposed,
        Status::Protected,
        Status::Infected,
        Status::Confirmed,
        Status::Recovered,
        Status::Dead,
    ];

    /// Position in [`Status::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Status::Susceptible => "Susceptible",
            Status::Exposed     => "Exposed",
            Status::Protected   => "Protected",
            Status::Infected    => "Infected",
            Status::Confirmed   => "Confirmed",
            Status::Recovered   => "Recovered",
            Status::Dead        => "Dead",
        }
    }

    #[inline]
    pub fn is_dead(self) -> bool {
        self == Status::Dead
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sub-state of an `Infected` agent.  Meaningless for any other status and
/// reset to `Asymptomatic` whenever the agent leaves `Infected`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InfectionSeverity {
    #[default]
    Asymptomatic,
    Hospitalized,
    Severe,
}

impl InfectionSeverity {
    pub const COUNT: usize = 3;

    pub const ALL: [InfectionSeverity; InfectionSeverity::COUNT] = [
        InfectionSeverity::Asymptomatic,
        InfectionSeverity::Hospitalized,
        InfectionSeverity::Severe,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            InfectionSeverity::Asymptomatic => "Asymptomatic",
            InfectionSeverity::Hospitalized => "Hospitalized",
            InfectionSeverity::Severe       => "Severe",
        }
    }

    /// `true` for the severities that occupy a hospital bed.
    #[inline]
    pub fn needs_bed(self) -> bool {
        matches!(self, InfectionSeverity::Hospitalized | InfectionSeverity::Severe)
    }
}

impl fmt::Display for InfectionSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
