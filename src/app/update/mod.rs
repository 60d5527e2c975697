mod core;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Effect {
    SaveSettings,
    QueryDisplay,
    LaunchGame,
    Exit,
}
