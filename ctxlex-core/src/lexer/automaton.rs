use crate::types::MatchedTerminal;

/// A deterministic scanning automaton
///
/// Only the interface the scan driver needs is fixed here; how states and
/// transitions are stored is up to the implementation.
pub trait Automaton {
    type State: Copy;

    /// The state scanning starts from at each position
    fn initial_state(&self) -> Self::State;

    /// Follows the transition on `c`, or `None` when the automaton rejects it
    fn transition(&self, state: Self::State, c: char) -> Option<Self::State>;

    /// Terminals matched when `state` is reached, one per context.
    /// Empty for non-accepting states.
    fn matches(&self, state: Self::State) -> &[MatchedTerminal];
}
