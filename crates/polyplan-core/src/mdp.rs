use std::hash::Hash;

/// Capability interface for finite Markov decision processes.
///
/// Implementors expose a finite, ordered enumeration of states and actions
/// together with pointwise transition, reward, and start-distribution
/// queries. The enumeration order is fixed for the lifetime of the value and
/// becomes the canonical index order used by the solving pipeline and by the
/// mappings it returns.
pub trait Mdp {
    type State: Clone + Eq + Hash;
    type Action: Clone + Eq + Hash;

    /// Ordered, duplicate-free enumeration of all states.
    fn states(&self) -> Vec<Self::State>;

    /// Ordered, duplicate-free enumeration of all actions.
    fn actions(&self) -> Vec<Self::Action>;

    /// Probability in `[0, 1]` of reaching `successor` from `state` under `action`.
    ///
    /// For each `(state, action)` pair the probabilities over all successors
    /// must sum to 1. That mass balance is the implementor's contract; the
    /// solver never repairs it. [`crate::check_probabilities`] audits it.
    fn transition_probability(
        &self,
        state: &Self::State,
        action: &Self::Action,
        successor: &Self::State,
    ) -> f64;

    /// Immediate reward for taking `action` in `state`. Must be finite.
    fn reward(&self, state: &Self::State, action: &Self::Action) -> f64;

    /// Probability in `[0, 1]` that an episode starts in `state`.
    fn start_probability(&self, state: &Self::State) -> f64;
}
