//! State-machine test of `HistoryStack` against a two-stack reference model
//!
//! The reference keeps past and future as separate vectors, the way an undo
//! stack and a redo stack would. Any sequence of commits, undos, and redos must
//! leave both models showing the same value with the same affordances.

use proptest::prelude::*;
use proptest_state_machine::{prop_state_machine, ReferenceStateMachine, StateMachineTest};
use voyage_core::HistoryStack;

#[derive(Clone, Debug)]
enum HistoryTransition {
    Commit(u32),
    Undo,
    Redo,
}

#[derive(Clone, Debug)]
struct TwoStackModel {
    past: Vec<u32>,
    current: u32,
    future: Vec<u32>,
}

struct ModelMachine;

impl ReferenceStateMachine for ModelMachine {
    type State = TwoStackModel;
    type Transition = HistoryTransition;

    fn init_state() -> BoxedStrategy<Self::State> {
        any::<u32>()
            .prop_map(|current| TwoStackModel {
                past: Vec::new(),
                current,
                future: Vec::new(),
            })
            .boxed()
    }

    fn transitions(_state: &Self::State) -> BoxedStrategy<Self::Transition> {
        prop_oneof![
            3 => any::<u32>().prop_map(HistoryTransition::Commit),
            2 => Just(HistoryTransition::Undo),
            2 => Just(HistoryTransition::Redo),
        ]
        .boxed()
    }

    fn apply(mut state: Self::State, transition: &Self::Transition) -> Self::State {
        match transition {
            HistoryTransition::Commit(value) => {
                state.past.push(state.current);
                state.current = *value;
                state.future.clear();
            }
            HistoryTransition::Undo => {
                if let Some(previous) = state.past.pop() {
                    state.future.push(state.current);
                    state.current = previous;
                }
            }
            HistoryTransition::Redo => {
                if let Some(next) = state.future.pop() {
                    state.past.push(state.current);
                    state.current = next;
                }
            }
        }
        state
    }
}

struct HistoryStackTest;

impl StateMachineTest for HistoryStackTest {
    type SystemUnderTest = HistoryStack<u32>;
    type Reference = ModelMachine;

    fn init_test(
        ref_state: &<Self::Reference as ReferenceStateMachine>::State,
    ) -> Self::SystemUnderTest {
        HistoryStack::new(ref_state.current)
    }

    fn apply(
        mut state: Self::SystemUnderTest,
        ref_state: &<Self::Reference as ReferenceStateMachine>::State,
        transition: <Self::Reference as ReferenceStateMachine>::Transition,
    ) -> Self::SystemUnderTest {
        match transition {
            HistoryTransition::Commit(value) => state.commit(value),
            HistoryTransition::Undo => {
                let shown = *state.undo();
                assert_eq!(shown, ref_state.current);
            }
            HistoryTransition::Redo => {
                let shown = *state.redo();
                assert_eq!(shown, ref_state.current);
            }
        }
        state
    }

    fn check_invariants(
        state: &Self::SystemUnderTest,
        ref_state: &<Self::Reference as ReferenceStateMachine>::State,
    ) {
        assert_eq!(*state.current(), ref_state.current);
        assert_eq!(state.can_undo(), !ref_state.past.is_empty());
        assert_eq!(state.can_redo(), !ref_state.future.is_empty());
        assert_eq!(
            state.len(),
            ref_state.past.len() + 1 + ref_state.future.len()
        );
        assert_eq!(state.pointer(), ref_state.past.len());
    }
}

prop_state_machine! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        failure_persistence: None,
        .. ProptestConfig::default()
    })]

    #[test]
    fn history_matches_two_stack_model(sequential 1..40 => HistoryStackTest);
}
