//! Ordered fact derivation.
//!
//! A `RuleSet` is an ordered list of named rules. Evaluating it folds the
//! rules left to right into a `FactTable`: each rule computes one boolean fact
//! from the evaluation context and the facts derived before it. A rule may
//! only read facts that appear earlier in the list; reading a fact that has
//! not been evaluated yet is a programming error and panics.
//!
//! Rules can fail with a `BoardError` (a lookup of a point that does not
//! exist). A failure aborts the fold and no partial table escapes.

pub mod game_rules;
pub mod move_rules;

use std::fmt;

use smallvec::SmallVec;

use crate::board::error::BoardError;
use crate::game::state::GameState;
use crate::game::tick::GameTick;
use crate::moves::Move;

pub use game_rules::{GameFact, GameFacts, GameRuleSet};
pub use move_rules::{MoveContext, MoveFact, MoveFacts, MoveRuleSet};

pub type RuleResult = Result<bool, BoardError>;

/// A closed set of fact names. Implemented by the `fact_keys!` macro.
pub trait FactKey: Copy + Eq + fmt::Debug + 'static {
    const ALL: &'static [Self];

    fn index(self) -> usize;

    fn name(self) -> &'static str;
}

/// Declares a fact enum together with its `FactKey` implementation.
macro_rules! fact_keys {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident => $label:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        pub enum $name {
            $($(#[$variant_meta])* $variant,)+
        }

        impl $crate::rules::FactKey for $name {
            const ALL: &'static [Self] = &[$($name::$variant,)+];

            fn index(self) -> usize {
                self as usize
            }

            fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }
    };
}

pub(crate) use fact_keys;

/// One derived fact: its value and a note on how it was derived.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Fact {
    pub value: bool,
    pub note: &'static str,
}

/// The facts derived by one evaluation pass. Slots start out unset.
#[derive(Clone, PartialEq, Eq)]
pub struct FactTable<K: FactKey> {
    facts: SmallVec<[Option<Fact>; 32]>,
    _keys: std::marker::PhantomData<K>,
}

impl<K: FactKey> FactTable<K> {
    pub(crate) fn unset() -> Self {
        Self {
            facts: SmallVec::from_elem(None, K::ALL.len()),
            _keys: std::marker::PhantomData,
        }
    }

    /// Value of an evaluated fact.
    ///
    /// # Panics
    ///
    /// If `key` has not been evaluated in this pass.
    pub fn get(&self, key: K) -> bool {
        match self.facts[key.index()] {
            Some(fact) => fact.value,
            None => panic!("fact `{}` was read before it was evaluated", key.name()),
        }
    }

    pub fn fact(&self, key: K) -> Option<Fact> {
        self.facts[key.index()]
    }

    pub fn is_set(&self, key: K) -> bool {
        self.facts[key.index()].is_some()
    }

    /// Evaluated facts in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (K, Fact)> + '_ {
        K::ALL
            .iter()
            .filter_map(move |&key| self.facts[key.index()].map(|fact| (key, fact)))
    }

    /// Keys whose value is `true`, in declaration order.
    pub fn true_facts(&self) -> impl Iterator<Item = K> + '_ {
        self.iter()
            .filter(|(_, fact)| fact.value)
            .map(|(key, _)| key)
    }

    fn set(&mut self, key: K, fact: Fact) {
        self.facts[key.index()] = Some(fact);
    }
}

impl<K: FactKey> fmt::Debug for FactTable<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(key, fact)| (key.name(), fact.value)))
            .finish()
    }
}

impl<K: FactKey> fmt::Display for FactTable<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, fact) in self.iter() {
            writeln!(f, "{:<32} {:<5} {}", key.name(), fact.value, fact.note)?;
        }
        Ok(())
    }
}

pub struct Rule<K, F> {
    key: K,
    eval: F,
    note: &'static str,
}

/// An ordered list of rules producing facts keyed by `K`. `F` is the rule
/// function type, normally a plain `fn` pointer over the evaluation context.
pub struct RuleSet<K, F> {
    rules: Vec<Rule<K, F>>,
}

impl<K: FactKey, F> Default for RuleSet<K, F> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<K: FactKey, F> RuleSet<K, F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule deriving `key`.
    ///
    /// # Panics
    ///
    /// If a rule for `key` was already added.
    pub fn add_rule(mut self, key: K, eval: F, note: &'static str) -> Self {
        assert!(
            self.rules.iter().all(|rule| rule.key != key),
            "fact `{}` already has a rule",
            key.name()
        );
        self.rules.push(Rule { key, eval, note });
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Fact keys in evaluation order.
    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.rules.iter().map(|rule| rule.key)
    }

    pub fn evaluate<C>(&self, context: &C) -> Result<FactTable<K>, BoardError>
    where
        C: ?Sized,
        F: Fn(&C, &FactTable<K>) -> RuleResult,
    {
        self.rules
            .iter()
            .try_fold(FactTable::unset(), |mut facts, rule| {
                let value = (rule.eval)(context, &facts)?;
                facts.set(
                    rule.key,
                    Fact {
                        value,
                        note: rule.note,
                    },
                );
                Ok(facts)
            })
    }
}

/// The two rule sets a game is judged by.
pub struct Rules {
    moves: MoveRuleSet,
    game: GameRuleSet,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            moves: move_rules::rule_set(),
            game: game_rules::rule_set(),
        }
    }
}

impl Rules {
    pub fn new(moves: MoveRuleSet, game: GameRuleSet) -> Self {
        Self { moves, game }
    }

    pub fn move_rules(&self) -> &MoveRuleSet {
        &self.moves
    }

    pub fn game_rules(&self) -> &GameRuleSet {
        &self.game
    }

    pub fn evaluate_move(&self, tick: &GameTick, mv: &Move) -> Result<MoveFacts, BoardError> {
        self.moves.evaluate(&MoveContext::new(tick, mv))
    }

    pub fn evaluate_game(&self, state: &GameState) -> Result<GameFacts, BoardError> {
        self.game.evaluate(state)
    }
}
