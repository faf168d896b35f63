//! Forward-chaining RDFS entailment.
//!
//! A round applies every rule once, in order, each rule seeing the
//! conclusions of the ones before it. Rounds repeat until one adds no
//! statement (the fixpoint) or the configured round cap is reached. The
//! rules only ever add statements built from identifiers already in the
//! graph, so the fixpoint always exists, and it is the same set of
//! statements whatever order the rules are applied in.
//!
//! ```
//! use semgraph::{reasoner, Graph, Statement};
//! use semgraph::vocab::{RDFS_SUBCLASS_OF, RDF_TYPE};
//!
//! let graph = Graph::new()
//!     .add(Statement::new("http://ex.org/Employee", RDFS_SUBCLASS_OF, "http://ex.org/Person"))
//!     .add(Statement::new("http://ex.org/john", RDF_TYPE, "http://ex.org/Employee"));
//! let closed = reasoner::infer(graph);
//! let john_is_a_person = Statement::new("http://ex.org/john", RDF_TYPE, "http://ex.org/Person");
//! assert!(closed.contains(&john_is_a_person));
//! ```

pub mod rules;

use tracing::{debug, warn};

pub use rules::{
    apply_domain_rule, apply_range_rule, apply_subclass_rule, apply_subproperty_rule, Rule,
};

use crate::model::Graph;

/// Reasoner configuration.
#[derive(Debug, Clone, Default)]
pub struct ReasonerConfig {
    /// Stop after this many rounds even if the fixpoint is not reached.
    /// `None` runs to the fixpoint.
    pub max_rounds: Option<usize>,
}

impl ReasonerConfig {
    /// Runs until the fixpoint.
    #[must_use]
    pub fn unbounded() -> Self {
        Self { max_rounds: None }
    }

    /// Runs at most `rounds` rounds.
    #[must_use]
    pub fn bounded(rounds: usize) -> Self {
        Self {
            max_rounds: Some(rounds),
        }
    }
}

/// The result of running the reasoner.
#[derive(Debug, Clone)]
pub struct Entailment {
    /// The input graph plus every derived statement.
    pub graph: Graph,
    /// Rounds run, counting the final round that added nothing.
    pub rounds: usize,
    /// Number of statements added.
    pub derived: usize,
    /// `false` when the round cap stopped the run first.
    pub reached_fixpoint: bool,
}

/// Applies a sequence of rules to a fixpoint.
#[derive(Debug, Clone)]
pub struct Reasoner {
    config: ReasonerConfig,
    rules: Vec<Rule>,
}

impl Default for Reasoner {
    fn default() -> Self {
        Self::new(ReasonerConfig::default())
    }
}

impl Reasoner {
    /// Creates a reasoner applying [`Rule::ALL`] in order.
    #[must_use]
    pub fn new(config: ReasonerConfig) -> Self {
        Self::with_rules(config, Rule::ALL)
    }

    /// Creates a reasoner applying `rules` in the given order each round.
    #[must_use]
    pub fn with_rules(config: ReasonerConfig, rules: impl IntoIterator<Item = Rule>) -> Self {
        Self {
            config,
            rules: rules.into_iter().collect(),
        }
    }

    /// The rule order of one round.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Runs rounds until nothing new is derived or the round cap is hit.
    #[must_use]
    pub fn run(&self, mut graph: Graph) -> Entailment {
        let initial = graph.len();
        let mut rounds = 0;

        loop {
            if self.config.max_rounds.is_some_and(|max| rounds >= max) {
                let derived = graph.len() - initial;
                warn!(
                    rounds,
                    derived,
                    "entailment stopped at the round cap before reaching a fixpoint"
                );
                return Entailment {
                    graph,
                    rounds,
                    derived,
                    reached_fixpoint: false,
                };
            }

            let before = graph.len();
            for rule in &self.rules {
                graph = rule.apply(graph);
            }
            rounds += 1;
            let added = graph.len() - before;
            debug!(round = rounds, added, "entailment round");

            if added == 0 {
                let derived = graph.len() - initial;
                debug!(rounds, derived, "entailment reached fixpoint");
                return Entailment {
                    graph,
                    rounds,
                    derived,
                    reached_fixpoint: true,
                };
            }
        }
    }
}

/// Closes `graph` under the four rules with the default configuration.
#[must_use]
pub fn infer(graph: Graph) -> Graph {
    Reasoner::default().run(graph).graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Literal, Statement};
    use crate::vocab::{
        RDFS_DOMAIN, RDFS_RANGE, RDFS_SUBCLASS_OF, RDFS_SUBPROPERTY_OF, RDF_TYPE, XSD_INTEGER,
    };

    fn ex(local: &str) -> String {
        format!("http://example.org/{local}")
    }

    fn hierarchy() -> Graph {
        Graph::new()
            .add(Statement::new(ex("Employee"), RDFS_SUBCLASS_OF, ex("Person")))
            .add(Statement::new(ex("Person"), RDFS_SUBCLASS_OF, ex("Agent")))
            .add(Statement::new(ex("john"), RDF_TYPE, ex("Employee")))
    }

    #[test]
    fn subclass_chains_close_transitively() {
        let result = Reasoner::default().run(hierarchy());
        assert!(result.reached_fixpoint);
        assert!(result.graph.contains(&Statement::new(ex("john"), RDF_TYPE, ex("Person"))));
        assert!(result.graph.contains(&Statement::new(ex("john"), RDF_TYPE, ex("Agent"))));
        assert_eq!(result.derived, 2);
        assert_eq!(result.rounds, 3);
    }

    #[test]
    fn rules_feed_each_other() {
        let graph = Graph::new()
            .add(Statement::new(ex("hasBoss"), RDFS_SUBPROPERTY_OF, ex("knows")))
            .add(Statement::new(ex("knows"), RDFS_RANGE, ex("Person")))
            .add(Statement::new(ex("Person"), RDFS_SUBCLASS_OF, ex("Agent")))
            .add(Statement::new(ex("age"), RDFS_DOMAIN, ex("Person")))
            .add(Statement::new(ex("age"), RDFS_RANGE, XSD_INTEGER))
            .add(Statement::new(ex("john"), ex("hasBoss"), ex("mary")))
            .add(Statement::new(ex("john"), ex("age"), Literal::typed(42_i64, XSD_INTEGER)));
        let closed = infer(graph);
        for expected in [
            Statement::new(ex("john"), ex("knows"), ex("mary")),
            Statement::new(ex("mary"), RDF_TYPE, ex("Person")),
            Statement::new(ex("mary"), RDF_TYPE, ex("Agent")),
            Statement::new(ex("john"), RDF_TYPE, ex("Person")),
            Statement::new(ex("john"), RDF_TYPE, ex("Agent")),
        ] {
            assert!(closed.contains(&expected), "missing {expected:?}");
        }
        assert!(closed.find(None, Some(RDF_TYPE), Some(&XSD_INTEGER.into())).is_empty());
    }

    #[test]
    fn round_cap_stops_early() {
        let result = Reasoner::new(ReasonerConfig::bounded(1)).run(hierarchy());
        assert!(!result.reached_fixpoint);
        assert_eq!(result.rounds, 1);
        assert!(result.graph.contains(&Statement::new(ex("john"), RDF_TYPE, ex("Person"))));
    }

    #[test]
    fn empty_graph_is_already_closed() {
        let result = Reasoner::default().run(Graph::new());
        assert!(result.reached_fixpoint);
        assert_eq!((result.rounds, result.derived), (1, 0));
    }

    #[test]
    fn reversed_order_reaches_the_same_statements() {
        let forward = infer(hierarchy());
        let mut reversed_rules = Rule::ALL;
        reversed_rules.reverse();
        let reversed =
            Reasoner::with_rules(ReasonerConfig::default(), reversed_rules).run(hierarchy());
        assert_eq!(forward.len(), reversed.graph.len());
        assert!(forward.iter().all(|s| reversed.graph.contains(s)));
    }
}
