use crate::quest::{CostTable, QuestMap, QuestProblem};
use crate::search::{Cost, Position, SearchProblem};
use ordered_float::OrderedFloat;
use std::cell::RefCell;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// A straight corridor with the medal five steps east of the start.
pub const CORRIDOR_QUEST_TEXT: &str = r#"
map = """
%%%%%%%%
%S....M%
%%%%%%%%
"""

[costs]
N = 4
S = 3
E = 2
W = 1
"#;

pub const MAZE_QUEST_TEXT: &str = r#"
map = """
%%%%%%%%%%
%S...%..M%
%.%%.%.%.%
%.%M...%.%
%...%%...%
%%%%%%%%%%
"""

[costs]
N = 1
S = 4
E = 2
W = 3
"#;

/// The wall forces a detour two rows south and back, costing
/// 2 * S + 4 * E + 2 * N.
pub const DETOUR_QUEST_TEXT: &str = r#"
map = """
%%%%%%%
%S.%.M%
%..%..%
%.....%
%%%%%%%
"""

[costs]
N = 4
S = 3
E = 2
W = 1
"#;

pub const DETOUR_QUEST_COST: f64 = 22.;

/// The only medal is sealed off from the start.
pub const WALLED_OFF_QUEST_TEXT: &str = r#"
map = """
%%%%%%
%S.%M%
%..%%%
%%%%%%
"""

[costs]
N = 1
S = 1
E = 1
W = 1
"#;

pub fn positions(coordinates: &[(i64, i64)]) -> Vec<Position> {
    coordinates.iter().map(|&xy| Position::from(xy)).collect()
}

/// A wall-free quest just large enough to hold the agent and every medal.
pub fn open_field_problem(
    costs: CostTable,
    agent: (i64, i64),
    medals: &[(i64, i64)],
) -> QuestProblem {
    let medals = positions(medals);
    let width = medals.iter().map(|m| m.x).chain([agent.0]).max().unwrap() + 2;
    let height = medals.iter().map(|m| m.y).chain([agent.1]).max().unwrap() + 2;
    let map = QuestMap::open_field(width, height, Position::from(agent), medals);
    QuestProblem::new(map, costs).unwrap()
}

/// A problem over an explicit weighted digraph. Actions are named after the
/// state they lead to. Expansions are counted per state.
#[derive(Debug)]
pub struct GraphProblem {
    start: &'static str,
    goals: HashSet<&'static str>,
    edges: HashMap<&'static str, Vec<(&'static str, f64)>>,
    expansions: RefCell<HashMap<&'static str, usize>>,
}

impl GraphProblem {
    pub fn new(
        start: &'static str,
        goals: &[&'static str],
        edges: &[(&'static str, &'static str, f64)],
    ) -> Self {
        let mut adjacency: HashMap<&'static str, Vec<(&'static str, f64)>> = HashMap::new();
        for &(from, to, cost) in edges {
            adjacency.entry(from).or_default().push((to, cost));
        }
        Self {
            start,
            goals: goals.iter().copied().collect(),
            edges: adjacency,
            expansions: RefCell::new(HashMap::new()),
        }
    }

    pub fn expansions(&self, state: &str) -> usize {
        self.expansions.borrow().get(state).copied().unwrap_or(0)
    }
}

impl SearchProblem for GraphProblem {
    type State = &'static str;
    type Action = &'static str;

    fn start_state(&self) -> &'static str {
        self.start
    }

    fn is_goal(&self, state: &&'static str) -> bool {
        self.goals.contains(state)
    }

    fn expand(&self, state: &&'static str) -> Vec<(&'static str, &'static str, Cost)> {
        *self.expansions.borrow_mut().entry(*state).or_default() += 1;
        self.edges
            .get(state)
            .map(|successors| {
                successors
                    .iter()
                    .map(|&(to, cost)| (to, to, OrderedFloat(cost)))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Textbook Dijkstra over an edge list, used as an independent reference.
pub fn reference_shortest_path(
    edges: &[(&'static str, &'static str, f64)],
    from: &'static str,
    to: &'static str,
) -> Option<f64> {
    let mut best: HashMap<&str, f64> = HashMap::from([(from, 0.)]);
    let mut heap = BinaryHeap::from([Reverse((OrderedFloat(0.), from))]);
    while let Some(Reverse((OrderedFloat(distance), node))) = heap.pop() {
        if node == to {
            return Some(distance);
        }
        if distance > best[node] {
            continue;
        }
        for &(_, next, cost) in edges.iter().filter(|(source, _, _)| *source == node) {
            let candidate = distance + cost;
            if best.get(next).map_or(true, |&known| candidate < known) {
                best.insert(next, candidate);
                heap.push(Reverse((OrderedFloat(candidate), next)));
            }
        }
    }
    None
}
