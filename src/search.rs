//! Uninformed graph search shared by the breadth-first and depth-first solvers. The two
//! differ only in the [Frontier] holding the pending nodes; the predecessor bookkeeping and
//! path reconstruction are common.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::Vacant;
use indexmap::IndexMap;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

use std::collections::VecDeque;
use std::hash::Hash;

/// Pending-work container of a search.
pub trait Frontier<T> {
    fn push(&mut self, item: T);
    fn pop(&mut self) -> Option<T>;
}

/// First in, first out: breadth-first order.
#[derive(Debug, Default)]
pub struct Fifo<T>(VecDeque<T>);

impl<T> Frontier<T> for Fifo<T> {
    fn push(&mut self, item: T) {
        self.0.push_back(item);
    }
    fn pop(&mut self) -> Option<T> {
        self.0.pop_front()
    }
}

/// Last in, first out: depth-first order.
#[derive(Debug, Default)]
pub struct Lifo<T>(Vec<T>);

impl<T> Frontier<T> for Lifo<T> {
    fn push(&mut self, item: T) {
        self.0.push(item);
    }
    fn pop(&mut self) -> Option<T> {
        self.0.pop()
    }
}

/// Walks the predecessor chain from `index` back to the root and returns it root first.
fn reverse_path<N>(parents: &FxIndexMap<N, Option<usize>>, index: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut path: Vec<N> = std::iter::successors(Some(index), |&i| {
        parents.get_index(i).and_then(|(_, parent)| *parent)
    })
    .filter_map(|i| parents.get_index(i).map(|(node, _)| node.clone()))
    .collect();
    path.reverse();
    path
}

/// Searches from `start` until a node satisfying `success` is popped from the frontier.
///
/// Every node is recorded with its predecessor the first time it is generated and is never
/// generated again, so the search terminates on any finite graph. Successors are pushed in the
/// order `successors` yields them and only if `can_enter` accepts them; the start node itself
/// is never checked against `can_enter`. Returns the path from `start` to the goal, both
/// included, or [None] once the frontier is exhausted.
pub fn graph_search<N, FR, FN, IN, FC, FS>(
    start: &N,
    mut frontier: FR,
    mut successors: FN,
    mut can_enter: FC,
    mut success: FS,
) -> Option<Vec<N>>
where
    N: Eq + Hash + Clone,
    FR: Frontier<usize>,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
    FC: FnMut(&N) -> bool,
    FS: FnMut(&N) -> bool,
{
    let mut parents: FxIndexMap<N, Option<usize>> = FxIndexMap::default();
    parents.insert(start.clone(), None);
    frontier.push(0);
    while let Some(index) = frontier.pop() {
        let successors = {
            let (node, _) = parents.get_index(index)?;
            if success(node) {
                return Some(reverse_path(&parents, index));
            }
            successors(node)
        };
        for successor in successors {
            // Visited nodes are skipped before `can_enter` is consulted.
            if let Vacant(e) = parents.entry(successor) {
                if can_enter(e.key()) {
                    let n = e.index();
                    e.insert(Some(index));
                    frontier.push(n);
                }
            }
        }
    }
    None
}
