use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority queue of `(vertex, distance)` entries for Dijkstra.
///
/// There is no decrease-key: an improved distance is pushed as a new entry
/// and the superseded one stays in the heap until it is popped. Callers
/// drop those stale entries by comparing against their best-known distance.
#[derive(Debug)]
pub struct DistanceQueue<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> DistanceQueue<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// Creates a new empty queue
    pub fn new() -> Self {
        DistanceQueue {
            heap: BinaryHeap::new(),
        }
    }

    /// Creates a queue seeded with a single entry
    pub fn seeded(vertex: V, priority: P) -> Self {
        let mut queue = Self::new();
        queue.push(vertex, priority);
        queue
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(Reverse((priority, vertex)));
    }

    /// Removes the entry with the smallest priority; ties go to the smaller vertex
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, vertex))| (vertex, priority))
    }
}

impl<V, P> Default for DistanceQueue<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
