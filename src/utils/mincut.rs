//! Randomized min-cut estimation (Karger's contraction algorithm)
//!
//! Contracts randomly chosen edges of an undirected multigraph until two
//! super-vertices remain, then counts the edges crossing between them. A
//! single trial gives the true minimum cut with probability >= 2/n^2, so the
//! estimator runs many independent trials and keeps the smallest cut seen.
//!
//! Contraction is tracked with a union-find (union by rank, path halving)
//! rather than by rewriting the edge list.

use rand::seq::SliceRandom;
use rand::Rng;

/// Undirected edge between two vertex ids
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub source: u32,
    pub target: u32,
}

impl Edge {
    pub fn new(source: u32, target: u32) -> Self {
        Self { source, target }
    }
}

/// An undirected multigraph over vertices `0..vertex_count`
#[derive(Debug, Clone)]
pub struct Graph {
    vertex_count: u32,
    edges: Vec<Edge>,
}

struct DisjointSet {
    parent: Vec<u32>,
    rank: Vec<u8>,
}

impl DisjointSet {
    fn new(size: usize) -> Self {
        Self {
            parent: (0..size as u32).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&mut self, mut x: u32) -> u32 {
        while self.parent[x as usize] != x {
            // path halving
            self.parent[x as usize] = self.parent[self.parent[x as usize] as usize];
            x = self.parent[x as usize];
        }
        x
    }

    /// Merge the sets containing `x` and `y`; false if already joined
    fn union(&mut self, x: u32, y: u32) -> bool {
        let x_root = self.find(x);
        let y_root = self.find(y);
        if x_root == y_root {
            return false;
        }
        match self.rank[x_root as usize].cmp(&self.rank[y_root as usize]) {
            std::cmp::Ordering::Less => self.parent[x_root as usize] = y_root,
            std::cmp::Ordering::Greater => self.parent[y_root as usize] = x_root,
            std::cmp::Ordering::Equal => {
                self.parent[y_root as usize] = x_root;
                self.rank[x_root as usize] += 1;
            }
        }
        true
    }
}

impl Graph {
    pub fn new(vertex_count: u32, edges: Vec<Edge>) -> Self {
        Self {
            vertex_count,
            edges,
        }
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// One contraction trial: merge along a random edge order until two
    /// super-vertices remain, then count crossing edges
    pub fn contract<R: Rng>(&self, rng: &mut R) -> u32 {
        let mut sets = DisjointSet::new(self.vertex_count as usize);
        let mut remaining = self.vertex_count;

        let mut order: Vec<usize> = (0..self.edges.len()).collect();
        order.shuffle(rng);
        for &i in &order {
            if remaining <= 2 {
                break;
            }
            let edge = self.edges[i];
            // an edge inside a super-vertex is a self-loop, skip it
            if sets.union(edge.source, edge.target) {
                remaining -= 1;
            }
        }

        self.edges
            .iter()
            .filter(|e| sets.find(e.source) != sets.find(e.target))
            .count() as u32
    }

    /// Best-of-N estimate: the minimum cut seen over independent trials
    pub fn estimate_min_cut<R: Rng>(&self, trials: usize, rng: &mut R) -> u32 {
        (0..trials)
            .map(|_| self.contract(rng))
            .min()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn diamond() -> Graph {
        // min cut of this 4-vertex graph is 2 (isolate vertex 1)
        Graph::new(
            4,
            vec![
                Edge::new(0, 1),
                Edge::new(0, 2),
                Edge::new(0, 3),
                Edge::new(1, 3),
                Edge::new(2, 3),
            ],
        )
    }

    #[test]
    fn test_contract_is_a_cut() {
        let graph = diamond();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let cut = graph.contract(&mut rng);
            // any contraction yields a valid cut, never below the minimum
            assert!(cut >= 2);
            assert!(cut <= graph.edge_count() as u32);
        }
    }

    #[test]
    fn test_estimate_finds_min_cut() {
        let graph = diamond();
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(graph.estimate_min_cut(50, &mut rng), 2);
    }

    #[test]
    fn test_bridge_graph() {
        // two triangles joined by one bridge: min cut is 1
        let graph = Graph::new(
            6,
            vec![
                Edge::new(0, 1),
                Edge::new(1, 2),
                Edge::new(2, 0),
                Edge::new(2, 3),
                Edge::new(3, 4),
                Edge::new(4, 5),
                Edge::new(5, 3),
            ],
        );
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(graph.estimate_min_cut(100, &mut rng), 1);
    }

    #[test]
    fn test_two_vertices() {
        let graph = Graph::new(2, vec![Edge::new(0, 1), Edge::new(0, 1)]);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(graph.estimate_min_cut(5, &mut rng), 2);
    }

    #[test]
    fn test_no_edges() {
        let graph = Graph::new(3, Vec::new());
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(graph.estimate_min_cut(5, &mut rng), 0);
    }
}
