//! Component registry: union-find over the vertex set.
//!
//! Tracks the current partition of vertices into components during the
//! contraction loop. Merges are monotonic: once two vertices share a
//! component they never separate. All merge attempts run on the scheduler
//! thread, so the structure needs no internal synchronisation; the parallel
//! search phase only ever sees frozen label snapshots taken between rounds.

#[derive(Clone, Debug)]
pub(crate) struct ComponentRegistry {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl ComponentRegistry {
    /// Creates a registry with one singleton component per vertex.
    pub(crate) fn new(vertex_count: usize) -> Self {
        Self {
            parent: (0..vertex_count).collect(),
            rank: vec![0; vertex_count],
            components: vertex_count,
        }
    }

    /// Returns the number of distinct components.
    #[rustfmt::skip]
    pub(crate) fn components(&self) -> usize { self.components }

    /// Returns the representative of `vertex`'s component, compressing the
    /// path as it goes.
    pub(crate) fn find(&mut self, mut vertex: usize) -> usize {
        let mut root = vertex;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[vertex] != vertex {
            let parent = self.parent[vertex];
            self.parent[vertex] = root;
            vertex = parent;
        }

        root
    }

    /// Merges the components of `left` and `right` if they are distinct.
    ///
    /// Returns `true` when a merge happened. Returns `false` when both
    /// vertices already share a component, which is how cycle-forming
    /// candidates (including two candidates proposing the same merge within
    /// one round) are rejected.
    pub(crate) fn try_union(&mut self, left: usize, right: usize) -> bool {
        let mut left_root = self.find(left);
        let mut right_root = self.find(right);
        if left_root == right_root {
            return false;
        }

        // Union by rank; equal ranks attach the larger root under the
        // smaller so the representative choice is deterministic.
        let left_rank = self.rank[left_root];
        let right_rank = self.rank[right_root];
        if left_rank < right_rank || (left_rank == right_rank && right_root < left_root) {
            std::mem::swap(&mut left_root, &mut right_root);
        }
        self.parent[right_root] = left_root;
        if left_rank == right_rank {
            self.rank[left_root] = self.rank[left_root].saturating_add(1);
        }

        self.components -= 1;
        true
    }

    /// Resolves every vertex to its current representative.
    ///
    /// The snapshot is what the parallel search phase reads: it stays valid
    /// for the whole round because merges only happen between rounds.
    pub(crate) fn labels(&mut self) -> Vec<usize> {
        (0..self.parent.len()).map(|vertex| self.find(vertex)).collect()
    }
}
