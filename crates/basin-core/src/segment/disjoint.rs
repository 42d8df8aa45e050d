/// Disjoint-set forest augmented with the per-component statistics the
/// agglomerative merging criterion reads: component size and the largest
/// edge weight admitted into the component so far.
pub struct DisjointForest {
    parent: Vec<u32>,
    size: Vec<u32>,
    max_internal: Vec<f32>,
}

impl DisjointForest {
    /// Create `len` singleton components.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len as u32).collect(),
            size: vec![1; len],
            max_internal: vec![0.0; len],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Root of `i`'s tree, with full path compression: after the call every
    /// node on the walked path points directly at the root.
    ///
    /// Two iterative passes (locate root, then reassign) keep the stack flat
    /// on pathologically deep trees.
    pub fn find(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parent[root] as usize != root {
            root = self.parent[root] as usize;
        }

        let mut node = i;
        while node != root {
            let next = self.parent[node] as usize;
            self.parent[node] = root as u32;
            node = next;
        }
        root
    }

    /// Merge the components rooted at `a` and `b` through an edge of weight
    /// `w`. The smaller component attaches under the larger; equal sizes keep
    /// `a` as root. Returns the surviving root.
    ///
    /// `w` becomes the component's new maximum internal edge: callers feed
    /// edges in non-decreasing weight order, so it dominates every edge
    /// admitted before it.
    pub fn union(&mut self, a: usize, b: usize, w: f32) -> usize {
        debug_assert_ne!(a, b);
        debug_assert_eq!(self.parent[a] as usize, a, "union requires roots");
        debug_assert_eq!(self.parent[b] as usize, b, "union requires roots");

        let (root, child) = if self.size[a] < self.size[b] {
            (b, a)
        } else {
            (a, b)
        };
        self.parent[child] = root as u32;
        self.size[root] += self.size[child];
        self.max_internal[root] = w;
        root
    }

    /// Number of elements in the component rooted at `root`.
    pub fn size_of(&self, root: usize) -> u32 {
        self.size[root]
    }

    /// Largest edge weight admitted into the component rooted at `root`.
    pub fn max_internal_of(&self, root: usize) -> f32 {
        self.max_internal[root]
    }
}
