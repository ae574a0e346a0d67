use crate::cartesian::Position;

/// The clipping state of a single node in the graph.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct VertexState {
    /// The position of the node corresponding to this one in the opposite ring, if any.
    pub(crate) corresponding: Option<usize>,
    /// If true, the result enters the opposite polygon at this node.
    pub(crate) entry: bool,
    /// The location of the node relative to the opposite polygon.
    pub(crate) position: Option<Position>,
    /// If true, the node has already been emitted into a contour.
    pub(crate) visited: bool,
}

impl VertexState {
    /// Returns true if, and only if, the node is a crossing between both rings.
    pub(crate) fn is_intersection(&self) -> bool {
        self.corresponding.is_some()
    }
}

/// The per-call clipping state of every node in the graph, indexed by node position.
#[derive(Debug, Default)]
pub(crate) struct State {
    vertices: Vec<VertexState>,
}

impl State {
    /// Returns a state for the given amount of nodes.
    pub(crate) fn new(len: usize) -> Self {
        Self {
            vertices: vec![VertexState::default(); len],
        }
    }

    /// Makes room for the nodes appended into the graph since the last call.
    pub(crate) fn track(&mut self, len: usize) {
        if len > self.vertices.len() {
            self.vertices.resize(len, VertexState::default());
        }
    }

    pub(crate) fn get(&self, position: usize) -> &VertexState {
        &self.vertices[position]
    }

    pub(crate) fn get_mut(&mut self, position: usize) -> &mut VertexState {
        &mut self.vertices[position]
    }

    /// Marks both nodes as intersections corresponding to each other.
    pub(crate) fn link(&mut self, a: usize, b: usize) {
        self.track(a.max(b) + 1);
        self.vertices[a].corresponding = Some(b);
        self.vertices[b].corresponding = Some(a);
    }

    /// Clears the intersection flag of the given node and of its corresponding one.
    pub(crate) fn unlink(&mut self, position: usize) {
        if let Some(corresponding) = self.vertices[position].corresponding.take() {
            self.vertices[corresponding].corresponding = None;
        }
    }

    pub(crate) fn is_intersection(&self, position: usize) -> bool {
        self.vertices[position].is_intersection()
    }

    pub(crate) fn corresponding(&self, position: usize) -> Option<usize> {
        self.vertices[position].corresponding
    }

    /// Marks the given node, and its corresponding one, as visited.
    pub(crate) fn visit(&mut self, position: usize) {
        self.vertices[position].visited = true;
        if let Some(corresponding) = self.vertices[position].corresponding {
            self.vertices[corresponding].visited = true;
        }
    }
}
