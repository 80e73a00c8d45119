/// Counters gathered while evaluating a tree.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SearchStats {
    /// Nodes evaluated below the root.
    pub visited: usize,
    /// Leaves scored.
    pub leaves: usize,
    /// Value of the chosen child, `None` when there was no child.
    pub value: Option<f64>,
}
