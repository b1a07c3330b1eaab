//! Renderable nodes produced by cells.

/// A renderable piece of cell content.
///
/// Nodes are backend-neutral: the text backend in [`crate::text`] turns them
/// into terminal strings, other frontends can walk the tree themselves.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Node {
    /// Nothing to display.
    #[default]
    Empty,
    /// Plain text.
    Text(String),
    /// Text that may be truncated on screen; the full value stays available
    /// on hover or inspection.
    Tooltip(String),
    /// Busy indicator.
    Spinner,
    /// A child with a style class attached.
    Styled {
        /// Style class name.
        class: String,
        /// Styled content.
        child: Box<Node>,
    },
    /// Several nodes displayed side by side.
    Group(Vec<Node>),
}

impl Node {
    /// Create a text node.
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// Create a tooltip node.
    pub fn tooltip(content: impl Into<String>) -> Self {
        Node::Tooltip(content.into())
    }

    /// Create a group node.
    pub fn group(children: impl IntoIterator<Item = Node>) -> Self {
        Node::Group(children.into_iter().collect())
    }

    /// Attach a style class to this node.
    pub fn class(self, class: impl Into<String>) -> Self {
        Node::Styled {
            class: class.into(),
            child: Box::new(self),
        }
    }

    /// Flatten the node into the text a plain-text backend would show.
    ///
    /// Group children are separated by a single space; empty children are
    /// skipped.
    pub fn plain_text(&self) -> String {
        match self {
            Node::Empty => String::new(),
            Node::Text(text) | Node::Tooltip(text) => text.clone(),
            Node::Spinner => SPINNER_GLYPH.to_string(),
            Node::Styled { child, .. } => child.plain_text(),
            Node::Group(children) => children
                .iter()
                .map(Node::plain_text)
                .filter(|text| !text.is_empty())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    /// Full text carried by the first tooltip in this node, if any.
    pub fn tooltip_text(&self) -> Option<&str> {
        match self {
            Node::Tooltip(text) => Some(text),
            Node::Styled { child, .. } => child.tooltip_text(),
            Node::Group(children) => children.iter().find_map(Node::tooltip_text),
            _ => None,
        }
    }

    /// Returns `true` if this node (or something inside it) is a tooltip.
    pub fn has_tooltip(&self) -> bool {
        self.tooltip_text().is_some()
    }
}

/// Glyph used for [`Node::Spinner`] in plain-text output.
pub const SPINNER_GLYPH: &str = "⠋";

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::text(text)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}
