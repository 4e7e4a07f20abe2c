/// Handle of a node slot in the arena of a [`CircularList`].
///
/// Slot 0 is always the sentinel node.
///
/// [`CircularList`]: crate::CircularList
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(pub(crate) usize);

impl NodeId {
    pub(crate) const SENTINEL: NodeId = NodeId(0);

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// A node slot of the arena.
///
/// `next` and `prev` are handles into the same arena. The sentinel and the
/// freed slots carry no element.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) next: NodeId,
    pub(crate) prev: NodeId,
    pub(crate) element: Option<T>,
}

impl<T> Node<T> {
    /// Create the sentinel node, whose `next` and `prev` point to itself.
    pub(crate) fn sentinel() -> Self {
        Self {
            next: NodeId::SENTINEL,
            prev: NodeId::SENTINEL,
            element: None,
        }
    }

    /// Create a node holding `element`, linked between `prev` and `next`.
    ///
    /// The neighbours are not updated; see `CircularList::attach_node`.
    pub(crate) fn new(prev: NodeId, next: NodeId, element: T) -> Self {
        Self {
            next,
            prev,
            element: Some(element),
        }
    }

    pub(crate) fn is_vacant(&self) -> bool {
        self.element.is_none()
    }
}
