use crate::error::{Error, Result};

pub(crate) use self::node::{Node, NodeId};

mod algorithms;
mod node;

// proptest doesn't run under miri with default config
#[cfg(all(not(miri), test))]
mod proptests;

/// The `CircularList` is a circular doubly-linked list with a sentinel node.
/// Inserting at the front or appending at the back takes constant time, while
/// accessing, inserting or deleting at an index takes
/// *O*(min(*i*, *n* - *i*)) time.
///
/// The `CircularList` contains:
/// - an arena `nodes` of node slots, where slot 0 is the sentinel;
/// - a stack `free` of vacant slots left by deletions, reused by insertions;
/// - a length field `len` counting the elements (non-sentinel nodes).
///
/// # Index Conventions
///
/// In a list with length *n*, the elements are indexed by 0, 1, ..., *n* - 1.
/// Two kinds of failure are reported:
/// - indexed reads ([`get_data`], [`get_first_data`], [`get_last_data`])
///   return [`Error::IndexOutOfRange`] for an index outside `0..n`;
/// - insertions and deletions return `false` for a position they do not
///   accept, and leave the list untouched.
///
/// [`get_data`]: CircularList::get_data
/// [`get_first_data`]: CircularList::get_first_data
/// [`get_last_data`]: CircularList::get_last_data
pub struct CircularList<T> {
    nodes: Vec<Node<T>>,
    free: Vec<NodeId>,
    /// the length of the list
    len: usize,
}

// private methods
impl<T> CircularList<T> {
    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.index()]
    }
    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.nodes[id.index()]
    }
    /// `sentinel.next`, either the first element or the sentinel itself.
    pub(crate) fn front_node(&self) -> NodeId {
        self.node(NodeId::SENTINEL).next
    }
    /// `sentinel.prev`, either the last element or the sentinel itself.
    pub(crate) fn back_node(&self) -> NodeId {
        self.node(NodeId::SENTINEL).prev
    }

    /// Returns the element of a live node.
    pub(crate) fn element(&self, id: NodeId) -> &T {
        self.node(id)
            .element
            .as_ref()
            .expect("Cannot read the element of the sentinel or a vacant node")
    }

    fn element_mut(&mut self, id: NodeId) -> &mut T {
        self.node_mut(id)
            .element
            .as_mut()
            .expect("Cannot read the element of the sentinel or a vacant node")
    }

    fn connect(&mut self, prev: NodeId, next: NodeId) {
        self.node_mut(prev).next = next;
        self.node_mut(next).prev = prev;
    }

    /// Store a new node in a vacant slot, or grow the arena if there is none.
    fn allocate(&mut self, node: Node<T>) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                debug_assert!(self.node(id).is_vacant());
                *self.node_mut(id) = node;
                id
            }
            None => {
                self.nodes.push(node);
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    /// Attach a new node holding `element` to the list, between `prev` and `next`.
    ///
    /// `prev` and `next` must be adjacent nodes of the list (checked only in
    /// `#[cfg(debug_assertions)]`), otherwise the ring becomes ill-formed.
    fn attach_node(&mut self, prev: NodeId, next: NodeId, element: T) -> NodeId {
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        let node = self.allocate(Node::new(prev, next, element));
        self.connect(prev, node);
        self.connect(node, next);
        self.len += 1;
        #[cfg(debug_assertions)]
        {
            self.assert_adjacent(prev, node);
            self.assert_adjacent(node, next);
        }
        node
    }

    /// Detach a live node from the list, release its slot and return its element.
    ///
    /// Detaching the sentinel would break the ring, so `node` must be an element.
    fn detach_node(&mut self, node: NodeId) -> T {
        debug_assert_ne!(node, NodeId::SENTINEL, "Cannot detach the sentinel");
        let (prev, next) = {
            let node = self.node(node);
            (node.prev, node.next)
        };
        self.connect(prev, next);
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);

        let slot = self.node_mut(node);
        slot.prev = node;
        slot.next = node;
        let element = slot
            .element
            .take()
            .expect("Cannot detach the sentinel or a vacant node");
        self.free.push(node);
        self.len -= 1;
        element
    }

    /// Walk `steps` nodes forward from the first element.
    fn walk_forward(&self, steps: usize) -> NodeId {
        (0..steps).fold(self.front_node(), |id, _| self.node(id).next)
    }

    /// Walk `steps` nodes backward from the last element.
    fn walk_backward(&self, steps: usize) -> NodeId {
        (0..steps).fold(self.back_node(), |id, _| self.node(id).prev)
    }

    /// Locate the node at `index`, walking from whichever end of the ring is
    /// nearer.
    fn node_at(&self, index: usize) -> Result<NodeId> {
        let len = self.len;
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        if index <= len / 2 {
            // index is near the front: [#-->i         ]
            Ok(self.walk_forward(index))
        } else {
            // index is near the back:  [         i<--#]
            Ok(self.walk_backward(len - index - 1))
        }
    }

    #[cfg(debug_assertions)]
    fn assert_adjacent(&self, prev: NodeId, next: NodeId) {
        assert_eq!(self.node(prev).next, next);
        assert_eq!(self.node(next).prev, prev);
    }
}

impl<T> CircularList<T> {
    /// Create an empty `CircularList`, holding only the sentinel node.
    ///
    /// # Examples
    /// ```
    /// use circular_list::CircularList;
    /// let list: CircularList<u32> = CircularList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty `CircularList` with room for at least `capacity`
    /// elements before the arena reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity + 1);
        nodes.push(Node::sentinel());
        Self {
            nodes,
            free: Vec::new(),
            len: 0,
        }
    }

    /// Returns the number of elements in the `CircularList`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    ///
    /// let mut list = CircularList::new();
    /// assert_eq!(list.len(), 0);
    ///
    /// list.append_last(1);
    /// list.insert_first(2);
    /// assert_eq!(list.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the `CircularList` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    ///
    /// let mut list = CircularList::new();
    /// assert!(list.is_empty());
    ///
    /// list.insert_first("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Provides a reference to the element at `index`.
    ///
    /// The node is searched from the front of the list if `index <= len / 2`,
    /// and from the back otherwise.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(min(*i*, *n* - *i*)) time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::{CircularList, Error};
    /// use std::iter::FromIterator;
    ///
    /// let list = CircularList::from_iter([1, 2, 3]);
    /// assert_eq!(list.get_data(0), Ok(&1));
    /// assert_eq!(list.get_data(2), Ok(&3));
    /// assert_eq!(
    ///     list.get_data(3),
    ///     Err(Error::IndexOutOfRange { index: 3, len: 3 })
    /// );
    /// ```
    pub fn get_data(&self, index: usize) -> Result<&T> {
        let id = self.node_at(index)?;
        Ok(self.element(id))
    }

    /// Provides a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = CircularList::from_iter([1, 2, 3]);
    /// if let Ok(x) = list.get_data_mut(1) {
    ///     *x *= 10;
    /// }
    /// assert_eq!(list.get_data(1), Ok(&20));
    /// ```
    pub fn get_data_mut(&mut self, index: usize) -> Result<&mut T> {
        let id = self.node_at(index)?;
        Ok(self.element_mut(id))
    }

    /// Provides a reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    ///
    /// let mut list = CircularList::new();
    /// assert!(list.get_first_data().is_err());
    ///
    /// list.append_last(1);
    /// list.append_last(2);
    /// assert_eq!(list.get_first_data(), Ok(&1));
    /// ```
    pub fn get_first_data(&self) -> Result<&T> {
        self.get_data(0)
    }

    /// Provides a reference to the last element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if the list is empty, reported as
    /// `index: 0, len: 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    ///
    /// let mut list = CircularList::new();
    /// assert!(list.get_last_data().is_err());
    ///
    /// list.append_last(1);
    /// list.append_last(2);
    /// assert_eq!(list.get_last_data(), Ok(&2));
    /// ```
    pub fn get_last_data(&self) -> Result<&T> {
        match self.len.checked_sub(1) {
            Some(last) => self.get_data(last),
            None => Err(Error::IndexOutOfRange { index: 0, len: 0 }),
        }
    }

    /// Inserts `data` at `index`, so that it becomes the element at `index`.
    ///
    /// Only `0..len` is accepted, plus `0` on an empty list. In particular
    /// `index == len` is rejected: appending goes through
    /// [`append_last`](CircularList::append_last).
    ///
    /// Returns `true` if `data` was inserted. On `false` the list is left
    /// untouched and `data` is dropped.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time for `index == 0`, and in
    /// *O*(min(*i*, *n* - *i*)) time otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = CircularList::from_iter([1, 2, 3]);
    ///
    /// assert!(list.insert(2, 4));
    /// assert!(list.insert(0, 5));
    /// assert!(!list.insert(5, 6));
    ///
    /// assert_eq!(list, CircularList::from_iter([5, 1, 2, 4, 3]));
    /// ```
    pub fn insert(&mut self, index: usize, data: T) -> bool {
        if index == 0 {
            let next = self.front_node();
            self.attach_node(NodeId::SENTINEL, next, data);
            return true;
        }
        match self.node_at(index) {
            Ok(next) => {
                let prev = self.node(next).prev;
                self.attach_node(prev, next, data);
                true
            }
            Err(_) => false,
        }
    }

    /// Inserts `data` at the front of the list. Always returns `true`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    ///
    /// let mut list = CircularList::new();
    ///
    /// list.insert_first(2);
    /// assert_eq!(list.get_first_data(), Ok(&2));
    ///
    /// list.insert_first(1);
    /// assert_eq!(list.get_first_data(), Ok(&1));
    /// ```
    pub fn insert_first(&mut self, data: T) -> bool {
        self.insert(0, data)
    }

    /// Appends `data` to the back of the list. Always returns `true`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    ///
    /// let mut list = CircularList::new();
    /// assert!(list.append_last(1));
    /// assert!(list.append_last(3));
    /// assert_eq!(list.get_last_data(), Ok(&3));
    /// ```
    pub fn append_last(&mut self, data: T) -> bool {
        let prev = self.back_node();
        self.attach_node(prev, NodeId::SENTINEL, data);
        true
    }

    /// Deletes the element at `index` and drops it.
    ///
    /// Only indices in `1..len` are accepted: the first element (`index == 0`)
    /// is never deleted by this method, so [`delete_first`] is a no-op too.
    /// [`insert`] does accept `index == 0`; the asymmetry is kept as is.
    ///
    /// Returns `true` if an element was deleted.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(min(*i*, *n* - *i*)) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = CircularList::from_iter([1, 2, 3]);
    ///
    /// assert!(list.delete(1));
    /// assert!(!list.delete(0));
    /// assert!(!list.delete(2));
    ///
    /// assert_eq!(list, CircularList::from_iter([1, 3]));
    /// ```
    ///
    /// [`delete_first`]: CircularList::delete_first
    /// [`insert`]: CircularList::insert
    pub fn delete(&mut self, index: usize) -> bool {
        if index == 0 {
            return false;
        }
        match self.node_at(index) {
            Ok(node) => {
                drop(self.detach_node(node));
                true
            }
            Err(_) => false,
        }
    }

    /// Calls [`delete(0)`](CircularList::delete), which never deletes anything.
    pub fn delete_first(&mut self) {
        self.delete(0);
    }

    /// Calls [`delete(len - 1)`](CircularList::delete).
    ///
    /// Nothing happens on an empty list, nor on a list with a single element
    /// (whose last element is at index 0).
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = CircularList::from_iter([1, 2]);
    /// list.delete_last();
    /// assert_eq!(list, CircularList::from_iter([1]));
    /// list.delete_last();
    /// assert_eq!(list, CircularList::from_iter([1]));
    /// ```
    pub fn delete_last(&mut self) {
        if let Some(last) = self.len.checked_sub(1) {
            self.delete(last);
        }
    }

    /// Removes all elements from the `CircularList`, dropping them from front
    /// to back.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::CircularList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = CircularList::from_iter([1, 2]);
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert!(list.get_first_data().is_err());
    /// ```
    pub fn clear(&mut self) {
        while !self.is_empty() {
            let front = self.front_node();
            drop(self.detach_node(front));
        }
        self.nodes.truncate(1);
        self.free.clear();
    }
}

impl<T> Default for CircularList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for CircularList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Walks the elements from front to back, used by the trait impls.
pub(crate) struct Elements<'a, T> {
    list: &'a CircularList<T>,
    current: NodeId,
}

impl<'a, T> Elements<'a, T> {
    pub(crate) fn new(list: &'a CircularList<T>) -> Self {
        let current = list.front_node();
        Self { list, current }
    }
}

impl<'a, T> Iterator for Elements<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == NodeId::SENTINEL {
            return None;
        }
        let list: &'a CircularList<T> = self.list;
        let element = list.element(self.current);
        self.current = list.node(self.current).next;
        Some(element)
    }
}

#[cfg(test)]
impl<T> CircularList<T> {
    /// Check that the ring is well-formed: every link is mirrored, `len`
    /// elements are reachable both ways, and every other slot is vacant and
    /// listed in `free`.
    pub(crate) fn assert_ring(&self) {
        let mut forward = 0;
        let mut id = NodeId::SENTINEL;
        loop {
            let next = self.node(id).next;
            assert_eq!(self.node(next).prev, id, "next.prev != node at {:?}", id);
            id = next;
            if id == NodeId::SENTINEL {
                break;
            }
            assert!(!self.node(id).is_vacant(), "vacant node {:?} in the ring", id);
            forward += 1;
            assert!(forward <= self.len, "ring is longer than len");
        }
        assert_eq!(forward, self.len);

        let mut backward = 0;
        let mut id = NodeId::SENTINEL;
        loop {
            let prev = self.node(id).prev;
            assert_eq!(self.node(prev).next, id, "prev.next != node at {:?}", id);
            id = prev;
            if id == NodeId::SENTINEL {
                break;
            }
            backward += 1;
            assert!(backward <= self.len, "ring is longer than len");
        }
        assert_eq!(backward, self.len);

        assert!(self.node(NodeId::SENTINEL).is_vacant());
        assert_eq!(self.nodes.len(), self.len + self.free.len() + 1);
        for &id in &self.free {
            assert!(self.node(id).is_vacant(), "free slot {:?} is occupied", id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CircularList, NodeId};
    use crate::error::Error;
    use std::cell::RefCell;
    use std::iter::FromIterator;

    fn contents<T: Clone>(list: &CircularList<T>) -> Vec<T> {
        (0..list.len())
            .map(|i| list.get_data(i).unwrap().clone())
            .collect()
    }

    #[test]
    fn list_create() {
        let mut list = CircularList::<i32>::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.front_node(), NodeId::SENTINEL);
        assert_eq!(list.back_node(), NodeId::SENTINEL);
        list.assert_ring();

        list.append_last(1);
        assert!(!list.is_empty());
        assert_eq!(list.len(), 1);
        list.assert_ring();
    }

    #[test]
    fn list_scenario() {
        let mut list = CircularList::new();
        assert!(list.insert(0, 20));
        assert_eq!(list.len(), 1);
        assert!(list.append_last(10));
        assert_eq!(list.len(), 2);
        assert!(list.insert_first(30));
        assert_eq!(list.len(), 3);
        assert!(!list.is_empty());
        assert_eq!(contents(&list), vec![30, 20, 10]);
        list.assert_ring();
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = CircularList::new();
        list.append_last(DropChecker::new(2, &dropped));
        list.append_last(DropChecker::new(3, &dropped));
        list.insert_first(DropChecker::new(1, &dropped));
        // Rejected insertions drop their data right away.
        assert!(!list.insert(3, DropChecker::new(4, &dropped)));
        assert_eq!(dropped.borrow().as_slice(), &[4]);

        assert!(list.delete(1));
        assert_eq!(dropped.borrow().as_slice(), &[4, 2]);

        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[4, 2, 1, 3]);
    }

    #[test]
    fn list_get_out_of_range() {
        let empty = CircularList::<i32>::new();
        assert_eq!(
            empty.get_data(0),
            Err(Error::IndexOutOfRange { index: 0, len: 0 })
        );
        assert_eq!(
            empty.get_first_data(),
            Err(Error::IndexOutOfRange { index: 0, len: 0 })
        );
        assert_eq!(
            empty.get_last_data(),
            Err(Error::IndexOutOfRange { index: 0, len: 0 })
        );

        let list = CircularList::from_iter(0..4);
        assert_eq!(
            list.get_data(4),
            Err(Error::IndexOutOfRange { index: 4, len: 4 })
        );
        assert_eq!(
            list.get_data(usize::MAX),
            Err(Error::IndexOutOfRange {
                index: usize::MAX,
                len: 4
            })
        );
        assert_eq!(list.get_first_data(), Ok(&0));
        assert_eq!(list.get_last_data(), Ok(&3));
    }

    #[test]
    fn list_forward_and_backward_search_agree() {
        for len in 0..12 {
            let list = CircularList::from_iter(0..len);
            for index in 0..len {
                let forward = list.walk_forward(index);
                let backward = list.walk_backward(len - index - 1);
                assert_eq!(forward, backward, "len = {}, index = {}", len, index);
                assert_eq!(list.node_at(index), Ok(forward));
                assert_eq!(list.get_data(index), Ok(&index));
            }
        }
    }

    #[test]
    fn list_insert() {
        let mut list = CircularList::from_iter(0..5);

        // index == len is not an append
        assert!(!list.insert(5, 100));
        assert!(!list.insert(6, 100));
        assert_eq!(list.len(), 5);

        assert!(list.insert(4, 10));
        assert_eq!(contents(&list), vec![0, 1, 2, 3, 10, 4]);
        assert!(list.insert(1, 11));
        assert_eq!(contents(&list), vec![0, 11, 1, 2, 3, 10, 4]);
        assert!(list.insert(0, 12));
        assert_eq!(contents(&list), vec![12, 0, 11, 1, 2, 3, 10, 4]);
        list.assert_ring();

        let mut empty = CircularList::new();
        assert!(!empty.insert(1, 1));
        assert!(empty.is_empty());
        assert!(empty.insert(0, 1));
        assert_eq!(contents(&empty), vec![1]);
    }

    #[test]
    fn list_append_last() {
        let mut list = CircularList::new();
        for i in 0..4 {
            let prior_last = list.get_last_data().ok().copied();
            assert!(list.append_last(i));
            assert_eq!(list.get_last_data(), Ok(&i));
            if let Some(prior_last) = prior_last {
                assert_eq!(list.get_data(list.len() - 2), Ok(&prior_last));
            }
        }
        assert_eq!(contents(&list), vec![0, 1, 2, 3]);
        list.assert_ring();
    }

    #[test]
    fn list_delete() {
        let mut list = CircularList::from_iter(0..6);

        assert!(!list.delete(0));
        assert!(!list.delete(6));
        assert_eq!(list.len(), 6);

        assert!(list.delete(5));
        assert_eq!(contents(&list), vec![0, 1, 2, 3, 4]);
        assert!(list.delete(2));
        assert_eq!(contents(&list), vec![0, 1, 3, 4]);
        assert!(list.delete(1));
        assert_eq!(contents(&list), vec![0, 3, 4]);
        list.assert_ring();

        list.delete_first();
        assert_eq!(contents(&list), vec![0, 3, 4]);
        list.delete_last();
        assert_eq!(contents(&list), vec![0, 3]);
        list.delete_last();
        assert_eq!(contents(&list), vec![0]);
        // the only element sits at index 0, which `delete` rejects
        list.delete_last();
        assert_eq!(contents(&list), vec![0]);
        list.assert_ring();

        let mut empty = CircularList::<i32>::new();
        empty.delete_first();
        empty.delete_last();
        assert!(!empty.delete(0));
        assert!(empty.is_empty());
    }

    #[test]
    fn list_reuses_vacant_slots() {
        let mut list = CircularList::from_iter(0..4);
        assert!(list.delete(1));
        assert!(list.delete(1));
        assert_eq!(list.free.len(), 2);

        assert!(list.insert(1, 10));
        assert!(list.append_last(11));
        assert!(list.free.is_empty());
        assert_eq!(list.nodes.len(), 5);
        assert_eq!(contents(&list), vec![0, 10, 3, 11]);
        list.assert_ring();
    }

    #[test]
    fn list_get_data_mut() {
        let mut list = CircularList::from_iter(0..3);
        *list.get_data_mut(2).unwrap() += 10;
        assert_eq!(contents(&list), vec![0, 1, 12]);
        assert_eq!(
            list.get_data_mut(3),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn list_clear() {
        let mut list = CircularList::from_iter(0..5);
        list.delete(2);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.nodes.len(), 1);
        list.assert_ring();

        list.append_last(7);
        assert_eq!(contents(&list), vec![7]);
        list.assert_ring();
    }
}
