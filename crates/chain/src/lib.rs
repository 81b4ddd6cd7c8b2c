//! Singly linked list of `i32` values with insert-after and remove-after.

type Link = Option<Box<Node>>;

#[derive(Debug)]
pub struct Node {
    pub value: i32,
    next: Link,
}

impl Node {
    fn new(value: i32) -> Self {
        Self { value, next: None }
    }

    /// Insert `value` as the immediate successor of this node.
    pub fn insert_after(&mut self, value: i32) -> &mut Node {
        let mut node = Box::new(Node::new(value));
        node.next = self.next.take();
        self.next.insert(node)
    }

    /// Unlink the successor and return its value. No-op on the last node.
    pub fn remove_after(&mut self) -> Option<i32> {
        let mut removed = self.next.take()?;
        self.next = removed.next.take();
        Some(removed.value)
    }

    pub fn next(&self) -> Option<&Node> {
        self.next.as_deref()
    }

    pub fn next_mut(&mut self) -> Option<&mut Node> {
        self.next.as_deref_mut()
    }
}

/// A chain always has a head node.
#[derive(Debug)]
pub struct Chain {
    head: Box<Node>,
}

impl Chain {
    pub fn new(head_value: i32) -> Self {
        Self {
            head: Box::new(Node::new(head_value)),
        }
    }

    pub fn head(&self) -> &Node {
        &self.head
    }

    pub fn head_mut(&mut self) -> &mut Node {
        &mut self.head
    }

    /// Number of nodes, head included. Walks the chain iteratively.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Number of nodes linked behind the head.
    pub fn successors(&self) -> usize {
        self.len() - 1
    }

    /// Always false: the head node cannot be removed.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            cursor: Some(&self.head),
        }
    }
}

impl Drop for Chain {
    fn drop(&mut self) {
        // Unlink one node at a time so dropping a long chain cannot recurse deeply.
        let mut link = self.head.next.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

pub struct Iter<'a> {
    cursor: Option<&'a Node>,
}

impl Iterator for Iter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let node = self.cursor?;
        self.cursor = node.next();
        Some(node.value)
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
