use std::collections::VecDeque;

use super::Order;

pub trait TraversalCollection<T>: Default {
    fn push(&mut self, value: T);
    fn pop(&mut self) -> Option<T>;
    fn clear(&mut self);
}

#[derive(Debug)]
pub struct Queue<T>(pub VecDeque<T>);

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self(VecDeque::new())
    }
}

impl<T> TraversalCollection<T> for Queue<T> {
    fn push(&mut self, value: T) {
        self.0.push_back(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

#[derive(Debug)]
pub struct Stack<T>(pub Vec<T>);

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> TraversalCollection<T> for Stack<T> {
    fn push(&mut self, value: T) {
        self.0.push(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop()
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

/// Queue or stack of gray vertices, chosen at runtime.
#[derive(Debug)]
pub enum Frontier {
    Queue(Queue<usize>),
    Stack(Stack<usize>),
}

impl Frontier {
    pub fn new(order: Order) -> Self {
        match order {
            Order::BreadthFirst => Frontier::Queue(Queue::default()),
            Order::DepthFirst => Frontier::Stack(Stack::default()),
        }
    }
}

impl Default for Frontier {
    fn default() -> Self {
        Self::new(Order::default())
    }
}

impl TraversalCollection<usize> for Frontier {
    fn push(&mut self, value: usize) {
        match self {
            Frontier::Queue(queue) => queue.push(value),
            Frontier::Stack(stack) => stack.push(value),
        }
    }

    fn pop(&mut self) -> Option<usize> {
        match self {
            Frontier::Queue(queue) => queue.pop(),
            Frontier::Stack(stack) => stack.pop(),
        }
    }

    fn clear(&mut self) {
        match self {
            Frontier::Queue(queue) => queue.clear(),
            Frontier::Stack(stack) => stack.clear(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frontier_discipline() {
        let mut bfs = Frontier::new(Order::BreadthFirst);
        let mut dfs = Frontier::new(Order::DepthFirst);

        for v in [3, 1, 2] {
            bfs.push(v);
            dfs.push(v);
        }

        assert_eq!(bfs.pop(), Some(3));
        assert_eq!(dfs.pop(), Some(2));

        bfs.clear();
        assert_eq!(bfs.pop(), None);
    }
}
