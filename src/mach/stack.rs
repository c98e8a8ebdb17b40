/// ## Fixed capacity evaluation stack
///
/// Sized once when a script is built. Scripts are validated up front, so
/// the accessors only assert their bounds in debug builds; pushing never
/// reallocates.

#[derive(Clone)]
pub struct Stack<T> {
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T: Copy> Stack<T> {
    pub fn with_capacity(capacity: usize) -> Stack<T> {
        Stack {
            vec: Vec::with_capacity(capacity),
        }
    }
    /// Like [`Stack::with_capacity`], but `None` when the allocation fails.
    pub fn try_with_capacity(capacity: usize) -> Option<Stack<T>> {
        let mut vec = Vec::new();
        vec.try_reserve_exact(capacity).ok()?;
        Some(Stack { vec })
    }
    pub fn capacity(&self) -> usize {
        self.vec.capacity()
    }
    pub fn clear(&mut self) {
        self.vec.clear()
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }
    pub fn as_slice(&self) -> &[T] {
        &self.vec
    }
    #[inline]
    pub fn push(&mut self, val: T) {
        debug_assert!(self.vec.len() < self.vec.capacity(), "stack overflow");
        self.vec.push(val);
    }
    #[inline]
    pub fn extend_from_slice(&mut self, vals: &[T]) {
        debug_assert!(self.vec.len() + vals.len() <= self.vec.capacity());
        self.vec.extend_from_slice(vals);
    }
    #[inline]
    pub fn pop(&mut self) -> T {
        debug_assert!(!self.vec.is_empty(), "stack underflow");
        let len = self.vec.len() - 1;
        let val = self.vec[len];
        self.vec.truncate(len);
        val
    }
    #[inline]
    pub fn top(&self) -> T {
        self.vec[self.vec.len() - 1]
    }
    #[inline]
    pub fn top_mut(&mut self) -> &mut T {
        let len = self.vec.len();
        &mut self.vec[len - 1]
    }
    /// Replaces the top value with `f(top)`.
    #[inline]
    pub fn unary<F: FnOnce(T) -> T>(&mut self, f: F) {
        let top = self.top_mut();
        *top = f(*top);
    }
    /// Pops `b`, then replaces `a` with `f(a, b)`.
    #[inline]
    pub fn binary<F: FnOnce(T, T) -> T>(&mut self, f: F) {
        let b = self.pop();
        self.unary(|a| f(a, b));
    }
    /// Pops `c` and `b`, then replaces `a` with `f(a, b, c)`.
    #[inline]
    pub fn ternary<F: FnOnce(T, T, T) -> T>(&mut self, f: F) {
        let c = self.pop();
        let b = self.pop();
        self.unary(|a| f(a, b, c));
    }
    pub fn swap(&mut self) {
        let len = self.vec.len();
        self.vec.swap(len - 1, len - 2);
    }
}
