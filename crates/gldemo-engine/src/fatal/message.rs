use std::fmt::{self, Write as _};

/// Size of the on-stack buffer used when the heap cannot hold the message.
pub(crate) const STACK_BUFFER_LEN: usize = 1024;

/// A formatted fatal error message.
///
/// The exact length is measured first and reserved on the heap. If that
/// allocation fails the message is formatted into a fixed stack buffer and
/// truncated to fit, so the error path still reports under memory pressure.
pub(crate) enum FatalMessage {
    Heap(String),
    Stack(StackBuffer<STACK_BUFFER_LEN>),
}

impl FatalMessage {
    pub fn format(args: fmt::Arguments<'_>) -> Self {
        let len = measure(args);

        let mut heap = String::new();
        if heap.try_reserve_exact(len).is_ok() {
            // Writing into a `String` with enough capacity cannot fail.
            let _ = heap.write_fmt(args);
            return Self::Heap(heap);
        }

        Self::on_stack(args)
    }

    pub(crate) fn on_stack(args: fmt::Arguments<'_>) -> Self {
        let mut stack = StackBuffer::new();
        let _ = stack.write_fmt(args);
        Self::Stack(stack)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Heap(s) => s,
            Self::Stack(s) => s.as_str(),
        }
    }

    pub fn is_truncated(&self) -> bool {
        match self {
            Self::Heap(_) => false,
            Self::Stack(s) => s.truncated,
        }
    }
}

/// Returns the number of bytes `args` formats to.
fn measure(args: fmt::Arguments<'_>) -> usize {
    struct Counter(usize);

    impl fmt::Write for Counter {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            self.0 += s.len();
            Ok(())
        }
    }

    let mut counter = Counter(0);
    let _ = counter.write_fmt(args);
    counter.0
}

/// Fixed-capacity UTF-8 buffer that silently truncates on a char boundary.
pub(crate) struct StackBuffer<const N: usize> {
    buf: [u8; N],
    len: usize,
    truncated: bool,
}

impl<const N: usize> StackBuffer<N> {
    pub const fn new() -> Self {
        Self { buf: [0; N], len: 0, truncated: false }
    }

    pub fn as_str(&self) -> &str {
        // Only whole chars are ever copied in.
        std::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }
}

impl<const N: usize> Default for StackBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Write for StackBuffer<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.truncated {
            return Ok(());
        }

        let room = N - self.len;
        let mut take = s.len().min(room);
        while !s.is_char_boundary(take) {
            take -= 1;
        }

        self.buf[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
        self.truncated = take < s.len();

        // Keep going so callers see a normal formatting result.
        Ok(())
    }
}
