//! Destination for `print` output.
//!
//! Stdout for the CLI, an in-memory buffer for tests and embedding hosts.

use std::cell::RefCell;
use std::rc::Rc;

/// Where printed lines go.
#[derive(Clone, Debug, Default)]
pub enum PrintHandler {
    #[default]
    Stdout,
    Buffer(OutputBuffer),
    /// Drop all output.
    Silent,
}

impl PrintHandler {
    /// A buffer handler and a handle to read what it captures.
    pub fn buffer() -> (PrintHandler, OutputBuffer) {
        let buffer = OutputBuffer::default();
        (PrintHandler::Buffer(buffer.clone()), buffer)
    }

    pub fn println(&self, line: &str) {
        match self {
            PrintHandler::Stdout => println!("{line}"),
            PrintHandler::Buffer(buffer) => buffer.push_line(line),
            PrintHandler::Silent => {}
        }
    }
}

/// Shared capture buffer.
#[derive(Clone, Debug, Default)]
pub struct OutputBuffer(Rc<RefCell<String>>);

impl OutputBuffer {
    fn push_line(&self, line: &str) {
        let mut buf = self.0.borrow_mut();
        buf.push_str(line);
        buf.push('\n');
    }

    /// Everything captured so far.
    pub fn contents(&self) -> String {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_captures_lines() {
        let (handler, output) = PrintHandler::buffer();
        handler.println("one");
        handler.println("two");
        assert_eq!(output.contents(), "one\ntwo\n");
        output.clear();
        assert_eq!(output.contents(), "");
    }

    #[test]
    fn silent_discards() {
        PrintHandler::Silent.println("nothing");
    }
}
