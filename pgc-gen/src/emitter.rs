//! A small string-builder wrapper for emitted CIL (§4.4).
//!
//! Every instruction line is indented with two tabs and terminated with
//! `\r\n`, matching the line discipline `ilasm` expects; labels sit at one
//! tab so they read as a visual outdent against the instructions under them.

pub struct Emitter {
    out: String,
}

impl Emitter {
    pub fn new() -> Self {
        Self { out: String::new() }
    }

    /// Appends a raw chunk verbatim — used for the fixed prologue/epilogue,
    /// which already carry their own indentation and line endings.
    pub fn raw(&mut self, text: &str) {
        self.out.push_str(text);
    }

    /// Appends one instruction line.
    pub fn instr(&mut self, line: &str) {
        self.out.push_str("\t\t");
        self.out.push_str(line);
        self.out.push_str("\r\n");
    }

    /// Appends a label line.
    pub fn label(&mut self, name: &str) {
        self.out.push('\t');
        self.out.push_str(name);
        self.out.push_str(":\r\n");
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}
