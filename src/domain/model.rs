use serde::{Deserialize, Serialize};

/// Fixed second line of every greeting.
pub const WELCOME_LINE: &str = "Welcome to Skywards";

/// A single greeting, parameterized by the name to greet.
///
/// Any text is accepted as-is, including the empty string; the rendered
/// output is always exactly two lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Greeting {
    pub name: String,
}

impl Greeting {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The two output lines, in emission order.
    pub fn lines(&self) -> [String; 2] {
        [format!("Hello, {}", self.name), WELCOME_LINE.to_string()]
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub greetings_sent: usize,
    pub sum: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_lines() {
        let greeting = Greeting::new("Ajlal");
        let lines = greeting.lines();
        assert_eq!(lines[0], "Hello, Ajlal");
        assert_eq!(lines[1], "Welcome to Skywards");
    }

    #[test]
    fn test_greeting_accepts_empty_name() {
        let greeting = Greeting::new("");
        let lines = greeting.lines();
        assert_eq!(lines[0], "Hello, ");
        assert_eq!(lines[1], "Welcome to Skywards");
    }

    #[test]
    fn test_second_line_is_fixed() {
        for name in ["Manas", "Anas", "Wamiq", "漢字", " spaced "] {
            assert_eq!(Greeting::new(name).lines()[1], WELCOME_LINE);
        }
    }
}
