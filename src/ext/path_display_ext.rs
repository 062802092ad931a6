use std::path::Path;

/// Renders a path for messages the way the user is most likely to recognise it.
pub trait PathDisplayExt {
    fn best_effort_display(&self) -> String;
}

impl PathDisplayExt for Path {
    fn best_effort_display(&self) -> String {
        // Canonical form needs the file to exist; fall back to a lexical absolute path
        self.canonicalize()
            .or_else(|_| std::path::absolute(self))
            .unwrap_or_else(|_| self.to_path_buf())
            .display()
            .to_string()
    }
}
