//! Target shell selection
//!
//! A rendered command is escaped for one concrete shell flavor. Callers
//! either name it explicitly or let [`Platform::AutoDetect`] pick the flavor
//! of the operating system the process is running on.

/// The shell flavor a rendered command is escaped for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    /// Resolve to [`Platform::Posix`] or [`Platform::WindowsCmd`] from the
    /// running operating system.
    #[default]
    AutoDetect,
    /// POSIX-compatible shells (sh, bash, zsh, ...).
    Posix,
    /// The Windows `cmd.exe` interpreter.
    WindowsCmd,
}

impl Platform {
    /// Collapse [`Platform::AutoDetect`] to a concrete flavor. The result is
    /// never `AutoDetect`.
    pub fn resolved(self) -> Platform {
        match self {
            Platform::AutoDetect => {
                if cfg!(windows) {
                    Platform::WindowsCmd
                } else {
                    Platform::Posix
                }
            }
            other => other,
        }
    }

    pub fn is_os_windows(self) -> bool {
        self.resolved() == Platform::WindowsCmd
    }

    /// The newline convention of the target shell.
    pub fn line_separator(self) -> &'static str {
        if self.is_os_windows() {
            "\r\n"
        } else {
            "\n"
        }
    }

    /// The line-continuation character of the target shell.
    pub fn continuation(self) -> &'static str {
        if self.is_os_windows() {
            "^"
        } else {
            "\\"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolved_is_concrete() {
        assert_ne!(Platform::AutoDetect.resolved(), Platform::AutoDetect);
        assert_eq!(Platform::Posix.resolved(), Platform::Posix);
        assert_eq!(Platform::WindowsCmd.resolved(), Platform::WindowsCmd);
    }

    #[test]
    fn test_separators() {
        assert_eq!(Platform::Posix.line_separator(), "\n");
        assert_eq!(Platform::Posix.continuation(), "\\");
        assert_eq!(Platform::WindowsCmd.line_separator(), "\r\n");
        assert_eq!(Platform::WindowsCmd.continuation(), "^");
    }

    #[test]
    fn test_default_is_auto_detect() {
        assert_eq!(Platform::default(), Platform::AutoDetect);
    }
}
