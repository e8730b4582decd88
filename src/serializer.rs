//! Escaping engine and argument-line assembly
//!
//! Renders a [`CurlCommand`] as one shell command line. Two escaping depths
//! exist on purpose: body fragments go through a full per-character
//! transform (ANSI-C quoting on POSIX, wrap-based escaping on `cmd.exe`)
//! because captured bodies are the values most likely to carry control
//! characters or binary-looking text, while URL, header, cookie, form and
//! auth values are wrapped in plain quotes verbatim. Existing consumers
//! compare rendered commands byte for byte, so both depths must stay as
//! they are.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::command::CurlCommand;
use crate::platform::Platform;

/// Long flag name to short flag name. Flags absent from this table keep
/// their long spelling even when short form is requested (`curl` itself and
/// `--compressed` have no short form; `--data-binary` is deliberately
/// unmapped).
static SHORT_FLAG_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("--user", "-u"),
        ("--data", "-d"),
        ("--insecure", "-k"),
        ("--form", "-F"),
        ("--cookie", "-b"),
        ("--header", "-H"),
        ("--request", "-X"),
        ("--verbose", "-v"),
    ])
});

/// Characters curl's URL globbing syntax assigns meaning to.
static URL_GLOB_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\[\]{}\\]").expect("Invalid glob regex"));

/// Runs of newline characters, rewritten for cmd.exe caret continuation.
static NEWLINE_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\r\n]+").expect("Invalid newline regex"));

/// Rendering choices, bundled. Defaults to the auto-detected platform with
/// long flags, multi-line layout and non-ASCII escaping.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub target_platform: Platform,
    pub use_short_form: bool,
    pub print_multiliner: bool,
    pub escape_non_ascii: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            target_platform: Platform::AutoDetect,
            use_short_form: false,
            print_multiliner: true,
            escape_non_ascii: true,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target_platform(mut self, platform: Platform) -> Self {
        self.target_platform = platform;
        self
    }

    pub fn use_short_form(mut self) -> Self {
        self.use_short_form = true;
        self
    }

    pub fn use_long_form(mut self) -> Self {
        self.use_short_form = false;
        self
    }

    pub fn print_multiliner(mut self) -> Self {
        self.print_multiliner = true;
        self
    }

    pub fn print_singleliner(mut self) -> Self {
        self.print_multiliner = false;
        self
    }

    pub fn escape_non_ascii(mut self) -> Self {
        self.escape_non_ascii = true;
        self
    }

    pub fn dont_escape_non_ascii(mut self) -> Self {
        self.escape_non_ascii = false;
        self
    }
}

/// Stateless renderer. Holds the four rendering choices, resolved once at
/// construction; safe to reuse across models and across threads.
#[derive(Debug, Clone)]
pub struct Serializer {
    platform: Platform,
    use_short_form: bool,
    print_multiliner: bool,
    escape_non_ascii: bool,
}

impl Serializer {
    pub fn new(
        target_platform: Platform,
        use_short_form: bool,
        print_multiliner: bool,
        escape_non_ascii: bool,
    ) -> Self {
        Self {
            platform: target_platform.resolved(),
            use_short_form,
            print_multiliner,
            escape_non_ascii,
        }
    }

    pub fn from_options(options: &RenderOptions) -> Self {
        Self::new(
            options.target_platform,
            options.use_short_form,
            options.print_multiliner,
            options.escape_non_ascii,
        )
    }

    /// Render `curl` as one command line. Flag lines come out in a fixed
    /// order: URL, request method, cookie, headers, form parts, data
    /// fragments, auth, then the boolean flags.
    pub fn serialize(&self, curl: &CurlCommand) -> String {
        trace!(
            platform = ?self.platform,
            short_form = self.use_short_form,
            multiliner = self.print_multiliner,
            escape_non_ascii = self.escape_non_ascii,
            "rendering curl command"
        );

        let mut command: Vec<Vec<String>> = Vec::new();

        command.push(self.line("curl", vec![self.quote_url(&curl.url)]));

        if let Some(method) = &curl.method {
            command.push(self.line("--request", vec![method.clone()]));
        }

        if let Some(cookie_header) = &curl.cookie_header {
            command.push(self.line("--cookie", vec![self.quote_string(cookie_header)]));
        }

        for header in &curl.headers {
            let text = format!("{}: {}", header.name, header.value);
            command.push(self.line("--header", vec![self.quote_string(&text)]));
        }

        for part in &curl.form_parts {
            let text = format!("{}={}", part.name, part.content);
            command.push(self.line("--form", vec![self.quote_string(&text)]));
        }

        for data in &curl.data_fragments {
            command.push(self.line("--data-binary", vec![self.escape_string(data)]));
        }

        if let Some(auth) = &curl.server_authentication {
            let text = format!("{}:{}", auth.user, auth.password);
            command.push(self.line("--user", vec![self.quote_string(&text)]));
        }

        if curl.compressed {
            command.push(self.line("--compressed", vec![]));
        }
        if curl.insecure {
            command.push(self.line("--insecure", vec![]));
        }
        if curl.verbose {
            command.push(self.line("--verbose", vec![]));
        }

        let joiner = self.joining_string();
        command
            .iter()
            .map(|line| line.join(" "))
            .collect::<Vec<_>>()
            .join(&joiner)
    }

    fn line(&self, long_name: &'static str, arguments: Vec<String>) -> Vec<String> {
        let mut line = Vec::with_capacity(arguments.len() + 1);
        line.push(self.flag_name(long_name).to_string());
        line.extend(arguments);
        line
    }

    fn flag_name(&self, long_name: &'static str) -> &'static str {
        if self.use_short_form {
            SHORT_FLAG_NAMES.get(long_name).copied().unwrap_or(long_name)
        } else {
            long_name
        }
    }

    fn joining_string(&self) -> String {
        if self.print_multiliner {
            format!(
                " {}{}  ",
                self.platform.continuation(),
                self.platform.line_separator()
            )
        } else {
            " ".to_string()
        }
    }

    /// Quote the URL, then backslash-escape the characters curl's own
    /// globbing would otherwise interpret.
    fn quote_url(&self, url: &str) -> String {
        URL_GLOB_RE
            .replace_all(&self.quote_string(url), "\\$0")
            .into_owned()
    }

    /// Plain quote wrapping, used for every value except body fragments.
    /// The value is kept verbatim inside the quotes.
    fn quote_string(&self, s: &str) -> String {
        if self.platform.is_os_windows() {
            format!("\"{s}\"")
        } else {
            format!("'{s}'")
        }
    }

    /// Full escaping, used for body fragments only.
    fn escape_string(&self, s: &str) -> String {
        if self.platform.is_os_windows() {
            escape_string_win(s)
        } else {
            self.escape_string_posix(s)
        }
    }

    /// Per-character transform, then ANSI-C quoting (`$'...'`) when any
    /// escape sequence was produced, plain single quotes otherwise.
    fn escape_string_posix(&self, s: &str) -> String {
        let escaped: String = s.chars().map(|c| self.escape_char(c)).collect();
        if escaped != s {
            format!("$'{escaped}'")
        } else {
            format!("'{escaped}'")
        }
    }

    fn escape_char(&self, c: char) -> String {
        match c {
            '\n' => "\\n".to_string(),
            '\'' => "\\'".to_string(),
            '\t' => "\\t".to_string(),
            '\r' => "\\r".to_string(),
            // '@' means "load from a file" to --data-binary
            '@' => escape_as_hex(c),
            c if c.is_ascii() => {
                if (' '..='~').contains(&c) {
                    c.to_string()
                } else {
                    escape_as_hex(c)
                }
            }
            c if self.escape_non_ascii => escape_as_hex(c),
            c => c.to_string(),
        }
    }
}

impl Default for Serializer {
    fn default() -> Self {
        Self::from_options(&RenderOptions::default())
    }
}

/// cmd.exe escaping is wrap-based rather than character-by-character:
/// quotes are doubled (recognized by both cmd.exe and the MS CRT argument
/// parser), `%` is wrapped in quotes so it cannot expand to an environment
/// variable, and each run of newlines is re-quoted around a caret
/// continuation because cmd.exe does not accept a newline inside quotes.
/// Backslashes pass through unchanged; see DESIGN.md for the compatibility
/// note on that rule.
fn escape_string_win(s: &str) -> String {
    let escaped = s.replace('"', "\"\"").replace('%', "\"%\"");
    let escaped = NEWLINE_RUN_RE.replace_all(&escaped, "\"^\r\n$0\"");
    format!("\"{escaped}\"")
}

fn escape_as_hex(c: char) -> String {
    let code = c as u32;
    if code < 256 {
        format!("\\x{code:02x}")
    } else {
        format!("\\u{code:04x}")
    }
}
