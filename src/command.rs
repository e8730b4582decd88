//! Curl command model
//!
//! An in-memory representation of one HTTP request's curl-relevant
//! attributes. Whatever captured the request populates the model through the
//! fluent mutators below; the [`Serializer`](crate::serializer::Serializer)
//! then renders it as many times as needed without mutating it.
//!
//! No mutator validates its argument. An incomplete model (say, a URL that
//! was never set) renders to whatever the assembly rules naturally produce.

use std::fmt;

use crate::platform::Platform;
use crate::serializer::{RenderOptions, Serializer};

/// One HTTP header, name and value stored verbatim.
#[derive(Debug, Clone)]
pub struct Header {
    pub name: String,
    pub value: String,
}

/// One multipart form field.
#[derive(Debug, Clone)]
pub struct FormPart {
    pub name: String,
    pub content: String,
}

/// Basic-auth credentials, rendered as `--user 'user:password'`.
#[derive(Debug, Clone)]
pub struct ServerAuthentication {
    pub user: String,
    pub password: String,
}

/// The curl-relevant attributes of one captured HTTP request.
///
/// Headers, form parts and data fragments keep their insertion order;
/// duplicate header names are kept and all of them are emitted.
#[derive(Debug, Clone, Default)]
pub struct CurlCommand {
    pub(crate) url: String,
    pub(crate) method: Option<String>,
    pub(crate) headers: Vec<Header>,
    pub(crate) cookie_header: Option<String>,
    pub(crate) form_parts: Vec<FormPart>,
    pub(crate) data_fragments: Vec<String>,
    pub(crate) server_authentication: Option<ServerAuthentication>,
    pub(crate) compressed: bool,
    pub(crate) verbose: bool,
    pub(crate) insecure: bool,
}

impl CurlCommand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.url = url.into();
        self
    }

    /// Set an explicit request method. When absent, curl picks its implicit
    /// method (GET, or POST once a body is present).
    pub fn set_method(&mut self, method: impl Into<String>) -> &mut Self {
        self.method = Some(method.into());
        self
    }

    /// Append a header; duplicates by name are kept.
    pub fn add_header(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.headers.push(Header {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Remove every header whose name matches `name` exactly. Removing
    /// `"Cookie"` also clears the cookie header, so the two representations
    /// never disagree about whether a cookie is present.
    pub fn remove_header(&mut self, name: &str) -> &mut Self {
        self.headers.retain(|header| header.name != name);
        if name == "Cookie" {
            self.cookie_header = None;
        }
        self
    }

    pub fn add_form_part(
        &mut self,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> &mut Self {
        self.form_parts.push(FormPart {
            name: name.into(),
            content: content.into(),
        });
        self
    }

    /// Append one chunk of request body, rendered as its own
    /// `--data-binary` argument.
    pub fn add_data_fragment(&mut self, content: impl Into<String>) -> &mut Self {
        self.data_fragments.push(content.into());
        self
    }

    /// Set the full `Cookie` header value (semicolon-joined pairs), rendered
    /// with the dedicated `--cookie` flag rather than `--header`.
    pub fn set_cookie_header(&mut self, cookie_header: impl Into<String>) -> &mut Self {
        self.cookie_header = Some(cookie_header.into());
        self
    }

    pub fn set_compressed(&mut self, compressed: bool) -> &mut Self {
        self.compressed = compressed;
        self
    }

    pub fn set_verbose(&mut self, verbose: bool) -> &mut Self {
        self.verbose = verbose;
        self
    }

    pub fn set_insecure(&mut self, insecure: bool) -> &mut Self {
        self.insecure = insecure;
        self
    }

    pub fn set_server_authentication(
        &mut self,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> &mut Self {
        self.server_authentication = Some(ServerAuthentication {
            user: user.into(),
            password: password.into(),
        });
        self
    }

    /// Whether any body fragment has been added. Capture adapters use this
    /// to decide whether to default the method to POST.
    pub fn has_data(&self) -> bool {
        !self.data_fragments.is_empty()
    }

    /// Render this model for the given target and formatting choices. Pure
    /// function of its arguments; rendering never mutates the model.
    pub fn as_string(
        &self,
        target_platform: Platform,
        use_short_form: bool,
        print_multiliner: bool,
        escape_non_ascii: bool,
    ) -> String {
        Serializer::new(
            target_platform,
            use_short_form,
            print_multiliner,
            escape_non_ascii,
        )
        .serialize(self)
    }

    /// Render with a [`RenderOptions`] bundle.
    pub fn render(&self, options: &RenderOptions) -> String {
        Serializer::from_options(options).serialize(self)
    }
}

/// Default rendering: auto-detected platform, long flags, multi-line layout,
/// non-ASCII escaped.
impl fmt::Display for CurlCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string(Platform::AutoDetect, false, true, true))
    }
}
