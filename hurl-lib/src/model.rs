use crate::core::error::HurlError;
use crate::fields;
use serde::{Deserialize, Serialize};

pub const DEFAULT_METHOD: &str = "GET";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthScheme {
    #[default]
    None,
    Basic,
}

impl AuthScheme {
    /// Unknown or missing schemes are not an error, they just mean no auth.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("basic") => AuthScheme::Basic,
            _ => AuthScheme::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthScheme::None => "none",
            AuthScheme::Basic => "basic",
        }
    }
}

/// Raw submission as it arrives from the outer layer. Nothing here is trusted yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestForm {
    pub url: Option<String>,
    pub method: Option<String>,
    pub auth: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub follow_redirects: Option<String>,
    #[serde(rename = "header-keys", default)]
    pub header_keys: Vec<String>,
    #[serde(rename = "header-vals", default)]
    pub header_vals: Vec<String>,
    #[serde(rename = "param-keys", default)]
    pub param_keys: Vec<String>,
    #[serde(rename = "param-vals", default)]
    pub param_vals: Vec<String>,
    #[serde(rename = "post-body")]
    pub post_body: Option<String>,
}

/// A submitted request, with presence of every optional field decided.
///
/// The method is kept as submitted so a stored hurl replays verbatim;
/// [`RequestSpec::normalized_method`] gives the one actually sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSpec {
    pub url: String,
    pub method: Option<String>,
    pub auth: AuthScheme,
    pub username: Option<String>,
    pub password: Option<String>,
    pub follow_redirects: bool,
    #[serde(rename = "header-keys", default)]
    pub header_keys: Vec<String>,
    #[serde(rename = "header-vals", default)]
    pub header_vals: Vec<String>,
    #[serde(rename = "param-keys", default)]
    pub param_keys: Vec<String>,
    #[serde(rename = "param-vals", default)]
    pub param_vals: Vec<String>,
    #[serde(rename = "post-body")]
    pub post_body: Option<String>,
}

impl RequestSpec {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: None,
            auth: AuthScheme::None,
            username: None,
            password: None,
            follow_redirects: false,
            header_keys: Vec::new(),
            header_vals: Vec::new(),
            param_keys: Vec::new(),
            param_vals: Vec::new(),
            post_body: None,
        }
    }

    pub fn from_form(form: RequestForm) -> Result<Self, HurlError> {
        let method = present(form.method);
        if let Some(method) = &method {
            if reqwest::Method::from_bytes(method.to_uppercase().as_bytes()).is_err() {
                return Err(HurlError::Validation(format!(
                    "'{method}' is not a valid HTTP method"
                )));
            }
        }

        Ok(Self {
            url: form.url.map(|url| url.trim().to_string()).unwrap_or_default(),
            method,
            auth: AuthScheme::from_param(form.auth.as_deref()),
            username: present(form.username),
            password: present(form.password),
            follow_redirects: is_checked(form.follow_redirects.as_deref()),
            header_keys: form.header_keys,
            header_vals: form.header_vals,
            param_keys: form.param_keys,
            param_vals: form.param_vals,
            post_body: present(form.post_body),
        })
    }

    pub fn normalized_method(&self) -> String {
        self.method
            .as_deref()
            .map(str::to_uppercase)
            .unwrap_or_else(|| DEFAULT_METHOD.to_string())
    }

    /// Outbound body for `method`. A raw post body wins over collated fields.
    pub fn outbound_body(&self, method: &str) -> OutboundBody {
        if !fields::method_has_body(method) {
            return OutboundBody::Empty;
        }
        match &self.post_body {
            Some(raw) if !raw.is_empty() => OutboundBody::Raw(raw.clone()),
            _ => OutboundBody::Fields(fields::collect_body_fields(
                method,
                &self.param_keys,
                &self.param_vals,
            )),
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn is_checked(value: Option<&str>) -> bool {
    match value {
        Some(v) => !matches!(
            v.trim().to_ascii_lowercase().as_str(),
            "" | "0" | "false" | "off" | "no"
        ),
        None => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundBody {
    Empty,
    Fields(Vec<(String, String)>),
    Raw(String),
}

impl OutboundBody {
    /// Human-readable echo: fields as `name=value` joined by `&`, raw bodies verbatim.
    pub fn echo(&self) -> String {
        match self {
            OutboundBody::Empty => String::new(),
            OutboundBody::Fields(fields) => fields
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join("&"),
            OutboundBody::Raw(raw) => raw.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            OutboundBody::Empty => true,
            OutboundBody::Fields(fields) => fields.is_empty(),
            OutboundBody::Raw(raw) => raw.is_empty(),
        }
    }
}

/// What one execution observed on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedExchange {
    pub sent_header_lines: Vec<String>,
    pub response_headers: String,
    pub response_body: String,
    pub content_type: Option<String>,
    pub outbound_body: OutboundBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hurl {
    pub id: String,
    #[serde(flatten)]
    pub spec: RequestSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewArtifacts {
    pub header: String,
    pub body: String,
    pub request: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct View {
    pub id: String,
    #[serde(flatten)]
    pub artifacts: ViewArtifacts,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Snapshot {
    Hurl(Hurl),
    View(View),
}

impl Snapshot {
    pub fn id(&self) -> &str {
        match self {
            Snapshot::Hurl(hurl) => &hurl.id,
            Snapshot::View(view) => &view.id,
        }
    }
}
