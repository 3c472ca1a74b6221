use crate::commands::shared::{open_service, OutputArgs};
use crate::commands::validators;
use clap::Args;
use hurl_lib::core::logger::Logger;
use hurl_lib::{HurlConfig, RequestForm, SubmitResponse};

#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(help = "Target URL (http or https)")]
    pub url: String,

    #[arg(short = 'X', long = "method", help = "HTTP method, GET when omitted")]
    pub method: Option<String>,

    #[arg(
        long = "auth",
        value_name = "SCHEME",
        help = "Authentication scheme: basic"
    )]
    pub auth: Option<String>,

    #[arg(short = 'u', long = "username")]
    pub username: Option<String>,

    #[arg(short = 'p', long = "password")]
    pub password: Option<String>,

    #[arg(short = 'L', long = "follow-redirects", help = "Follow redirects")]
    pub follow_redirects: bool,

    #[arg(
        short = 'H',
        long = "header",
        value_name = "NAME: VALUE",
        help = "Request header, repeatable",
        value_parser = validators::validate_header
    )]
    pub headers: Vec<(String, String)>,

    #[arg(
        long = "header-key",
        value_name = "NAME",
        help = "Header name, paired by position with --header-val"
    )]
    pub header_keys: Vec<String>,

    #[arg(long = "header-val", value_name = "VALUE", allow_hyphen_values = true)]
    pub header_vals: Vec<String>,

    #[arg(
        short = 'd',
        long = "data",
        value_name = "NAME=VALUE",
        help = "Body field for POST, PUT and PATCH, repeatable",
        value_parser = validators::validate_field
    )]
    pub fields: Vec<(String, String)>,

    #[arg(
        long = "param-key",
        value_name = "NAME",
        help = "Field name, paired by position with --param-val"
    )]
    pub param_keys: Vec<String>,

    #[arg(long = "param-val", value_name = "VALUE", allow_hyphen_values = true)]
    pub param_vals: Vec<String>,

    #[arg(
        long = "body",
        value_name = "BODY",
        help = "Raw request body; replaces any fields"
    )]
    pub post_body: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl RunArgs {
    /// Paired key/value lists first, then the shorthands. Values without a key are dropped.
    pub fn to_form(&self) -> RequestForm {
        let mut header_keys = self.header_keys.clone();
        let mut header_vals = self.header_vals.clone();
        header_vals.resize(header_keys.len(), String::new());
        for (name, value) in &self.headers {
            header_keys.push(name.clone());
            header_vals.push(value.clone());
        }

        let mut param_keys = self.param_keys.clone();
        let mut param_vals = self.param_vals.clone();
        param_vals.resize(param_keys.len(), String::new());
        for (name, value) in &self.fields {
            param_keys.push(name.clone());
            param_vals.push(value.clone());
        }

        RequestForm {
            url: Some(self.url.clone()),
            method: self.method.clone(),
            auth: self.auth.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            follow_redirects: self.follow_redirects.then(|| "on".to_string()),
            header_keys,
            header_vals,
            param_keys,
            param_vals,
            post_body: self.post_body.clone(),
        }
    }
}

pub async fn execute_run(
    config: &HurlConfig,
    args: &RunArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let service = open_service(config);
    let result = service.try_submit(args.to_form()).await;

    if let Ok(submission) = &result {
        Logger::debug(&format!(
            "stored hurl {} and view {}",
            submission.hurl_id, submission.view_id
        ));
    }

    let formatter = crate::core::formatter::get_formatter(&args.output.output);
    match result {
        Ok(submission) => {
            print!("{}", formatter.format(&SubmitResponse::Success(submission)));
            Ok(())
        }
        Err(error) => {
            print!("{}", formatter.format(&SubmitResponse::from_error(&error)));
            Err(Box::new(error))
        }
    }
}
