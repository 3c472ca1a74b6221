pub fn app_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub fn user_agent() -> String {
    format!("hurl/{}", app_version())
}
