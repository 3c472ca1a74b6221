use crate::core::formatter::OutputFormat;
use clap::Args;
use hurl_lib::{FileStore, HurlConfig, HurlService, ReqwestTransport};

#[derive(Debug, Args)]
pub struct OutputArgs {
    #[arg(
        short = 'o',
        long = "output",
        help = "Output format: text or json",
        default_value_t = OutputFormat::Text,
        value_enum,
        ignore_case = true
    )]
    pub output: OutputFormat,
}

pub fn open_service(config: &HurlConfig) -> HurlService<FileStore, ReqwestTransport> {
    HurlService::new(
        config,
        FileStore::new(&config.store_path),
        ReqwestTransport::new(),
    )
}
