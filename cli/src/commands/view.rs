use crate::commands::shared::{open_service, OutputArgs};
use crate::commands::validators;
use clap::Args;
use hurl_lib::{HurlConfig, HurlError};

#[derive(Debug, Args)]
pub struct ViewArgs {
    #[arg(help = "View id", value_parser = validators::validate_id)]
    pub id: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn execute_view(
    config: &HurlConfig,
    args: &ViewArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let service = open_service(config);
    let view = service
        .store()
        .find_view(&args.id)
        .map_err(HurlError::from)?
        .ok_or_else(|| HurlError::NotFound(args.id.clone()))?;

    let formatter = crate::core::formatter::get_formatter(&args.output.output);
    print!("{}", formatter.format(&view.artifacts));
    Ok(())
}
