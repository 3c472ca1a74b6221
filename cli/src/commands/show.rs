use crate::commands::shared::{open_service, OutputArgs};
use crate::commands::validators;
use clap::Args;
use hurl_lib::{HurlConfig, HurlError, Snapshot};
use serde::Serialize;

#[derive(Serialize)]
pub struct SnapshotPairView {
    pub hurl: Snapshot,
    pub view: Snapshot,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    #[arg(help = "Hurl or view id", value_parser = validators::validate_id)]
    pub id: String,

    #[arg(help = "View id to show alongside", value_parser = validators::validate_id)]
    pub view_id: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn execute_show(
    config: &HurlConfig,
    args: &ShowArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let service = open_service(config);
    let formatter = crate::core::formatter::get_formatter(&args.output.output);

    match &args.view_id {
        Some(view_id) => {
            let (hurl, view) = service
                .lookup_pair(&args.id, view_id)?
                .ok_or_else(|| HurlError::NotFound(format!("{} {view_id}", args.id)))?;
            print!("{}", formatter.format(&SnapshotPairView { hurl, view }));
        }
        None => {
            let snapshot = service
                .lookup(&args.id)?
                .ok_or_else(|| HurlError::NotFound(args.id.clone()))?;
            print!("{}", formatter.format(&snapshot));
        }
    }

    Ok(())
}
