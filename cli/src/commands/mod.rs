pub mod run;
pub mod shared;
pub mod show;
pub mod validators;
pub mod view;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Send a request and store the result")]
    Run(run::RunArgs),
    #[command(about = "Show a stored hurl or view")]
    Show(show::ShowArgs),
    #[command(about = "Show a stored view")]
    View(view::ViewArgs),
}
