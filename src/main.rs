use clap::Parser;

use equiview::cli::{Cli, Commands};
use equiview::commands::{
    run_charts, run_config, run_health, run_history, run_init, run_logout, run_pdf, run_show,
    run_summary, run_upload,
};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Upload(args) => run_upload(args, &cli),
        Commands::Show(args) => run_show(args, &cli),
        Commands::History(args) => run_history(args, &cli),
        Commands::Summary(args) => run_summary(args, &cli),
        Commands::Charts(args) => run_charts(args, &cli),
        Commands::Pdf(args) => run_pdf(args, &cli),
        Commands::Logout => run_logout(&cli),
        Commands::Health => run_health(&cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}
