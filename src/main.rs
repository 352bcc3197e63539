use clap::Parser;
use miette::Result;
use shelfsync::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Reset SIGPIPE so piping `status` into `head` exits quietly instead of panicking
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    match cli.command {
        Commands::Import(args) => shelfsync::cli::commands::import::run(args, &global),
        Commands::Restructure(args) => shelfsync::cli::commands::restructure::run(args, &global),
        Commands::Sync(args) => shelfsync::cli::commands::sync::run(args, &global),
        Commands::Status(args) => shelfsync::cli::commands::status::run(args, &global),
        Commands::Completions(args) => shelfsync::cli::commands::completions::run(args),
    }
}
