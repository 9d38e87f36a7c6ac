use clap::Parser;
use kustag::application::{current_tag, patch_tag, PatchOptions};
use kustag::cli::{format_current_tag, format_patch_report, Cli, Commands};
use kustag::error::KustagError;
use kustag::infrastructure::{Config, ManifestStore};

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), KustagError> {
    let current_dir = std::env::current_dir()?;
    let config = Config::load_from_dir(&current_dir)?;

    let store = ManifestStore::new(config.resolve_manifest(cli.file.as_deref()));
    let image = config.resolve_image(cli.image.as_deref());

    match cli.command {
        Some(Commands::Current) => {
            let tag = current_tag(&store, image.as_deref())?;
            println!("{}", format_current_tag(tag.as_deref()));
            Ok(())
        }
        None => {
            if let Some(version) = cli.release_version {
                let report = patch_tag(
                    &store,
                    PatchOptions {
                        version,
                        image,
                        dry_run: cli.dry_run,
                    },
                )?;
                println!("{}", format_patch_report(&report));
                Ok(())
            } else {
                // No command and no version, show help
                println!("kustag - Release tag patcher for kustomization overlays");
                println!("Use --help for usage information");
                Ok(())
            }
        }
    }
}
