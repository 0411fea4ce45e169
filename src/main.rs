// ABOUTME: Main entry point for the slidemaster program.
// ABOUTME: Provides a CLI over the sample presentations and the simulated generator.

use clap::{Args, Parser, Subcommand};
use slidemaster::{
    Config, LogNotifier, Presentation, PresentationStore, SlideEditor, SlideError, SortKey,
    Workspace,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the sample presentations
    List(ListArgs),

    /// Generate a presentation from a prompt
    Generate(GenerateArgs),

    /// Show the slides of a sample presentation
    Show(ShowArgs),
}

#[derive(Args)]
struct ListArgs {
    /// Only show presentations whose title contains this text
    #[arg(short, long, default_value = "")]
    query: String,

    /// Sort order: date-desc, date-asc, title-asc, title-desc, slides-desc, slides-asc
    #[arg(short, long)]
    sort: Option<String>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct GenerateArgs {
    /// Description of the presentation to generate
    #[arg(short, long)]
    prompt: String,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ShowArgs {
    /// Title (or part of it) of the presentation to show
    #[arg(short, long)]
    title: String,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

fn print_deck(presentation: &Presentation) {
    println!("{}", presentation.title);
    for (index, slide) in presentation.slides.iter().enumerate() {
        println!("Slide {}: {}", index + 1, slide.title);
        for bullet in slide.bullets() {
            println!("  • {}", bullet);
        }
        if let Some(notes) = slide.notes.as_deref().filter(|n| !n.is_empty()) {
            println!("  Notes: {}", notes);
        }
    }
}

fn run(cli: &Cli, config: &Config) -> slidemaster::Result<()> {
    let clock = slidemaster::system_clock();
    let store = PresentationStore::with_samples(clock.clone(), config.get_generator());

    match &cli.command {
        Some(Commands::List(args)) => {
            let sort_key = match &args.sort {
                Some(key) => key.parse::<SortKey>()?,
                None => config.default_sort,
            };
            let shown = store.query(&args.query, sort_key);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&shown)?);
            } else if shown.is_empty() {
                println!("No presentations found");
            } else {
                let now = clock.now();
                for p in &shown {
                    println!(
                        "{} | {} | Last edited: {}",
                        p.title,
                        p.slide_count_label(),
                        p.last_edited_label(now)
                    );
                }
            }
            Ok(())
        }
        Some(Commands::Generate(args)) => {
            println!("Generating your slides...");
            let simulator = config.get_simulator(clock.clone());
            let presentation = simulator.generate(&args.prompt).wait()?;
            let mut workspace =
                Workspace::new(store, SlideEditor::new(clock), Box::new(LogNotifier));
            workspace.accept_generated(presentation.clone());
            if args.json {
                println!("{}", serde_json::to_string_pretty(&presentation)?);
            } else {
                print_deck(&presentation);
            }
            Ok(())
        }
        Some(Commands::Show(args)) => {
            let found = store
                .query(&args.title, config.default_sort)
                .into_iter()
                .next()
                .ok_or_else(|| {
                    SlideError::ValidationError(format!(
                        "No presentation matches {:?}",
                        args.title
                    ))
                })?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&found)?);
            } else {
                print_deck(&found);
            }
            Ok(())
        }
        None => {
            println!("No command specified. Use --help for usage information.");
            Ok(())
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();
    let config = Config::from_env();

    match run(&cli, &config) {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
