use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tabletop_dice::command::parse_roll_command;
use tabletop_dice::config::DEFAULT_MAX_DICE;
use tabletop_dice::{ActorContext, MarkdownStringifier, RollConfig, RollContext};
use tracing_subscriber::EnvFilter;

/// Reads one dice expression (or `/roll` command) per line and rolls it.
#[derive(Parser, Debug)]
#[command(name = "dice-repl", version)]
struct Args {
    /// Seed for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,

    /// Largest number of dice a single expression may roll.
    #[arg(long, default_value_t = DEFAULT_MAX_DICE)]
    max_dice: u32,

    /// JSON file with the actor used for ability terms, e.g.
    /// `{"abilities": {"DEX": 16}, "profBonus": 2}`.
    #[arg(long)]
    actor: Option<PathBuf>,

    /// Print the result as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Render text output as chat markdown.
    #[arg(long, conflicts_with = "json")]
    markdown: bool,
}

fn load_actor(path: &PathBuf) -> Result<ActorContext, Box<dyn Error>> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let actor = args.actor.as_ref().map(load_actor).transpose()?;
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let config = RollConfig::default().with_max_dice(args.max_dice);
    let mut ctx = RollContext::new(config, rng);
    ctx.set_actor(actor.as_ref());

    prompt()?;
    for line in io::stdin().lock().lines() {
        let line = line?;
        let expr = parse_roll_command(&line).unwrap_or(&line);
        if line.trim().is_empty() {
            prompt()?;
            continue;
        }

        match ctx.roll(expr) {
            Ok(roll) if args.json => println!("{}", serde_json::to_string(&roll)?),
            Ok(roll) if args.markdown => println!("{}", MarkdownStringifier::new().stringify(&roll)),
            Ok(roll) => println!("{}", roll),
            Err(why) if args.json => {
                let body = serde_json::json!({
                    "error": why.code(),
                    "message": why.to_string(),
                    "details": why.details(),
                });
                println!("{}", body);
            }
            Err(why) => eprintln!("Error: {}", why),
        }
        prompt()?;
    }
    Ok(())
}
