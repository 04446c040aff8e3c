//! SpellCast Solver - CLI
//!
//! Finds the best words on a SpellCast board, with TUI and CLI modes.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use log::info;
use spellcast_solver::{
    commands::{
        BenchmarkConfig, SolveConfig, analyze_word, read_board, run_benchmark, run_simple,
        solve_board,
    },
    config::{DEFAULT_TOP_N, DictionaryLevel, Language, SolverConfig, parse_adjacency},
    core::{BoardInput, Trie, parse_coordinate},
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::Solver,
    wordlists::{WORDS, load_dictionary},
};
use std::io;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "spellcast_solver",
    about = "Finds the highest scoring words on a SpellCast board",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary directory holding `{language}-words.{level}` files, or 'embedded'
    #[arg(short, long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Dictionary level: 10, 20, 35, 40, 50, 55, 60 or 70
    #[arg(short, long, global = true, default_value_t = DictionaryLevel::MAX.value())]
    level: u8,

    /// Extra English variant: american, australian, british, canadian (repeatable)
    #[arg(long = "language", global = true)]
    languages: Vec<String>,

    /// Number of best words to show
    #[arg(short = 'n', long, global = true, default_value_t = DEFAULT_TOP_N)]
    top: usize,

    /// Neighbour rule: moore (default) or legacy
    #[arg(long, global = true, default_value = "moore")]
    adjacency: String,

    /// Number of swaps available
    #[arg(short, long, global = true, default_value_t = 0)]
    swaps: u32,

    /// Give up searching after this many milliseconds
    #[arg(long, global = true)]
    deadline_ms: Option<u64>,

    #[command(flatten)]
    board: BoardArgs,
}

/// Board description given on the command line
#[derive(Args)]
struct BoardArgs {
    /// All 25 letters, left to right, top to bottom
    #[arg(long, global = true)]
    letters: Option<String>,

    /// 25 y/n flags marking tiles with a gem
    #[arg(long, global = true)]
    gems: Option<String>,

    /// Double word tile as "x y" (origin top left)
    #[arg(long, global = true)]
    double_word: Option<String>,

    /// Double letter tile as "x y"
    #[arg(long, global = true)]
    double_letter: Option<String>,

    /// Triple letter tile as "x y"
    #[arg(long, global = true)]
    triple_letter: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (prompted board entry without TUI)
    Simple,

    /// Solve the board given by --letters
    Solve,

    /// Show every way to spell a word on the board
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Benchmark solver performance on random boards
    Benchmark {
        /// Number of random boards to solve
        #[arg(short = 'c', long, default_value = "50")]
        count: usize,

        /// Random seed for reproducible boards
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn solver_config(cli: &Cli) -> Result<SolverConfig> {
    let languages = cli
        .languages
        .iter()
        .map(|name| Language::from_name(name))
        .collect::<Result<Vec<_>, _>>()?;

    let mut config = SolverConfig::default()
        .with_top_n(cli.top)?
        .with_swap_budget(cli.swaps)
        .with_adjacency(parse_adjacency(&cli.adjacency)?)
        .with_deadline(cli.deadline_ms.map(Duration::from_millis));
    config.dictionary_level = DictionaryLevel::new(cli.level)?;
    config.languages = languages;
    Ok(config)
}

/// Build the dictionary trie from the --dictionary flag
fn load_trie(dictionary: &str, config: &SolverConfig) -> Result<Trie> {
    let trie = if dictionary == "embedded" {
        Trie::build(WORDS)
    } else {
        let words = load_dictionary(dictionary, config.dictionary_level, &config.languages)?;
        Trie::build(&words)
    };
    info!("Dictionary has {} words", trie.len());
    Ok(trie)
}

fn board_input(args: &BoardArgs) -> Result<Option<BoardInput>> {
    let Some(letters) = &args.letters else {
        return Ok(None);
    };

    let coordinate = |text: &Option<String>| {
        text.as_deref()
            .map(parse_coordinate)
            .transpose()
            .map_err(|e| anyhow::anyhow!(e))
    };

    Ok(Some(BoardInput {
        letters: letters.clone(),
        gems: args.gems.clone(),
        double_word: coordinate(&args.double_word)?,
        double_letter: coordinate(&args.double_letter)?,
        triple_letter: coordinate(&args.triple_letter)?,
    }))
}

fn required_board(args: &BoardArgs) -> Result<BoardInput> {
    board_input(args)?.ok_or_else(|| anyhow::anyhow!("This command needs a board: pass --letters"))
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = solver_config(&cli)?;
    let trie = load_trie(&cli.dictionary, &config)?;
    let solver = Solver::new(&trie, config);

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(solver, &cli.board),
        Commands::Simple => run_simple(&solver).map_err(|e| anyhow::anyhow!(e)),
        Commands::Solve => run_solve_command(&solver, &cli.board),
        Commands::Analyze { word } => run_analyze_command(&solver, &cli.board, &word),
        Commands::Benchmark { count, seed } => run_benchmark_command(&solver, count, seed),
    }
}

fn run_solve_command(solver: &Solver<'_>, args: &BoardArgs) -> Result<()> {
    let config = SolveConfig::new(required_board(args)?);
    let result = solve_board(&config, solver).map_err(|e| anyhow::anyhow!(e))?;

    print_solve_result(&result);
    Ok(())
}

fn run_analyze_command(solver: &Solver<'_>, args: &BoardArgs, word: &str) -> Result<()> {
    let board = solver.board(&required_board(args)?)?;
    let result = analyze_word(word, &board, solver).map_err(|e| anyhow::anyhow!(e))?;

    print_analysis_result(&result, &board);
    Ok(())
}

fn run_benchmark_command(solver: &Solver<'_>, count: usize, seed: Option<u64>) -> Result<()> {
    println!("Running benchmark on {count} random boards...");

    let config = BenchmarkConfig {
        boards: count,
        seed,
    };
    let result = run_benchmark(&config, solver).map_err(|e| anyhow::anyhow!(e))?;

    print_benchmark_result(&result);
    Ok(())
}

fn run_play_command(solver: Solver<'_>, args: &BoardArgs) -> Result<()> {
    use spellcast_solver::interactive::{App, run_tui};

    // Without --letters, read the board at the prompt first
    let board = match board_input(args)? {
        Some(input) => solver.board(&input)?,
        None => {
            let manual = read_board(&mut io::stdin().lock(), &mut io::stdout())
                .map_err(|e| anyhow::anyhow!(e))?;
            solver.board(&manual.input)?.with_swap_budget(manual.swaps)
        }
    };

    run_tui(App::new(solver, board))
}
