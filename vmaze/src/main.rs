mod logging;
mod settings;

use std::{
    io::{self, Write as _},
    iter,
    path::PathBuf,
    thread,
    time::{Duration, Instant},
};

use clap::Parser;
use cvmaze::{find_path, Grid, MazeAlgorithm, MazeError, PathAlgorithm, Solution, Steps};
use thiserror::Error;

use settings::{Settings, SettingsError};

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Maze(#[from] MazeError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("Cannot write output: {0}")]
    Io(#[from] io::Error),
}

#[derive(Parser, Debug)]
#[clap(version, about, name = "vmaze")]
struct Args {
    #[clap(short, long, help = "Number of rows, borders included")]
    rows: Option<usize>,
    #[clap(short, long, help = "Number of columns, borders included")]
    cols: Option<usize>,
    #[clap(short, long, help = "Maze generator: backtracking, prims, kruskals or random")]
    maze: Option<MazeAlgorithm>,
    #[clap(short, long, help = "Path finder: dijkstra, astar, bfs or dfs")]
    path: Option<PathAlgorithm>,
    #[clap(long, help = "Seed for the maze generator")]
    seed: Option<u64>,
    #[clap(long, action, help = "Print the number of carving steps")]
    steps: bool,
    #[clap(long, action, help = "Play back carving and search in the terminal")]
    replay: bool,
    #[clap(long, help = "Settings file to use instead of the default one")]
    config: Option<PathBuf>,
    #[clap(long, action, help = "Reset config to default and quit")]
    reset_config: bool,
    #[clap(long, action, help = "Show config path and quit")]
    show_config_path: bool,
    #[clap(short, long, action = clap::ArgAction::Count, help = "More logging, can be repeated")]
    verbose: u8,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();
    logging::init(logging::level_from_verbosity(args.verbose));

    let settings_path = match &args.config {
        Some(path) => path.clone(),
        None => Settings::default_path()?,
    };

    if args.reset_config {
        Settings::reset_config(&settings_path)?;
        return Ok(());
    }

    if args.show_config_path {
        if let Some(s) = settings_path.to_str() {
            println!("{}", s);
        } else {
            println!("{:?}", settings_path);
        }
        return Ok(());
    }

    better_panic::install();

    let settings = Settings::load(&settings_path)?;
    let mut config = settings.maze.clone();
    config.rows = args.rows.unwrap_or(config.rows);
    config.cols = args.cols.unwrap_or(config.cols);
    config.maze_algorithm = args.maze.unwrap_or(config.maze_algorithm);
    config.path_algorithm = args.path.unwrap_or(config.path_algorithm);
    // picked here, so it can be printed and the run repeated
    let seed = args.seed.or(config.seed).unwrap_or_else(rand::random);
    config.seed = Some(seed);
    log::debug!("Running with {:?}", config);

    let generated_at = Instant::now();
    let (grid, steps) = config.generate()?;
    let generation_time = generated_at.elapsed();

    let solved_at = Instant::now();
    let solution = find_path(&grid, config.path_algorithm)?;
    let solve_time = solved_at.elapsed();

    let mut out = io::stdout().lock();

    if args.replay {
        replay(&mut out, &grid, &steps, &solution, config.step_delay())?;
    } else {
        let mut shown = grid.clone();
        if settings.get_show_visited() {
            shown.apply_solution(&solution);
        } else {
            let path_only = Solution {
                path: solution.path.clone(),
                visited_in_order: Vec::new(),
            };
            shown.apply_solution(&path_only);
        }
        write!(out, "{}", shown)?;
    }

    if settings.get_show_stats() {
        let stats = solution.stats();
        writeln!(
            out,
            "{} on {}x{}, seed {}",
            config.maze_algorithm,
            config.rows,
            config.cols,
            seed
        )?;
        if solution.is_found() {
            writeln!(out, "{}: path of {} cells", config.path_algorithm, stats.path_length)?;
        } else {
            writeln!(out, "{}: no path", config.path_algorithm)?;
        }
        writeln!(out, "Visited cells: {}", stats.visited_count)?;
        writeln!(
            out,
            "Generated in {}, solved in {}",
            format_duration(generation_time),
            format_duration(solve_time)
        )?;
    }

    if args.steps {
        writeln!(
            out,
            "Carving steps: {} ({} cell changes)",
            steps.len(),
            steps.change_count()
        )?;
    }

    Ok(())
}

fn format_duration(duration: Duration) -> String {
    format!("{:.3} ms", duration.as_secs_f64() * 1000.)
}

const CLEAR: &str = "\x1b[2J\x1b[H";

/// Frames of a playback: the carving snapshots, the search spreading over the finished maze and
/// finally the found path.
fn replay_frames<'a>(
    grid: &'a Grid,
    steps: &'a Steps,
    solution: &'a Solution,
) -> impl Iterator<Item = Grid> + 'a {
    let mut searched = grid.clone();
    let search = solution.visited_in_order.iter().map(move |cell| {
        searched[cell.pos()].paint_visited();
        searched.clone()
    });

    let mut solved = grid.clone();
    solved.apply_solution(solution);

    steps.snapshots().chain(search).chain(iter::once(solved))
}

/// Plays back carving and search, leaving the solved maze on screen.
fn replay(
    out: &mut impl io::Write,
    grid: &Grid,
    steps: &Steps,
    solution: &Solution,
    delay: Duration,
) -> io::Result<()> {
    for frame in replay_frames(grid, steps, solution) {
        write!(out, "{}{}", CLEAR, frame)?;
        out.flush()?;
        thread::sleep(delay);
    }
    Ok(())
}
