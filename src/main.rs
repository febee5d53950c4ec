//! Post Content - Entry Point

use clap::Parser;
use post_content::model::{AppError, ContentError, ContentSource, Post};
use post_content::view::{buffer_lines, render_window, total_rows, Viewport};
use post_content::view_state::{stack_layouts, LayoutWidth, LineOffset, PostLayout};
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

/// Width used when neither config nor the terminal provide one.
const FALLBACK_WIDTH: u16 = 80;

/// Measure and render post titles and summaries as bordered terminal cells
#[derive(Parser, Debug)]
#[command(name = "post-content")]
#[command(version)]
#[command(about = "Pre-measure post content heights and render them at the measured offsets")]
pub struct Args {
    /// Path to a JSON array of posts (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Frame width in columns (defaults to the terminal width)
    #[arg(short, long)]
    pub width: Option<u16>,

    /// Show full content: uncapped title plus summary
    #[arg(short, long)]
    pub full: bool,

    /// Render the bordered posts instead of listing measured heights
    #[arg(short, long)]
    pub render: bool,

    /// First list row to render
    #[arg(long, default_value = "0")]
    pub top: usize,

    /// Number of rows to render (defaults to the rest of the list)
    #[arg(long)]
    pub rows: Option<u16>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = post_content::config::load_config_with_precedence(args.config.clone())?;
        let merged = post_content::config::merge_config(config_file);
        let with_env = post_content::config::apply_env_overrides(merged);

        // --full is a switch: only an explicit flag overrides lower layers
        let full_override = if args.full { Some(true) } else { None };

        post_content::config::apply_cli_overrides(with_env, args.width, full_override)
    };

    let log_target = post_content::logging::init(&config)?;

    info!(
        config = ?config,
        log_file = ?log_target.path(),
        "Configuration loaded and resolved"
    );

    let width = resolve_width(config.width, terminal_width())?;
    let posts = post_content::source::load_posts(args.file.clone())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.render {
        let rows = match args.rows {
            Some(rows) => rows,
            None => {
                let available = total_rows(&posts, width, config.show_full_content);
                let (rows, cut) = rows_to_end(available, args.top);
                if cut > 0 {
                    warn!(
                        total = available,
                        top = args.top,
                        rows,
                        cut,
                        "Default render window capped"
                    );
                    eprintln!(
                        "post-content: rendering {rows} of {} rows; use --top/--rows for the rest",
                        available.saturating_sub(args.top)
                    );
                }
                rows
            }
        };
        let viewport = Viewport::new(LineOffset::new(args.top), rows);
        let buffer = render_window(&posts, width, config.show_full_content, viewport)?;
        for line in buffer_lines(&buffer) {
            writeln!(out, "{line}")?;
        }
    } else {
        let layouts = stack_layouts(&posts, width, config.show_full_content);
        for line in listing_lines(&posts, &layouts) {
            writeln!(out, "{line}")?;
        }
    }

    info!(
        posts = posts.len(),
        width = width.get(),
        render = args.render,
        "Finished"
    );

    Ok(())
}

/// Rows from `top` to the end of the list, capped at what one buffer holds.
///
/// Returns the window height and how many rows the cap left out.
fn rows_to_end(total: usize, top: usize) -> (u16, usize) {
    let remaining = total.saturating_sub(top);
    let rows = u16::try_from(remaining).unwrap_or(u16::MAX);
    (rows, remaining - usize::from(rows))
}

/// Current terminal width, if stdout is attached to one.
fn terminal_width() -> Option<u16> {
    crossterm::terminal::size().ok().map(|(columns, _)| columns)
}

/// Pick the layout width: configured, then terminal, then the fallback.
///
/// Fails fast on a configured width too narrow to hold any text. A tiny
/// terminal is treated the same way.
fn resolve_width(configured: Option<u16>, terminal: Option<u16>) -> Result<LayoutWidth, ContentError> {
    LayoutWidth::new(configured.or(terminal).unwrap_or(FALLBACK_WIDTH))
}

/// One line per post: index, measured height, row offset, title.
fn listing_lines(posts: &[Post], layouts: &[PostLayout]) -> Vec<String> {
    posts
        .iter()
        .zip(layouts)
        .enumerate()
        .map(|(index, (post, layout))| {
            format!(
                "{index}\t{}\t{}\t{}",
                layout.height(),
                layout.cumulative_y().get(),
                post.title()
            )
        })
        .collect()
}
