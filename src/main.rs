// Hide console window on Windows for release builds (GUI app).
// In debug builds, keep the console so panics/backtraces are visible.
#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use bevy::prelude::*;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use diceduel::duel::{
    animate_roll, compute_layout, render_scene, save_png, AppSettings, DiceDuelPlugin, DieValue,
    MonospaceMeasure, RollAnimator, RollOutcome, SceneStyle, SleepScheduler, SystemClock, Winner,
    DEFAULT_SETTINGS_FILE, PAGE_BACKGROUND,
};

/// Dice Duel - two players, two dice, one roll
#[derive(Parser)]
#[command(name = "diceduel")]
#[command(
    author,
    version,
    about = "Dice Duel - a two-player dice roll with an animated board"
)]
struct Cli {
    /// Run in CLI mode (no window)
    #[arg(long)]
    cli: bool,

    /// Path to the settings JSON file
    #[arg(short = 'c', long = "config", default_value = DEFAULT_SETTINGS_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll both dice in the terminal
    Roll {
        /// Animation length in milliseconds (defaults to the settings value)
        #[arg(long)]
        duration_ms: Option<u64>,

        /// Shuffle frames per second
        #[arg(long, default_value = "30")]
        fps: u32,
    },

    /// Print the board layout for a container width
    Layout {
        /// Container width in device-independent pixels
        #[arg(short, long)]
        width: f32,

        /// Device pixel ratio
        #[arg(short, long, default_value = "1.0")]
        ratio: f32,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render one board to a PNG file
    Render {
        /// Container width in device-independent pixels
        #[arg(short, long, default_value = "600")]
        width: f32,

        /// Device pixel ratio
        #[arg(short, long, default_value = "1.0")]
        ratio: f32,

        /// Player 1 face
        #[arg(long, default_value = "1")]
        p1: u8,

        /// Player 2 face
        #[arg(long, default_value = "1")]
        p2: u8,

        /// Output file
        #[arg(short, long, default_value = "board.png")]
        out: PathBuf,
    },

    /// Write the current settings (or the defaults) to the settings file
    InitConfig,
}

fn main() {
    let cli = Cli::parse();
    let cli_mode = cli.command.is_some() || cli.cli;

    if cli_mode {
        // Attach to parent console for CLI output (Windows only)
        #[cfg(windows)]
        attach_parent_console();
    }

    let settings = load_settings(&cli.config);

    if cli_mode {
        if let Err(e) = run_cli_mode(&cli, &settings) {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    } else {
        run_window_mode(settings);
    }
}

/// Load the settings file, reporting problems on stderr. No log subscriber
/// exists yet at this point.
fn load_settings(path: &Path) -> AppSettings {
    let settings = AppSettings::try_load_from_file(path).unwrap_or_else(|e| {
        eprintln!("{} {}, using defaults", "Warning:".yellow().bold(), e);
        AppSettings::default()
    });
    for problem in settings.theme.color_problems() {
        eprintln!("{} {}", "Warning:".yellow().bold(), problem);
    }
    settings
}

/// Attach to the parent process's console on Windows.
/// The release build hides the console with `windows_subsystem = "windows"`,
/// but CLI mode needs to write to the terminal.
#[cfg(windows)]
fn attach_parent_console() {
    #[link(name = "kernel32")]
    extern "system" {
        fn AttachConsole(dwProcessId: u32) -> i32;
        fn AllocConsole() -> i32;
    }

    const ATTACH_PARENT_PROCESS: u32 = 0xFFFFFFFF;

    unsafe {
        // Started from cmd/PowerShell: reuse that console, otherwise open one.
        if AttachConsole(ATTACH_PARENT_PROCESS) == 0 {
            AllocConsole();
        }
    }
}

// ============================================================================
// CLI Mode
// ============================================================================

fn run_cli_mode(cli: &Cli, settings: &AppSettings) -> Result<(), String> {
    match &cli.command {
        None => run_terminal_roll(settings, None, 30),
        Some(Commands::Roll { duration_ms, fps }) => run_terminal_roll(settings, *duration_ms, *fps),
        Some(Commands::Layout { width, ratio, json }) => print_layout(settings, *width, *ratio, *json),
        Some(Commands::Render {
            width,
            ratio,
            p1,
            p2,
            out,
        }) => {
            let layout = compute_layout(*width, *ratio, &settings.layout);
            let list = render_scene(
                &layout,
                *p1,
                *p2,
                &SceneStyle::from_settings(settings),
                &MonospaceMeasure::default(),
            );
            save_png(&layout, &list, out)?;
            println!(
                "{} {} ({}x{} px)",
                "Wrote".bold().white(),
                out.display().to_string().bright_green(),
                layout.backing_width,
                layout.backing_height
            );
            Ok(())
        }
        Some(Commands::InitConfig) => {
            settings.save_to_file(&cli.config)?;
            println!(
                "{} {}",
                "Wrote".bold().white(),
                cli.config.display().to_string().bright_green()
            );
            Ok(())
        }
    }
}

fn dice_line(a: DieValue, b: DieValue) -> String {
    format!("  {}   {}  ", a.glyph(), b.glyph())
}

/// Writes animation frames in place, keeping the first write failure.
struct FramePrinter<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> FramePrinter<W> {
    fn new(out: W) -> Self {
        Self { out, error: None }
    }

    fn print(&mut self, a: DieValue, b: DieValue) {
        if self.error.is_some() {
            return;
        }
        let line = dice_line(a, b).bright_white().bold();
        if let Err(e) = write!(self.out, "\r{}", line).and_then(|_| self.out.flush()) {
            self.error = Some(e);
        }
    }

    fn finish(self) -> Result<(), String> {
        match self.error {
            Some(e) => Err(format!("Failed to write to terminal: {e}")),
            None => Ok(()),
        }
    }
}

fn run_terminal_roll(settings: &AppSettings, duration_ms: Option<u64>, fps: u32) -> Result<(), String> {
    let duration = duration_ms
        .map(std::time::Duration::from_millis)
        .unwrap_or_else(|| settings.roll_duration());

    let mut animator = RollAnimator::new(duration);
    let clock = SystemClock::new();
    let mut scheduler = SleepScheduler::from_fps(fps);
    let mut rng = rand::thread_rng();
    let mut printer = FramePrinter::new(io::stdout());

    println!(
        "{} {} vs {}",
        "Rolling:".bold().white(),
        settings.players.player1.yellow().bold(),
        settings.players.player2.yellow().bold()
    );

    let outcome = animate_roll(&mut animator, &clock, &mut scheduler, &mut rng, |a, b| {
        printer.print(a, b)
    })
    .ok_or_else(|| "Roll did not start".to_string())?;
    printer.finish()?;
    println!();

    print_outcome(settings, &outcome);
    Ok(())
}

fn print_outcome(settings: &AppSettings, outcome: &RollOutcome) {
    let message = outcome.message(&settings.players);
    let styled = match outcome.winner() {
        Winner::Player1 => message.bright_green().bold(),
        Winner::Player2 => message.bright_cyan().bold(),
        Winner::Draw => message.yellow().bold(),
    };
    println!("{} {}", "Score:".bold().white(), outcome.score());
    println!("{}", styled);
}

fn print_layout(settings: &AppSettings, width: f32, ratio: f32, json: bool) -> Result<(), String> {
    let layout = compute_layout(width, ratio, &settings.layout);
    if json {
        let text = serde_json::to_string_pretty(&layout)
            .map_err(|e| format!("Failed to encode layout: {e}"))?;
        println!("{}", text);
        return Ok(());
    }

    println!(
        "{} {} x {} (backing {} x {} px @ {})",
        "Surface:".bold().white(),
        layout.css_width,
        layout.css_height,
        layout.backing_width,
        layout.backing_height,
        layout.pixel_ratio
    );
    println!(
        "{} {} (gap {}, margin {})",
        "Die:".bold().white(),
        layout.die_size,
        layout.gap,
        layout.margin
    );
    println!(
        "{} left x={} right x={} top y={}",
        "Position:".bold().white(),
        layout.left_x,
        layout.right_x,
        layout.top_y
    );
    Ok(())
}

// ============================================================================
// Window Mode
// ============================================================================

fn run_window_mode(settings: AppSettings) {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Dice Duel".to_string(),
                        resolution: (820u32, 520u32).into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(bevy::log::LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "info,wgpu=error,naga=warn,diceduel=debug".to_string(),
                    ..default()
                }),
        )
        .insert_resource(ClearColor(PAGE_BACKGROUND))
        .add_plugins(DiceDuelPlugin { settings })
        .run();
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Accepts `budget` writes, then fails like a closed pipe.
    struct ClosingWriter {
        budget: usize,
        writes: usize,
    }

    impl Write for ClosingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.writes += 1;
            if self.writes > self.budget {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
            }
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_frame_printer_writes_frames() {
        let mut printer = FramePrinter::new(Vec::new());
        printer.print(DieValue::ONE, DieValue::ONE);
        printer.print(DieValue::ONE, DieValue::ONE);
        assert!(printer.error.is_none());
        let text = String::from_utf8(printer.out.clone()).unwrap();
        assert_eq!(text.matches('\r').count(), 2);
        assert!(text.contains('\u{2680}'));
        assert!(printer.finish().is_ok());
    }

    #[test]
    fn test_frame_printer_reports_first_write_failure() {
        let mut printer = FramePrinter::new(ClosingWriter {
            budget: 0,
            writes: 0,
        });
        for _ in 0..5 {
            printer.print(DieValue::ONE, DieValue::ONE);
        }
        // Writing stops after the first failure.
        assert_eq!(printer.out.writes, 1);
        let err = printer.finish().unwrap_err();
        assert!(err.contains("pipe closed"));
    }

    #[test]
    fn test_cli_parses_render_ratio() {
        let cli = Cli::try_parse_from(["diceduel", "render", "--ratio", "2.5"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Render { ratio, .. }) if ratio == 2.5));
    }
}
