//! SecLearn - A desktop course viewer for a hands-on cybersecurity curriculum
//!
//! Binary entrypoint: argument parsing, logging setup, window creation.

use std::env;
use std::path::PathBuf;
use std::process;

use tracing::{debug, error, info, warn};

use seclearn::app::SecLearnApp;
use seclearn::error::Result;
use seclearn::RuntimeConfig;

use eframe::egui;

/// Command-line options
#[derive(Debug, Default)]
struct AppArgs {
    /// Configuration file path
    config_path: Option<PathBuf>,
    /// Enable debug logging
    debug: bool,
    /// Module route segment to open at
    module: Option<String>,
    /// Window width
    width: Option<f32>,
    /// Window height
    height: Option<f32>,
    /// Theme override
    theme: Option<String>,
}

impl AppArgs {
    /// Parse command line arguments
    fn parse() -> Result<Self> {
        let args: Vec<String> = env::args().collect();
        let mut app_args = AppArgs::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--config" | "-c" => {
                    if i + 1 < args.len() {
                        app_args.config_path = Some(PathBuf::from(&args[i + 1]));
                        i += 1;
                    } else {
                        return Err("Missing config file path".into());
                    }
                }
                "--module" | "-m" => {
                    if i + 1 < args.len() {
                        app_args.module = Some(args[i + 1].clone());
                        i += 1;
                    } else {
                        return Err("Missing module id".into());
                    }
                }
                "--debug" | "-d" => {
                    app_args.debug = true;
                }
                "--width" | "-w" => {
                    if i + 1 < args.len() {
                        app_args.width = args[i + 1].parse().ok();
                        i += 1;
                    }
                }
                "--height" | "-h" => {
                    if i + 1 < args.len() {
                        app_args.height = args[i + 1].parse().ok();
                        i += 1;
                    }
                }
                "--theme" | "-t" => {
                    if i + 1 < args.len() {
                        app_args.theme = Some(args[i + 1].clone());
                        i += 1;
                    }
                }
                "--help" | "-?" => {
                    print_help();
                    process::exit(0);
                }
                "--version" | "-v" => {
                    println!("SecLearn v{}", env!("CARGO_PKG_VERSION"));
                    process::exit(0);
                }
                arg if arg.starts_with('-') => {
                    return Err(format!("Unknown option: {}", arg).into());
                }
                _ => {
                    warn!("Ignoring positional argument: {}", args[i]);
                }
            }
            i += 1;
        }

        Ok(app_args)
    }
}

/// Print help information
fn print_help() {
    println!("SecLearn - A desktop course viewer for a hands-on cybersecurity curriculum");
    println!();
    println!("USAGE:");
    println!("    seclearn [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <PATH>    Path to configuration file");
    println!("    -m, --module <ID>      Open the course at a specific module");
    println!("    -d, --debug            Enable debug logging");
    println!("    -w, --width <WIDTH>    Initial window width");
    println!("    -h, --height <HEIGHT>  Initial window height");
    println!("    -t, --theme <THEME>    Theme (dark, light, high-contrast)");
    println!("    -?, --help             Print this help message");
    println!("    -v, --version          Print version information");
    println!();
    println!("CONFIGURATION:");
    println!("    SecLearn looks for configuration files in the following order:");
    println!("    1. Path specified with --config");
    println!("    2. $XDG_CONFIG_HOME/seclearn/config.toml");
    println!("    3. ~/.config/seclearn/config.toml");
    println!("    4. ~/.seclearn/config.toml");
    println!("    5. ./.seclearn/config.toml");
    println!("    6. Built-in defaults");
    println!();
    println!("ENVIRONMENT:");
    println!("    SECLEARN_API_KEY       Bearer token for the study assistant");
    println!("    RUST_LOG               Logging level (error, warn, info, debug, trace)");
}

fn main() -> Result<()> {
    let args = AppArgs::parse().unwrap_or_else(|e| {
        eprintln!("Failed to parse arguments: {}", e);
        print_help();
        process::exit(1);
    });

    // Initialize logging based on debug flag
    let log_level = if args.debug { "debug" } else { "info" };
    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from(env_filter))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    info!("starting SecLearn v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let runtime_config = load_configuration(&args)?;

    // Create the application
    let app = match SecLearnApp::new(runtime_config, args.module.as_deref()) {
        Ok(app) => app,
        Err(e) => {
            error!("failed to create application: {}", e);
            eprintln!("{}", seclearn::handle_startup_error(&e));
            process::exit(1);
        }
    };

    // Run the application
    let native_options = create_native_options(&args);
    info!("opening window");
    if let Err(e) = eframe::run_native(
        "SecLearn",
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    ) {
        error!("application failed: {}", e);
        process::exit(1);
    }

    info!("SecLearn shutdown complete");
    Ok(())
}

/// Load configuration from file or use defaults
fn load_configuration(args: &AppArgs) -> Result<RuntimeConfig> {
    let mut runtime_config = if let Some(path) = &args.config_path {
        debug!("loading config from: {}", path.display());
        match RuntimeConfig::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("failed to load config from {}: {}", path.display(), e);
                info!("falling back to default configuration");
                RuntimeConfig::new()?
            }
        }
    } else {
        RuntimeConfig::new()?
    };

    // Apply command-line theme override
    if let Some(theme_name) = &args.theme {
        debug!("applying theme override: {}", theme_name);
        if let Err(e) = runtime_config.theme_manager_mut().set_theme(theme_name) {
            warn!("failed to apply theme '{}': {}", theme_name, e);
        }
    }

    Ok(runtime_config)
}

/// Create native options for the application window
fn create_native_options(args: &AppArgs) -> eframe::NativeOptions {
    let width = args.width.unwrap_or(1280.0);
    let height = args.height.unwrap_or(800.0);

    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("SecLearn")
            .with_app_id("seclearn")
            .with_icon(std::sync::Arc::new(load_or_create_window_icon()))
            .with_inner_size([width, height])
            .with_min_inner_size([900.0, 600.0])
            .with_resizable(true),
        renderer: eframe::Renderer::Glow,
        ..Default::default()
    }
}

/// Create window icon: a simple shield on a dark field
fn create_window_icon() -> egui::IconData {
    let mut rgba = Vec::with_capacity(32 * 32 * 4);

    let bg = [18, 20, 26, 255];
    let shield = [94, 156, 255, 255];
    let highlight = [224, 226, 235, 255];

    for y in 0i32..32 {
        for x in 0i32..32 {
            // Shield: wide at the top, tapering to a point at the bottom
            let dx = (x - 16).abs();
            let half_width = if y < 8 {
                11
            } else if y < 26 {
                11 - (y - 8) / 2
            } else {
                0
            };
            let pixel = if y >= 4 && y < 28 && dx <= half_width {
                // Check-mark highlight across the middle
                if (10..=14).contains(&y) && dx <= 2 {
                    highlight
                } else {
                    shield
                }
            } else {
                bg
            };
            rgba.extend_from_slice(&pixel);
        }
    }

    egui::IconData {
        rgba,
        width: 32,
        height: 32,
    }
}

/// Try loading `icon.png` from the working directory; fallback to the
/// generated icon
fn load_or_create_window_icon() -> egui::IconData {
    let candidates = [
        std::path::Path::new("icon.png"),
        std::path::Path::new("assets/icon.png"),
    ];

    for path in candidates.iter() {
        if path.exists() {
            if let Ok(img) = image::open(path) {
                let rgba = img.to_rgba8();
                let (width, height) = rgba.dimensions();
                return egui::IconData {
                    rgba: rgba.into_raw(),
                    width,
                    height,
                };
            }
        }
    }

    create_window_icon()
}
