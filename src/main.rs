use clap::{Parser, Subcommand};
use droidgen::{ActivityArgs, AppError};

#[derive(Parser)]
#[command(name = "droidgen")]
#[command(version)]
#[command(
    about = "Scaffold Android projects and generate activity screens",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new activity and wire it into shared resource files
    #[clap(visible_alias = "a")]
    Activity {
        /// Variant: empty, blank, fullscreen, or login
        activity_type: Option<String>,
        /// Java class name, e.g. MainActivity
        activity_name: Option<String>,
        /// Dotted package for the activity class
        activity_package: Option<String>,
        /// Layout resource name, e.g. activity_main
        layout_name: Option<String>,
        /// "true" to start this activity on launch
        launcher: Option<String>,
        /// The application's root package
        app_package: Option<String>,
    },
    /// Scaffold a new Android project skeleton in the current directory
    App {
        /// Display name of the application
        app_name: Option<String>,
        /// Package the app will be published under
        app_package: Option<String>,
        /// Android SDK version to target
        #[arg(long, default_value_t = 23)]
        target_sdk: u32,
        /// Minimum Android SDK version to support
        #[arg(long, default_value_t = 17)]
        min_sdk: u32,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Activity {
            activity_type,
            activity_name,
            activity_package,
            layout_name,
            launcher,
            app_package,
        } => droidgen::activity(ActivityArgs {
            activity_type,
            activity_name,
            activity_package,
            layout_name,
            launcher,
            app_package,
        })
        .map(|_| ()),
        Commands::App { app_name, app_package, target_sdk, min_sdk } => {
            droidgen::app(app_name.as_deref(), app_package.as_deref(), target_sdk, min_sdk)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
