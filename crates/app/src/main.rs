use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::Progression;
use services::QuizLoopService;
use storage::{CsvQuestionSource, QuestionRepository, load_bank};
use ui::{App, AvatarSet, CuePlayer, TracingCuePlayer, UiApp, build_app_context};

#[derive(Parser, Debug)]
#[command(name = "energy-quiz")]
#[command(about = "Energy4All multiple-choice quiz", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    quiz: QuizArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args, Debug, Clone)]
struct QuizArgs {
    /// CSV file with the question bank
    #[arg(long, env = "QUIZ_QUESTIONS", default_value = "energy_quizzes.csv", global = true)]
    questions: PathBuf,

    /// Directory holding avatar1.png .. avatarN.png
    #[arg(long, env = "QUIZ_AVATARS", default_value = "assets/images", global = true)]
    avatars: PathBuf,

    /// Number of avatar tiers
    #[arg(long, env = "QUIZ_AVATAR_COUNT", default_value_t = 3, global = true)]
    avatar_count: u32,

    /// Correct answers needed per level
    #[arg(long, env = "QUIZ_TIER_SIZE", default_value_t = 5, global = true)]
    tier_size: u32,

    /// Keep the file order instead of shuffling each run
    #[arg(long, env = "QUIZ_NO_SHUFFLE", global = true)]
    no_shuffle: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Launch the quiz window (default)
    Ui,
    /// Validate the question file and report the question count
    Check,
}

struct DesktopApp {
    quiz_loop: Arc<QuizLoopService>,
    avatars: Arc<AvatarSet>,
    cues: Arc<dyn CuePlayer>,
}

impl UiApp for DesktopApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    fn avatars(&self) -> Arc<AvatarSet> {
        Arc::clone(&self.avatars)
    }

    fn cues(&self) -> Arc<dyn CuePlayer> {
        Arc::clone(&self.cues)
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn check(args: &QuizArgs) -> Result<(), Box<dyn std::error::Error>> {
    let source = CsvQuestionSource::from_path(&args.questions);
    let bank = load_bank(&source)
        .await
        .map_err(|err| format!("{}: {err}", source.describe()))?;
    println!("{}: {} questions", source.describe(), bank.len());
    Ok(())
}

fn launch_ui(args: &QuizArgs) {
    let avatars = AvatarSet::from_dir(&args.avatars, args.avatar_count);
    let progression = Progression::new(args.tier_size, avatars.max_tier());
    let source: Arc<dyn QuestionRepository> =
        Arc::new(CsvQuestionSource::from_path(&args.questions));
    let quiz_loop = QuizLoopService::new(source)
        .with_progression(progression)
        .with_shuffle(!args.no_shuffle);
    tracing::info!(?quiz_loop, "launching quiz window");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        quiz_loop: Arc::new(quiz_loop),
        avatars: Arc::new(avatars),
        cues: Arc::new(TracingCuePlayer),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Energy4All Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command.unwrap_or(Command::Ui) {
        Command::Ui => {
            launch_ui(&cli.quiz);
            Ok(())
        }
        Command::Check => check(&cli.quiz).await,
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
