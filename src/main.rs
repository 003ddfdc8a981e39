//! Toolchat CLI entry point

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use anyhow::Result;

use toolchat::adapters::{cli::CliChannel, Channel};
use toolchat::agent::{AgentLoop, OpenAiClient};
use toolchat::config::Config;
use toolchat::i18n::Language;
use toolchat::session::SessionState;
use toolchat::tools::ToolRegistry;
use toolchat::ui;

#[derive(Parser)]
#[command(name = "toolchat")]
#[command(about = "🤖 Toolchat - chat with an LLM agent that can add numbers and greet people")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive chat session
    Chat {
        /// Display language (en or ru)
        #[arg(short, long)]
        lang: Option<Language>,
    },

    /// Send a single message and print the reply
    Ask {
        /// Message to send to the agent
        #[arg(short, long)]
        message: String,

        /// Display language (en or ru)
        #[arg(short, long)]
        lang: Option<Language>,
    },

    /// Write a default config file to ~/.toolchat/config.json
    Init,

    /// Show configuration status
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so chat output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Setup Global Ctrl+C handler
    let exit_flag = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(false));
    let r = exit_flag.clone();

    ctrlc::set_handler(move || {
        if r.load(std::sync::atomic::Ordering::SeqCst) {
            println!("\n👋 Bye!");
            std::process::exit(0);
        } else {
            println!("\n⚠️  Press Ctrl+C again to exit");
            r.store(true, std::sync::atomic::Ordering::SeqCst);

            // Reset flag after 3 seconds
            let r2 = r.clone();
            std::thread::spawn(move || {
                std::thread::sleep(std::time::Duration::from_secs(3));
                r2.store(false, std::sync::atomic::Ordering::SeqCst);
            });
        }
    }).ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Chat { lang } => {
            let config = load_config_or_exit();
            let mut channel = build_channel(&config, lang);
            channel.start().await?;
        }

        Commands::Ask { message, lang } => {
            let config = load_config_or_exit();
            let mut channel = build_channel(&config, lang);
            let report = channel.run_once(&message).await;
            println!("{}", report.reply);
            ui::print_tool_log(&report.tool_log, channel.session().language());
            if report.failed {
                std::process::exit(1);
            }
        }

        Commands::Init => {
            let path = toolchat::config::config_path();
            if path.exists() {
                ui::print_step(&format!("Config already exists at {:?}", path));
            } else {
                toolchat::config::save(&Config::default())?;
                ui::print_step(&format!("Wrote default config to {:?}", path));
            }
            ui::print_step("Set OPENAI_API_KEY in your environment, then run 'toolchat chat'.");
        }

        Commands::Status => {
            println!("🤖 Toolchat Status\n");
            println!("Config file: {:?}", toolchat::config::config_path());
            match toolchat::config::load() {
                Ok(config) => {
                    println!("Model: {}", config.model);
                    println!("Endpoint: {}", config.api_base);
                    println!("Language: {}", config.language.display_name());
                    println!("Max model calls per turn: {}", config.max_iterations);
                    println!("OpenAI API key: ✓");
                }
                Err(e) => println!("{}", e),
            }
        }
    }

    Ok(())
}

/// Missing credentials halt the process before any turn runs.
fn load_config_or_exit() -> Config {
    match toolchat::config::load() {
        Ok(config) => config,
        Err(e) => {
            ui::print_error(&e.to_string());
            std::process::exit(1);
        }
    }
}

fn build_channel(config: &Config, lang: Option<Language>) -> CliChannel<OpenAiClient> {
    let client = OpenAiClient::new(&config.api_key, &config.model)
        .with_api_base(&config.api_base)
        .with_temperature(config.temperature);
    let agent = AgentLoop::new(client, config.max_iterations);
    let session = SessionState::with_language(lang.unwrap_or(config.language));

    CliChannel::new(agent, ToolRegistry::with_builtins(), session)
}
