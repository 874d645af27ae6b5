//! chatkit - example chat host over a mock engine

mod engine;
mod ui;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;

use chatkit_core::{AwaitingMode, ChatConfig, ChatMessage, QuickPrompt};
use chatkit_tui::{ChatBehavior, ChatLayout, Theme};
use engine::MockEngine;

/// chatkit - chat UI demo
#[derive(Parser, Debug)]
#[command(name = "chatkit")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Host-managed phase transitions instead of automatic mode
    #[arg(long)]
    manual: bool,

    /// Light color theme
    #[arg(long)]
    light: bool,

    /// Compact layout for small terminals
    #[arg(long)]
    compact: bool,

    /// Per-token latency of the mock engine, in milliseconds
    #[arg(long, default_value_t = 120)]
    latency_ms: u64,

    /// Make the mock engine fail mid-stream
    #[arg(long)]
    fail: bool,

    /// Verbose logging to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "chatkit=debug".into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    let config = ChatConfig::default()
        .with_initial_messages(vec![ChatMessage::assistant("Hi! Ask me anything.")])
        .with_quick_prompts(vec![
            QuickPrompt::new("Resume this", "Resume this"),
            QuickPrompt::new("Give examples", "Give examples"),
            QuickPrompt::new("Explain like I'm 5", "Explain like I'm 5")
                .with_short_label("ELI5"),
        ])
        .with_placeholder("Type a message…")
        .with_awaiting_mode(if args.manual {
            AwaitingMode::Manual
        } else {
            AwaitingMode::Automatic
        });

    let mut engine = MockEngine::new(Duration::from_millis(args.latency_ms));
    if args.fail {
        engine = engine.failing_after(4);
    }

    let theme = if args.light {
        Theme::light()
    } else {
        Theme::dark()
    };
    let layout = if args.compact {
        ChatLayout::compact()
    } else {
        ChatLayout::default()
    };

    ui::run(config, Arc::new(engine), theme, layout, ChatBehavior::default()).await
}
