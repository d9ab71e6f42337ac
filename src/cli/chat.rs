// src/cli/chat.rs
// Line-oriented chat loop: classify, reply, optionally log the mood

use anyhow::Result;
use mindful::companion::ConversationContext;
use mindful::mood::MoodEntry;
use mindful::sentiment::SentimentResult;
use mindful::state::AppState;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

/// Longest note stored when a chat message is logged as a mood
const NOTE_CHARS: usize = 100;

pub async fn run_chat(state: &AppState, log_mood: bool) -> Result<()> {
    let mut context = ConversationContext::new();
    if let Some(greeting) = context.turns().first() {
        println!("{}", greeting.content);
    }
    if !state.companion.is_available() {
        println!("(chat replies unavailable: no API key for {})", state.provider.display_name());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        match text {
            "quit" | "exit" | "/quit" => break,
            "/clear" => {
                context.clear();
                println!("Conversation cleared.");
                continue;
            }
            _ => {}
        }

        let sentiment = state.sentiment.classify(text).await;
        context.push_user(text);

        if log_mood && !context.mood_logged_today() {
            log_from_message(state, &sentiment, text);
            context.mark_mood_logged();
        }

        let reply = state.companion.respond(&context, Some(&sentiment)).await;
        println!("{}", reply);
        context.push_assistant(reply);
    }

    info!(turns = context.turns().len(), "Chat session ended");
    Ok(())
}

fn log_from_message(state: &AppState, sentiment: &SentimentResult, text: &str) {
    let notes: String = text.chars().take(NOTE_CHARS).collect();
    let entry = MoodEntry::from_sentiment(sentiment, notes);
    match state.store.append(&entry) {
        Ok(()) => println!("(mood logged: {} {}/5)", entry.mood_label(), entry.mood_score()),
        Err(e) => {
            warn!(error = %e, "Could not log mood from chat");
            println!("(could not log mood: {})", e.to_user_string());
        }
    }
}
