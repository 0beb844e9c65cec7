//! Interactive question loop with timestamped phase output.

use anyhow::Result;
use chrono::Local;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::config::KithConfig;

pub async fn repl(config: &KithConfig) -> Result<()> {
    let agent = super::build_agent(config)?;

    println!("kith — natural-language user directory assistant");
    println!("model: {} at {}", config.llm.model, config.llm.base_url);
    println!("Type a question, or 'exit' to quit.");
    println!("{}", "-".repeat(70));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        stdout.write_all(b"\nyou> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let question = line.trim();
        if question.is_empty() {
            continue;
        }
        if question.eq_ignore_ascii_case("exit") {
            break;
        }

        let started = Local::now();
        println!("[{}] processing question", started.format("%H:%M:%S"));

        let answer = agent.answer(question).await;

        let finished = Local::now();
        let secs = finished.signed_duration_since(started).num_milliseconds() as f64 / 1000.0;
        println!("[{}] done ({secs:.2}s)", finished.format("%H:%M:%S"));
        println!("\nkith> {answer}");
    }

    Ok(())
}
