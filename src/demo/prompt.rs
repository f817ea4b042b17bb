// src/demo/prompt.rs
use anyhow::{bail, Result};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// Line-oriented reader over stdin.
pub struct Prompt {
    lines: Lines<BufReader<Stdin>>,
}

impl Prompt {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// Prints `question` and reads one trimmed line; fails on end of input.
    pub async fn ask(&mut self, question: &str) -> Result<String> {
        print!("{}", question);
        std::io::stdout().flush()?;
        match self.lines.next_line().await? {
            Some(line) => Ok(line.trim().to_string()),
            None => bail!("stdin closed"),
        }
    }

    /// Reads a comma separated list, dropping empty entries.
    pub async fn ask_list(&mut self, question: &str) -> Result<Vec<String>> {
        let answer = self.ask(question).await?;
        Ok(split_list(&answer))
    }
}

pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_comma_separated_input() {
        assert_eq!(split_list(" name, age ,,"), vec!["name".to_string(), "age".to_string()]);
        assert!(split_list("").is_empty());
    }
}
