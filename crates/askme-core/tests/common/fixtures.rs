//! Shared FAQ fixtures for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;

pub const HOURS_QUESTION: &str = "Qual o horário de funcionamento?";
pub const HOURS_ANSWER: &str = "Funcionamos das 9h às 18h.";
pub const CANCEL_QUESTION: &str = "Como faço para cancelar meu pedido?";
pub const CANCEL_ANSWER: &str = "Acesse o app e toque em cancelar.";
pub const SUNDAY_QUESTION: &str = "Vocês entregam aos domingos?";
pub const SUNDAY_ANSWER: &str = "Sim, entregamos aos domingos das 10h às 16h.";

/// Builds a FAQ document and writes it into a temporary directory.
#[derive(Debug, Default, Clone)]
pub struct FaqFileBuilder {
    pairs: Vec<(String, String, String)>,
    english_keys: bool,
}

impl FaqFileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The three-entry store-support corpus used across tests.
    pub fn store_support() -> Self {
        Self::new()
            .entry("1", HOURS_QUESTION, HOURS_ANSWER)
            .entry("2", CANCEL_QUESTION, CANCEL_ANSWER)
            .entry("3", SUNDAY_QUESTION, SUNDAY_ANSWER)
    }

    pub fn entry(mut self, key: &str, question: &str, answer: &str) -> Self {
        self.pairs
            .push((key.to_string(), question.to_string(), answer.to_string()));
        self
    }

    pub fn english_keys(mut self) -> Self {
        self.english_keys = true;
        self
    }

    pub fn to_json(&self) -> String {
        let (q_key, a_key) = if self.english_keys {
            ("questions", "answers")
        } else {
            ("perguntas", "respostas")
        };

        let questions: serde_json::Map<String, serde_json::Value> = self
            .pairs
            .iter()
            .map(|(k, q, _)| (k.clone(), serde_json::Value::String(q.clone())))
            .collect();
        let answers: serde_json::Map<String, serde_json::Value> = self
            .pairs
            .iter()
            .map(|(k, _, a)| (k.clone(), serde_json::Value::String(a.clone())))
            .collect();

        let mut document = serde_json::Map::new();
        document.insert(q_key.to_string(), serde_json::Value::Object(questions));
        document.insert(a_key.to_string(), serde_json::Value::Object(answers));
        serde_json::Value::Object(document).to_string()
    }

    /// Writes the document to `faq.json` inside a fresh temp dir (kept alive by the return).
    pub fn write(&self) -> (TempDir, PathBuf) {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("faq.json");
        std::fs::write(&path, self.to_json()).expect("write faq");
        (dir, path)
    }
}
