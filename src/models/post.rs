use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::PostTuiError;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub name: String,
    pub role: String,
    pub avatar_url: String,
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Paragraph,
    Link,
    /// Any other `type` value. Rendered as nothing.
    #[serde(other)]
    Unknown,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: BlockKind,
    pub content: String,
}

impl ContentBlock {
    pub fn paragraph(content: impl Into<String>) -> Self {
        Self { kind: BlockKind::Paragraph, content: content.into() }
    }

    pub fn link(content: impl Into<String>) -> Self {
        Self { kind: BlockKind::Link, content: content.into() }
    }
}

/// What the caller hands the card. All fields are required.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PostProps {
    pub author: Author,
    pub content: Vec<ContentBlock>,
    pub published_at: DateTime<FixedOffset>,
}

impl PostProps {
    pub fn load(path: &Path) -> Result<Self, PostTuiError> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open post document at {:?}", path))?;

        let reader = BufReader::new(file);
        let props: PostProps = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse post document {:?}", path))?;

        Ok(props)
    }

    /// Post shown when no document is given.
    pub fn sample() -> Self {
        PostProps {
            author: Author {
                name: "Ana Ribeiro".to_string(),
                role: "Web Developer".to_string(),
                avatar_url: "https://avatars.example.com/ana-ribeiro.png".to_string(),
            },
            content: vec![
                ContentBlock::paragraph("Fala galera 👋"),
                ContentBlock::paragraph(
                    "Acabei de subir mais um projeto no meu portfolio. É um cartão de post com comentários, feito em Rust.",
                ),
                ContentBlock::link("ana.dev/posttui"),
            ],
            published_at: DateTime::parse_from_rfc3339("2022-05-03T20:00:00-03:00")
                .unwrap_or_else(|_| chrono::Utc::now().into()),
        }
    }
}
