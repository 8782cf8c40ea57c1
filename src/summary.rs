use std::fmt;

use crate::api::{GenerationResponse, StatisticsSnapshot, StoryLength};

/// Localized label for a story length; unknown values are shown as-is.
pub fn length_label(length: &StoryLength) -> &str {
    match length {
        StoryLength::Short => "Короткая",
        StoryLength::Medium => "Средняя",
        StoryLength::Long => "Длинная",
        StoryLength::Other(raw) => raw,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetadataEntry {
    pub label: &'static str,
    pub value: String,
}

/// What the result panel shows for one generated story.
#[derive(Debug, Clone, PartialEq)]
pub struct StoryView {
    pub story: String,
    pub metadata: Vec<MetadataEntry>,
}

impl StoryView {
    pub fn from_response(response: &GenerationResponse) -> StoryView {
        let meta = &response.metadata;
        let metadata = vec![
            MetadataEntry {
                label: "Длина",
                value: length_label(&meta.length).to_string(),
            },
            MetadataEntry {
                label: "Слов",
                value: meta.word_count.to_string(),
            },
            MetadataEntry {
                label: "Время генерации",
                value: format!("{}с", meta.generation_time),
            },
            MetadataEntry {
                label: "Температура",
                value: meta.temperature.to_string(),
            },
        ];

        StoryView {
            story: response.story.clone(),
            metadata,
        }
    }

    pub fn metadata_line(&self) -> String {
        self.metadata
            .iter()
            .map(|entry| format!("{}: {}", entry.label, entry.value))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

/// Multi-line statistics text shown in the blocking notification.
pub struct StatisticsSummary<'a>(pub &'a StatisticsSnapshot);

impl fmt::Display for StatisticsSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.0;
        writeln!(f, "📊 Статистика системы:")?;
        writeln!(f)?;
        writeln!(f, "• Фрагментов в базе: {}", stats.total_chunks)?;
        writeln!(f, "• Модель эмбеддингов: {}", stats.embedding_model)?;
        writeln!(f, "• LLM модель: {}", stats.llm_model)?;
        writeln!(f, "• Размер фрагмента: {}", stats.chunk_size)?;
        write!(f, "• Перекрытие: {}", stats.chunk_overlap)
    }
}
