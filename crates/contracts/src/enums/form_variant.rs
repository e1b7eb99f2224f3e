use serde::{Deserialize, Serialize};

/// Варианты формы заявки, которые обслуживает общее модальное окно
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormVariant {
    #[default]
    Tastyfx,
    Oanda,
    Contact,
}

impl FormVariant {
    /// Получить код варианта (логи и запись в localStorage)
    pub fn code(&self) -> &'static str {
        match self {
            FormVariant::Tastyfx => "tastyfx",
            FormVariant::Oanda => "oanda",
            FormVariant::Contact => "contact",
        }
    }

    /// Определить вариант по метке источника лида.
    ///
    /// Поиск подстроки без учета регистра, `oanda` важнее `contact`;
    /// все остальное считается регистрацией TastyFX.
    pub fn from_lead_source(lead_source: &str) -> Self {
        let lowered = lead_source.to_lowercase();
        if lowered.contains("oanda") {
            FormVariant::Oanda
        } else if lowered.contains("contact") {
            FormVariant::Contact
        } else {
            FormVariant::Tastyfx
        }
    }

    /// Поле сообщения есть только у формы обратной связи
    pub fn shows_message_box(&self) -> bool {
        matches!(self, FormVariant::Contact)
    }
}

impl std::fmt::Display for FormVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
