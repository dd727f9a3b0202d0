use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Locales the card can be rendered in. Every user-facing string comes from
/// the table behind [`Locale::strings`].
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize, ValueEnum)]
pub enum Locale {
    #[default]
    #[serde(rename = "pt-BR")]
    #[value(name = "pt-BR")]
    PtBr,
    #[serde(rename = "en-US")]
    #[value(name = "en-US")]
    EnUs,
}

/// A phrase with a singular and a plural form; `{count}` is substituted.
#[derive(Debug)]
pub struct Plural {
    pub one: &'static str,
    pub other: &'static str,
}

impl Plural {
    pub fn render(&self, count: i64) -> String {
        if count == 1 {
            self.one.to_string()
        } else {
            self.other.replace("{count}", &count.to_string())
        }
    }
}

#[derive(Debug)]
pub struct DistancePhrases {
    pub less_than_x_minutes: Plural,
    pub x_minutes: Plural,
    pub about_x_hours: Plural,
    pub x_days: Plural,
    pub about_x_months: Plural,
    pub x_months: Plural,
    pub about_x_years: Plural,
    pub over_x_years: Plural,
    pub almost_x_years: Plural,
    /// `{distance}` is substituted.
    pub past: &'static str,
    pub future: &'static str,
}

#[derive(Debug)]
pub struct Strings {
    pub feedback_heading: &'static str,
    pub comment_placeholder: &'static str,
    pub publish_button: &'static str,
    pub required_message: &'static str,
    pub comments_title: &'static str,
    pub no_comments: &'static str,
    pub delete_label: &'static str,
    pub compose_help: &'static str,
    pub browse_help: &'static str,
    pub months: [&'static str; 12],
    /// Placeholders: `{day}`, `{month}`, `{hour}`, `{minute}`.
    pub absolute_pattern: &'static str,
    pub distance: DistancePhrases,
}

static PT_BR: Strings = Strings {
    feedback_heading: "Deixe seu feedback",
    comment_placeholder: "Deixe seu comentario",
    publish_button: "Publicar",
    required_message: "Esse campo é obrigatório!",
    comments_title: "Comentários",
    no_comments: "Nenhum comentário ainda",
    delete_label: "Deletar comentário",
    compose_help: "Ctrl+S publicar · Tab comentários · Ctrl+C sair",
    browse_help: "j/k navegar · d deletar · i escrever · q sair",
    months: [
        "janeiro", "fevereiro", "março", "abril", "maio", "junho",
        "julho", "agosto", "setembro", "outubro", "novembro", "dezembro",
    ],
    absolute_pattern: "{day} de {month} as {hour}:{minute}h",
    distance: DistancePhrases {
        less_than_x_minutes: Plural { one: "menos de um minuto", other: "menos de {count} minutos" },
        x_minutes: Plural { one: "1 minuto", other: "{count} minutos" },
        about_x_hours: Plural { one: "cerca de 1 hora", other: "cerca de {count} horas" },
        x_days: Plural { one: "1 dia", other: "{count} dias" },
        about_x_months: Plural { one: "cerca de 1 mês", other: "cerca de {count} meses" },
        x_months: Plural { one: "1 mês", other: "{count} meses" },
        about_x_years: Plural { one: "cerca de 1 ano", other: "cerca de {count} anos" },
        over_x_years: Plural { one: "mais de 1 ano", other: "mais de {count} anos" },
        almost_x_years: Plural { one: "quase 1 ano", other: "quase {count} anos" },
        past: "há {distance}",
        future: "em {distance}",
    },
};

static EN_US: Strings = Strings {
    feedback_heading: "Leave your feedback",
    comment_placeholder: "Leave a comment",
    publish_button: "Publish",
    required_message: "This field is required",
    comments_title: "Comments",
    no_comments: "No comments yet",
    delete_label: "Delete comment",
    compose_help: "Ctrl+S publish · Tab comments · Ctrl+C quit",
    browse_help: "j/k move · d delete · i write · q quit",
    months: [
        "January", "February", "March", "April", "May", "June",
        "July", "August", "September", "October", "November", "December",
    ],
    absolute_pattern: "{month} {day} at {hour}:{minute}h",
    distance: DistancePhrases {
        less_than_x_minutes: Plural { one: "less than a minute", other: "less than {count} minutes" },
        x_minutes: Plural { one: "1 minute", other: "{count} minutes" },
        about_x_hours: Plural { one: "about 1 hour", other: "about {count} hours" },
        x_days: Plural { one: "1 day", other: "{count} days" },
        about_x_months: Plural { one: "about 1 month", other: "about {count} months" },
        x_months: Plural { one: "1 month", other: "{count} months" },
        about_x_years: Plural { one: "about 1 year", other: "about {count} years" },
        over_x_years: Plural { one: "over 1 year", other: "over {count} years" },
        almost_x_years: Plural { one: "almost 1 year", other: "almost {count} years" },
        past: "{distance} ago",
        future: "in {distance}",
    },
};

impl Locale {
    pub fn strings(&self) -> &'static Strings {
        match self {
            Locale::PtBr => &PT_BR,
            Locale::EnUs => &EN_US,
        }
    }

    /// BCP 47 tag, also used as the markup `lang` attribute.
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::PtBr => "pt-BR",
            Locale::EnUs => "en-US",
        }
    }
}
