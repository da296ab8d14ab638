use crate::error::Result;
use handlebars::Handlebars;
use serde::Serialize;
use useless_catalog::Record;

const CARD_TEMPLATE_NAME: &str = "card";

const CARD_TEMPLATE: &str = r#"<div style="{{{styles.container}}}">
  <div style="{{{styles.header}}}">
    <div style="{{{styles.badge}}}">{{card.occupation}}</div>
    <div style="{{{styles.category}}}">{{card.category}}</div>
  </div>
  <div style="{{{styles.content}}}">
    <h1 style="{{{styles.title}}}">{{card.title}}</h1>
    <p style="{{{styles.description}}}">{{card.description}}</p>
    <div style="{{{styles.section_title}}}">📋 Steps</div>
    <ol style="padding-left: 20px;">
      {{#each card.steps}}<li style="{{{../styles.step}}}">{{this}}</li>{{/each}}
    </ol>
    <div style="{{{styles.fact_box}}}">
      <div style="{{{styles.fact_label}}}">💡 Fun Fact</div>
      <div>{{card.funFact}}</div>
    </div>
    <div style="{{{styles.takeaway_box}}}">
      <div style="{{{styles.takeaway_label}}}">🎯 Key Takeaway</div>
      <div>{{card.keyTakeaway}}</div>
    </div>
  </div>
</div>
"#;

const LIGHT_GRADIENT: &str =
    "linear-gradient(135deg, #FF6B35 0%, #FF8C42 50%, #FFA559 100%)";
const DARK_GRADIENT: &str =
    "linear-gradient(135deg, #D84315 0%, #E64A19 50%, #FF6F00 100%)";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Unknown names render light.
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("dark") {
            Self::Dark
        } else {
            Self::Light
        }
    }

    fn gradient(self) -> &'static str {
        match self {
            Self::Light => LIGHT_GRADIENT,
            Self::Dark => DARK_GRADIENT,
        }
    }
}

#[derive(Serialize)]
struct CardStyles {
    container: String,
    header: &'static str,
    badge: &'static str,
    category: &'static str,
    content: &'static str,
    title: &'static str,
    description: &'static str,
    section_title: &'static str,
    step: &'static str,
    fact_box: &'static str,
    fact_label: &'static str,
    takeaway_box: &'static str,
    takeaway_label: &'static str,
}

impl CardStyles {
    fn for_theme(theme: Theme) -> Self {
        Self {
            container: format!(
                "max-width: 600px; margin: 0 auto; \
                 font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; \
                 background: {}; border-radius: 16px; overflow: hidden; \
                 box-shadow: 0 8px 24px rgba(255, 107, 53, 0.3);",
                theme.gradient()
            ),
            header: "padding: 20px; background: rgba(255, 255, 255, 0.15); \
                     backdrop-filter: blur(10px); display: flex; \
                     justify-content: space-between; align-items: center;",
            badge: "background: rgba(255, 255, 255, 0.95); color: #D84315; padding: 8px 16px; \
                    border-radius: 20px; font-size: 14px; font-weight: 700; \
                    box-shadow: 0 2px 8px rgba(0,0,0,0.1);",
            category: "color: #ffffff; font-weight: 600; text-shadow: 0 1px 2px rgba(0,0,0,0.2);",
            content: "padding: 24px; background: #ffffff;",
            title: "font-size: 26px; font-weight: 800; \
                    background: linear-gradient(135deg, #FF6B35, #FF8C42); \
                    -webkit-background-clip: text; -webkit-text-fill-color: transparent; \
                    background-clip: text; margin-bottom: 12px;",
            description: "color: #333; line-height: 1.6; margin-bottom: 24px;",
            section_title: "color: #FF6B35; font-weight: 700; font-size: 18px; \
                            margin: 20px 0 12px 0;",
            step: "color: #333; line-height: 1.6; margin-bottom: 12px;",
            fact_box: "background: linear-gradient(135deg, #FFF5F0, #FFE8DC); \
                       border-left: 4px solid #FF8C42; padding: 18px; border-radius: 12px; \
                       margin: 16px 0;",
            fact_label: "color: #FF6B35; font-weight: 700; margin-bottom: 8px;",
            takeaway_box: "background: linear-gradient(135deg, #FFEBE5, #FFD4CC); \
                           border-left: 4px solid #D84315; padding: 18px; border-radius: 12px; \
                           margin: 16px 0;",
            takeaway_label: "color: #D84315; font-weight: 700; margin-bottom: 8px;",
        }
    }
}

#[derive(Serialize)]
struct CardView<'a> {
    card: &'a Record,
    styles: CardStyles,
}

/// Renders a record into the styled card markup the widget shows.
///
/// Record text is HTML-escaped; style strings are trusted constants.
pub struct CardRenderer {
    handlebars: Handlebars<'static>,
}

impl CardRenderer {
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        handlebars.register_template_string(CARD_TEMPLATE_NAME, CARD_TEMPLATE)?;
        Ok(Self { handlebars })
    }

    pub fn render(&self, card: &Record, theme: Theme) -> Result<String> {
        let view = CardView {
            card,
            styles: CardStyles::for_theme(theme),
        };
        Ok(self.handlebars.render(CARD_TEMPLATE_NAME, &view)?)
    }
}
