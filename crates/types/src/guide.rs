//! Guide output model shared by the catalog, the resolver, and the presentation shell.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Step-by-step instructions explaining how to obtain a value for a field.
///
/// A blank entry in `steps` is a spacer line and must be rendered as an empty line.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Guide {
    pub title: String,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, alias = "security_warning", skip_serializing_if = "Option::is_none")]
    pub security_warning: Option<bool>,
}

impl Guide {
    pub fn new<S: Into<String>>(title: impl Into<String>, steps: impl IntoIterator<Item = S>) -> Self {
        Self {
            title: title.into(),
            steps: steps.into_iter().map(Into::into).collect(),
            url: None,
            example: None,
            security_warning: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    /// Marks the guide as describing a secret value.
    pub fn sensitive(mut self) -> Self {
        self.security_warning = Some(true);
        self
    }

    /// True when at least one step carries visible text. Spacers alone do not count.
    pub fn has_steps(&self) -> bool {
        self.steps.iter().any(|step| !step.trim().is_empty())
    }
}

/// Which source produced the guide returned by the resolver.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GuideSource {
    /// Curated entry keyed by node type and field key.
    Catalog,
    /// Steps parsed out of the field's own help text.
    HelpText,
    /// Heuristic guide synthesized from field metadata.
    Generated,
    /// The catalog's generic default entry.
    Default,
}

impl fmt::Display for GuideSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Catalog => "catalog",
            Self::HelpText => "help_text",
            Self::Generated => "generated",
            Self::Default => "default",
        };
        f.write_str(name)
    }
}

/// Semantic bucket inferred by the heuristic generator.
///
/// Variants are declared in classifier precedence order, most specific first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GuideCategory {
    SlackBotToken,
    SlackWebhook,
    SlackAppCredential,
    GeminiApiKey,
    OpenAiApiKey,
    TelegramBotToken,
    FacebookPageToken,
    InstagramAccountId,
    TwitterCredential,
    GoogleOAuthClient,
    GoogleApiKey,
    SmtpSetting,
    Url,
    PageAccessToken,
    IdToken,
    Token,
    ApiKey,
    Credential,
    SpreadsheetId,
    Webhook,
    PageId,
    AccountId,
    ShopDomain,
    ResourceId,
    Expression,
    Condition,
    Array,
    Database,
    Host,
    Port,
    Model,
    Prompt,
    Json,
    Cron,
    Time,
    Temperature,
    Number,
    Textarea,
    Email,
    Phone,
    Name,
    Title,
    Description,
    Message,
    Text,
    GenericCredential,
}

impl GuideCategory {
    /// Human-readable category name. Also inspected for sensitive keywords by the resolver.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SlackBotToken => "Slack Bot Token",
            Self::SlackWebhook => "Slack Incoming Webhook",
            Self::SlackAppCredential => "Slack App Credential",
            Self::GeminiApiKey => "Gemini API Key",
            Self::OpenAiApiKey => "OpenAI API Key",
            Self::TelegramBotToken => "Telegram Bot Token",
            Self::FacebookPageToken => "Facebook Page Access Token",
            Self::InstagramAccountId => "Instagram Business Account ID",
            Self::TwitterCredential => "Twitter API Credential",
            Self::GoogleOAuthClient => "Google OAuth Client",
            Self::GoogleApiKey => "Google Cloud API Key",
            Self::SmtpSetting => "SMTP Setting",
            Self::Url => "URL",
            Self::PageAccessToken => "Page Access Token",
            Self::IdToken => "ID Token",
            Self::Token => "Token",
            Self::ApiKey => "API Key",
            Self::Credential => "Credential",
            Self::SpreadsheetId => "Spreadsheet ID",
            Self::Webhook => "Webhook",
            Self::PageId => "Page ID",
            Self::AccountId => "Account ID",
            Self::ShopDomain => "Shop Domain",
            Self::ResourceId => "Resource ID",
            Self::Expression => "Expression",
            Self::Condition => "Condition",
            Self::Array => "List",
            Self::Database => "Database",
            Self::Host => "Host",
            Self::Port => "Port",
            Self::Model => "Model",
            Self::Prompt => "Prompt",
            Self::Json => "JSON",
            Self::Cron => "Cron Schedule",
            Self::Time => "Time",
            Self::Temperature => "Temperature",
            Self::Number => "Number",
            Self::Textarea => "Long Text",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number",
            Self::Name => "Name",
            Self::Title => "Title",
            Self::Description => "Description",
            Self::Message => "Message",
            Self::Text => "Text",
            Self::GenericCredential => "Generic Credential",
        }
    }
}

impl fmt::Display for GuideCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of resolving a field descriptor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    /// Selected guide. `security_warning` always holds the final computed flag.
    pub guide: Guide,
    /// Short question shown above the guide ("How to get API key?").
    pub question_label: String,
    pub source: GuideSource,
    /// Generator category; only present when `source` is [`GuideSource::Generated`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<GuideCategory>,
}

impl Resolution {
    /// Final security flag; `false` when the guide does not describe a secret.
    pub fn security_warning(&self) -> bool {
        self.guide.security_warning.unwrap_or(false)
    }
}
