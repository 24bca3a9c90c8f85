//! Ordered classifier rules.
//!
//! Each rule pairs a predicate with a guide builder. Rules are evaluated top to bottom and the
//! first match wins, so categories that overlap must appear most specific first: exact service
//! signatures, then service and credential combinations, then structural field names, then
//! type-driven categories. [`TERMINAL_RULE`] answers when nothing else matches.

use fieldguide_types::{Guide, GuideCategory};

use super::{signals::FieldSignals, templates};

/// A `(predicate, builder)` pair for one category.
#[derive(Clone, Copy)]
pub struct GuideRule {
    pub category: GuideCategory,
    pub matches: fn(&FieldSignals) -> bool,
    pub build: fn(&FieldSignals) -> Guide,
}

macro_rules! rule {
    ($category:ident, $matches:path, $build:path) => {
        GuideRule {
            category: GuideCategory::$category,
            matches: $matches,
            build: $build,
        }
    };
}

/// Classifier rules in precedence order.
pub static RULES: &[GuideRule] = &[
    // Exact service signatures.
    rule!(SlackBotToken, is_slack_bot_token, templates::slack_bot_token),
    rule!(SlackWebhook, is_slack_webhook, templates::slack_webhook),
    rule!(SlackAppCredential, is_slack_app_credential, templates::slack_app_credential),
    rule!(GeminiApiKey, is_gemini_api_key, templates::gemini_api_key),
    rule!(OpenAiApiKey, is_openai_api_key, templates::openai_api_key),
    rule!(TelegramBotToken, is_telegram_bot_token, templates::telegram_bot_token),
    // Service and credential combinations.
    rule!(FacebookPageToken, is_facebook_page_token, templates::facebook_page_token),
    rule!(InstagramAccountId, is_instagram_account_id, templates::instagram_account_id),
    rule!(TwitterCredential, is_twitter_credential, templates::twitter_credential),
    rule!(GoogleOAuthClient, is_google_oauth_client, templates::google_oauth_client),
    rule!(GoogleApiKey, is_google_api_key, templates::google_api_key),
    rule!(SmtpSetting, is_smtp_setting, templates::smtp_setting),
    // Structural field names.
    rule!(Url, is_url, templates::url),
    rule!(PageAccessToken, is_page_access_token, templates::page_access_token),
    rule!(IdToken, is_id_token, templates::id_token),
    rule!(Token, is_token, templates::token),
    rule!(ApiKey, is_api_key, templates::api_key),
    rule!(Credential, is_credential, templates::credential),
    rule!(SpreadsheetId, is_spreadsheet_id, templates::spreadsheet_id),
    rule!(Webhook, is_webhook, templates::webhook),
    rule!(PageId, is_page_id, templates::page_id),
    rule!(AccountId, is_account_id, templates::account_id),
    rule!(ShopDomain, is_shop_domain, templates::shop_domain),
    rule!(ResourceId, is_resource_id, templates::resource_id),
    rule!(Expression, is_expression, templates::expression),
    rule!(Condition, is_condition, templates::condition),
    rule!(Array, is_array, templates::array),
    rule!(Database, is_database, templates::database),
    rule!(Host, is_host, templates::host),
    rule!(Port, is_port, templates::port),
    rule!(Model, is_model, templates::model),
    rule!(Prompt, is_prompt, templates::prompt),
    // Type-driven categories.
    rule!(Json, is_json, templates::json),
    rule!(Cron, is_cron, templates::cron),
    rule!(Time, is_time, templates::time),
    rule!(Temperature, is_temperature, templates::temperature),
    rule!(Number, is_number, templates::number),
    rule!(Textarea, is_textarea, templates::textarea),
    rule!(Email, is_email, templates::email),
    rule!(Phone, is_phone, templates::phone),
    rule!(Name, is_name, templates::name),
    rule!(Title, is_title, templates::title),
    rule!(Description, is_description, templates::description),
    rule!(Message, is_message, templates::message),
    rule!(Text, is_text, templates::text),
];

/// Catch-all used when no rule in [`RULES`] matches.
pub static TERMINAL_RULE: GuideRule = rule!(GenericCredential, always, templates::generic_credential);

/// Returns the first matching rule, or [`TERMINAL_RULE`].
pub fn first_match(signals: &FieldSignals) -> &'static GuideRule {
    RULES.iter().find(|rule| (rule.matches)(signals)).unwrap_or(&TERMINAL_RULE)
}

/// Every category in evaluation order, terminal fallback last.
pub fn precedence() -> impl Iterator<Item = GuideCategory> {
    RULES.iter().chain(std::iter::once(&TERMINAL_RULE)).map(|rule| rule.category)
}

const KEY_LIKE: &[&str] = &["api key", "apikey", "key", "token", "secret"];

const TOKEN_LIMIT: &[&str] = &["max token", "maxtoken", "max_token", "token limit"];

/// LLM output limits ("Max Tokens") mention tokens without being credentials.
fn is_token_limit(signals: &FieldSignals) -> bool {
    signals.has_any(TOKEN_LIMIT)
}

/// Credential keyword present and not a token limit.
fn has_credential_word(signals: &FieldSignals, words: &[&str]) -> bool {
    signals.has_any(words) && !is_token_limit(signals)
}

fn is_slack(signals: &FieldSignals) -> bool {
    signals.mentions_service("slack")
}

fn is_slack_bot_token(signals: &FieldSignals) -> bool {
    is_slack(signals) && signals.has_any(&["bot token", "bottoken", "bot_token", "xoxb"])
}

fn is_slack_webhook(signals: &FieldSignals) -> bool {
    signals.has("hooks.slack.com") || (is_slack(signals) && signals.has("webhook"))
}

fn is_slack_app_credential(signals: &FieldSignals) -> bool {
    is_slack(signals) && has_credential_word(signals, &["api key", "token", "secret", "signing", "client id", "app id"])
}

fn is_gemini_api_key(signals: &FieldSignals) -> bool {
    signals.has_any(&["aistudio.google.com", "generativelanguage.googleapis.com", "makersuite"])
        || (signals.mentions_service("gemini") && has_credential_word(signals, KEY_LIKE))
}

fn is_openai_api_key(signals: &FieldSignals) -> bool {
    signals.has("platform.openai.com")
        || signals.placeholder().starts_with("sk-")
        || (signals.mentions_service("openai") && has_credential_word(signals, KEY_LIKE))
}

fn is_telegram_bot_token(signals: &FieldSignals) -> bool {
    signals.has_any(&["api.telegram.org", "botfather"]) || (signals.mentions_service("telegram") && has_credential_word(signals, &["token"]))
}

fn is_facebook_page_token(signals: &FieldSignals) -> bool {
    signals.node_is(&["facebook"]) && signals.has("page") && has_credential_word(signals, &["token", "access"])
}

fn is_instagram_account_id(signals: &FieldSignals) -> bool {
    signals.node_is(&["instagram"]) && signals.has_any(&["account", "business"]) && signals.has_any_word(&["id", "ids"])
}

fn is_twitter_credential(signals: &FieldSignals) -> bool {
    signals.node_is(&["twitter"]) && has_credential_word(signals, &["api key", "consumer", "secret", "bearer", "token", "access"])
}

fn is_google_oauth_client(signals: &FieldSignals) -> bool {
    signals.node_is(&["google", "gmail", "youtube", "drive"]) && signals.has_any(&["client id", "client secret", "oauth"])
}

fn is_google_api_key(signals: &FieldSignals) -> bool {
    signals.node_is(&["google", "youtube", "maps"]) && signals.has_any(&["api key", "apikey"])
}

fn is_smtp_setting(signals: &FieldSignals) -> bool {
    (signals.node_is(&["smtp", "email", "mail"]) || signals.has("smtp"))
        && signals.has_any_word(&["host", "port", "user", "username", "password", "server", "secure", "tls"])
}

fn is_url(signals: &FieldSignals) -> bool {
    signals.placeholder().starts_with("http://")
        || signals.placeholder().starts_with("https://")
        || signals.has("://")
        || signals.has_any(&["url", "endpoint"])
}

fn is_page_access_token(signals: &FieldSignals) -> bool {
    signals.has("page") && has_credential_word(signals, &["token"])
}

fn is_id_token(signals: &FieldSignals) -> bool {
    signals.has_any(&["id token", "id_token", "idtoken"])
}

fn is_token(signals: &FieldSignals) -> bool {
    has_credential_word(signals, &["token", "bearer", "jwt"])
}

fn is_api_key(signals: &FieldSignals) -> bool {
    signals.has_any(&["api key", "apikey", "api_key", "x-api-key"])
}

fn is_credential(signals: &FieldSignals) -> bool {
    signals.has_any(&[
        "credential",
        "secret",
        "password",
        "passwd",
        "passphrase",
        "authorization",
        "authentication",
        "private key",
    ]) || signals.has_word("auth")
}

fn is_spreadsheet_id(signals: &FieldSignals) -> bool {
    signals.has_any(&["spreadsheet", "sheet id", "sheetid"])
}

fn is_webhook(signals: &FieldSignals) -> bool {
    signals.has("webhook")
}

fn is_page_id(signals: &FieldSignals) -> bool {
    signals.has_any(&["page id", "pageid", "page_id"])
}

fn is_account_id(signals: &FieldSignals) -> bool {
    signals.has_any(&["account id", "accountid", "account_id"])
}

fn is_shop_domain(signals: &FieldSignals) -> bool {
    signals.has_word("shop") || signals.has_any(&["myshopify", "store domain"])
}

fn is_resource_id(signals: &FieldSignals) -> bool {
    signals.has_any_word(&["id", "ids", "uuid", "guid"])
}

fn is_expression(signals: &FieldSignals) -> bool {
    signals.has_any(&["expression", "{{"])
}

fn is_condition(signals: &FieldSignals) -> bool {
    signals.has_any_word(&["condition", "conditions", "filter", "filters"])
}

fn is_array(signals: &FieldSignals) -> bool {
    signals.type_is(&["array", "list", "multiselect"]) || signals.has_any(&["comma separated", "comma-separated", "list of"])
}

fn is_database(signals: &FieldSignals) -> bool {
    signals.has("database") || signals.has_any_word(&["db", "collection", "table", "schema"])
}

fn is_host(signals: &FieldSignals) -> bool {
    signals.has("host") || signals.has_word("server")
}

fn is_port(signals: &FieldSignals) -> bool {
    signals.has_word("port")
}

fn is_model(signals: &FieldSignals) -> bool {
    signals.has_any_word(&["model", "models"])
}

fn is_prompt(signals: &FieldSignals) -> bool {
    signals.has_any(&["prompt", "system message", "instruction"])
}

fn is_json(signals: &FieldSignals) -> bool {
    signals.type_is(&["json", "object"]) || signals.has("json") || signals.has_any_word(&["payload", "body", "headers"])
}

fn is_cron(signals: &FieldSignals) -> bool {
    signals.type_is(&["cron"]) || signals.has("cron") || signals.has_word("schedule")
}

fn is_time(signals: &FieldSignals) -> bool {
    signals.type_is(&["time", "date", "datetime", "datetime-local"])
        || signals.has_any_word(&["time", "date", "datetime", "timezone", "timestamp"])
}

fn is_temperature(signals: &FieldSignals) -> bool {
    signals.has("temperature")
}

fn is_number(signals: &FieldSignals) -> bool {
    signals.type_is(&["number", "integer", "int", "float", "decimal"])
}

fn is_textarea(signals: &FieldSignals) -> bool {
    signals.type_is(&["textarea"])
}

fn is_email(signals: &FieldSignals) -> bool {
    signals.is_text_like() && (signals.type_is(&["email"]) || signals.has_any_word(&["email", "mail"]) || signals.has("e-mail"))
}

fn is_phone(signals: &FieldSignals) -> bool {
    signals.is_text_like() && (signals.type_is(&["tel", "phone"]) || signals.has_any_word(&["phone", "mobile", "tel"]))
}

fn is_name(signals: &FieldSignals) -> bool {
    signals.is_text_like() && signals.has_any_word(&["name", "names", "username"])
}

fn is_title(signals: &FieldSignals) -> bool {
    signals.is_text_like() && signals.has_any_word(&["title", "subject", "headline"])
}

fn is_description(signals: &FieldSignals) -> bool {
    signals.is_text_like() && signals.has_any_word(&["description", "summary", "caption"])
}

fn is_message(signals: &FieldSignals) -> bool {
    signals.is_text_like() && signals.has_any_word(&["message", "content", "text", "comment", "reply"])
}

fn is_text(signals: &FieldSignals) -> bool {
    signals.type_is(&["text", "string"])
}

fn always(_: &FieldSignals) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use fieldguide_types::FieldDescriptor;

    use super::*;

    fn category_of(descriptor: FieldDescriptor) -> GuideCategory {
        first_match(&FieldSignals::from_descriptor(&descriptor)).category
    }

    #[test]
    fn every_category_appears_once() {
        let categories: Vec<_> = precedence().collect();
        let unique: HashSet<_> = categories.iter().copied().collect();
        assert_eq!(categories.len(), unique.len());
        assert_eq!(categories.last(), Some(&GuideCategory::GenericCredential));
    }

    #[test]
    fn slack_bot_token_beats_generic_token() {
        let descriptor = FieldDescriptor::new("token", "Slack Bot Token").with_node_type("slack");
        assert_eq!(category_of(descriptor), GuideCategory::SlackBotToken);
        assert_eq!(category_of(FieldDescriptor::new("token", "Bot Token")), GuideCategory::Token);
    }

    #[test]
    fn slack_api_key_differs_from_generic_api_key() {
        let slack = FieldDescriptor::new("apiKey", "Slack API Key").with_node_type("slack");
        assert_eq!(category_of(slack), GuideCategory::SlackAppCredential);
        assert_eq!(category_of(FieldDescriptor::new("apiKey", "API Key")), GuideCategory::ApiKey);
    }

    #[test]
    fn documentation_hostnames_in_labels_win_over_urls() {
        let descriptor = FieldDescriptor::new("key", "Key from https://aistudio.google.com");
        assert_eq!(category_of(descriptor), GuideCategory::GeminiApiKey);
    }

    #[test]
    fn facebook_page_token_is_distinct_from_page_token() {
        let facebook = FieldDescriptor::new("pageToken", "Page Access Token").with_node_type("facebook_pages");
        assert_eq!(category_of(facebook), GuideCategory::FacebookPageToken);
        let other = FieldDescriptor::new("pageToken", "Page Access Token").with_node_type("notion");
        assert_eq!(category_of(other), GuideCategory::PageAccessToken);
    }

    #[test]
    fn url_detection_uses_scheme_or_keywords() {
        assert_eq!(category_of(FieldDescriptor::new("target", "Target").with_placeholder("https://api.example.com")), GuideCategory::Url);
        assert_eq!(category_of(FieldDescriptor::new("endpoint", "Endpoint")), GuideCategory::Url);
    }

    #[test]
    fn max_tokens_is_not_a_credential() {
        let descriptor = FieldDescriptor::new("maxTokens", "Max Tokens").with_type("number");
        assert_eq!(category_of(descriptor), GuideCategory::Number);
    }

    #[test]
    fn max_tokens_on_llm_and_chat_nodes_is_a_number() {
        for node_type in ["google_gemini", "openai", "telegram", "slack"] {
            let descriptor = FieldDescriptor::new("maxTokens", "Max Tokens").with_type("number").with_node_type(node_type);
            assert_eq!(category_of(descriptor), GuideCategory::Number, "{node_type}");
        }
        let limit = FieldDescriptor::new("tokenLimit", "Token Limit").with_type("number").with_node_type("openai");
        assert_eq!(category_of(limit), GuideCategory::Number);
        let key = FieldDescriptor::new("apiKey", "API Key").with_node_type("openai");
        assert_eq!(category_of(key), GuideCategory::OpenAiApiKey);
    }

    #[test]
    fn author_is_not_auth() {
        let descriptor = FieldDescriptor::new("author", "Author").with_type("text");
        assert_eq!(category_of(descriptor), GuideCategory::Text);
    }

    #[test]
    fn report_is_not_port() {
        let descriptor = FieldDescriptor::new("reportTitle", "Report Title").with_type("text");
        assert_eq!(category_of(descriptor), GuideCategory::Title);
    }

    #[test]
    fn structural_families_resolve_in_order() {
        assert_eq!(category_of(FieldDescriptor::new("spreadsheetId", "Spreadsheet ID")), GuideCategory::SpreadsheetId);
        assert_eq!(category_of(FieldDescriptor::new("channelId", "Channel")), GuideCategory::ResourceId);
        assert_eq!(category_of(FieldDescriptor::new("dbPassword", "Database Password")), GuideCategory::Credential);
        assert_eq!(category_of(FieldDescriptor::new("host", "Host")), GuideCategory::Host);
        assert_eq!(category_of(FieldDescriptor::new("port", "Port").with_type("number")), GuideCategory::Port);
        assert_eq!(category_of(FieldDescriptor::new("model", "Model")), GuideCategory::Model);
    }

    #[test]
    fn type_driven_categories() {
        assert_eq!(category_of(FieldDescriptor::new("data", "Data").with_type("json")), GuideCategory::Json);
        assert_eq!(category_of(FieldDescriptor::new("when", "When").with_type("cron")), GuideCategory::Cron);
        assert_eq!(category_of(FieldDescriptor::new("temperature", "Temperature").with_type("number")), GuideCategory::Temperature);
        assert_eq!(category_of(FieldDescriptor::new("limit", "Limit").with_type("number")), GuideCategory::Number);
        assert_eq!(category_of(FieldDescriptor::new("notes", "Notes").with_type("textarea")), GuideCategory::Textarea);
        assert_eq!(category_of(FieldDescriptor::new("to", "Recipient Email").with_type("text")), GuideCategory::Email);
        assert_eq!(category_of(FieldDescriptor::new("region", "Region").with_type("text")), GuideCategory::Text);
    }

    #[test]
    fn empty_descriptor_reaches_the_terminal_rule() {
        assert_eq!(category_of(FieldDescriptor::default()), GuideCategory::GenericCredential);
    }
}
