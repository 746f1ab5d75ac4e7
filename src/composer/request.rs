//! Outbound email dispatch request

use serde::{Deserialize, Serialize};

use crate::config::EmailConfig;

use super::fields::DynamicData;

/// An email participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub name: String,
}

impl Contact {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
        }
    }

    /// Store sender identity used for `from` and `replyTo`
    pub fn sender(config: &EmailConfig) -> Self {
        Self::new(&config.sender_email, &config.sender_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateVars {
    pub to: Contact,
    pub from: Contact,
    pub reply_to: Contact,
    pub dynamic_data: DynamicData,
}

/// Body POSTed to the email-dispatch endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailDispatchRequest {
    /// Template identifier, empty when nothing should be sent
    pub template: String,
    pub template_vars: TemplateVars,
}

impl EmailDispatchRequest {
    pub fn new(
        template: impl Into<String>,
        to: Contact,
        sender: Contact,
        dynamic_data: DynamicData,
    ) -> Self {
        Self {
            template: template.into(),
            template_vars: TemplateVars {
                to,
                from: sender.clone(),
                reply_to: sender,
                dynamic_data,
            },
        }
    }
}
