//! Response interpretation.
//!
//! Every reply of the Remote Action API is decoded here, once, into either an
//! [`ActionSuccess`] or an [`ActionError`].  Nothing downstream looks at HTTP
//! status codes or raw JSON fields.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::constants::GUEST_RESTRICTION_CODE;
use crate::error::ActionError;
use crate::models::{ActionKind, ActionSuccess, ReactionAction, ReactionUpdate};

/// Raw HTTP reply as seen by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }
}

/// Union of every field the endpoints may send back.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Envelope {
    status: Option<String>,
    message: Option<String>,
    error: Option<String>,
    code: Option<String>,
    redirect_url: Option<String>,
    action: Option<ReactionAction>,
    counts: Option<BTreeMap<String, u64>>,
    total_reactions: Option<u64>,
    response: Option<String>,
}

impl Envelope {
    fn message(&self) -> Option<String> {
        self.message
            .as_deref()
            .or(self.error.as_deref())
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
    }

    /// A 2xx body may still say `status: error|failure|rejected`.
    fn declares_failure(&self) -> bool {
        matches!(self.status.as_deref(), Some(s) if s != "success")
    }
}

pub fn interpret(kind: ActionKind, reply: &HttpReply) -> Result<ActionSuccess, ActionError> {
    let envelope = serde_json::from_str::<Envelope>(&reply.body).ok();
    let message = envelope.as_ref().and_then(Envelope::message);

    match reply.status {
        200..=299 => {
            let envelope = envelope.ok_or_else(|| ActionError::Unexpected {
                status: reply.status,
                message: None,
            })?;
            if envelope.declares_failure() {
                return Err(ActionError::ValidationRejected { message });
            }
            decode_success(kind, reply.status, envelope, message)
        }
        400 | 422 => Err(ActionError::ValidationRejected { message }),
        403 if envelope.as_ref().and_then(|e| e.code.as_deref()) == Some(GUEST_RESTRICTION_CODE) => {
            Err(ActionError::AuthChallengeRequired { message })
        }
        // Throttling is a "retry later" condition.
        429 | 500..=599 => Err(ActionError::ServerFault { message }),
        status => Err(ActionError::Unexpected { status, message }),
    }
}

fn decode_success(
    kind: ActionKind,
    status: u16,
    envelope: Envelope,
    message: Option<String>,
) -> Result<ActionSuccess, ActionError> {
    match kind {
        ActionKind::SubmitReport => Ok(ActionSuccess::ReportAccepted {
            message,
            redirect_url: envelope.redirect_url,
        }),
        ActionKind::ToggleReaction => Ok(ActionSuccess::Reaction(ReactionUpdate {
            action: envelope.action,
            counts: envelope.counts.unwrap_or_default(),
            total: envelope.total_reactions,
        })),
        ActionKind::RequestOtp => Ok(ActionSuccess::CodeSent { message }),
        ActionKind::VerifyOtp => Ok(ActionSuccess::Verified { message }),
        ActionKind::SendChat => envelope
            .response
            .map(|text| ActionSuccess::ChatReply { text })
            .ok_or(ActionError::Unexpected { status, message }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_success_carries_redirect() {
        let reply = HttpReply::new(
            200,
            r#"{"status":"success","message":"Laporan berhasil dikirim!","redirect_url":"/reports/42/"}"#,
        );
        assert_eq!(
            interpret(ActionKind::SubmitReport, &reply),
            Ok(ActionSuccess::ReportAccepted {
                message: Some("Laporan berhasil dikirim!".into()),
                redirect_url: Some("/reports/42/".into()),
            })
        );
    }

    #[test]
    fn bad_request_is_validation_rejection() {
        let reply = HttpReply::new(400, r#"{"status":"rejected","reason":"gambling","message":"too long"}"#);
        assert_eq!(
            interpret(ActionKind::SubmitReport, &reply),
            Err(ActionError::ValidationRejected { message: Some("too long".into()) })
        );
    }

    #[test]
    fn server_fault_without_json() {
        let reply = HttpReply::new(502, "<html>Bad gateway</html>");
        assert_eq!(
            interpret(ActionKind::SubmitReport, &reply),
            Err(ActionError::ServerFault { message: None })
        );
    }

    #[test]
    fn guest_restriction_opens_challenge_other_403_does_not() {
        let guest = HttpReply::new(403, r#"{"code":"guest_restriction","message":"Please verify to interact"}"#);
        assert!(matches!(
            interpret(ActionKind::ToggleReaction, &guest),
            Err(ActionError::AuthChallengeRequired { .. })
        ));

        let forbidden = HttpReply::new(403, r#"{"detail":"CSRF Failed"}"#);
        assert!(matches!(
            interpret(ActionKind::ToggleReaction, &forbidden),
            Err(ActionError::Unexpected { status: 403, .. })
        ));
    }

    #[test]
    fn reaction_counts_and_action() {
        let reply = HttpReply::new(
            200,
            r#"{"action":"created","counts":{"like":3},"total_reactions":3}"#,
        );
        let Ok(ActionSuccess::Reaction(update)) = interpret(ActionKind::ToggleReaction, &reply) else {
            panic!("expected reaction update");
        };
        assert_eq!(update.action, Some(ReactionAction::Created));
        assert_eq!(update.counts.get("like"), Some(&3));
        assert_eq!(update.total, Some(3));
    }

    #[test]
    fn reaction_without_counts_or_known_action() {
        let reply = HttpReply::new(200, r#"{"status":"success","action":"exploded"}"#);
        assert_eq!(
            interpret(ActionKind::ToggleReaction, &reply),
            Ok(ActionSuccess::Reaction(ReactionUpdate {
                action: Some(ReactionAction::Unknown),
                counts: BTreeMap::new(),
                total: None,
            }))
        );
    }

    #[test]
    fn otp_failure_in_a_200_body() {
        let reply = HttpReply::new(200, r#"{"status":"error","message":"Email wajib diisi"}"#);
        assert_eq!(
            interpret(ActionKind::RequestOtp, &reply),
            Err(ActionError::ValidationRejected { message: Some("Email wajib diisi".into()) })
        );
    }

    #[test]
    fn chat_error_field_is_used_as_message() {
        let reply = HttpReply::new(400, r#"{"error":"Pesan kosong"}"#);
        assert_eq!(
            interpret(ActionKind::SendChat, &reply),
            Err(ActionError::ValidationRejected { message: Some("Pesan kosong".into()) })
        );

        let reply = HttpReply::new(200, r#"{"response":"Halo!"}"#);
        assert_eq!(
            interpret(ActionKind::SendChat, &reply),
            Ok(ActionSuccess::ChatReply { text: "Halo!".into() })
        );
    }

    #[test]
    fn throttling_and_odd_statuses() {
        let reply = HttpReply::new(429, r#"{"message":"slow down"}"#);
        assert_eq!(
            interpret(ActionKind::SubmitReport, &reply),
            Err(ActionError::ServerFault { message: Some("slow down".into()) })
        );

        let reply = HttpReply::new(404, "");
        assert_eq!(
            interpret(ActionKind::ToggleReaction, &reply),
            Err(ActionError::Unexpected { status: 404, message: None })
        );

        let reply = HttpReply::new(200, "not json");
        assert!(matches!(
            interpret(ActionKind::VerifyOtp, &reply),
            Err(ActionError::Unexpected { status: 200, .. })
        ));
    }
}
